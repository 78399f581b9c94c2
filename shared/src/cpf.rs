//! CPF (Brazilian taxpayer ID) normalization

/// Number of digits in a CPF
pub const CPF_DIGITS: usize = 11;

/// Canonicalize a CPF into `XXX.XXX.XXX-XX`.
///
/// All non-digit characters are stripped first. When exactly 11 digits
/// remain the punctuated form is returned, otherwise the input comes back
/// untouched (no validation of check digits).
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != CPF_DIGITS {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}
