//! Collaborator Model (read side)

use super::role::Role;
use crate::cpf::format_cpf;
use serde::{Deserialize, Deserializer, Serialize};

/// Collaborator as returned by `GET /api/v1/funcionarios`
///
/// Wire names are Portuguese. The password is write-only and never part of
/// the read model; any `senha` the server echoes back is ignored.
/// Text columns read null or missing values as empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    #[serde(rename = "nome", default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub cpf: String,
    #[serde(rename = "data_nascimento", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// ISO-8601 date-time
    #[serde(rename = "data_contratacao", default, deserialize_with = "nullable_text")]
    pub hire_date: String,
    #[serde(rename = "cargo", default, deserialize_with = "nullable_text")]
    pub job_title: String,
    #[serde(rename = "departamento", default, deserialize_with = "nullable_text")]
    pub department: String,
    /// Kept exactly as emitted, including the legacy tag
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "ativo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "criado_em", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "atualizado_em", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Collaborator {
    /// CPF in canonical punctuation when it has 11 digits
    pub fn display_cpf(&self) -> String {
        format_cpf(&self.cpf)
    }

    /// Hire date part (`YYYY-MM-DD`) of the stored date-time
    pub fn hire_date_part(&self) -> &str {
        self.hire_date
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.hire_date)
    }

    /// Hire date as `DD/MM/YYYY`, or the raw text when it cannot be read
    pub fn hire_date_display(&self) -> String {
        chrono::NaiveDate::parse_from_str(self.hire_date_part(), "%Y-%m-%d")
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| self.hire_date.clone())
    }
}
