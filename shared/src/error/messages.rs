//! Fixed user-facing messages

pub const NO_TOKEN: &str = "Authentication token not found. Please log in again.";
pub const SESSION_EXPIRED: &str = "Token expired or invalid. Please log in again.";
pub const FORBIDDEN_REMOVE: &str = "You do not have permission to remove collaborators";
pub const FORBIDDEN_ACTION: &str = "You do not have permission to perform this action";
pub const NOT_FOUND: &str = "Collaborator not found";
pub const COLLECTION_NOT_FOUND: &str = "Collaborators resource not found";
pub const UNEXPECTED_STRUCTURE: &str = "Unexpected data structure from API";

pub const INVALID_DATA: &str = "Invalid data";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Noun used in the removal prompt when the target is not in the list
pub const GENERIC_COLLABORATOR: &str = "this collaborator";

pub fn validation(detail: &str) -> String {
    format!("Validation error: {detail}")
}

pub fn connection(detail: &str) -> String {
    format!("Connection error: {detail}")
}

pub fn fetch_failed(code: u16, reason: &str) -> String {
    format!("Failed to fetch collaborators: {code} {reason}")
        .trim_end()
        .to_string()
}

pub fn create_failed(detail: &str) -> String {
    format!("Failed to add collaborator: {detail}")
}

pub fn update_failed(detail: &str) -> String {
    format!("Failed to update collaborator: {detail}")
}

pub fn remove_failed(detail: &str) -> String {
    format!("Failed to remove collaborator: {detail}")
}

pub fn confirm_removal(name: &str) -> String {
    format!("Are you sure you want to remove {name}?")
}
