//! Collaborator write model
//!
//! Forms hand over a [`CollaboratorDraft`] (already shaped, not yet
//! normalized). [`CollaboratorPayload`] is what actually goes on the wire:
//! role mapped to the write vocabulary, CPF normalized, hire date
//! re-serialized as an ISO-8601 UTC instant.

use super::collaborator::Collaborator;
use super::role::{WriteRole, map_role_for_api};
use crate::cpf::format_cpf;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side input failure, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid hire date: {0}")]
    InvalidHireDate(String),
}

/// Form-shaped collaborator data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorDraft {
    pub name: String,
    pub email: String,
    /// Blank means "keep the current password" on update
    pub password: String,
    pub cpf: String,
    /// `YYYY-MM-DD` or any ISO-8601 date-time
    pub hire_date: String,
    pub job_title: String,
    pub department: String,
    /// Any role tag; mapped on write
    pub role: String,
}

impl CollaboratorDraft {
    /// Pre-fill an edit form from a read record.
    ///
    /// The password starts blank and the hire date is cut to its date part.
    /// The role keeps the server tag, legacy `usuario` included.
    pub fn from_existing(collaborator: &Collaborator) -> Self {
        Self {
            name: collaborator.name.clone(),
            email: collaborator.email.clone(),
            password: String::new(),
            cpf: collaborator.cpf.clone(),
            hire_date: collaborator.hire_date_part().to_string(),
            job_title: collaborator.job_title.clone(),
            department: collaborator.department.clone(),
            role: collaborator.role.as_str().to_string(),
        }
    }
}

/// JSON body for `POST` and `PUT` on the collaborators resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorPayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub cpf: String,
    #[serde(rename = "data_contratacao")]
    pub hire_date: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    #[serde(rename = "departamento")]
    pub department: String,
    pub role: WriteRole,
}

impl CollaboratorPayload {
    /// Build a create payload; the password is always sent.
    pub fn for_create(draft: &CollaboratorDraft) -> Result<Self, InputError> {
        Self::build(draft, Some(draft.password.clone()))
    }

    /// Build an update payload; a blank password is omitted entirely.
    pub fn for_update(draft: &CollaboratorDraft) -> Result<Self, InputError> {
        let password = (!draft.password.is_empty()).then(|| draft.password.clone());
        Self::build(draft, password)
    }

    fn build(draft: &CollaboratorDraft, password: Option<String>) -> Result<Self, InputError> {
        Ok(Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            password,
            cpf: format_cpf(&draft.cpf),
            hire_date: to_iso_instant(&draft.hire_date)?,
            job_title: draft.job_title.clone(),
            department: draft.department.clone(),
            role: map_role_for_api(&draft.role),
        })
    }

    /// Copy safe to log: the password, if any, is masked
    pub fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

/// Re-serialize a date or date-time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Accepts RFC 3339 (converted to UTC), naive date-times (read as UTC)
/// and bare dates (UTC midnight).
pub fn to_iso_instant(input: &str) -> Result<String, InputError> {
    let s = input.trim();
    let invalid = || InputError::InvalidHireDate(input.to_string());

    let instant: DateTime<Utc> = if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        dt.with_timezone(&Utc)
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        naive.and_utc()
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        naive.and_utc()
    } else if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc()
    } else {
        return Err(invalid());
    };

    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;

    fn draft() -> CollaboratorDraft {
        CollaboratorDraft {
            name: "Bruno".into(),
            email: "bruno@example.com".into(),
            password: String::new(),
            cpf: "111.222.33344".into(),
            hire_date: "2023-07-01".into(),
            job_title: "Developer".into(),
            department: "IT".into(),
            role: "usuario".into(),
        }
    }

    #[test]
    fn test_to_iso_instant_accepts_common_shapes() {
        assert_eq!(to_iso_instant("2023-07-01").unwrap(), "2023-07-01T00:00:00.000Z");
        assert_eq!(
            to_iso_instant("2023-07-01T12:30:00.000Z").unwrap(),
            "2023-07-01T12:30:00.000Z"
        );
        assert_eq!(
            to_iso_instant("2023-07-01T12:30:00-03:00").unwrap(),
            "2023-07-01T15:30:00.000Z"
        );
        assert_eq!(to_iso_instant("2023-07-01T08:15").unwrap(), "2023-07-01T08:15:00.000Z");
        assert_eq!(
            to_iso_instant("2023-07-01T08:15:42.5").unwrap(),
            "2023-07-01T08:15:42.500Z"
        );
    }

    #[test]
    fn test_to_iso_instant_rejects_garbage() {
        assert_eq!(
            to_iso_instant("01/07/2023"),
            Err(InputError::InvalidHireDate("01/07/2023".into()))
        );
        assert!(to_iso_instant("").is_err());
        assert!(to_iso_instant("2023-02-30").is_err());
    }

    #[test]
    fn test_update_payload_omits_blank_password() {
        let payload = CollaboratorPayload::for_update(&draft()).unwrap();
        assert_eq!(payload.role, WriteRole::Employee);
        assert_eq!(payload.cpf, "111.222.333-44");
        assert_eq!(payload.hire_date, "2023-07-01T00:00:00.000Z");

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("senha").is_none());
        assert_eq!(json["role"], "employee");
        assert_eq!(json["nome"], "Bruno");
        assert_eq!(json["data_contratacao"], "2023-07-01T00:00:00.000Z");
    }

    #[test]
    fn test_update_payload_keeps_non_blank_password() {
        let mut d = draft();
        d.password = "s3cret".into();
        let json = serde_json::to_value(CollaboratorPayload::for_update(&d).unwrap()).unwrap();
        assert_eq!(json["senha"], "s3cret");
    }

    #[test]
    fn test_create_payload_always_has_password() {
        let mut d = draft();
        d.role = "manager".into();
        d.password = "pw".into();
        let payload = CollaboratorPayload::for_create(&d).unwrap();
        assert_eq!(payload.password.as_deref(), Some("pw"));
        assert_eq!(payload.role, WriteRole::Manager);
    }

    #[test]
    fn test_bad_hire_date_fails_build() {
        let mut d = draft();
        d.hire_date = "yesterday".into();
        assert!(matches!(
            CollaboratorPayload::for_update(&d),
            Err(InputError::InvalidHireDate(_))
        ));
    }

    #[test]
    fn test_redacted_masks_password() {
        let mut d = draft();
        d.password = "s3cret".into();
        let payload = CollaboratorPayload::for_create(&d).unwrap();
        assert_eq!(payload.redacted().password.as_deref(), Some("***"));
        assert!(CollaboratorPayload::for_update(&draft()).unwrap().redacted().password.is_none());
    }

    #[test]
    fn test_draft_from_existing() {
        let c = Collaborator {
            id: 7,
            name: "Carla".into(),
            email: "carla@example.com".into(),
            cpf: "123.456.789-01".into(),
            birth_date: None,
            hire_date: "2022-01-10T00:00:00.000Z".into(),
            job_title: "Lead".into(),
            department: "Ops".into(),
            role: Role::Usuario,
            active: Some(true),
            created_at: None,
            updated_at: None,
        };
        let d = CollaboratorDraft::from_existing(&c);
        assert_eq!(d.hire_date, "2022-01-10");
        assert_eq!(d.role, "usuario");
        assert!(d.password.is_empty());
    }
}
