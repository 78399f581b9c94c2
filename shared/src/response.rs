//! API Response types
//!
//! The list endpoint wraps collaborators twice:
//! ```json
//! {
//!     "success": true,
//!     "data": { "data": [ ... ] }
//! }
//! ```
//! Only the envelope shape decides whether a body is usable. Entries inside
//! `data.data` are decoded one by one; an entry without a usable `id` is
//! dropped with a warning instead of failing the whole list.
//!
//! Error responses carry an optional `message` (and, for deletes, an
//! optional `error`) field. Bodies are read permissively: empty or non-JSON
//! text simply yields no message.

use crate::models::Collaborator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inner page of the list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorPage {
    pub data: Vec<Collaborator>,
}

/// Full list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub success: bool,
    pub data: CollaboratorPage,
}

impl ListEnvelope {
    pub fn new(items: Vec<Collaborator>) -> Self {
        Self {
            success: true,
            data: CollaboratorPage { data: items },
        }
    }

    /// Validate and decode a list response body.
    ///
    /// Returns `None` unless the body is JSON with `success: true` and a
    /// sequence at `data.data`.
    pub fn parse(body: &str) -> Option<Vec<Collaborator>> {
        let value: Value = serde_json::from_str(body).ok()?;

        if value.get("success").and_then(Value::as_bool) != Some(true) {
            return None;
        }
        let items = value.get("data")?.get("data")?.as_array()?;

        let collaborators = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match Collaborator::deserialize(item) {
                Ok(collaborator) => Some(collaborator),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping undecodable collaborator entry");
                    None
                }
            })
            .collect();
        Some(collaborators)
    }
}

/// Error body sent by the API on failures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a body that may be empty, plain text, or JSON.
    /// Anything that is not a JSON object reads as an empty body.
    pub fn parse_lenient(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: i64, role: &str) -> Value {
        json!({
            "id": id,
            "nome": "Ana",
            "email": "ana@example.com",
            "cpf": "123.456.789-01",
            "data_contratacao": "2024-01-01T00:00:00.000Z",
            "cargo": "Analyst",
            "departamento": "Finance",
            "role": role
        })
    }

    #[test]
    fn test_parse_valid_envelope() {
        let body = json!({ "success": true, "data": { "data": [row(1, "usuario"), row(2, "admin")] } });
        let items = ListEnvelope::parse(&body.to_string()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].role.as_str(), "usuario");
    }

    #[test]
    fn test_parse_empty_list() {
        let body = json!({ "success": true, "data": { "data": [] } });
        assert_eq!(ListEnvelope::parse(&body.to_string()).unwrap().len(), 0);
    }

    #[test]
    fn test_parse_rejects_shape_mismatch() {
        let cases = [
            json!({ "success": false, "data": { "data": [] } }),
            json!({ "success": "true", "data": { "data": [] } }),
            json!({ "success": true, "data": [] }),
            json!({ "success": true, "data": { "data": {} } }),
            json!({ "success": true }),
            json!([row(1, "admin")]),
        ];
        for case in cases {
            assert!(ListEnvelope::parse(&case.to_string()).is_none(), "{case}");
        }
        assert!(ListEnvelope::parse("<html>oops</html>").is_none());
        assert!(ListEnvelope::parse("").is_none());
    }

    #[test]
    fn test_unknown_role_and_null_columns_keep_the_list() {
        let mut odd = row(2, "supervisor");
        odd["departamento"] = Value::Null;
        let body = json!({ "success": true, "data": { "data": [row(1, "employee"), odd] } });

        let items = ListEnvelope::parse(&body.to_string()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].role.label(), "supervisor");
        assert_eq!(items[1].department, "");
    }

    #[test]
    fn test_entries_without_id_are_dropped() {
        let body = json!({
            "success": true,
            "data": { "data": [{ "id": "x" }, "junk", row(3, "admin")] }
        });
        let items = ListEnvelope::parse(&body.to_string()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 3);
    }

    #[test]
    fn test_envelope_round_trip_shape() {
        let body = serde_json::to_string(&ListEnvelope::new(vec![])).unwrap();
        assert_eq!(body, r#"{"success":true,"data":{"data":[]}}"#);
    }

    #[test]
    fn test_error_body_lenient() {
        assert!(ErrorBody::parse_lenient("").message.is_none());
        assert!(ErrorBody::parse_lenient("Internal Server Error").message.is_none());
        assert!(ErrorBody::parse_lenient("[1,2]").message.is_none());

        let body = ErrorBody::parse_lenient(r#"{"message":"CPF already registered"}"#);
        assert_eq!(body.message.as_deref(), Some("CPF already registered"));

        let body = ErrorBody::parse_lenient(r#"{"error":"constraint violation"}"#);
        assert!(body.message.is_none());
        assert_eq!(body.error.as_deref(), Some("constraint violation"));
    }
}
