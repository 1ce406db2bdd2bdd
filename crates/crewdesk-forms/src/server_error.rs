//! Server error mapping
//!
//! Turns an arbitrary error payload returned by a backend call into one
//! human-readable summary plus optional per-field messages. Resolution
//! follows a fixed precedence and never falls through:
//!
//! 1. plain string payload -> the string itself
//! 2. object with `detail` -> that value
//! 3. object with `error` -> that value
//! 4. object with `message` -> that value
//! 5. field-keyed object -> one message per field (first element of a
//!    sequence), joined under a header line
//! 6. anything else -> a fixed "unknown server error" string

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::field_label;
use crate::messages;

/// Result of mapping a server error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedError {
    /// Single message for the generic banner.
    pub summary: String,
    /// Per-field inline messages, keyed by field name, in payload order.
    pub field_messages: Vec<(String, String)>,
}

impl MappedError {
    fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            field_messages: Vec::new(),
        }
    }
}

/// Maps a payload using the built-in field label table.
pub fn map_server_error(payload: &Value) -> MappedError {
    map_with(payload, |name| field_label(name).to_string())
}

/// Maps a payload with caller-supplied display labels; names missing from
/// the table fall back to the built-in labels (identity for unknown names).
pub fn map_server_error_with(payload: &Value, labels: &HashMap<String, String>) -> MappedError {
    map_with(payload, |name| {
        labels
            .get(name)
            .cloned()
            .unwrap_or_else(|| field_label(name).to_string())
    })
}

fn map_with(payload: &Value, label: impl Fn(&str) -> String) -> MappedError {
    if let Value::String(s) = payload {
        return MappedError::summary_only(s.clone());
    }

    let Value::Object(map) = payload else {
        return MappedError::summary_only(messages::UNKNOWN_SERVER_ERROR);
    };

    for key in ["detail", "error", "message"] {
        if let Some(value) = map.get(key) {
            return MappedError::summary_only(scalar_text(value));
        }
    }

    let mut field_messages = Vec::new();
    let mut lines = Vec::new();
    for (field, errors) in map {
        let message = match errors {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_string),
            _ => None,
        };
        if let Some(message) = message {
            lines.push(format!("{}: {}", label(field), message));
            field_messages.push((field.clone(), message));
        }
    }

    if lines.is_empty() {
        tracing::debug!(?payload, "unrecognized server error payload");
        return MappedError::summary_only(messages::UNKNOWN_SERVER_ERROR);
    }

    MappedError {
        summary: format!("{}\n• {}", messages::SERVER_ERRORS_HEADER, lines.join("\n• ")),
        field_messages,
    }
}

// Server-supplied summaries are usually strings, but nothing guarantees it;
// render other scalars as their JSON text instead of discarding them.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_string_is_the_summary() {
        let mapped = map_server_error(&json!("Not found"));
        assert_eq!(mapped.summary, "Not found");
        assert!(mapped.field_messages.is_empty());
    }

    #[test]
    fn detail_wins_over_error_and_message() {
        let mapped = map_server_error(&json!({
            "detail": "X",
            "error": "Y",
            "message": "Z",
        }));
        assert_eq!(mapped.summary, "X");
        assert!(mapped.field_messages.is_empty());
    }

    #[test]
    fn error_wins_over_message() {
        let mapped = map_server_error(&json!({"error": "Y", "message": "Z"}));
        assert_eq!(mapped.summary, "Y");
    }

    #[test]
    fn message_is_last_summary_key() {
        let mapped = map_server_error(&json!({"message": "Z"}));
        assert_eq!(mapped.summary, "Z");
    }

    #[test]
    fn field_map_collects_labeled_messages() {
        let mapped = map_server_error(&json!({
            "first_name": ["Required"],
            "email": "Invalid",
        }));

        assert_eq!(
            mapped.field_messages,
            vec![
                ("email".to_string(), "Invalid".to_string()),
                ("first_name".to_string(), "Required".to_string()),
            ]
        );
        assert_eq!(
            mapped.summary,
            "Se encontraron los siguientes errores:\n• Email: Invalid\n• Nombre: Required"
        );
    }

    #[test]
    fn sequence_values_take_the_first_element() {
        let mapped = map_server_error(&json!({
            "salary": ["El salario no puede ser negativo", "segundo error"],
        }));
        assert_eq!(
            mapped.field_messages,
            vec![(
                "salary".to_string(),
                "El salario no puede ser negativo".to_string()
            )]
        );
    }

    #[test]
    fn unknown_field_names_pass_through_as_labels() {
        let mapped = map_server_error(&json!({"middle_name": "Too long"}));
        assert_eq!(
            mapped.summary,
            "Se encontraron los siguientes errores:\n• middle_name: Too long"
        );
    }

    #[test]
    fn caller_labels_override_builtins() {
        let labels = HashMap::from([("email".to_string(), "Correo".to_string())]);
        let mapped = map_server_error_with(&json!({"email": "Invalid"}), &labels);
        assert_eq!(
            mapped.summary,
            "Se encontraron los siguientes errores:\n• Correo: Invalid"
        );
    }

    #[test]
    fn unrecognized_shapes_fall_back() {
        for payload in [json!(null), json!(42), json!([1, 2]), json!({})] {
            assert_eq!(
                map_server_error(&payload).summary,
                messages::UNKNOWN_SERVER_ERROR
            );
        }
        // An object whose values are neither strings nor sequences of
        // strings produces no field messages either.
        let mapped = map_server_error(&json!({"email": 5, "salary": {"a": 1}}));
        assert_eq!(mapped.summary, messages::UNKNOWN_SERVER_ERROR);
        assert!(mapped.field_messages.is_empty());
    }

    #[test]
    fn non_string_detail_is_rendered_as_json() {
        let mapped = map_server_error(&json!({"detail": 404}));
        assert_eq!(mapped.summary, "404");
    }
}
