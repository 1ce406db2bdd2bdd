//! Form state and UI patches
//!
//! [`FormState`] is an explicit snapshot of a form: field declarations,
//! current values, and the error/invalid annotations the page is showing.
//! Validators and the error mapper never touch it directly; they return
//! [`FieldPatch`] descriptions that a thin adapter applies here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldSpec;
use crate::server_error::MappedError;

/// One field of a form: its declaration plus current UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    /// Whether the field currently carries the "invalid" visual marker.
    pub invalid: bool,
    /// Message currently shown in the field's error slot, if any.
    pub error: Option<String>,
}

/// Snapshot of a whole form, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Prefix applied to every field id (e.g. `edit` for the modal form).
    prefix: String,
    fields: Vec<FieldState>,
}

/// Description of a change to one field's error state.
///
/// `valid == true` clears the marker and the message slot; `valid == false`
/// sets the marker and replaces the slot with `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
    /// Prefixed field id, matching [`FormState::field_id`].
    pub field: String,
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldPatch {
    pub fn ok(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: true,
            message: None,
        }
    }

    pub fn fail(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self::with_prefix("", specs)
    }

    /// A form whose field ids are prefixed, like the `edit_*` modal fields.
    pub fn with_prefix(prefix: impl Into<String>, specs: Vec<FieldSpec>) -> Self {
        Self {
            prefix: prefix.into(),
            fields: specs
                .into_iter()
                .map(|spec| FieldState {
                    spec,
                    value: String::new(),
                    invalid: false,
                    error: None,
                })
                .collect(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Prefixed id of a field, as used in the DOM (`edit_first_name`).
    pub fn field_id(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}_{}", self.prefix, name)
        }
    }

    /// Id of a field's error slot (`{fieldId}_error`).
    pub fn error_slot(&self, name: &str) -> String {
        format!("{}_error", self.field_id(name))
    }

    /// Strips the form prefix from a field id, if it matches.
    pub fn unprefix<'a>(&self, field_id: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return field_id;
        }
        field_id
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(field_id)
    }

    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.spec.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.get_mut(name) {
            field.value = value.into();
        }
    }

    /// Bulk-loads values, e.g. from a submitted form body or a fetched record.
    pub fn set_values(&mut self, values: &HashMap<String, String>) {
        for field in &mut self.fields {
            if let Some(v) = values.get(&field.spec.name) {
                field.value = v.clone();
            }
        }
    }

    /// Applies one patch to the matching field. Unknown ids are ignored.
    pub fn apply(&mut self, patch: &FieldPatch) {
        let name = self.unprefix(&patch.field).to_string();
        if let Some(field) = self.get_mut(&name) {
            field.invalid = !patch.valid;
            field.error = if patch.valid {
                None
            } else {
                patch.message.clone()
            };
        }
    }

    pub fn apply_all(&mut self, patches: &[FieldPatch]) {
        for patch in patches {
            self.apply(patch);
        }
    }

    /// Clears every error slot and invalid marker in this form's scope.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.invalid = false;
            field.error = None;
        }
    }

    /// Routes mapped server errors into the form: clears all current
    /// annotations first, then sets one per named field, so stale messages
    /// never survive a new server response.
    pub fn apply_server_errors(&mut self, mapped: &MappedError) {
        self.clear_errors();
        for (name, message) in &mapped.field_messages {
            if let Some(field) = self.get_mut(name) {
                field.invalid = true;
                field.error = Some(message.clone());
            }
        }
    }
}
