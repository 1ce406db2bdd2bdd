//! Typed field events
//!
//! Handlers are dispatched on an explicit event descriptor (field id plus
//! event kind) instead of ad-hoc callbacks. Dispatch is synchronous and
//! single-threaded: one event in, one outcome out, no shared state beyond
//! the [`FormState`] passed in.

use crate::field::FieldKind;
use crate::filter;
use crate::form::{FieldPatch, FormState};
use crate::validate::{self, FieldCheck};

/// Kind of UI event delivered to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A single keystroke about to be inserted.
    KeyPress(char),
    /// Text pasted into the field.
    Paste(String),
    /// The field's value changed.
    Input,
    /// Focus left the field.
    Blur,
    /// The surrounding form was submitted.
    Submit,
}

/// Event descriptor: which field (by prefixed id) and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub field: String,
    pub kind: EventKind,
}

impl FieldEvent {
    pub fn new(field: impl Into<String>, kind: EventKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// What dispatching one event produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// False when a keystroke was rejected by the entry-time filter.
    pub accepted: bool,
    /// Error-state changes, already applied to the form.
    pub patches: Vec<FieldPatch>,
    /// Overall form validity; only present for [`EventKind::Submit`].
    pub overall_valid: Option<bool>,
}

/// Dispatches one event against the form, mutating values (keystrokes and
/// filtered pastes) and error annotations, and returns what changed.
pub fn dispatch(form: &mut FormState, event: &FieldEvent) -> EventOutcome {
    let name = form.unprefix(&event.field).to_string();
    let Some(field) = form.get(&name) else {
        tracing::warn!(field = %event.field, "event for unknown field");
        return EventOutcome {
            accepted: true,
            ..EventOutcome::default()
        };
    };
    let kind = field.spec.kind;

    match &event.kind {
        EventKind::KeyPress(c) => {
            // Editing keys never insert: backspace removes the last char,
            // the rest (tab, enter, ...) leave the value alone.
            if c.is_control() {
                if *c == '\u{8}' {
                    let mut value = form.value(&name).to_string();
                    value.pop();
                    form.set_value(&name, value);
                    return live_check(form, &name, kind, false);
                }
                return EventOutcome {
                    accepted: true,
                    ..EventOutcome::default()
                };
            }
            if !filter::allows_keystroke(kind, form.value(&name), *c) {
                return EventOutcome::default();
            }
            let mut value = form.value(&name).to_string();
            value.push(*c);
            form.set_value(&name, value);
            live_check(form, &name, kind, false)
        }
        EventKind::Paste(text) => {
            form.set_value(&name, filter::filter_paste(kind, text));
            live_check(form, &name, kind, false)
        }
        EventKind::Input => live_check(form, &name, kind, false),
        EventKind::Blur => live_check(form, &name, kind, true),
        EventKind::Submit => {
            let report = validate::validate(form);
            form.apply_all(&report.patches);
            EventOutcome {
                accepted: true,
                patches: report.patches,
                overall_valid: Some(report.overall_valid),
            }
        }
    }
}

fn live_check(form: &mut FormState, name: &str, kind: FieldKind, blur: bool) -> EventOutcome {
    // Email is checked on blur only; a half-typed address stays unflagged.
    if kind == FieldKind::Email && !blur {
        return EventOutcome {
            accepted: true,
            ..EventOutcome::default()
        };
    }
    let check = validate::validate_field_live(kind, form.value(name));
    let patch = to_patch(form.field_id(name), &check);
    form.apply(&patch);
    EventOutcome {
        accepted: true,
        patches: vec![patch],
        overall_valid: None,
    }
}

fn to_patch(field_id: String, check: &FieldCheck) -> FieldPatch {
    match &check.message {
        Some(msg) => FieldPatch::fail(field_id, msg.clone()),
        None => FieldPatch::ok(field_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{employee_fields, FieldKind};
    use crate::messages;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejected_keystroke_leaves_value_unchanged() {
        let mut form = FormState::new(employee_fields());
        form.set_value("first_name", "Ju");

        let outcome = dispatch(
            &mut form,
            &FieldEvent::new("first_name", EventKind::KeyPress('3')),
        );
        assert!(!outcome.accepted);
        assert_eq!(form.value("first_name"), "Ju");
    }

    #[test]
    fn accepted_keystroke_appends() {
        let mut form = FormState::new(employee_fields());
        form.set_value("phone_number", "123");

        let outcome = dispatch(
            &mut form,
            &FieldEvent::new("phone_number", EventKind::KeyPress('4')),
        );
        assert!(outcome.accepted);
        assert_eq!(form.value("phone_number"), "1234");
    }

    #[test]
    fn backspace_removes_the_last_char() {
        let mut form = FormState::new(employee_fields());
        form.set_value("first_name", "Juan");

        let outcome = dispatch(
            &mut form,
            &FieldEvent::new("first_name", EventKind::KeyPress('\u{8}')),
        );
        assert!(outcome.accepted);
        assert_eq!(form.value("first_name"), "Jua");
        assert!(!form.get("first_name").unwrap().invalid);
    }

    #[test]
    fn other_control_keys_leave_the_value_untouched() {
        let mut form = FormState::new(employee_fields());
        form.set_value("phone_number", "123");

        for key in ['\t', '\r', '\n'] {
            let outcome = dispatch(
                &mut form,
                &FieldEvent::new("phone_number", EventKind::KeyPress(key)),
            );
            assert!(outcome.accepted);
        }
        assert_eq!(form.value("phone_number"), "123");
        assert!(!form.get("phone_number").unwrap().invalid);
    }

    #[test]
    fn paste_is_filtered_not_rejected() {
        let mut form = FormState::new(employee_fields());
        dispatch(
            &mut form,
            &FieldEvent::new(
                "first_name",
                EventKind::Paste("abc123!!def".to_string()),
            ),
        );
        assert_eq!(form.value("first_name"), "abcdef");
    }

    #[test]
    fn email_is_not_flagged_while_typing() {
        let mut form = FormState::new(employee_fields());
        for c in "user@".chars() {
            let outcome = dispatch(&mut form, &FieldEvent::new("email", EventKind::KeyPress(c)));
            assert!(outcome.patches.is_empty());
        }
        let outcome = dispatch(&mut form, &FieldEvent::new("email", EventKind::Input));
        assert!(outcome.patches.is_empty());
        assert!(!form.get("email").unwrap().invalid);
    }

    #[test]
    fn blur_runs_the_live_rule() {
        let mut form = FormState::new(employee_fields());
        form.set_value("email", "bad-email");

        let outcome = dispatch(&mut form, &FieldEvent::new("email", EventKind::Blur));
        assert_eq!(outcome.patches.len(), 1);
        assert_eq!(
            form.get("email").unwrap().error.as_deref(),
            Some(messages::EMAIL_INVALID)
        );
    }

    #[test]
    fn submit_reports_overall_validity_and_annotates() {
        let mut form = FormState::new(employee_fields());
        let outcome = dispatch(&mut form, &FieldEvent::new("first_name", EventKind::Submit));
        assert_eq!(outcome.overall_valid, Some(false));
        assert_eq!(
            form.get("first_name").unwrap().error.as_deref(),
            Some(messages::REQUIRED)
        );
        // Optional, empty phone stays clean.
        assert!(!form.get("phone_number").unwrap().invalid);
    }

    #[test]
    fn prefixed_events_reach_the_right_field() {
        let mut form = FormState::with_prefix("edit", employee_fields());
        dispatch(
            &mut form,
            &FieldEvent::new("edit_phone_number", EventKind::Paste("55-1234-5678".into())),
        );
        assert_eq!(form.value("phone_number"), "5512345678");
    }

    #[test]
    fn event_for_unknown_field_is_a_no_op() {
        let mut form = FormState::new(vec![crate::field::FieldSpec::new(
            "employee_id",
            FieldKind::Identifier,
            true,
        )]);
        let before = form.clone();
        dispatch(&mut form, &FieldEvent::new("ghost", EventKind::Input));
        assert_eq!(form, before);
    }
}
