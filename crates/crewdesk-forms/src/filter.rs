//! Real-time input filtering
//!
//! Presentation-side character filtering for PersonName and Phone fields:
//! disallowed keystrokes are rejected at entry time and pasted text is
//! filtered (not rejected wholesale). Other kinds pass everything through.

use crate::field::FieldKind;

const PHONE_MAX_DIGITS: usize = 10;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || "ÁÉÍÓÚáéíóúñÑ".contains(c) || c.is_whitespace()
}

/// Whether a single keystroke is accepted for a field with the given kind
/// and current value. Control characters are never blocked; they are
/// editing actions, not insertions, and the event dispatcher handles them.
pub fn allows_keystroke(kind: FieldKind, current: &str, c: char) -> bool {
    if c.is_control() {
        return true;
    }
    match kind {
        FieldKind::PersonName => is_name_char(c),
        FieldKind::Phone => c.is_ascii_digit() && current.chars().count() < PHONE_MAX_DIGITS,
        _ => true,
    }
}

/// Filters pasted text for a field: strips disallowed characters and, for
/// Phone, truncates to the 10-digit cap. The result replaces the field's
/// whole value.
pub fn filter_paste(kind: FieldKind, pasted: &str) -> String {
    match kind {
        FieldKind::PersonName => pasted.chars().filter(|&c| is_name_char(c)).collect(),
        FieldKind::Phone => pasted
            .chars()
            .filter(char::is_ascii_digit)
            .take(PHONE_MAX_DIGITS)
            .collect(),
        _ => pasted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_keystrokes() {
        assert!(allows_keystroke(FieldKind::PersonName, "Ju", 'a'));
        assert!(allows_keystroke(FieldKind::PersonName, "Ju", 'ñ'));
        assert!(allows_keystroke(FieldKind::PersonName, "Ju", ' '));
        assert!(!allows_keystroke(FieldKind::PersonName, "Ju", '3'));
        assert!(!allows_keystroke(FieldKind::PersonName, "Ju", '!'));
        // Backspace is never blocked by the filter.
        assert!(allows_keystroke(FieldKind::PersonName, "Ju", '\u{8}'));
    }

    #[test]
    fn phone_keystrokes_cap_at_ten() {
        assert!(allows_keystroke(FieldKind::Phone, "123456789", '0'));
        assert!(!allows_keystroke(FieldKind::Phone, "1234567890", '1'));
        assert!(!allows_keystroke(FieldKind::Phone, "123", 'a'));
    }

    #[test]
    fn name_paste_strips_digits_and_symbols() {
        assert_eq!(
            filter_paste(FieldKind::PersonName, "abc123!!def"),
            "abcdef"
        );
        assert_eq!(
            filter_paste(FieldKind::PersonName, "Juan. Pérez3"),
            "Juan Pérez"
        );
    }

    #[test]
    fn phone_paste_keeps_first_ten_digits() {
        assert_eq!(
            filter_paste(FieldKind::Phone, "(55) 1234-5678 ext 99"),
            "5512345678"
        );
        assert_eq!(filter_paste(FieldKind::Phone, "abc"), "");
    }

    #[test]
    fn other_kinds_pass_through() {
        assert_eq!(
            filter_paste(FieldKind::Email, "user@example.com"),
            "user@example.com"
        );
        assert!(allows_keystroke(FieldKind::Salary, "", '-'));
    }
}
