//! Field taxonomy
//!
//! Each form field declares exactly one [`FieldKind`] at setup time. The
//! kind decides which validation rule and which keystroke filter apply; it
//! is never re-derived from the field's id afterwards.

use serde::{Deserialize, Serialize};

/// Semantic category of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Letters (including accented Latin vowels and ñ/Ñ) and spaces only.
    PersonName,
    /// Exactly 10 decimal digits; input is capped at 10 at entry time.
    Phone,
    /// Numeric value >= 0, raw string length <= 10.
    Salary,
    /// `local@domain.tld` shape.
    Email,
    /// Opaque id, only the required check applies.
    Identifier,
    /// Calendar date; the date picker supplies the format, so only the
    /// required check applies.
    Date,
    /// Free text, only the required check applies.
    FreeText,
}

/// Declaration of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Canonical field name, without any form prefix (e.g. `first_name`).
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }
}

/// Display label for a known field name; unknown names pass through as-is.
pub fn field_label(name: &str) -> &str {
    match name {
        "first_name" => "Nombre",
        "last_name" => "Apellido",
        "email" => "Email",
        "phone_number" => "Teléfono",
        "position" => "Puesto",
        "salary" => "Salario",
        "hire_date" => "Fecha de contratación",
        "employee_id" => "ID del empleado",
        other => other,
    }
}

/// Field set of the employee create/edit forms.
pub fn employee_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("first_name", FieldKind::PersonName, true),
        FieldSpec::new("last_name", FieldKind::PersonName, true),
        FieldSpec::new("email", FieldKind::Email, true),
        FieldSpec::new("phone_number", FieldKind::Phone, false),
        FieldSpec::new("position", FieldKind::PersonName, true),
        FieldSpec::new("salary", FieldKind::Salary, true),
        FieldSpec::new("hire_date", FieldKind::Date, true),
    ]
}

/// Field set of the attendance register form.
pub fn attendance_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("employee_id", FieldKind::Identifier, true)]
}
