// File: src/views.rs
// Purpose: Maud templates for the dashboard page, tables and forms

use maud::{html, Markup, DOCTYPE};

use crewdesk_client::{AttendanceKind, AttendanceRecord, Employee};
use crewdesk_forms::field::FieldKind;
use crewdesk_forms::form::{FieldState, FormState};

use crate::banner::{Banner, AUTO_CLEAR_MS};

const STYLES: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 960px; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
input.invalid { border-color: #c0392b; }
.error-message { color: #c0392b; font-size: 0.85rem; }
.alert { padding: 0.6rem 1rem; border-radius: 4px; margin: 0.5rem 0; white-space: pre-line; }
.alert.success { background: #e8f8ef; color: #1e7d4f; }
.alert.error { background: #fdecea; color: #c0392b; }
.modal { border: 1px solid #999; padding: 1rem; margin-top: 1rem; background: #fafafa; }
"#;

// Clears any banner that declares an auto-clear delay.
const AUTO_CLEAR_SCRIPT: &str = r#"
document.querySelectorAll('.alert[data-autoclear]').forEach(function (el) {
  setTimeout(function () { el.remove(); }, parseInt(el.dataset.autoclear, 10));
});
"#;

/// Full page shell.
pub fn layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { "Crewdesk" }
                style { (STYLES) }
            }
            body {
                h1 { "Gestión de Empleados y Asistencias" }
                (content)
                script { (maud::PreEscaped(AUTO_CLEAR_SCRIPT)) }
            }
        }
    }
}

/// Generic message area. The banner auto-clears after a fixed delay.
pub fn message_area(id: &str, banner: Option<&Banner>) -> Markup {
    html! {
        div id=(id) {
            @if let Some(banner) = banner {
                div class=(format!("alert {}", banner.kind.css_class()))
                    data-autoclear=(AUTO_CLEAR_MS) {
                    (banner.text)
                }
            }
        }
    }
}

pub fn employees_table(employees: &[Employee]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Nombre" }
                    th { "Email" }
                    th { "Puesto" }
                    th { "Salario" }
                    th { "Fecha de contratación" }
                    th { "Acciones" }
                }
            }
            tbody id="employeesBody" {
                @if employees.is_empty() {
                    tr { td colspan="7" style="text-align: center;" { "No hay empleados registrados" } }
                } @else {
                    @for employee in employees {
                        tr {
                            td { (employee.id) }
                            td { (employee.full_name()) }
                            td { (employee.email) }
                            td { (employee.position) }
                            td { (format_salary(&employee.salary)) }
                            td { (employee.hire_date.format("%d/%m/%Y")) }
                            td class="actions" {
                                form method="get" action=(format!("/employees/{}/edit", employee.id)) style="display:inline" {
                                    button type="submit" { "✏️ Editar" }
                                }
                                form method="post" action=(format!("/employees/{}/delete", employee.id)) style="display:inline" {
                                    button type="submit" { "🗑️ Eliminar" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn attendance_table(records: &[AttendanceRecord]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Empleado" }
                    th { "Tipo" }
                    th { "Fecha" }
                    th { "Hora" }
                    th { "Registrado" }
                }
            }
            tbody id="attendanceBody" {
                @if records.is_empty() {
                    tr { td colspan="5" style="text-align: center;" { "No hay registros de asistencia" } }
                } @else {
                    @for record in records {
                        tr {
                            td { (record.employee_id) }
                            td { (attendance_type_label(record.kind)) }
                            td { (record.date.format("%d/%m/%Y")) }
                            td { (record.time.format("%H:%M:%S")) }
                            td { (record.created_at.format("%d/%m/%Y %H:%M:%S")) }
                        }
                    }
                }
            }
        }
    }
}

/// Employee create/edit form with one error slot per field.
pub fn employee_form(form: &FormState, action: &str, submit_label: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            @for field in form.fields() {
                (labeled_input(form, field))
            }
            button type="submit" { (submit_label) }
        }
    }
}

/// Attendance register controls: employee id plus entry/exit buttons.
pub fn attendance_controls(form: &FormState) -> Markup {
    html! {
        form method="post" action="/attendance" {
            @for field in form.fields() {
                (labeled_input(form, field))
            }
            button type="submit" name="type" value="entry" { "✅ Registrar entrada" }
            button type="submit" name="type" value="exit" { "🚪 Registrar salida" }
        }
    }
}

fn labeled_input(form: &FormState, field: &FieldState) -> Markup {
    let name = &field.spec.name;
    let id = form.field_id(name);
    let slot = form.error_slot(name);
    html! {
        p {
            label for=(id) { (crewdesk_forms::field_label(name)) }
            br;
            input type=(input_type(field.spec.kind))
                id=(id)
                name=(name)
                value=(field.value)
                class=[field.invalid.then_some("invalid")]
                required[field.spec.required];
            span class="error-message" id=(slot)
                style=(if field.error.is_some() { "display: block" } else { "display: none" }) {
                @if let Some(error) = &field.error { (error) }
            }
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::PersonName => "text",
        FieldKind::Phone => "tel",
        FieldKind::Salary => "number",
        FieldKind::Email => "email",
        FieldKind::Identifier => "number",
        FieldKind::Date => "date",
        FieldKind::FreeText => "text",
    }
}

fn attendance_type_label(kind: AttendanceKind) -> &'static str {
    match kind {
        AttendanceKind::Entry => "✅ Entrada",
        AttendanceKind::Exit => "🚪 Salida",
    }
}

/// Renders a decimal-string salary as `$50,000.00`. Unparsable values pass
/// through unchanged.
pub fn format_salary(raw: &str) -> String {
    let Ok(value) = raw.parse::<f64>() else {
        return raw.to_string();
    };
    let cents = format!("{:.2}", value.abs());
    let (integer, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let mut grouped = String::new();
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}
