// File: src/handlers.rs
// Purpose: Submission flows for employees CRUD and attendance registration

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Form, Router};
use maud::{html, Markup};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crewdesk_client::{
    ApiError, AttendanceKind, Employee, NewAttendance, NewEmployee, Service,
};
use crewdesk_forms::field::{attendance_fields, employee_fields};
use crewdesk_forms::form::{FieldPatch, FormState};
use crewdesk_forms::{messages, validate};

use crate::banner::Banner;
use crate::state::AppState;
use crate::views;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/employees", post(create_employee))
        .route("/employees/:id/edit", get(edit_employee))
        .route("/employees/:id", post(update_employee))
        .route("/employees/:id/delete", post(delete_employee))
        .route("/attendance", post(register_attendance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw employee form body; the validator decides what the values mean.
#[derive(Debug, Deserialize)]
pub struct EmployeeFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub hire_date: String,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceFormData {
    #[serde(default)]
    pub employee_id: String,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
}

/// Everything one page render needs. Each flow fills in the parts it
/// changed; the rest falls back to pristine forms and no banners.
#[derive(Debug, Default)]
struct Dashboard {
    message: Option<Banner>,
    edit_message: Option<Banner>,
    attendance_message: Option<Banner>,
    create_form: Option<FormState>,
    /// When present the edit modal is open for this employee id.
    edit_form: Option<(i64, FormState)>,
    attendance_form: Option<FormState>,
}

async fn index(State(state): State<AppState>) -> Markup {
    render_dashboard(&state, Dashboard::default()).await
}

async fn create_employee(
    State(state): State<AppState>,
    Form(data): Form<EmployeeFormData>,
) -> Markup {
    let mut form = employee_form_state("", &data);
    let report = validate::validate(&form);
    if !report.overall_valid {
        form.apply_all(&report.patches);
        let dash = Dashboard {
            message: Some(Banner::error(messages::FIX_FORM_ERRORS)),
            create_form: Some(form),
            ..Dashboard::default()
        };
        return render_dashboard(&state, dash).await;
    }

    match state.employees.create(&to_new_employee(&data)).await {
        Ok(employee) => {
            tracing::info!(id = employee.id, "employee created");
            let dash = Dashboard {
                message: Some(Banner::success("Empleado creado exitosamente!")),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
        Err(err) => {
            if let Some(mapped) = err.mapped() {
                form.apply_server_errors(&mapped);
            }
            let dash = Dashboard {
                message: Some(Banner::error(err.user_message(Service::Employees))),
                create_form: Some(form),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
    }
}

async fn edit_employee(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    match state.employees.get(id).await {
        Ok(employee) => {
            let dash = Dashboard {
                edit_form: Some((id, form_state_from_employee(&employee))),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
        Err(err) => {
            let dash = Dashboard {
                message: Some(Banner::error(load_error_message(
                    &err,
                    Service::Employees,
                    "No se pudieron cargar los datos del empleado",
                ))),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
    }
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(data): Form<EmployeeFormData>,
) -> Markup {
    let mut form = employee_form_state("edit", &data);
    let report = validate::validate(&form);
    if !report.overall_valid {
        form.apply_all(&report.patches);
        let dash = Dashboard {
            edit_message: Some(Banner::error(messages::FIX_FORM_ERRORS)),
            edit_form: Some((id, form)),
            ..Dashboard::default()
        };
        return render_dashboard(&state, dash).await;
    }

    match state.employees.update(id, &to_new_employee(&data)).await {
        Ok(_) => {
            tracing::info!(id, "employee updated");
            let dash = Dashboard {
                message: Some(Banner::success("Empleado actualizado exitosamente!")),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
        Err(err) => {
            if let Some(mapped) = err.mapped() {
                form.apply_server_errors(&mapped);
            }
            let dash = Dashboard {
                edit_message: Some(Banner::error(err.user_message(Service::Employees))),
                edit_form: Some((id, form)),
                ..Dashboard::default()
            };
            render_dashboard(&state, dash).await
        }
    }
}

async fn delete_employee(State(state): State<AppState>, Path(id): Path<i64>) -> Markup {
    let dash = match state.employees.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "employee deleted");
            Dashboard {
                message: Some(Banner::success("Empleado eliminado exitosamente!")),
                ..Dashboard::default()
            }
        }
        Err(err) => Dashboard {
            message: Some(Banner::error(err.user_message(Service::Employees))),
            ..Dashboard::default()
        },
    };
    render_dashboard(&state, dash).await
}

async fn register_attendance(
    State(state): State<AppState>,
    Form(data): Form<AttendanceFormData>,
) -> Markup {
    let mut form = FormState::new(attendance_fields());
    form.set_value("employee_id", data.employee_id.clone());

    let Ok(employee_id) = data.employee_id.trim().parse::<i64>() else {
        form.apply(&FieldPatch::fail(
            "employee_id",
            messages::ATTENDANCE_ID_REQUIRED,
        ));
        let dash = Dashboard {
            attendance_message: Some(Banner::error(messages::ATTENDANCE_ID_REQUIRED)),
            attendance_form: Some(form),
            ..Dashboard::default()
        };
        return render_dashboard(&state, dash).await;
    };

    let event = NewAttendance::now(employee_id, data.kind);
    let dash = match state.attendance.register(&event).await {
        Ok(record) => {
            tracing::info!(employee_id, kind = ?record.kind, "attendance registered");
            Dashboard {
                attendance_message: Some(Banner::success(format!(
                    "{} registrada exitosamente para empleado {}",
                    data.kind.action_label(),
                    employee_id
                ))),
                ..Dashboard::default()
            }
        }
        Err(err) => Dashboard {
            attendance_message: Some(Banner::error(err.user_message(Service::Attendance))),
            attendance_form: Some(form),
            ..Dashboard::default()
        },
    };
    render_dashboard(&state, dash).await
}

async fn render_dashboard(state: &AppState, dash: Dashboard) -> Markup {
    let (employees_markup, employees_load_banner) = match state.employees.list().await {
        Ok(employees) => (views::employees_table(&employees), None),
        Err(err) => (
            views::employees_table(&[]),
            Some(Banner::error(load_error_message(
                &err,
                Service::Employees,
                "No se pudieron cargar los empleados",
            ))),
        ),
    };

    let (attendance_markup, attendance_load_banner) = match state.attendance.list().await {
        Ok(records) => (views::attendance_table(&records), None),
        Err(err) => (
            views::attendance_table(&[]),
            Some(Banner::error(load_error_message(
                &err,
                Service::Attendance,
                "No se pudieron cargar las asistencias",
            ))),
        ),
    };

    let message = dash.message.or(employees_load_banner);
    let attendance_message = dash.attendance_message.or(attendance_load_banner);
    let create_form = dash
        .create_form
        .unwrap_or_else(|| FormState::new(employee_fields()));
    let attendance_form = dash
        .attendance_form
        .unwrap_or_else(|| FormState::new(attendance_fields()));

    views::layout(html! {
        (views::message_area("message", message.as_ref()))
        h2 { "Empleados" }
        (employees_markup)
        h2 { "Agregar empleado" }
        (views::employee_form(&create_form, "/employees", "Agregar empleado"))
        @if let Some((id, form)) = &dash.edit_form {
            div class="modal" id="editModal" {
                (views::message_area("editMessage", dash.edit_message.as_ref()))
                h2 { "Editar empleado" }
                (views::employee_form(form, &format!("/employees/{}", id), "Guardar cambios"))
            }
        }
        h2 { "Asistencias" }
        (views::message_area("attendanceMessage", attendance_message.as_ref()))
        (views::attendance_controls(&attendance_form))
        (attendance_markup)
    })
}

fn employee_form_state(prefix: &str, data: &EmployeeFormData) -> FormState {
    let mut form = FormState::with_prefix(prefix, employee_fields());
    form.set_value("first_name", data.first_name.clone());
    form.set_value("last_name", data.last_name.clone());
    form.set_value("email", data.email.clone());
    form.set_value("phone_number", data.phone_number.clone());
    form.set_value("position", data.position.clone());
    form.set_value("salary", data.salary.clone());
    form.set_value("hire_date", data.hire_date.clone());
    form
}

fn form_state_from_employee(employee: &Employee) -> FormState {
    let mut form = FormState::with_prefix("edit", employee_fields());
    form.set_value("first_name", employee.first_name.clone());
    form.set_value("last_name", employee.last_name.clone());
    form.set_value("email", employee.email.clone());
    form.set_value(
        "phone_number",
        employee.phone_number.clone().unwrap_or_default(),
    );
    form.set_value("position", employee.position.clone());
    form.set_value("salary", employee.salary.clone());
    form.set_value("hire_date", employee.hire_date.format("%Y-%m-%d").to_string());
    form
}

fn to_new_employee(data: &EmployeeFormData) -> NewEmployee {
    NewEmployee {
        first_name: data.first_name.clone(),
        last_name: data.last_name.clone(),
        email: data.email.clone(),
        phone_number: if data.phone_number.is_empty() {
            None
        } else {
            Some(data.phone_number.clone())
        },
        position: data.position.clone(),
        salary: data.salary.clone(),
        hire_date: data.hire_date.clone(),
    }
}

/// Message for a failed table load: rejected responses keep their status
/// code, transport failures use the per-service connectivity string.
fn load_error_message(err: &ApiError, service: Service, what: &str) -> String {
    match err {
        ApiError::Rejected { status, .. } => format!("Error {}: {}", status.as_u16(), what),
        ApiError::Transport(_) => service.connection_message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_data() -> EmployeeFormData {
        EmployeeFormData {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            email: "juan@empresa.com".into(),
            phone_number: String::new(),
            position: "Desarrollador".into(),
            salary: "50000".into(),
            hire_date: "2024-01-15".into(),
        }
    }

    #[test]
    fn empty_phone_becomes_none() {
        let payload = to_new_employee(&sample_data());
        assert_eq!(payload.phone_number, None);

        let mut data = sample_data();
        data.phone_number = "1234567890".into();
        assert_eq!(
            to_new_employee(&data).phone_number.as_deref(),
            Some("1234567890")
        );
    }

    #[test]
    fn form_state_carries_submitted_values() {
        let form = employee_form_state("", &sample_data());
        assert_eq!(form.value("first_name"), "Juan");
        assert_eq!(form.value("salary"), "50000");
        assert!(validate::validate(&form).overall_valid);
    }

    #[test]
    fn edit_form_state_is_prefixed_and_filled() {
        let employee = Employee {
            id: 3,
            first_name: "Ana".into(),
            last_name: "López".into(),
            email: "ana@empresa.com".into(),
            phone_number: None,
            position: "Gerente".into(),
            salary: "61000.00".into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        };
        let form = form_state_from_employee(&employee);
        assert_eq!(form.prefix(), "edit");
        assert_eq!(form.value("phone_number"), "");
        assert_eq!(form.value("hire_date"), "2023-06-01");
        assert_eq!(form.field_id("salary"), "edit_salary");
    }

    #[test]
    fn load_error_messages() {
        let rejected = ApiError::Rejected {
            status: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            payload: serde_json::Value::Null,
        };
        assert_eq!(
            load_error_message(&rejected, Service::Employees, "No se pudieron cargar los empleados"),
            "Error 500: No se pudieron cargar los empleados"
        );
    }
}
