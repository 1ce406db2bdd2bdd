// File: src/state.rs
// Purpose: Shared application state for the axum router

use crewdesk_client::{AttendanceClient, EmployeesClient};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct AppState {
    pub employees: EmployeesClient,
    pub attendance: AttendanceClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            employees: EmployeesClient::new(config.services.employees_url.clone()),
            attendance: AttendanceClient::new(config.services.attendance_url.clone()),
        }
    }
}
