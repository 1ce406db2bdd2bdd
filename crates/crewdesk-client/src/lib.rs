//! Crewdesk Client
//!
//! Typed async clients for the two backend microservices: the employees
//! CRUD service and the attendance log. Failures are never retried; each
//! call either succeeds or yields one [`ApiError`] that the caller turns
//! into a user-facing message.

pub mod attendance;
pub mod employees;
pub mod error;
pub mod models;

pub use attendance::AttendanceClient;
pub use employees::EmployeesClient;
pub use error::{ApiError, Service};
pub use models::{AttendanceKind, AttendanceRecord, Employee, NewAttendance, NewEmployee};
