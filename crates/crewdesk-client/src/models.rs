//! Wire models for both microservices

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Employee record as returned by the employees service.
///
/// `salary` stays a decimal string on the wire ("50000.00"); formatting for
/// display is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub position: String,
    pub salary: String,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating or updating an employee. Values arrive as the raw
/// form strings; the validator has already checked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
}

/// Entry or exit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceKind {
    Entry,
    Exit,
}

impl AttendanceKind {
    /// Spanish action name used in the success banner.
    pub fn action_label(self) -> &'static str {
        match self {
            AttendanceKind::Entry => "entrada",
            AttendanceKind::Exit => "salida",
        }
    }
}

/// Payload for registering one attendance event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
    /// ISO calendar date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Wall-clock time, HH:MM:SS.
    pub time: NaiveTime,
}

impl NewAttendance {
    /// Stamps the event with the current local date and time.
    pub fn now(employee_id: i64, kind: AttendanceKind) -> Self {
        let now = Local::now();
        Self {
            employee_id,
            kind,
            date: now.date_naive(),
            time: now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
        }
    }
}

/// Attendance record as returned by the attendance service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}
