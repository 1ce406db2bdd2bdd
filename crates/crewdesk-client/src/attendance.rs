//! Attendance service client

use crate::employees::check;
use crate::error::ApiError;
use crate::models::{AttendanceRecord, NewAttendance};

#[derive(Debug, Clone)]
pub struct AttendanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl AttendanceClient {
    /// `base_url` is the service root, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn register_url(&self) -> String {
        format!("{}/attendance/", self.base_url)
    }

    fn list_url(&self) -> String {
        format!("{}/attendance/list/", self.base_url)
    }

    /// Registers one entry/exit event.
    pub async fn register(&self, event: &NewAttendance) -> Result<AttendanceRecord, ApiError> {
        tracing::debug!(
            employee_id = event.employee_id,
            kind = ?event.kind,
            "registering attendance"
        );
        let resp = self
            .http
            .post(self.register_url())
            .json(event)
            .send()
            .await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Lists attendance records, newest first (service ordering).
    pub async fn list(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        tracing::debug!("listing attendance records");
        let resp = self.http.get(self.list_url()).send().await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn urls_are_built_from_the_service_root() {
        let client = AttendanceClient::new("http://localhost:8001");
        assert_eq!(client.register_url(), "http://localhost:8001/attendance/");
        assert_eq!(client.list_url(), "http://localhost:8001/attendance/list/");
    }
}
