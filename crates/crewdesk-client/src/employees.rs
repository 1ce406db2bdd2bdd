//! Employees service client
//!
//! CRUD calls against the employees microservice's collection resource
//! (`{base}/api/employees/`). Every call is a single request: no retries,
//! no caching.

use reqwest::Response;
use serde_json::Value;

use crate::error::{parse_error_payload, ApiError};
use crate::models::{Employee, NewEmployee};

#[derive(Debug, Clone)]
pub struct EmployeesClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmployeesClient {
    /// `base_url` is the service root, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/employees/", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/employees/{}/", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        tracing::debug!("listing employees");
        let resp = self.http.get(self.collection_url()).send().await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        tracing::debug!(email = %employee.email, "creating employee");
        let resp = self
            .http
            .post(self.collection_url())
            .json(employee)
            .send()
            .await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Employee, ApiError> {
        tracing::debug!(id, "fetching employee");
        let resp = self.http.get(self.item_url(id)).send().await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn update(&self, id: i64, employee: &NewEmployee) -> Result<Employee, ApiError> {
        tracing::debug!(id, "updating employee");
        let resp = self
            .http
            .put(self.item_url(id))
            .json(employee)
            .send()
            .await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting employee");
        let resp = self.http.delete(self.item_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }
}

/// Converts a non-success response into [`ApiError::Rejected`] with its
/// parsed body as the payload.
pub(crate) async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let payload: Value = parse_error_payload(&text);
    tracing::warn!(%status, "server rejected request");
    Err(ApiError::Rejected { status, payload })
}
