//! REST client for the portal API.
//!
//! Wraps the `/api/{students,courses,enrollments}` endpoints and `/health`
//! using [`reqwest`]. Non-2xx answers are decoded from the server's
//! `{"error", "code", "fields"}` body into [`ClientError::Api`].

use std::collections::BTreeMap;

use portal_core::types::DbId;
use portal_db::models::enrollment::{Enrollment, EnrollmentDetail};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::error::ClientError;
use crate::resource::Resource;

/// HTTP client for one portal API server.
#[derive(Debug, Clone)]
pub struct PortalApi {
    client: reqwest::Client,
    base_url: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}

/// Error body produced by the server for every non-2xx response.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    code: String,
    #[serde(default)]
    fields: BTreeMap<String, Vec<String>>,
}

impl PortalApi {
    /// Create a client for the server at `base_url`, e.g. `http://host:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/{resource}`: every row, in server order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Entity>, ClientError> {
        let response = self.client.get(self.collection_url::<R>()).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/{resource}/{id}`.
    pub async fn get<R: Resource>(&self, id: DbId) -> Result<R::Entity, ClientError> {
        let response = self.client.get(self.item_url::<R>(id)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/{resource}`. The input is validated locally first and
    /// nothing is sent if it fails.
    pub async fn create<R: Resource>(&self, input: &R::Input) -> Result<R::Entity, ClientError> {
        input.validate()?;
        let response = self
            .client
            .post(self.collection_url::<R>())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/{resource}/{id}`, validated locally like [`Self::create`].
    pub async fn update<R: Resource>(
        &self,
        id: DbId,
        input: &R::Input,
    ) -> Result<R::Entity, ClientError> {
        input.validate()?;
        let response = self
            .client
            .put(self.item_url::<R>(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/{resource}/{id}`.
    pub async fn delete<R: Resource>(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url::<R>(id)).send().await?;
        Self::check_status(response).await
    }

    /// `GET /api/enrollments?expand=true`.
    pub async fn list_enrollments_detailed(&self) -> Result<Vec<EnrollmentDetail>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/enrollments", self.base_url))
            .query(&[("expand", "true")])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/enrollments/{id}?expand=true`.
    pub async fn get_enrollment_detailed(&self, id: DbId) -> Result<EnrollmentDetail, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/enrollments/{id}", self.base_url))
            .query(&[("expand", "true")])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/students/{id}/enrollments`.
    pub async fn student_enrollments(&self, student_id: DbId) -> Result<Vec<Enrollment>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/students/{student_id}/enrollments", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/courses/{id}/enrollments`.
    pub async fn course_enrollments(&self, course_id: DbId) -> Result<Vec<Enrollment>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/courses/{course_id}/enrollments", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/api/{}", self.base_url, R::PATH)
    }

    fn item_url<R: Resource>(&self, id: DbId) -> String {
        format!("{}/api/{}/{id}", self.base_url, R::PATH)
    }

    /// Return the response unchanged on a 2xx status, otherwise decode the
    /// error body into [`ClientError::Api`]. Bodies that are not the
    /// server's error shape keep their raw text as the message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let error = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => ClientError::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.error,
                fields: body.fields,
            },
            Err(_) => ClientError::Api {
                status: status.as_u16(),
                code: "UNKNOWN".to_string(),
                message: text,
                fields: BTreeMap::new(),
            },
        };
        Err(error)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
