//! Upstream listings API client.
//!
//! The remote REST API is the source of truth for all entity data. Collections
//! are always fetched whole; no pagination or filter parameters are sent
//! upstream. Every call is a single attempt with no retry; a failure is
//! surfaced to the caller and the user decides whether to try again.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::EmailPayload;

/// Upstream collection path segments.
pub mod collections {
    pub const PROPERTIES: &str = "properties";
    pub const BROKERS: &str = "brokers";
    pub const PROPERTY_REQUIREMENTS: &str = "property-requirements";
    pub const REDEVELOPMENT: &str = "redevelopment";
    pub const COMMERCIAL: &str = "commercial";
}

/// Client for the upstream listings API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    /// Fetch a whole collection.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, AppError> {
        let response = self.http.get(self.collection_url(collection)).send().await?;
        let response = check_status(response, collection).await?;
        Ok(response.json::<Vec<T>>().await?)
    }

    /// Create a record. The body carries no id; the upstream assigns one and
    /// returns the full record.
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        collection: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(self.collection_url(collection))
            .json(body)
            .send()
            .await?;
        let response = check_status(response, collection).await?;
        Ok(response.json::<T>().await?)
    }

    /// Update a record with a partial body; returns the updated record.
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .put(self.record_url(collection, id))
            .json(body)
            .send()
            .await?;
        let response = check_status(response, collection).await?;
        Ok(response.json::<T>().await?)
    }

    /// Delete a record by id.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let response = self
            .http
            .delete(self.record_url(collection, id))
            .send()
            .await?;
        check_status(response, collection).await?;
        Ok(())
    }

    /// Relay a contact submission to the upstream mailer.
    pub async fn send_email(&self, payload: &EmailPayload) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/send-email", self.base_url))
            .json(payload)
            .send()
            .await?;
        check_status(response, "send-email").await?;
        Ok(())
    }
}

/// Map a non-success upstream status to an error.
async fn check_status(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        Err(AppError::NotFound(format!("{} record not found", context)))
    } else {
        tracing::error!("Upstream {} returned {}: {}", context, status, body);
        Err(AppError::Upstream(format!(
            "Upstream {} returned {}",
            context, status
        )))
    }
}
