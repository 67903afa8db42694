// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit REST API client.
//!
//! Read-only: one GET per collection, no retries, no timeout, no caching.

use crate::error::FetchError;
use crate::models::envelope::{decode_records, into_records};
use crate::resource::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fitness API client.
#[derive(Clone)]
pub struct FitnessApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl FitnessApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection URL, e.g. `{base}/api/users/`.
    pub fn endpoint(&self, resource: Resource) -> String {
        format!("{}/api/{}/", self.base_url, resource.api_name())
    }

    /// Fetch a collection as raw records, in server order.
    pub async fn list_records(&self, resource: Resource) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint(resource);
        tracing::info!(resource = resource.api_name(), url = %url, "Fetching records");

        let result = self.get_json(&url).await.map(into_records);
        match &result {
            Ok(records) => tracing::debug!(
                resource = resource.api_name(),
                count = records.len(),
                "Fetched records"
            ),
            Err(e) => tracing::warn!(
                resource = resource.api_name(),
                error = %e,
                "Fetch failed"
            ),
        }
        result
    }

    /// Fetch a collection decoded into its view model.
    pub async fn list<T>(&self, resource: Resource) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned + Default,
    {
        self.list_records(resource).await.map(decode_records)
    }

    /// Generic GET request with JSON response.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.http.get(url).send().await?;
        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(&self, response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
