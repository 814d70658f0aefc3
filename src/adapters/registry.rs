use crate::domain::model::{DomainPayload, DomainSet, RegistryRecord};
use crate::domain::ports::Registry;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;

/// Hosted management API base. Overridable via `REGISTRY_API_BASE`.
pub const DEFAULT_API_BASE: &str = "https://management.api.umbrella.com/v1";

/// HTTP client for the internal-domains registry: GET and POST against one
/// fixed path pattern with HTTP Basic auth. 200 is the only success status.
pub struct HttpRegistry {
    client: Client,
    endpoint: String,
    api_key: String,
    api_secret: String,
}

impl HttpRegistry {
    pub fn new(api_base: &str, org_id: &str, api_key: String, api_secret: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/organizations/{}/internaldomains", api_base, org_id),
            api_key,
            api_secret,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn fetch(&self) -> Result<DomainSet> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SyncError::StatusError {
                context: "Registry listing".to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let records: Vec<RegistryRecord> = response.json().await?;
        Ok(records.into_iter().map(|record| record.domain).collect())
    }

    async fn push(&self, domain: &str) -> Result<serde_json::Value> {
        tracing::debug!("POST {} domain={}", self.endpoint, domain);
        let payload = DomainPayload {
            domain: domain.to_string(),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SyncError::StatusError {
                context: format!("Registry push of '{}'", domain),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}
