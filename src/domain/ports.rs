use crate::domain::model::DomainSet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A desired-state source: yields the set of domains that should exist in the
/// registry. Each source returns its own immutable set; callers combine them
/// by union.
#[async_trait]
pub trait DomainSource: Send + Sync {
    /// Human-readable description used in progress logs.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<DomainSet>;
}

/// The remote internal-domains registry.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn fetch(&self) -> Result<DomainSet>;

    /// Adds one domain. Returns the parsed response body (confirmation only).
    async fn push(&self, domain: &str) -> Result<serde_json::Value>;
}
