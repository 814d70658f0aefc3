use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A DNS name the appliances should resolve locally. Accepted as-is from the
/// sources, without syntactic validation.
pub type Domain = String;

/// Duplicates collapse; iteration order is unspecified.
pub type DomainSet = HashSet<Domain>;

/// One entry of the registry listing. Only `domain` is read; any other fields
/// the API returns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub domain: Domain,
}

/// POST body for adding one internal domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainPayload {
    pub domain: Domain,
}

/// Summary of a single reconciliation pass.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub desired: usize,
    pub actual: usize,
    pub pushed: Vec<Domain>,
}
