use crate::adapters::registry::DEFAULT_API_BASE;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{
    validate_interval, validate_non_empty_string, validate_url, Validate,
};
use std::env;
use std::time::Duration;

/// Environment-sourced settings. At least one of `domain_csv` / `domain_url`
/// is needed for the sync to do anything, but that is not enforced — with no
/// sources the desired set is empty and the registry is left untouched.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub domain_csv: Option<String>,
    pub domain_url: Option<String>,
    pub org_id: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
    pub interval_secs: Option<u64>,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            domain_csv: env::var("DOMAIN_CSV").ok(),
            domain_url: env::var("DOMAIN_URL").ok(),
            org_id: require("REGISTRY_ORG_ID")?,
            api_key: require("REGISTRY_API_KEY")?,
            api_secret: require("REGISTRY_API_SECRET")?,
            api_base: env::var("REGISTRY_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            interval_secs: match env::var("INTERVAL") {
                Ok(raw) => Some(raw.parse().map_err(|_| {
                    SyncError::InvalidConfigValueError {
                        field: "INTERVAL".to_string(),
                        value: raw.clone(),
                        reason: "must be an integer number of seconds".to_string(),
                    }
                })?),
                Err(_) => None,
            },
        })
    }

    /// Daemon-mode interval; a missing `INTERVAL` is a configuration error.
    pub fn daemon_interval(&self) -> Result<Duration> {
        let secs = self
            .interval_secs
            .ok_or_else(|| SyncError::MissingConfigError {
                field: "INTERVAL".to_string(),
            })?;
        Ok(Duration::from_secs(secs))
    }

    pub fn has_source(&self) -> bool {
        self.domain_csv.is_some() || self.domain_url.is_some()
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| SyncError::MissingConfigError {
        field: name.to_string(),
    })
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.domain_url {
            validate_url("DOMAIN_URL", url)?;
        }
        validate_url("REGISTRY_API_BASE", &self.api_base)?;
        validate_non_empty_string("REGISTRY_ORG_ID", &self.org_id)?;
        validate_non_empty_string("REGISTRY_API_KEY", &self.api_key)?;
        validate_non_empty_string("REGISTRY_API_SECRET", &self.api_secret)?;
        if let Some(secs) = self.interval_secs {
            validate_interval("INTERVAL", secs, 1)?;
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
