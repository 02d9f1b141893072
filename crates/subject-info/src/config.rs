//! Submission settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid submission endpoint '{value}': {message}")]
    InvalidEndpoint {
        /// Raw endpoint value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// The configured timeout is zero.
    #[error("submission timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values controlling where accepted selections are sent.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SUBJECT_INFO")]
pub struct SubjectInfoSettings {
    /// Submission API endpoint. Selections are only validated when absent.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[ortho_config(file_key = "timeout")]
    pub timeout_secs: Option<u64>,
    /// Bearer token sent with submissions.
    pub bearer_token: Option<String>,
    /// Validate without contacting the endpoint.
    #[ortho_config(default = false)]
    pub dry_run: bool,
}

impl SubjectInfoSettings {
    /// Parsed submission endpoint, or `None` when submissions stay local.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value is not a URL.
    pub fn endpoint_url(&self) -> Result<Option<Url>, SettingsError> {
        if self.dry_run {
            return Ok(None);
        }
        self.endpoint
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|err| SettingsError::InvalidEndpoint {
                    value: raw.to_owned(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }

    /// Request timeout, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn timeout(&self) -> Result<Duration, SettingsError> {
        match self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
