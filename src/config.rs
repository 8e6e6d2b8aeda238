//! Client configuration.
//!
//! Credentials live on the configuration value owned by each
//! [`EcommClient`](crate::client::EcommClient) instance, so independently
//! configured clients can coexist in one process. Nothing here validates the
//! credential contents; presence is checked at the point of use.

use std::path::PathBuf;

use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Deserialize;

use crate::{
    errors::CustomResult,
    types::{BASE64_ENGINE, MAX_RESPONSE_BODY_SIZE},
};

use base64::Engine;

/// Production MerchantHandler endpoint.
pub const DEFAULT_MERCHANT_HANDLER_URL: &str =
    "https://securepay.ufc.ge:18443/ecomm2/MerchantHandler";

/// Prefix for environment-sourced configuration (`TBC_PFX_FILE`,
/// `TBC_PASSPHRASE`, ...).
const ENV_PREFIX: &str = "TBC";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration from the environment")]
    EnvironmentLoadFailed,
    #[error("Failed to read the certificate file {path}")]
    CertificateFileUnreadable { path: String },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EcommConfig {
    pub merchant_handler_url: String,
    /// Base64-encoded PKCS#12 client certificate.
    pub certificate: Option<Secret<String>>,
    /// Alternative to `certificate`: a path to the PKCS#12 file, read and
    /// encoded at load time.
    pub pfx_file: Option<PathBuf>,
    pub passphrase: Option<Secret<String>>,
    pub fail_redirect_url: Option<String>,
    pub success_redirect_url: Option<String>,
    pub response_size_limit: usize,
}

impl Default for EcommConfig {
    fn default() -> Self {
        Self {
            merchant_handler_url: DEFAULT_MERCHANT_HANDLER_URL.to_string(),
            certificate: None,
            pfx_file: None,
            passphrase: None,
            fail_redirect_url: None,
            success_redirect_url: None,
            response_size_limit: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

impl EcommConfig {
    /// Loads configuration from `TBC_`-prefixed environment variables and
    /// resolves a `TBC_PFX_FILE` path into certificate bytes.
    pub fn from_env() -> CustomResult<Self, ConfigurationError> {
        let mut config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(config::Config::try_deserialize)
            .change_context(ConfigurationError::EnvironmentLoadFailed)?;
        config.resolve_certificate_file()?;
        Ok(config)
    }

    fn resolve_certificate_file(&mut self) -> CustomResult<(), ConfigurationError> {
        if self.certificate.is_some() {
            return Ok(());
        }
        if let Some(path) = &self.pfx_file {
            let bytes =
                std::fs::read(path).change_context(ConfigurationError::CertificateFileUnreadable {
                    path: path.display().to_string(),
                })?;
            self.certificate = Some(Secret::new(BASE64_ENGINE.encode(bytes)));
        }
        Ok(())
    }

    /// Applies an update: present fields overwrite, absent fields are left
    /// unchanged.
    pub fn apply(&mut self, update: EcommConfigUpdate) {
        if let Some(certificate) = update.certificate {
            self.certificate = Some(certificate);
        }
        if let Some(passphrase) = update.passphrase {
            self.passphrase = Some(passphrase);
        }
        if let Some(fail_redirect_url) = update.fail_redirect_url {
            self.fail_redirect_url = Some(fail_redirect_url);
        }
        if let Some(success_redirect_url) = update.success_redirect_url {
            self.success_redirect_url = Some(success_redirect_url);
        }
    }

    /// Both credentials, or `None` when either is missing or empty.
    pub(crate) fn credentials(&self) -> Option<(&Secret<String>, &Secret<String>)> {
        let certificate = self
            .certificate
            .as_ref()
            .filter(|certificate| !certificate.peek().is_empty())?;
        let passphrase = self
            .passphrase
            .as_ref()
            .filter(|passphrase| !passphrase.peek().is_empty())?;
        Some((certificate, passphrase))
    }
}

/// Partial configuration for [`EcommConfig::apply`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EcommConfigUpdate {
    pub certificate: Option<Secret<String>>,
    pub passphrase: Option<Secret<String>>,
    pub fail_redirect_url: Option<String>,
    pub success_redirect_url: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn apply_overwrites_present_fields_only() {
        let mut config = EcommConfig {
            certificate: Some(Secret::new("old-cert".to_string())),
            passphrase: Some(Secret::new("old-pass".to_string())),
            fail_redirect_url: Some("https://merchant.example/fail".to_string()),
            ..EcommConfig::default()
        };

        config.apply(EcommConfigUpdate {
            passphrase: Some(Secret::new("new-pass".to_string())),
            success_redirect_url: Some("https://merchant.example/ok".to_string()),
            ..EcommConfigUpdate::default()
        });

        assert_eq!(config.certificate.unwrap().peek(), "old-cert");
        assert_eq!(config.passphrase.unwrap().peek(), "new-pass");
        assert_eq!(
            config.fail_redirect_url.as_deref(),
            Some("https://merchant.example/fail")
        );
        assert_eq!(
            config.success_redirect_url.as_deref(),
            Some("https://merchant.example/ok")
        );
    }

    #[test]
    fn credentials_require_both_fields_non_empty() {
        let mut config = EcommConfig::default();
        assert!(config.credentials().is_none());

        config.certificate = Some(Secret::new("cGZ4".to_string()));
        assert!(config.credentials().is_none());

        config.passphrase = Some(Secret::new(String::new()));
        assert!(config.credentials().is_none());

        config.passphrase = Some(Secret::new("secret".to_string()));
        assert!(config.credentials().is_some());
    }

    #[test]
    fn default_points_at_production_endpoint() {
        let config = EcommConfig::default();
        assert_eq!(config.merchant_handler_url, DEFAULT_MERCHANT_HANDLER_URL);
        assert_eq!(config.response_size_limit, MAX_RESPONSE_BODY_SIZE);
    }
}
