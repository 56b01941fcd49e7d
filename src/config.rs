//! API endpoint configuration.
//!
//! The forms talk to a single fixed host, and `ApiConfig::default()` is that
//! host. Nothing in the crate reads the environment on its own.
//!
//! `from_env` is an opt-in addition for embedders: it lets a staging or
//! local backend be swapped in without a rebuild. It is an extension beyond
//! the fixed-host contract: callers that want the literal URL only use
//! `ApiConfig::default()`, and `CredentialPages` and the controllers never
//! call `from_env` themselves.

use crate::form::kind::FormKind;

pub const DEFAULT_BASE_URL: &str = "https://signup-login-woeu.onrender.com";
pub const BASE_URL_ENV: &str = "CREDENTIAL_FORMS_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config for an explicit base URL. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Build config from the environment.
    ///
    /// Optional:
    /// - `CREDENTIAL_FORMS_BASE_URL`: defaults to [`DEFAULT_BASE_URL`]
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(raw.trim()),
            _ => Self::default(),
        }
    }

    /// Absolute URL a form of `kind` posts to.
    #[must_use]
    pub fn endpoint(&self, kind: FormKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
