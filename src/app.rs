//! The page: one signup form above one login form.
//!
//! The two controllers share a transport (and so a connection pool) but no
//! state; each can be submitted while the other is still in flight.

use crate::config::ApiConfig;
use crate::form::{CredentialFormController, FormKind, FormView};
use crate::net::{HttpTransport, Transport};

pub const PAGE_HEADING: &str = "Signup and Login";

pub struct CredentialPages<T = HttpTransport> {
    pub signup: CredentialFormController<T>,
    pub login: CredentialFormController<T>,
}

impl CredentialPages<HttpTransport> {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport + Clone> CredentialPages<T> {
    pub fn with_transport(config: &ApiConfig, transport: T) -> Self {
        Self {
            signup: CredentialFormController::new(FormKind::Signup, config, transport.clone()),
            login: CredentialFormController::new(FormKind::Login, config, transport),
        }
    }
}

impl<T: Transport> CredentialPages<T> {
    #[must_use]
    pub fn heading(&self) -> &'static str {
        PAGE_HEADING
    }

    /// Both forms in page order.
    #[must_use]
    pub fn views(&self) -> [FormView; 2] {
        [self.signup.view(), self.login.view()]
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
