//! # credential-forms
//!
//! Signup and login form controllers for the credentials API.
//!
//! Each form owns its field values, posts them as JSON to a fixed endpoint
//! and exposes either the server's `message` or a fixed failure string.
//! Rendering is left to the caller: subscribe to a controller and draw the
//! [`form::FormView`] it produces.

pub mod app;
pub mod config;
pub mod form;
pub mod net;

pub use app::CredentialPages;
pub use config::ApiConfig;
pub use form::{CredentialFormController, FormKind, FormState, FormView, SubmissionStatus};
pub use net::{HttpTransport, SubmissionError, Transport};
