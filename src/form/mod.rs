//! Credential forms.
//!
//! DESIGN
//! ======
//! Split the same way a page is built: `kind` holds what is fixed per form,
//! `state` what changes, `validation` the pre-submit checks, `view` what is
//! drawn and `controller` ties them to the network.

pub mod controller;
pub mod kind;
pub mod state;
pub mod validation;
pub mod view;

pub use controller::{CredentialFormController, SubscriptionId};
pub use kind::FormKind;
pub use state::{FieldMap, FormState, SubmissionStatus};
pub use view::FormView;
