//! One credential form: field edits and the submit/settle cycle.
//!
//! DESIGN
//! ======
//! The controller owns its `FormState` and tells subscribers about every
//! change instead of relying on a framework re-render. Subscribers are plain
//! callbacks; a renderer typically turns the state into a [`FormView`].
//!
//! `submit` takes `&mut self`, so a second submission cannot start while one
//! is awaiting the transport. The UI-level "button disabled while in flight"
//! rule and the borrow checker enforce the same invariant.
//!
//! LIFECYCLE
//! =========
//! `Idle -> InFlight -> Completed -> InFlight -> Completed -> ...`
//!
//! Entering `InFlight` clears the previous message. Settling sets the message
//! exactly once: the server's `message` on success, the form's fixed failure
//! string on any error.
//!
//! CANCELLATION
//! ============
//! Dropping the `submit` future aborts the outstanding request. The
//! `Settlement` guard then moves the status out of `InFlight` and notifies
//! subscribers, so a renderer re-enables the form. No message is set on that
//! path. A transport panic also resets the status, but subscribers are not
//! called while unwinding.

use serde_json::Value;

use super::kind::FormKind;
use super::state::{FormState, SubmissionStatus};
use super::validation::{ValidationError, validate};
use super::view::FormView;
use crate::config::ApiConfig;
use crate::net::{HttpTransport, MessageResponse, SubmissionError, Transport};

/// Render callback registered with [`CredentialFormController::subscribe`].
pub type RenderCallback = Box<dyn FnMut(&FormState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct CredentialFormController<T = HttpTransport> {
    kind: FormKind,
    endpoint: String,
    transport: T,
    state: FormState,
    subscribers: Vec<(SubscriptionId, RenderCallback)>,
    next_subscription: u64,
}

impl CredentialFormController<HttpTransport> {
    /// Login form posting through a fresh reqwest client.
    #[must_use]
    pub fn login(config: &ApiConfig) -> Self {
        Self::new(FormKind::Login, config, HttpTransport::new())
    }

    /// Signup form posting through a fresh reqwest client.
    #[must_use]
    pub fn signup(config: &ApiConfig) -> Self {
        Self::new(FormKind::Signup, config, HttpTransport::new())
    }
}

impl<T: Transport> CredentialFormController<T> {
    pub fn new(kind: FormKind, config: &ApiConfig, transport: T) -> Self {
        Self {
            kind,
            endpoint: config.endpoint(kind),
            transport,
            state: FormState::new(kind),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        FormView::render(self.kind, &self.state)
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, callback: impl FnMut(&FormState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace one field's value. Names outside the form's field set are
    /// ignored.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        if self.state.fields.set(name, value) {
            self.notify();
        } else {
            tracing::warn!(form = %self.kind, field = name, "ignoring update to unknown field");
        }
    }

    /// Form submit event: run the pre-submit checks, then [`Self::submit`].
    ///
    /// # Errors
    ///
    /// Returns the validation failure without touching state or the network.
    pub async fn request_submit(&mut self) -> Result<(), ValidationError> {
        if let Err(err) = validate(self.kind, &self.state.fields) {
            tracing::debug!(form = %self.kind, error = %err, "submit blocked by validation");
            return Err(err);
        }
        self.submit().await;
        Ok(())
    }

    /// Send the current fields to the form's endpoint and settle the result
    /// into state. Issues exactly one request and never fails.
    pub async fn submit(&mut self) {
        self.state.status = SubmissionStatus::InFlight;
        self.state.message = None;
        self.notify();

        tracing::debug!(form = %self.kind, endpoint = %self.endpoint, "submitting credentials");

        let body = serde_json::to_value(&self.state.fields);
        let settlement = Settlement { kind: self.kind, state: &mut self.state, subscribers: &mut self.subscribers };
        let outcome = match body {
            Ok(body) => post_message(&self.transport, &self.endpoint, &body).await,
            Err(e) => Err(SubmissionError::Malformed(e.to_string())),
        };
        settlement.settle(outcome);
    }

    fn notify(&mut self) {
        notify_all(&mut self.subscribers, &self.state);
    }
}

fn notify_all(subscribers: &mut [(SubscriptionId, RenderCallback)], state: &FormState) {
    for (_, callback) in subscribers {
        callback(state);
    }
}

async fn post_message<T: Transport>(
    transport: &T,
    endpoint: &str,
    body: &Value,
) -> Result<MessageResponse, SubmissionError> {
    let resp = transport.post_json(endpoint, body).await?;
    MessageResponse::from_body(resp)
}

/// Owns the settle step of one submission. Either `settle` records the
/// outcome, or dropping the guard mid-flight resets the status. Subscribers
/// hear about both.
struct Settlement<'a> {
    kind: FormKind,
    state: &'a mut FormState,
    subscribers: &'a mut Vec<(SubscriptionId, RenderCallback)>,
}

impl Settlement<'_> {
    fn settle(self, outcome: Result<MessageResponse, SubmissionError>) {
        let message = match outcome {
            Ok(resp) => {
                tracing::info!(form = %self.kind, "submission accepted");
                resp.message
            }
            Err(e) => {
                tracing::warn!(form = %self.kind, error = %e, "submission failed");
                e.user_message(self.kind).to_string()
            }
        };
        self.state.message = Some(message);
        self.state.status = SubmissionStatus::Completed;
        // Drop runs next and sees a settled state.
    }
}

impl Drop for Settlement<'_> {
    fn drop(&mut self) {
        if self.state.status == SubmissionStatus::InFlight {
            tracing::debug!(form = %self.kind, "submission abandoned before settling");
            self.state.status = SubmissionStatus::Completed;
            if std::thread::panicking() {
                return;
            }
        }
        notify_all(self.subscribers.as_mut_slice(), self.state);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
