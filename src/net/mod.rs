//! Network layer: the `Transport` seam, its reqwest implementation and the
//! wire types the forms exchange with the API.

pub mod transport;
pub mod types;

pub use transport::{HttpTransport, Transport};
pub use types::{MessageResponse, SubmissionError};
