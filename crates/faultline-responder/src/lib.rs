//! Centralized error responses for the JSON API
//!
//! Every failure leaves the server as `{"error": <message>}` with a status
//! code chosen from a fixed catalogue. Server-side failures are logged with
//! their real cause while the client only ever sees a generic message.

#![allow(clippy::must_use_candidate)]

mod envelope;
mod failure;
mod log;
mod responder;

pub use envelope::{EnvelopeError, write_envelope};
pub use failure::{Failure, SERVER_ERROR_MESSAGE};
pub use log::{LogRecord, MemoryLog, OperatorLog, TracingLog};
pub use responder::Responder;
