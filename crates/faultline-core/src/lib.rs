//! Shared vocabulary for the faultline error-response subsystem

#![allow(clippy::must_use_candidate)]

mod context;
mod error;
mod message;

pub use context::RequestContext;
pub use error::HttpError;
pub use message::{ErrorMessage, FieldErrors};
