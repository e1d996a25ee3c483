//! Save-and-submit of the agent configuration.
//!
//! Writes the local snapshot first, then pushes the same JSON to the backend.

mod error;
mod submitter;

pub use error::SubmitError;
pub use submitter::Submitter;
