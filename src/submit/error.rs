//! Failure reasons for a submission.

use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Why a submission did not succeed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The snapshot could not be written; the backend was not contacted.
    #[error("failed to save settings locally: {0}")]
    LocalWrite(#[source] SnapshotError),
    /// The backend could not be reached or its response could not be read.
    #[error("failed to connect to the backend: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with something other than 200.
    #[error("backend returned an error (status code: {status}): {body}")]
    RemoteRejection { status: u16, body: String },
}
