//! Blocking submitter for agent settings.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use super::error::SubmitError;
use crate::agent::AgentConfig;
use crate::snapshot::Snapshot;

/// Persists agent settings and forwards them to the backend.
pub struct Submitter {
    client: Client,     // Blocking HTTP client with default timeouts
    url: Url,           // Backend endpoint
    snapshot: Snapshot, // Local copy of the last submission
}

impl Submitter {
    /// Create a new submitter.
    ///
    /// # Arguments
    /// * `url` - Backend endpoint receiving the POST
    /// * `snapshot` - Snapshot file to overwrite on every submission
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(url: Url, snapshot: Snapshot) -> Result<Self> {
        debug!("Backend endpoint: {}", url);

        let client = client_builder().build().context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, url, snapshot))
    }

    /// Create a submitter around an existing HTTP client.
    pub fn with_client(client: Client, url: Url, snapshot: Snapshot) -> Self {
        Self { client, url, snapshot }
    }

    /// Save `config` locally, then POST it to the backend.
    ///
    /// The request body is the exact bytes written to the snapshot. The backend is
    /// not contacted when the local write fails.
    ///
    /// # Errors
    /// * [`SubmitError::LocalWrite`] if the snapshot cannot be written
    /// * [`SubmitError::Transport`] if the request cannot be sent or the response read
    /// * [`SubmitError::RemoteRejection`] if the backend answers with a non-200 status
    pub fn submit(&self, config: &AgentConfig) -> Result<(), SubmitError> {
        let body = self.snapshot.save(config).map_err(SubmitError::LocalWrite)?;
        info!("💾 Settings saved to {}", self.snapshot.path().display());

        debug!("POST {} ({} bytes)", self.url, body.len());
        let response = self.client.post(self.url.clone()).header(CONTENT_TYPE, "application/json").body(body).send()?;

        let status = response.status();
        info!("Backend responded with {}", status);

        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text()?;
        Err(SubmitError::RemoteRejection { status: status.as_u16(), body })
    }
}

/// HTTP client settings for talking to the backend.
///
/// Redirects are not followed: a 3xx would replay the POST as a body-less GET.
fn client_builder() -> ClientBuilder {
    Client::builder().redirect(Policy::none())
}
