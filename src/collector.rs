//! Metadata collection orchestration.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::client::ImdsClient;
use crate::error::MetadataError;
use crate::fields::{MetadataField, METADATA_FIELDS};
use crate::fingerprint;
use crate::sink::ArtifactSink;
use crate::token::{self, ImdsToken, TOKEN_HEADER};

/// Collects EC2 instance metadata into an [`ArtifactSink`].
///
/// A collector holds no state between runs: each [`run`](Self::run)
/// re-checks the host fingerprint, negotiates a fresh token, and fetches
/// every field once, so repeated runs are independent.
#[derive(Debug)]
pub struct Collector {
    client: ImdsClient,
    vendor_path: PathBuf,
}

impl Collector {
    /// Create a collector against the real metadata service.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ImdsClient::with_default_timeout()?,
            vendor_path: PathBuf::from(fingerprint::SYS_VENDOR_PATH),
        })
    }

    /// Create a collector with a custom base URL (for testing).
    pub fn with_base_url(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ImdsClient::with_base_url(base_url)?,
            vendor_path: PathBuf::from(fingerprint::SYS_VENDOR_PATH),
        })
    }

    /// Override the DMI vendor file consulted by the fingerprint check.
    pub fn with_vendor_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vendor_path = path.into();
        self
    }

    /// Whether collection would run on this host.
    ///
    /// This is the activation gate for embedding frameworks; `run` performs
    /// the same check again internally before any network I/O.
    pub fn check_enabled(&self) -> bool {
        fingerprint::vendor_file_matches(&self.vendor_path)
    }

    /// Run one collection pass.
    ///
    /// On a non-EC2 host this logs one informational line and returns
    /// without touching the network. Otherwise it negotiates a token
    /// (best-effort) and fetches each field exactly once, in order,
    /// recording successful responses into `sink`. Field failures are
    /// isolated and logged; no failure escapes this call.
    pub async fn run(&self, sink: &mut dyn ArtifactSink) {
        if !self.check_enabled() {
            info!("not an EC2 instance; skipping AWS metadata collection");
            return;
        }

        let token = token::negotiate(&self.client).await;
        match &token {
            Some(_) => debug!("IMDSv2 token negotiated"),
            None => debug!("no IMDSv2 token; falling back to IMDSv1"),
        }

        self.collect_fields(token.as_ref(), sink).await;
    }

    /// Fetch every field once, in order, regardless of prior outcomes.
    pub async fn collect_fields(&self, token: Option<&ImdsToken>, sink: &mut dyn ArtifactSink) {
        for field in METADATA_FIELDS {
            if let Err(err) = self.fetch_field(field, token, sink).await {
                warn!(field = field.path, error = %err, "metadata field fetch failed");
            }
        }
    }

    async fn fetch_field(
        &self,
        field: &MetadataField,
        token: Option<&ImdsToken>,
        sink: &mut dyn ArtifactSink,
    ) -> Result<(), MetadataError> {
        let url = field.url(self.client.base_url());

        let mut request = self.client.inner().get(&url);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Http(status.as_u16()));
        }

        let body = response.bytes().await?;
        sink.record(field.artifact, &body)?;
        Ok(())
    }

    /// The DMI vendor file this collector fingerprints against.
    pub fn vendor_path(&self) -> &Path {
        &self.vendor_path
    }
}
