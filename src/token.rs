//! IMDSv2 session token negotiation.
//!
//! The metadata service supports two protocol generations: IMDSv2 answers a
//! PUT on the token endpoint with a session token that must accompany every
//! later request, while IMDSv1 answers unauthenticated GETs directly. Token
//! negotiation is best-effort: any failure means the caller falls back to
//! IMDSv1, never an aborted run.

use std::fmt;
use std::time::Duration;

use crate::client::ImdsClient;

/// IMDSv2 token endpoint path.
pub const TOKEN_PATH: &str = "/latest/api/token";

/// Token TTL header sent on the negotiation request.
pub const TOKEN_TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds";

/// Requested token lease lifetime in seconds.
pub const TOKEN_TTL_SECONDS: &str = "21600";

/// Token header attached to metadata requests when a token is held.
pub const TOKEN_HEADER: &str = "X-aws-ec2-metadata-token";

/// Timeout for the negotiation request. The service is expected to be
/// unreachable, not slow, when IMDSv2 is unsupported or blocked, so one
/// second is enough for a same-host network hop.
pub const TOKEN_TIMEOUT: Duration = Duration::from_secs(1);

/// An opaque IMDSv2 session token.
///
/// Held for the duration of a single collection run and attached verbatim
/// to every field request. The value is redacted from `Debug` output so it
/// cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ImdsToken(String);

impl ImdsToken {
    /// The raw token value, as sent in the token header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImdsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImdsToken(..)")
    }
}

/// Negotiate an IMDSv2 session token.
///
/// Issues exactly one PUT with the TTL header. Returns `None` on timeout,
/// transport error, non-success status, or an empty body; the response body
/// is otherwise treated as opaque text, trimmed of surrounding whitespace.
pub async fn negotiate(client: &ImdsClient) -> Option<ImdsToken> {
    let url = format!("{}{}", client.base_url(), TOKEN_PATH);

    let response = client
        .inner()
        .put(&url)
        .header(TOKEN_TTL_HEADER, TOKEN_TTL_SECONDS)
        .timeout(TOKEN_TIMEOUT)
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    let body = response.text().await.ok()?;
    let token = body.trim();
    if token.is_empty() {
        None
    } else {
        Some(ImdsToken(token.to_string()))
    }
}
