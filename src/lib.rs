//! Detect Amazon EC2 hosts and collect instance identity metadata from IMDS.
//!
//! This crate answers two questions: is this machine an EC2 instance, and
//! if so, what are its basic identity facts? Detection reads the DMI
//! system-vendor string locally, so a negative answer costs no network
//! traffic. Collection talks to the instance metadata service (IMDS) on
//! the link-local address, preferring the session-token protocol (IMDSv2)
//! and silently falling back to unauthenticated requests (IMDSv1) when
//! token negotiation fails.
//!
//! Each collected field is handed as-is to an [`ArtifactSink`] under a
//! stable label, the way a diagnostic bundle records command output. Field
//! failures are isolated: one unreachable field never prevents the rest
//! from being attempted.
//!
//! # Example
//!
//! ```ignore
//! use ec2_metadata::{Collector, DirectorySink};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let collector = Collector::new().expect("failed to create HTTP client");
//!     if collector.check_enabled() {
//!         let mut sink = DirectorySink::new("bundle/aws")?;
//!         collector.run(&mut sink).await;
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod collector;
mod error;
mod fields;
mod fingerprint;
mod sink;
mod token;

pub use client::ImdsClient;
pub use collector::Collector;
pub use error::MetadataError;
pub use fields::{MetadataField, METADATA_FIELDS};
pub use fingerprint::is_ec2_host;
pub use sink::{ArtifactSink, DirectorySink, MemorySink};
pub use token::ImdsToken;
