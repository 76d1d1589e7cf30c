//! HTTP sources for the Landmark Firewatch dashboard.
//!
//! Every backend endpoint wraps its payload in the same envelope:
//! `{ "success": bool, "data": T | null, "error": { message, code } | null }`.
//! Decoding happens in exactly one place ([`envelope::Envelope`]) so the
//! fetch pipelines consume a uniform `Result` regardless of which
//! endpoint produced it. `success: false` is an error no matter what the
//! HTTP status says, and a 401 maps to a distinct
//! [`error::ApiError::Unauthorized`] so the host can invalidate the
//! credential instead of retrying.

pub mod client;
pub mod envelope;
pub mod error;
pub mod sources;

pub use client::HttpClient;
pub use envelope::Envelope;
pub use error::ApiError;
pub use sources::{BoundarySource, LandmarkSource, RasterSource, RiskSource};
