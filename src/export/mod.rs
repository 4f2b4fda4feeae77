//! Audit record sinks.
//!
//! The verification result is the only artifact handed downstream. A sink
//! appends one row per verification; the caller decides what else goes into
//! the row alongside the verification columns.

mod jsonl;

use anyhow::Result;
use futures::future::BoxFuture;

use crate::verify::VerificationResult;

pub use jsonl::JsonlSink;

/// Append-only destination for verification results.
pub trait AuditSink: Send + Sync {
    /// Appends one row made of the caller's own fields followed by the
    /// verification columns.
    fn append_row<'a>(
        &'a self,
        caller_fields: &'a [(&'a str, String)],
        result: &'a VerificationResult,
    ) -> BoxFuture<'a, Result<()>>;
}
