//! JSONL audit sink.
//!
//! Each verification becomes one JSON object per line, caller fields first,
//! then the verification columns. Ideal for piping to `jq` or bulk loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::{Map, Value};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::verify::VerificationResult;

use super::AuditSink;

/// Appends rows to a JSON Lines file.
///
/// Writes are serialized through a mutex so concurrent verifications never
/// interleave partial lines.
pub struct JsonlSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the JSON object for one row.
    pub fn build_row(caller_fields: &[(&str, String)], result: &VerificationResult) -> Value {
        let mut row = Map::new();
        for (column, value) in caller_fields {
            row.insert((*column).to_string(), Value::String(value.clone()));
        }
        for (column, value) in result.row_fields() {
            row.insert(column.to_string(), Value::String(value));
        }
        Value::Object(row)
    }

    async fn append(&self, caller_fields: &[(&str, String)], result: &VerificationResult) -> Result<()> {
        let mut line = serde_json::to_string(&Self::build_row(caller_fields, result))
            .context("Failed to serialize audit row")?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open audit file: {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to write audit file: {}", self.path.display()))?;
        file.flush().await?;
        Ok(())
    }
}

impl AuditSink for JsonlSink {
    fn append_row<'a>(
        &'a self,
        caller_fields: &'a [(&'a str, String)],
        result: &'a VerificationResult,
    ) -> BoxFuture<'a, Result<()>> {
        self.append(caller_fields, result).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{MatchVerdict, Source};

    fn result() -> VerificationResult {
        VerificationResult {
            ip_masked: "203.0.113.0/24".to_string(),
            source: Source::Client,
            region_code: "TX".to_string(),
            region_name: "Texas".to_string(),
            postal: "78701".to_string(),
            verdict: MatchVerdict::No,
        }
    }

    #[test]
    fn test_build_row_merges_caller_fields() {
        let row = JsonlSink::build_row(&[("submission_id", "abc-123".to_string())], &result());
        assert_eq!(row["submission_id"], "abc-123");
        assert_eq!(row["ip_masked"], "203.0.113.0/24");
        assert_eq!(row["ip_source"], "client");
        assert_eq!(row["region_match"], "No");
    }

    #[tokio::test]
    async fn test_append_row_writes_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path().join("audit.jsonl"));

        sink.append_row(&[("claimed_state", "NY".to_string())], &result())
            .await
            .unwrap();
        sink.append_row(&[], &result()).await.unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["claimed_state"], "NY");
        assert_eq!(first["ip_region_code"], "TX");
    }

    #[tokio::test]
    async fn test_append_row_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path().join("missing").join("audit.jsonl"));
        assert!(sink.append_row(&[], &result()).await.is_err());
    }
}
