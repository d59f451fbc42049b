use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use procura_core::{AuditEvent, AuditSink};

/// Append-only JSONL audit trail, one self-contained JSON object per
/// line, in write order.
///
/// Emission swallows every failure: the audit log must never abort a
/// business operation. Failures are still visible operationally via a
/// `warn` trace.
#[derive(Clone, Debug)]
pub struct JsonlAuditLog {
    path: PathBuf,
}

impl JsonlAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every entry in chronological (write) order. Missing file yields
    /// an empty list; malformed lines are skipped.
    pub fn entries(&self) -> Vec<AuditEvent> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        raw.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Delete the trail so the next run starts clean.
    pub fn clear(&self) {
        if let Err(error) = fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), %error, "could not clear audit log");
            }
        }
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AuditSink for JsonlAuditLog {
    fn emit(&self, event: AuditEvent) {
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(error) => {
                warn!(%error, "could not serialize audit event");
                return;
            }
        };
        if let Err(error) = self.append_line(&line) {
            warn!(path = %self.path.display(), %error, "could not append audit event");
        }
    }
}
