use thiserror::Error;

use crate::store::StoreError;

/// Failure taxonomy for the boundary operations. Validation failures
/// and not-found conditions are distinct; persistence failures carry
/// the underlying cause. All of them are meant to reach the caller as
/// data, never as a crash, because the caller (an LLM agent or a human
/// at a terminal) must be able to react conversationally.
#[derive(Debug, Error)]
pub enum ProcurementError {
    #[error("site_name must be a non-empty string")]
    EmptySiteName,
    #[error("no rules found for `{site}`")]
    RulesNotFound { site: String },
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}

impl ProcurementError {
    /// Caller-facing rendition of the failure, phrased so the next
    /// action is obvious.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptySiteName => "Error: site_name must be a non-empty string.".to_string(),
            Self::RulesNotFound { site } => format!(
                "No rules found for '{site}'. Please set rules first using store_site_rules."
            ),
            Self::Store(source) => format!("Error saving data: {source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ProcurementError;
    use crate::store::StoreError;

    #[test]
    fn not_found_message_tells_caller_to_store_rules_first() {
        let error = ProcurementError::RulesNotFound { site: "NonExistent-Site".to_string() };
        assert_eq!(
            error.user_message(),
            "No rules found for 'NonExistent-Site'. Please set rules first using store_site_rules."
        );
    }

    #[test]
    fn store_failure_message_names_the_underlying_cause() {
        let error = ProcurementError::Store(StoreError::Write {
            path: PathBuf::from("procurement_store.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        let message = error.user_message();
        assert!(message.starts_with("Error saving data:"));
        assert!(message.contains("procurement_store.json"));
    }
}
