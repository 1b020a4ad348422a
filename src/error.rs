//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer types

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, FunnelError>;

/// Errors raised by the registry, sequencer, session controller and config
#[derive(Debug, Error)]
pub enum FunnelError {
    /// One or more required form fields were empty after trimming
    #[error("Please fill in all fields (missing: {})", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// A stage identifier outside the fixed funnel order
    #[error("Unknown funnel stage: {0}")]
    UnknownStage(String),

    /// The clipboard capability refused the write
    #[error("Failed to copy prompt to clipboard: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FunnelError {
    /// Recoverable errors are shown as a notice; the rest as a hard alert
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FunnelError::Validation { .. } | FunnelError::Clipboard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = FunnelError::Validation {
            missing: vec!["product", "audience"],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all fields (missing: product, audience)"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unknown_stage_is_hard_alert() {
        let err = FunnelError::UnknownStage("nonexistent-stage".to_string());
        assert_eq!(err.to_string(), "Unknown funnel stage: nonexistent-stage");
        assert!(!err.is_recoverable());
    }
}
