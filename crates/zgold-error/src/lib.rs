//! Error taxonomy for the zgold parity harness.
//!
//! Structured variants for the failure modes the harness distinguishes:
//! missing fixtures, encoder failures, normalizer misuse, and configuration
//! errors.  Byte mismatches are deliberately *not* errors — they are verdicts
//! produced by the comparator — so nothing here models a failed comparison.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    // === Fixture Errors ===
    /// A scenario's fixture identity has no backing file.
    ///
    /// This is always fatal for the scenario and never treated as a pass:
    /// a run that cannot find its ground truth must fail closed.
    #[error("missing fixture '{id}': no file at '{path}'")]
    MissingFixture { id: String, path: PathBuf },

    // === Encoder Errors ===
    /// The encoder under test returned an error for a given input/options.
    ///
    /// Propagated as-is with no retry; the encoder contract requires
    /// determinism, so retrying cannot change the outcome.
    #[error("encoder failed for '{scenario}': {detail}")]
    EncoderFailure { scenario: String, detail: String },

    // === Configuration Errors ===
    /// The OS-byte override was requested for an encoder variant whose
    /// output format has no OS-identifier field.  Indicates a malformed
    /// scenario matrix, not a property of the encoder.
    #[error("os-byte override requested for variant '{variant}', which has no OS field")]
    NormalizerMisuse { variant: String },

    /// The reference bytes violate a precondition of the OS-byte override
    /// (too short, wrong magic, or an extension-bearing header).
    #[error("malformed gzip header: {detail}")]
    MalformedGzipHeader { detail: String },

    /// An option value is outside its valid range, or an option combination
    /// is invalid for the selected encoder variant.
    #[error("invalid option: {what} = {value}")]
    InvalidOptions { what: String, value: String },

    // === Corpus Errors ===
    /// A named input sample is not present in the corpus.
    #[error("sample not found: '{name}' (expected at '{path}')")]
    SampleNotFound { name: String, path: PathBuf },

    // === Ambient Errors ===
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal logic error (should never happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse classification used for reporting and propagation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The scenario matrix or option set itself is malformed; fixable only
    /// by changing the harness configuration, never by re-running.
    Configuration,
    /// The fixture store or sample corpus is incomplete or unreadable.
    Environment,
    /// The encoder under test failed outright.
    Encoder,
    /// Harness bug.
    Internal,
}

impl HarnessError {
    /// Classify this error for reporting.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NormalizerMisuse { .. }
            | Self::MalformedGzipHeader { .. }
            | Self::InvalidOptions { .. } => ErrorClass::Configuration,
            Self::MissingFixture { .. } | Self::SampleNotFound { .. } | Self::Io(_) => {
                ErrorClass::Environment
            }
            Self::EncoderFailure { .. } => ErrorClass::Encoder,
            Self::Internal(_) => ErrorClass::Internal,
        }
    }

    /// Convenience constructor for invalid-option errors.
    pub fn invalid_option(what: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidOptions {
            what: what.into(),
            value: value.to_string(),
        }
    }

    /// Convenience constructor for internal errors.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result alias used throughout the harness crates.
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_fixture() {
        let err = HarnessError::MissingFixture {
            id: "deflate_level=9.bin".to_owned(),
            path: PathBuf::from("/fixtures/deflate_level=9.bin"),
        };
        let text = err.to_string();
        assert!(text.contains("missing fixture"));
        assert!(text.contains("deflate_level=9.bin"));
    }

    #[test]
    fn test_display_normalizer_misuse_names_variant() {
        let err = HarnessError::NormalizerMisuse {
            variant: "deflate".to_owned(),
        };
        assert!(err.to_string().contains("'deflate'"));
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(
            HarnessError::invalid_option("level", 42).class(),
            ErrorClass::Configuration
        );
        assert_eq!(
            HarnessError::MissingFixture {
                id: "x".to_owned(),
                path: PathBuf::new(),
            }
            .class(),
            ErrorClass::Environment
        );
        assert_eq!(
            HarnessError::EncoderFailure {
                scenario: "level 9".to_owned(),
                detail: "boom".to_owned(),
            }
            .class(),
            ErrorClass::Encoder
        );
        assert_eq!(
            HarnessError::internal("oops").class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HarnessError = io.into();
        assert_eq!(err.class(), ErrorClass::Environment);
    }
}
