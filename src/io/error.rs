//! Error types and path context for decycling-set operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all decycling-set operations
#[derive(Debug)]
pub enum DecyclingError {
    /// Alphabet or word length outside the supported range
    Configuration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is rejected
        reason: String,
    },

    /// Candidate word list is not one word per rotation orbit
    ///
    /// Raised for a wrong cardinality, an out-of-range or unparseable word,
    /// or an orbit represented twice.
    InvalidCandidate {
        /// Description of what's wrong with the candidate
        reason: String,
    },

    /// Move-list derivation stalled before every slot was discharged
    ///
    /// The candidate leaves at least one cycle of the de Bruijn graph intact.
    IncompleteDecyclingSet {
        /// Number of moves discharged before the worklist ran dry
        discharged: u64,
        /// Number of move slots of the alphabet
        expected: u64,
    },

    /// Queue log holds a record that cannot be decoded
    CorruptQueueRecord {
        /// Raw record bytes (lossy UTF-8)
        record: String,
        /// What made the record unreadable
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing the component graph failed
    GraphOutput {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DecyclingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCandidate { reason } => {
                write!(f, "Invalid candidate decycling set: {reason}")
            }
            Self::IncompleteDecyclingSet {
                discharged,
                expected,
            } => {
                write!(
                    f,
                    "Not a decycling set: only {discharged} of {expected} moves could be discharged"
                )
            }
            Self::CorruptQueueRecord { record, reason } => {
                write!(f, "Corrupt queue record ({reason}): {record:?}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::GraphOutput { source } => {
                write!(f, "Failed to write component graph: {source}")
            }
        }
    }
}

impl std::error::Error for DecyclingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::GraphOutput { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for decycling-set results
pub type Result<T> = std::result::Result<T, DecyclingError>;

/// Attaches the file and operation to raw I/O failures
pub trait IoResultExt<T> {
    /// Convert an I/O result into a [`DecyclingError::FileSystem`] result
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error with the path and operation applied
    fn at_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| DecyclingError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for DecyclingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DecyclingError {
    DecyclingError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid candidate error
pub fn invalid_candidate(reason: &impl ToString) -> DecyclingError {
    DecyclingError::InvalidCandidate {
        reason: reason.to_string(),
    }
}

/// Create a corrupt queue record error from the raw record bytes
pub fn corrupt_record(record: &[u8], reason: &impl ToString) -> DecyclingError {
    DecyclingError::CorruptQueueRecord {
        record: String::from_utf8_lossy(record).into_owned(),
        reason: reason.to_string(),
    }
}
