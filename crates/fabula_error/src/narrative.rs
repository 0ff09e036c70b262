//! Narrative error types.

/// Specific error conditions for story generation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// Generated text never matched the expected section structure, even
    /// after exhausting the regeneration budget
    #[display("Failed to parse generated story: {}", _0)]
    Parse(String),
}

/// Error type for story generation and parsing.
///
/// # Examples
///
/// ```
/// use fabula_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::Parse("garbled text".to_string()));
/// assert!(format!("{}", err).contains("garbled"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The kind of error that occurred
    pub kind: NarrativeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new narrative error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
