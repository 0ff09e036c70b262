//! Social publishing error types.

/// Kinds of publishing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SocialErrorKind {
    /// Publishing API returned a non-success status after retries
    #[display("Publishing API returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Referenced post does not exist
    #[display("No post with id {} found", _0)]
    PostNotFound(u64),
    /// Fetched post carries no poll to read votes from
    #[display("Post {} has no poll attached", _0)]
    MissingPoll(u64),
    /// Post id in the response was not a valid integer
    #[display("Invalid post id in response: {}", _0)]
    InvalidId(String),
    /// Response body did not match the expected shape
    #[display("Malformed publishing response: {}", _0)]
    MalformedResponse(String),
}

/// Publishing error with location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{SocialError, SocialErrorKind};
///
/// let err = SocialError::new(SocialErrorKind::PostNotFound(42));
/// assert!(format!("{}", err).contains("42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at line {} in {}", kind, line, file)]
pub struct SocialError {
    /// The kind of error that occurred
    pub kind: SocialErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SocialError {
    /// Create a new publishing error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
