//! Story tree invariant violations.
//!
//! These conditions indicate a programming error or a corrupted checkpoint,
//! never a recoverable runtime state. They abort the current run.

/// Kinds of story tree violations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TreeErrorKind {
    /// A tag required by the tree shape has no node
    #[display("No node tagged '{}' in the tree", _0)]
    MissingNode(String),
    /// The active node is an ending and has no children to advance to
    #[display("Node '{}' is an ending and has no child branches", _0)]
    NoChild(String),
    /// Tree does not contain exactly seven nodes
    #[display("Expected 7 story nodes, found {}", _0)]
    WrongNodeCount(usize),
    /// The same tag appears on more than one node
    #[display("Duplicate node tag '{}'", _0)]
    DuplicateTag(String),
    /// Option labels do not match the node's position in the tree
    #[display("Node '{}' has malformed option labels", _0)]
    OptionShape(String),
    /// The active node does not match any tree member by tag
    #[display("Active node '{}' is not a member of the tree", _0)]
    ActiveMismatch(String),
}

/// Story tree error with location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{TreeError, TreeErrorKind};
///
/// let err = TreeError::new(TreeErrorKind::WrongNodeCount(3));
/// assert!(format!("{}", err).contains("found 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Tree Error: {} at line {} in {}", kind, line, file)]
pub struct TreeError {
    /// The kind of error that occurred
    pub kind: TreeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TreeError {
    /// Create a new tree error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TreeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
