//! Published post types.

use serde::{Deserialize, Serialize};

/// Identifier of a post on the publishing platform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Create a post id from its integer value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The underlying integer value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A fetched view of an existing poll post.
///
/// Transient: used only to decide which branch to advance to, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// Identifier of the fetched post
    pub post_id: PostId,
    /// Body text of the post
    pub text: String,
    /// Label of the first poll option
    pub option_1_label: String,
    /// Votes cast for the first option
    pub option_1_votes: u64,
    /// Label of the second poll option
    pub option_2_label: String,
    /// Votes cast for the second option
    pub option_2_votes: u64,
}
