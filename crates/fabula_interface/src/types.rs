//! Request types shared across publisher implementations.

use serde::{Deserialize, Serialize};

/// A two-option poll attachment for a post.
///
/// The option strings are the literal poll choices shown by the platform;
/// the duration is passed through to the backend unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSpec {
    /// The two poll options, in display order
    pub options: [String; 2],
    /// How long the poll stays open, in minutes
    pub duration_minutes: u32,
}

impl PollSpec {
    /// A numbered two-option poll (`"1"` / `"2"`) with the given duration.
    pub fn numbered(duration_minutes: u32) -> Self {
        Self {
            options: ["1".to_string(), "2".to_string()],
            duration_minutes,
        }
    }
}
