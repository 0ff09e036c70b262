//! Hierarchical tags for story tree positions.

use crate::Choice;
use serde::{Deserialize, Serialize};

/// Position of a node in the fixed depth-2 binary story tree.
///
/// The tag set is closed: a story always consists of a beginning, two
/// branches, and four endings. Tags serialize as hierarchical path strings
/// (`"story"`, `"story-1"`, `"story-2-1"`, ...), where each `-1`/`-2` segment
/// records which option led there.
///
/// # Examples
///
/// ```
/// use fabula_core::{Choice, StoryTag};
///
/// assert_eq!(StoryTag::Begin.to_string(), "story");
/// assert_eq!(StoryTag::Begin.child(Choice::Second), Some(StoryTag::Branch2));
/// assert_eq!(StoryTag::Ending21.child(Choice::First), None);
/// ```
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum StoryTag {
    /// The story opening, root of the tree
    #[serde(rename = "story")]
    #[strum(serialize = "story")]
    Begin,
    /// Continuation after option 1 of the opening
    #[serde(rename = "story-1")]
    #[strum(serialize = "story-1")]
    Branch1,
    /// Continuation after option 2 of the opening
    #[serde(rename = "story-2")]
    #[strum(serialize = "story-2")]
    Branch2,
    /// Ending after option 1 of branch 1
    #[serde(rename = "story-1-1")]
    #[strum(serialize = "story-1-1")]
    Ending11,
    /// Ending after option 2 of branch 1
    #[serde(rename = "story-1-2")]
    #[strum(serialize = "story-1-2")]
    Ending12,
    /// Ending after option 1 of branch 2
    #[serde(rename = "story-2-1")]
    #[strum(serialize = "story-2-1")]
    Ending21,
    /// Ending after option 2 of branch 2
    #[serde(rename = "story-2-2")]
    #[strum(serialize = "story-2-2")]
    Ending22,
}

impl StoryTag {
    /// Whether this position is an ending with no further branches.
    pub fn is_ending(&self) -> bool {
        matches!(
            self,
            StoryTag::Ending11 | StoryTag::Ending12 | StoryTag::Ending21 | StoryTag::Ending22
        )
    }

    /// The child position reached by taking `choice` from this position.
    ///
    /// Returns `None` for endings, which have no children.
    pub fn child(&self, choice: Choice) -> Option<StoryTag> {
        match (self, choice) {
            (StoryTag::Begin, Choice::First) => Some(StoryTag::Branch1),
            (StoryTag::Begin, Choice::Second) => Some(StoryTag::Branch2),
            (StoryTag::Branch1, Choice::First) => Some(StoryTag::Ending11),
            (StoryTag::Branch1, Choice::Second) => Some(StoryTag::Ending12),
            (StoryTag::Branch2, Choice::First) => Some(StoryTag::Ending21),
            (StoryTag::Branch2, Choice::Second) => Some(StoryTag::Ending22),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tags_round_trip_through_strings() {
        for tag in StoryTag::iter() {
            let parsed = StoryTag::from_str(&tag.to_string()).unwrap();
            assert_eq!(tag, parsed);
        }
    }

    #[test]
    fn child_follows_the_tag_grammar() {
        assert_eq!(
            StoryTag::Begin.child(Choice::First).unwrap().to_string(),
            "story-1"
        );
        assert_eq!(
            StoryTag::Branch2.child(Choice::Second).unwrap().to_string(),
            "story-2-2"
        );
    }

    #[test]
    fn endings_have_no_children() {
        for tag in StoryTag::iter().filter(StoryTag::is_ending) {
            assert_eq!(tag.child(Choice::First), None);
            assert_eq!(tag.child(Choice::Second), None);
        }
    }
}
