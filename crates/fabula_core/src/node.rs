//! A single narrative unit.

use crate::StoryTag;
use serde::{Deserialize, Serialize};

/// One node of the story tree: a passage of text plus, for non-endings, the
/// two options offered to readers.
///
/// Invariant: a node is an ending iff both option labels are absent; branch
/// nodes always carry exactly two labels. The [`StoryTree`](crate::StoryTree)
/// enforces this at construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Position of this node in the tree
    pub tag: StoryTag,
    /// Display body of the passage
    pub text: String,
    /// Label of the first option, absent on endings
    pub option_1: Option<String>,
    /// Label of the second option, absent on endings
    pub option_2: Option<String>,
    /// Whether this node concludes the story
    #[serde(default)]
    pub end: bool,
}

impl StoryNode {
    /// Create a branch node offering two options.
    pub fn branch(
        tag: StoryTag,
        text: impl Into<String>,
        option_1: impl Into<String>,
        option_2: impl Into<String>,
    ) -> Self {
        Self {
            tag,
            text: text.into(),
            option_1: Some(option_1.into()),
            option_2: Some(option_2.into()),
            end: false,
        }
    }

    /// Create an ending node with no options.
    pub fn ending(tag: StoryTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            option_1: None,
            option_2: None,
            end: true,
        }
    }

    /// Whether the option labels are consistent with the `end` flag.
    pub(crate) fn options_consistent(&self) -> bool {
        if self.end {
            self.option_1.is_none() && self.option_2.is_none()
        } else {
            self.option_1.is_some() && self.option_2.is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_uphold_the_option_invariant() {
        let branch = StoryNode::branch(StoryTag::Begin, "text", "left", "right");
        assert!(!branch.end);
        assert!(branch.options_consistent());

        let ending = StoryNode::ending(StoryTag::Ending11, "text");
        assert!(ending.end);
        assert!(ending.options_consistent());
    }

    #[test]
    fn endings_serialize_with_null_options() {
        let ending = StoryNode::ending(StoryTag::Ending22, "done");
        let json = serde_json::to_value(&ending).unwrap();
        assert_eq!(json["tag"], "story-2-2");
        assert!(json["option_1"].is_null());
        assert!(json["option_2"].is_null());
        assert_eq!(json["end"], true);
    }
}
