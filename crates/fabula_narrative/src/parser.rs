//! Structural extraction of a story tree from generated text.

use fabula_core::{StoryNode, StoryTag, StoryTree};
use fabula_error::TreeError;
use regex::Regex;
use std::sync::LazyLock;

/// Substitute body for endings the backend left empty.
pub const EMPTY_ENDING_TEXT: &str = "No possible options - end of story";

/// The thirteen labeled sections, in document order. Section labels repeat
/// (`{option 1}:` appears three times), so extraction leans on ordering, not
/// label uniqueness.
const SECTION_PATTERN: &str = concat!(
    r"\{story-begin\}:\s*(?P<begin>.+)",
    r"\s*\{option 1\}:\s*(?P<option1>.+)",
    r"\s*\{option 2\}:\s*(?P<option2>.+)",
    r"\s*\{story-option 1\}:\s*(?P<branch1>.+)",
    r"\s*\{option 1\}:\s*(?P<branch1option1>.+)",
    r"\s*\{option 2\}:\s*(?P<branch1option2>.+)",
    r"\s*\{end-option 1\}:\s*(?P<end11>.+)",
    r"\s*\{end-option 2\}:\s*(?P<end12>.+)",
    r"\s*\{story-option 2\}:\s*(?P<branch2>.+)",
    r"\s*\{option 1\}:\s*(?P<branch2option1>.+)",
    r"\s*\{option 2\}:\s*(?P<branch2option2>.+)",
    r"\s*\{end-option 1\}:\s*(?P<end21>.+)",
    r"\s*\{end-option 2\}:\s*(?P<end22>.+)",
);

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_PATTERN).expect("valid section pattern"));

/// The extracted sections of one generated story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StorySections {
    pub begin: String,
    pub option_1: String,
    pub option_2: String,
    pub branch_1: String,
    pub branch_1_option_1: String,
    pub branch_1_option_2: String,
    pub branch_1_end_1: String,
    pub branch_1_end_2: String,
    pub branch_2: String,
    pub branch_2_option_1: String,
    pub branch_2_option_2: String,
    pub branch_2_end_1: String,
    pub branch_2_end_2: String,
}

/// Collapse the blank-line artifacts the backend's formatting introduces.
pub(crate) fn normalize(raw: &str) -> String {
    raw.replace("\n ", "")
}

/// Match the normalized text against the structural pattern.
///
/// Returns `None` when the text does not carry all thirteen sections in
/// order; the caller decides whether to regenerate.
pub(crate) fn parse_sections(content: &str) -> Option<StorySections> {
    let caps = SECTION_RE.captures(content)?;
    let section = |name: &str| caps[name].trim().to_string();

    Some(StorySections {
        begin: section("begin"),
        option_1: section("option1"),
        option_2: section("option2"),
        branch_1: section("branch1"),
        branch_1_option_1: section("branch1option1"),
        branch_1_option_2: section("branch1option2"),
        branch_1_end_1: section("end11"),
        branch_1_end_2: section("end12"),
        branch_2: section("branch2"),
        branch_2_option_1: section("branch2option1"),
        branch_2_option_2: section("branch2option2"),
        branch_2_end_1: section("end21"),
        branch_2_end_2: section("end22"),
    })
}

/// Assemble the seven nodes per the tag grammar, root active.
pub(crate) fn build_tree(sections: &StorySections) -> Result<StoryTree, TreeError> {
    StoryTree::new(vec![
        StoryNode::branch(
            StoryTag::Begin,
            &sections.begin,
            &sections.option_1,
            &sections.option_2,
        ),
        StoryNode::branch(
            StoryTag::Branch1,
            &sections.branch_1,
            &sections.branch_1_option_1,
            &sections.branch_1_option_2,
        ),
        StoryNode::ending(StoryTag::Ending11, ending_text(&sections.branch_1_end_1)),
        StoryNode::ending(StoryTag::Ending12, ending_text(&sections.branch_1_end_2)),
        StoryNode::branch(
            StoryTag::Branch2,
            &sections.branch_2,
            &sections.branch_2_option_1,
            &sections.branch_2_option_2,
        ),
        StoryNode::ending(StoryTag::Ending21, ending_text(&sections.branch_2_end_1)),
        StoryNode::ending(StoryTag::Ending22, ending_text(&sections.branch_2_end_2)),
    ])
}

fn ending_text(text: &str) -> String {
    if text.trim().is_empty() {
        EMPTY_ENDING_TEXT.to_string()
    } else {
        text.to_string()
    }
}
