//! The fixed-shape story tree.

use crate::{StoryNode, StoryTag};
use fabula_error::{TreeError, TreeErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of nodes in a complete story tree.
const NODE_COUNT: usize = 7;

/// A complete binary story tree of depth 2: one beginning, two branches, four
/// endings, plus the currently active node.
///
/// The shape is validated at construction and again when deserializing a
/// checkpoint, so a `StoryTree` in hand always satisfies the tag-set
/// invariant: every [`StoryTag`] appears exactly once, branch positions carry
/// two option labels, and ending positions carry none.
///
/// # Examples
///
/// ```
/// use fabula_core::{StoryNode, StoryTag, StoryTree};
///
/// let tree = StoryTree::new(vec![
///     StoryNode::branch(StoryTag::Begin, "A fork in the road.", "Go left", "Go right"),
///     StoryNode::branch(StoryTag::Branch1, "The left path narrows.", "Press on", "Turn back"),
///     StoryNode::branch(StoryTag::Branch2, "The right path climbs.", "Climb", "Rest"),
///     StoryNode::ending(StoryTag::Ending11, "You reach the valley."),
///     StoryNode::ending(StoryTag::Ending12, "You return home."),
///     StoryNode::ending(StoryTag::Ending21, "You summit at dawn."),
///     StoryNode::ending(StoryTag::Ending22, "You sleep through it."),
/// ])
/// .unwrap();
///
/// assert_eq!(tree.active_tag(), StoryTag::Begin);
/// assert!(tree.get(StoryTag::Ending21).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TreeData", into = "TreeData")]
pub struct StoryTree {
    nodes: Vec<StoryNode>,
    active: usize,
}

impl StoryTree {
    /// Build a tree from its seven nodes, with the beginning active.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the nodes do not form a complete tree.
    pub fn new(nodes: Vec<StoryNode>) -> Result<Self, TreeError> {
        Self::from_parts(nodes, StoryTag::Begin)
    }

    fn from_parts(nodes: Vec<StoryNode>, active: StoryTag) -> Result<Self, TreeError> {
        Self::validate(&nodes)?;
        let active = nodes
            .iter()
            .position(|n| n.tag == active)
            .ok_or_else(|| TreeError::new(TreeErrorKind::ActiveMismatch(active.to_string())))?;
        Ok(Self { nodes, active })
    }

    fn validate(nodes: &[StoryNode]) -> Result<(), TreeError> {
        if nodes.len() != NODE_COUNT {
            return Err(TreeError::new(TreeErrorKind::WrongNodeCount(nodes.len())));
        }

        let mut seen = HashSet::new();
        for node in nodes {
            if !seen.insert(node.tag) {
                return Err(TreeError::new(TreeErrorKind::DuplicateTag(
                    node.tag.to_string(),
                )));
            }
            // Seven unique tags of a seven-value set is full coverage, so
            // only shape violations remain.
            if node.end != node.tag.is_ending() || !node.options_consistent() {
                return Err(TreeError::new(TreeErrorKind::OptionShape(
                    node.tag.to_string(),
                )));
            }
        }

        Ok(())
    }

    /// Look up a node by tag.
    pub fn get(&self, tag: StoryTag) -> Option<&StoryNode> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// The currently active node.
    pub fn active(&self) -> &StoryNode {
        &self.nodes[self.active]
    }

    /// Tag of the currently active node.
    pub fn active_tag(&self) -> StoryTag {
        self.nodes[self.active].tag
    }

    /// Move the active marker to the node with the given tag.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if no node carries the tag. A validated tree
    /// contains every tag, so a miss means a logic error upstream.
    pub fn set_active(&mut self, tag: StoryTag) -> Result<(), TreeError> {
        self.active = self
            .nodes
            .iter()
            .position(|n| n.tag == tag)
            .ok_or_else(|| TreeError::new(TreeErrorKind::MissingNode(tag.to_string())))?;
        Ok(())
    }

    /// All seven nodes in stored order.
    pub fn nodes(&self) -> &[StoryNode] {
        &self.nodes
    }
}

/// Wire shape of a tree inside a checkpoint: the node list plus a full copy
/// of the active node.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TreeData {
    stories: Vec<StoryNode>,
    active_story: StoryNode,
}

impl TryFrom<TreeData> for StoryTree {
    type Error = TreeError;

    fn try_from(data: TreeData) -> Result<Self, Self::Error> {
        StoryTree::from_parts(data.stories, data.active_story.tag)
    }
}

impl From<StoryTree> for TreeData {
    fn from(tree: StoryTree) -> Self {
        Self {
            active_story: tree.nodes[tree.active].clone(),
            stories: tree.nodes,
        }
    }
}
