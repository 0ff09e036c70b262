//! Durable traversal state.

use crate::{PostId, StoryTag, StoryTree};
use derive_new::new;
use fabula_error::TreeError;
use serde::{Deserialize, Serialize};

/// Persisted record of a story in progress: the full tree plus the id of the
/// post representing the active node.
///
/// The worker owns the checkpoint lifecycle exclusively: created when a new
/// tree is first published, overwritten after each branch advance, deleted
/// when the active node becomes an ending. Absence of a checkpoint is itself
/// meaningful state ("no story in progress").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct Checkpoint {
    post_id: PostId,
    story_manager: StoryTree,
}

impl Checkpoint {
    /// Id of the most recently published node's post.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// The story tree, including which node is active.
    pub fn story_manager(&self) -> &StoryTree {
        &self.story_manager
    }

    /// Record a branch advance: the node with `tag` becomes active and
    /// `post_id` becomes the post representing it.
    pub fn advance(&mut self, tag: StoryTag, post_id: PostId) -> Result<(), TreeError> {
        self.story_manager.set_active(tag)?;
        self.post_id = post_id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoryNode;

    fn sample_tree() -> StoryTree {
        StoryTree::new(vec![
            StoryNode::branch(StoryTag::Begin, "begin", "a", "b"),
            StoryNode::branch(StoryTag::Branch1, "one", "c", "d"),
            StoryNode::branch(StoryTag::Branch2, "two", "e", "f"),
            StoryNode::ending(StoryTag::Ending11, "end 1-1"),
            StoryNode::ending(StoryTag::Ending12, "end 1-2"),
            StoryNode::ending(StoryTag::Ending21, "end 2-1"),
            StoryNode::ending(StoryTag::Ending22, "end 2-2"),
        ])
        .unwrap()
    }

    #[test]
    fn json_round_trip_preserves_the_checkpoint() {
        let mut checkpoint = Checkpoint::new(PostId::new(17), sample_tree());
        checkpoint
            .advance(StoryTag::Branch2, PostId::new(18))
            .unwrap();

        let json = serde_json::to_string(&checkpoint).unwrap();
        let restored: Checkpoint = serde_json::from_str(&json).unwrap();

        assert_eq!(checkpoint, restored);
        assert_eq!(restored.post_id(), PostId::new(18));
        assert_eq!(restored.story_manager().active_tag(), StoryTag::Branch2);
    }

    #[test]
    fn wire_shape_matches_the_documented_layout() {
        let checkpoint = Checkpoint::new(PostId::new(42), sample_tree());
        let json = serde_json::to_value(&checkpoint).unwrap();

        assert_eq!(json["post_id"], 42);
        assert_eq!(json["story_manager"]["stories"].as_array().unwrap().len(), 7);
        assert_eq!(json["story_manager"]["active_story"]["tag"], "story");
        assert_eq!(json["story_manager"]["stories"][0]["option_1"], "a");
    }

    #[test]
    fn advance_updates_active_node_and_post_id() {
        let mut checkpoint = Checkpoint::new(PostId::new(1), sample_tree());
        checkpoint
            .advance(StoryTag::Branch1, PostId::new(2))
            .unwrap();
        assert_eq!(checkpoint.story_manager().active().text, "one");
        assert_eq!(checkpoint.post_id(), PostId::new(2));
    }
}
