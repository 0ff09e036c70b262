use crate::WorkerConfig;
use fabula_core::{Checkpoint, Choice, PostId, StoryNode};
use fabula_error::{FabulaResult, TreeError, TreeErrorKind};
use fabula_interface::{PollSpec, Publisher, TextDriver};
use fabula_narrative::StoryGenerator;
use fabula_storage::{BlobStore, CheckpointStore};
use tracing::{debug, info, instrument};

/// Maximum length of a published post body, in characters.
pub const MAX_POST_LEN: usize = 279;

const ENDING_MARKER: &str = "\nFinal";
const OPTIONS_MARKER: &str = "\noptions in the comments";

/// Drives one story invocation end to end.
///
/// Whether a checkpoint exists is the only persisted state: absent means
/// start a new story, present means advance the existing one by the votes on
/// its last post. All four external exchanges (generate, publish, fetch,
/// checkpoint I/O) happen sequentially; any failure aborts the run without
/// touching the checkpoint, so the next scheduled tick retries the same
/// transition.
pub struct Worker<D, P, S> {
    generator: StoryGenerator<D>,
    publisher: P,
    checkpoints: CheckpointStore<S>,
    config: WorkerConfig,
}

impl<D: TextDriver, P: Publisher, S: BlobStore> Worker<D, P, S> {
    /// Creates a new worker.
    pub fn new(
        generator: StoryGenerator<D>,
        publisher: P,
        checkpoints: CheckpointStore<S>,
        config: WorkerConfig,
    ) -> Self {
        Self {
            generator,
            publisher,
            checkpoints,
            config,
        }
    }

    /// Runs one invocation: start a new story or advance the current one.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> FabulaResult<()> {
        info!("Loading checkpoint");
        match self.checkpoints.load().await? {
            Some(checkpoint) => {
                debug!(
                    post_id = %checkpoint.post_id(),
                    active = %checkpoint.story_manager().active_tag(),
                    "Checkpoint present"
                );
                self.continue_story(checkpoint).await
            }
            None => self.start_new_story().await,
        }
    }

    #[instrument(skip(self))]
    async fn start_new_story(&self) -> FabulaResult<()> {
        info!("Starting new story");
        let tree = self.generator.generate_tree(None).await?;

        let post_id = self.publish_node(tree.active(), None).await?;

        let checkpoint = Checkpoint::new(post_id, tree);
        self.checkpoints.save(&checkpoint).await
    }

    #[instrument(skip(self, checkpoint))]
    async fn continue_story(&self, mut checkpoint: Checkpoint) -> FabulaResult<()> {
        info!("Continuing story");
        let post = self.publisher.fetch_post(checkpoint.post_id()).await?;

        let choice = Choice::from_votes(post.option_1_votes, post.option_2_votes);
        let active = checkpoint.story_manager().active_tag();
        let next_tag = active
            .child(choice)
            .ok_or_else(|| TreeError::new(TreeErrorKind::NoChild(active.to_string())))?;
        let next = checkpoint
            .story_manager()
            .get(next_tag)
            .ok_or_else(|| TreeError::new(TreeErrorKind::MissingNode(next_tag.to_string())))?
            .clone();

        debug!(
            option_1 = post.option_1_votes,
            option_2 = post.option_2_votes,
            choice = %choice,
            next = %next_tag,
            "Advancing to the voted branch"
        );

        let post_id = self.publish_node(&next, Some(checkpoint.post_id())).await?;
        checkpoint.advance(next_tag, post_id)?;

        if next.end {
            info!("Story complete, removing checkpoint");
            self.checkpoints.remove().await
        } else {
            self.checkpoints.save(&checkpoint).await
        }
    }

    /// Publish one node, with its options follow-up when it branches.
    async fn publish_node(&self, node: &StoryNode, reply_to: Option<PostId>) -> FabulaResult<PostId> {
        info!(tag = %node.tag, end = node.end, "Publishing story node");

        let body = self.compose_body(node);
        let poll = (!node.end).then(|| PollSpec::numbered(self.config.poll_duration_minutes));
        let post_id = self
            .publisher
            .create_post(&body, reply_to, poll.as_ref())
            .await?;

        if let (Some(option_1), Some(option_2)) = (&node.option_1, &node.option_2) {
            let options = truncate(&format!("Option 1 {}\nOption 2 {}", option_1, option_2));
            // The follow-up id is not tracked; the poll post anchors the
            // thread.
            self.publisher
                .create_post(&options, Some(post_id), None)
                .await?;
        }

        Ok(post_id)
    }

    fn compose_body(&self, node: &StoryNode) -> String {
        let marker = if node.end { ENDING_MARKER } else { OPTIONS_MARKER };
        truncate(&format!("{}\n{}{}", self.config.title, node.text, marker))
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_POST_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_POST_LEN + 40);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_POST_LEN);
    }
}
