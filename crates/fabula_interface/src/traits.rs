//! Trait definitions for the generation and publishing backends.

use crate::PollSpec;
use async_trait::async_trait;
use fabula_core::{PostId, PublishedPost};
use fabula_error::FabulaResult;

/// Core trait for text-generation backends.
///
/// A single free-form request/response exchange, no streaming. The parser in
/// `fabula_narrative` drives this with the story prompt and owns everything
/// downstream of the raw text.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn complete(&self, prompt: &str) -> FabulaResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

/// Core trait for social-publishing backends.
///
/// Implementations own transport, authentication, and their bounded retry
/// policy; callers see one post per call and a fetched tally per lookup.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a post and return its id.
    ///
    /// `reply_to` threads the post under an existing one; `poll` attaches a
    /// two-option poll. Both are optional and independent.
    async fn create_post(
        &self,
        body: &str,
        reply_to: Option<PostId>,
        poll: Option<&PollSpec>,
    ) -> FabulaResult<PostId>;

    /// Fetch an existing poll post with its current vote tallies.
    async fn fetch_post(&self, post_id: PostId) -> FabulaResult<PublishedPost>;
}
