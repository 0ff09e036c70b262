//! X API client and publish retry policy.

use super::json_models::{CreateTweetRequest, CreateTweetResponse, TweetLookupResponse};
use async_trait::async_trait;
use fabula_core::{PostId, PublishedPost};
use fabula_error::{FabulaError, FabulaResult, HttpError, JsonError, SocialError, SocialErrorKind};
use fabula_interface::{PollSpec, Publisher};
use reqwest::Client;
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::{debug, error, instrument, warn};

const X_API_URL: &str = "https://api.twitter.com/2";

/// Additional attempts after a failed publish.
const PUBLISH_RETRIES: usize = 3;
/// Fixed pause between publish attempts.
const RETRY_INTERVAL_MS: u64 = 1000;

/// X (Twitter) v2 API client.
///
/// Authenticates with an OAuth 2.0 user-context bearer token. Post creation
/// retries non-success responses on a fixed interval before surfacing a
/// publishing error; lookups are single-shot.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    bearer_token: String,
    base_url: String,
}

impl XClient {
    /// Creates a new X client.
    ///
    /// # Arguments
    ///
    /// * `bearer_token` - OAuth 2.0 user-context token authorized for
    ///   `tweet.write`
    pub fn new(bearer_token: impl Into<String>) -> Self {
        debug!("Creating new X client");
        Self {
            client: Client::new(),
            bearer_token: bearer_token.into(),
            base_url: X_API_URL.to_string(),
        }
    }

    /// Creates a client from `X_BEARER_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the token is not set.
    pub fn from_env() -> FabulaResult<Self> {
        let token = std::env::var("X_BEARER_TOKEN")
            .map_err(|_| fabula_error::ConfigError::new("X_BEARER_TOKEN is not set"))?;
        Ok(Self::new(token))
    }

    /// Points the client at a different API root. Intended for local stubs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn post_tweet(
        &self,
        url: &str,
        request: &CreateTweetRequest,
    ) -> Result<CreateTweetResponse, RetryError<FabulaError>> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.bearer_token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to X API");
                RetryError::permanent(HttpError::new(format!("Request failed: {}", e)).into())
            })?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| {
                error!(error = ?e, "Failed to parse X create response");
                RetryError::permanent(JsonError::new(format!("Failed to parse response: {}", e)).into())
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, "Create post failed");
            Err(RetryError::transient(
                SocialError::new(SocialErrorKind::Api {
                    status: status.as_u16(),
                    message,
                })
                .into(),
            ))
        }
    }
}

#[async_trait]
impl Publisher for XClient {
    #[instrument(skip(self, body), fields(reply = ?reply_to, poll = poll.is_some()))]
    async fn create_post(
        &self,
        body: &str,
        reply_to: Option<PostId>,
        poll: Option<&PollSpec>,
    ) -> FabulaResult<PostId> {
        let request = CreateTweetRequest::new(body, reply_to, poll);
        let url = format!("{}/tweets", self.base_url);

        let strategy = FixedInterval::from_millis(RETRY_INTERVAL_MS).take(PUBLISH_RETRIES);
        let created = Retry::spawn(strategy, || self.post_tweet(&url, &request)).await?;

        let id = created.data.id.parse::<u64>().map_err(|_| {
            SocialError::new(SocialErrorKind::InvalidId(created.data.id.clone()))
        })?;

        debug!(post_id = id, "Published post");
        Ok(PostId::new(id))
    }

    #[instrument(skip(self))]
    async fn fetch_post(&self, post_id: PostId) -> FabulaResult<PublishedPost> {
        let url = format!("{}/tweets/{}", self.base_url, post_id);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("expansions", "attachments.poll_ids"),
                ("poll.fields", "options"),
                ("tweet.fields", "text"),
            ])
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to X API");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Post lookup failed");
            return Err(SocialError::new(SocialErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let lookup: TweetLookupResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse X lookup response");
            JsonError::new(format!("Failed to parse response: {}", e))
        })?;

        let data = lookup
            .data
            .ok_or_else(|| SocialError::new(SocialErrorKind::PostNotFound(post_id.value())))?;

        let mut options = lookup
            .includes
            .map(|i| i.polls)
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| SocialError::new(SocialErrorKind::MissingPoll(post_id.value())))?
            .options;
        options.sort_by_key(|o| o.position);

        let mut options = options.into_iter();
        let (first, second) = match (options.next(), options.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                return Err(SocialError::new(SocialErrorKind::MalformedResponse(
                    "expected 2 poll options".to_string(),
                ))
                .into());
            }
        };

        Ok(PublishedPost {
            post_id,
            text: data.text,
            option_1_label: first.label,
            option_1_votes: first.votes,
            option_2_label: second.label,
            option_2_votes: second.votes,
        })
    }
}
