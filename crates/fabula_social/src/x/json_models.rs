//! Wire types for the X v2 API.

use fabula_core::PostId;
use fabula_interface::PollSpec;
use serde::{Deserialize, Serialize};

/// Body of `POST /2/tweets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTweetRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<TweetPoll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<TweetReply>,
}

impl CreateTweetRequest {
    pub fn new(body: &str, reply_to: Option<PostId>, poll: Option<&PollSpec>) -> Self {
        Self {
            text: body.to_string(),
            poll: poll.map(|p| TweetPoll {
                options: p.options.to_vec(),
                duration_minutes: p.duration_minutes,
            }),
            reply: reply_to.map(|id| TweetReply {
                in_reply_to_tweet_id: id.value().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TweetPoll {
    pub options: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TweetReply {
    pub in_reply_to_tweet_id: String,
}

/// Response of `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTweetResponse {
    pub data: CreatedTweet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweet {
    pub id: String,
}

/// Response of `GET /2/tweets/:id` with poll expansions.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetLookupResponse {
    pub data: Option<TweetData>,
    pub includes: Option<TweetIncludes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetData {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetIncludes {
    #[serde(default)]
    pub polls: Vec<PollData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollData {
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollOption {
    pub position: u32,
    pub label: String,
    pub votes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_posts_omit_poll_and_reply() {
        let request = CreateTweetRequest::new("closing post", None, None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "closing post");
        assert!(json.get("poll").is_none());
        assert!(json.get("reply").is_none());
    }

    #[test]
    fn poll_replies_carry_both_sub_objects() {
        let poll = PollSpec::numbered(60);
        let request = CreateTweetRequest::new("next chapter", Some(PostId::new(99)), Some(&poll));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["poll"]["options"][0], "1");
        assert_eq!(json["poll"]["options"][1], "2");
        assert_eq!(json["poll"]["duration_minutes"], 60);
        assert_eq!(json["reply"]["in_reply_to_tweet_id"], "99");
    }

    #[test]
    fn lookups_parse_poll_tallies() {
        let body = r#"{
            "data": {
                "id": "20",
                "text": "chapter text",
                "attachments": {"poll_ids": ["1199786642468413448"]}
            },
            "includes": {
                "polls": [{
                    "id": "1199786642468413448",
                    "options": [
                        {"position": 1, "label": "1", "votes": 4},
                        {"position": 2, "label": "2", "votes": 6}
                    ]
                }]
            }
        }"#;

        let parsed: TweetLookupResponse = serde_json::from_str(body).unwrap();
        let poll = &parsed.includes.unwrap().polls[0];
        assert_eq!(poll.options[1].votes, 6);
        assert_eq!(parsed.data.unwrap().text, "chapter text");
    }
}
