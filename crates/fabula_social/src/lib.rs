//! Social publishing backends for the fabula story bot.
//!
//! One platform is supported: X (Twitter), via its v2 API. The client
//! implements the [`Publisher`](fabula_interface::Publisher) contract —
//! create a post (optionally as a reply and/or with a poll) and fetch an
//! existing post's vote tallies — and owns the platform's bounded publish
//! retry policy.

#![warn(missing_docs)]

mod x;

pub use x::XClient;
