//! Trait definitions for the fabula story bot.
//!
//! This crate provides the seams between the traversal core and its external
//! collaborators: the text-generation backend and the social-publishing
//! backend. Both are narrow request/response contracts with no shared
//! implementation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Publisher, TextDriver};
pub use types::PollSpec;
