//! Checkpointed story traversal worker.
//!
//! The worker runs one invocation at a time: with no checkpoint it generates
//! and publishes a fresh story tree; with a checkpoint it reads the poll on
//! the last published post, advances to the voted branch, and publishes the
//! next node. The checkpoint is deleted once an ending is published, so its
//! absence means "no story in progress" and the next tick starts over.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod worker;

pub use config::WorkerConfig;
pub use worker::{MAX_POST_LEN, Worker};
