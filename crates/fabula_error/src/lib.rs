//! Error types for the fabula story bot.
//!
//! This crate provides the foundation error types used throughout the fabula
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, HttpError};
//!
//! fn fetch_data() -> FabulaResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod http;
mod json;
mod narrative;
mod social;
mod storage;
mod tree;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use http::HttpError;
pub use json::JsonError;
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use social::{SocialError, SocialErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use tree::{TreeError, TreeErrorKind};
