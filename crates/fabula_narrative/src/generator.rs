//! Tree generation with bounded regeneration.

use crate::parser::{build_tree, normalize, parse_sections};
use crate::prompt::DEFAULT_PROMPT;
use fabula_core::StoryTree;
use fabula_error::{FabulaResult, NarrativeError, NarrativeErrorKind};
use fabula_interface::TextDriver;
use tracing::{debug, error, instrument, warn};

/// Regenerations allowed after a failed parse.
pub const DEFAULT_RETRIES: u32 = 3;

/// Turns one generation exchange into a validated seven-node story tree.
///
/// The backend's natural-language output is unreliable in structure, so a
/// failed extraction re-invokes the backend with [`DEFAULT_PROMPT`] until the
/// retry budget runs out. The budget is a parameter of each call, never
/// struct state, so one run's failures cannot leak into the next.
pub struct StoryGenerator<D> {
    driver: D,
    retries: u32,
}

impl<D: TextDriver> StoryGenerator<D> {
    /// Create a generator with the default retry budget.
    pub fn new(driver: D) -> Self {
        Self::with_retries(driver, DEFAULT_RETRIES)
    }

    /// Create a generator with a custom retry budget.
    pub fn with_retries(driver: D, retries: u32) -> Self {
        Self { driver, retries }
    }

    /// The underlying text driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate and extract a complete story tree.
    ///
    /// The first attempt uses `prompt` when supplied; every retry falls back
    /// to the default prompt regardless.
    ///
    /// # Errors
    ///
    /// Fails with a parse error carrying the offending text once the retry
    /// budget is exhausted, or earlier on a backend failure.
    #[instrument(skip(self, prompt), fields(provider = self.driver.provider_name()))]
    pub async fn generate_tree(&self, prompt: Option<&str>) -> FabulaResult<StoryTree> {
        let mut content = self.fetch(prompt.unwrap_or(DEFAULT_PROMPT)).await?;
        let mut budget = self.retries;

        loop {
            match parse_sections(&content) {
                Some(sections) => {
                    debug!("Extracted all story sections");
                    return Ok(build_tree(&sections)?);
                }
                None if budget > 0 => {
                    warn!(
                        remaining = budget,
                        "Failed to parse response, regenerating with the default prompt"
                    );
                    budget -= 1;
                    content = self.fetch(DEFAULT_PROMPT).await?;
                }
                None => {
                    error!(
                        attempts = self.retries + 1,
                        "Generation never produced parseable output"
                    );
                    return Err(NarrativeError::new(NarrativeErrorKind::Parse(content)).into());
                }
            }
        }
    }

    async fn fetch(&self, prompt: &str) -> FabulaResult<String> {
        let raw = self.driver.complete(prompt).await?;
        Ok(normalize(&raw))
    }
}
