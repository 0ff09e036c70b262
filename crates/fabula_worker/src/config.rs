use fabula_error::{ConfigError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the story worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Title line prefixed to every published post
    #[serde(default = "default_title")]
    pub title: String,
    /// How long each poll stays open (minutes)
    #[serde(default = "default_poll_duration")]
    pub poll_duration_minutes: u32,
    /// Blob key the checkpoint is stored under
    #[serde(default = "default_checkpoint_key")]
    pub checkpoint_key: String,
}

fn default_title() -> String {
    "#ai #generated #story #CHOICEISYOURS".to_string()
}

fn default_poll_duration() -> u32 {
    1440
}

fn default_checkpoint_key() -> String {
    "checkpoint.json".to_string()
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            poll_duration_minutes: default_poll_duration(),
            checkpoint_key: default_checkpoint_key(),
        }
    }
}

impl WorkerConfig {
    /// Load worker configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FabulaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: WorkerConfig = toml::from_str("poll_duration_minutes = 60").unwrap();
        assert_eq!(config.poll_duration_minutes, 60);
        assert_eq!(config.checkpoint_key, "checkpoint.json");
        assert!(config.title.starts_with("#ai"));
    }
}
