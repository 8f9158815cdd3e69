//! Configuration structures for the extraction engine.

use serde::{Deserialize, Serialize};

use super::entity::LanguageMode;

/// Configuration for the weak labeler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelerConfig {
    /// Language mode used when the caller passes no explicit hint.
    pub default_language: LanguageMode,

    /// Minimum surviving entity length, in characters.
    pub min_entity_chars: usize,

    /// Length ceiling for labels without a family-specific bound, in
    /// characters.
    pub max_entity_chars: usize,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageMode::Auto,
            min_entity_chars: 2,
            max_entity_chars: 100,
        }
    }
}

impl LabelerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
