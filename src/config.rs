//! Explorer configuration.
//!
//! Defaults match the interactive explorer: closure depth 1, no stroke
//! bounds, radical variants on. A TOML file may override any field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::resolver::MAX_DEPTH;
use crate::types::{ConfigError, StrokeRange};

/// Settings for an [`Explorer`](crate::explorer::Explorer) session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Dataset file to load.
    pub dataset: Option<PathBuf>,
    /// Closure depth for containment queries (clamped to `0..=5`).
    pub max_depth: usize,
    pub min_strokes: u32,
    /// `None` leaves the range open, which also admits unknown stroke counts.
    pub max_strokes: Option<u32>,
    /// Use the built-in radical variant table.
    pub use_variants: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            max_depth: 1,
            min_strokes: 0,
            max_strokes: None,
            use_variants: true,
        }
    }
}

impl ExplorerConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Depth clamped to the supported range.
    pub fn depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH)
    }

    pub fn stroke_range(&self) -> StrokeRange {
        match self.max_strokes {
            Some(max) => StrokeRange::new(self.min_strokes, max),
            None => StrokeRange::at_least(self.min_strokes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.depth(), 1);
        assert_eq!(config.stroke_range(), StrokeRange::any());
        assert!(config.use_variants);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ExplorerConfig::from_toml("max_depth = 3\nmax_strokes = 10\n").unwrap();
        assert_eq!(config.depth(), 3);
        assert_eq!(config.stroke_range(), StrokeRange::new(0, 10));
        assert!(config.use_variants);
    }

    #[test]
    fn depth_clamped() {
        let config = ExplorerConfig {
            max_depth: 42,
            ..Default::default()
        };
        assert_eq!(config.depth(), MAX_DEPTH);
    }

    #[test]
    fn inverted_strokes_normalized() {
        let config = ExplorerConfig::from_toml("min_strokes = 12\nmax_strokes = 4\n").unwrap();
        assert_eq!(config.stroke_range(), StrokeRange::new(4, 12));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "dataset = \"strokes.txt\"\nuse_variants = false\n").unwrap();

        let config = ExplorerConfig::load(&path).unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("strokes.txt")));
        assert!(!config.use_variants);
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "max_depth = \"deep\"").unwrap();

        assert!(matches!(
            ExplorerConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
