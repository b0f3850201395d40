//! Chrome settings loaded from TOML.
//!
//! ```toml
//! border_trigger_width = 6
//! drag_borders = 255
//! min_size = { width = 320, height = 240 }
//! max_size = { width = 16777215, height = 16777215 }
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChromeError, ChromeResult};
use crate::geometry::Size;
use crate::window::{DEFAULT_BORDER_TRIGGER_WIDTH, DragBorders};

/// Persistable chrome settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Resize border thickness in pixels.
    pub border_trigger_width: u32,
    /// Enabled border zones as a raw bit mask.
    pub drag_borders: DragBorders,
    /// Smallest size the user may resize to.
    pub min_size: Size,
    /// Largest size the user may resize to.
    pub max_size: Size,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            border_trigger_width: DEFAULT_BORDER_TRIGGER_WIDTH,
            drag_borders: DragBorders::ALL,
            min_size: Size::ZERO,
            max_size: Size::MAX,
        }
    }
}

impl ChromeConfig {
    /// Parse settings from a TOML string.
    ///
    /// Sizes must be non-negative and `min_size` may not exceed `max_size`
    /// in either dimension.
    pub fn from_toml_str(source: &str) -> ChromeResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ChromeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ChromeResult<()> {
        for (key, size) in [("min_size", self.min_size), ("max_size", self.max_size)] {
            if size.width < 0 || size.height < 0 {
                return Err(ChromeError::Config(format!(
                    "{key} must not be negative, got {}x{}",
                    size.width, size.height
                )));
            }
        }
        if self.min_size.width > self.max_size.width || self.min_size.height > self.max_size.height
        {
            return Err(ChromeError::Config(format!(
                "min_size {}x{} exceeds max_size {}x{}",
                self.min_size.width, self.min_size.height, self.max_size.width, self.max_size.height
            )));
        }
        Ok(())
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ChromeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ChromeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Serialize settings to a TOML string.
    pub fn to_toml_string(&self) -> ChromeResult<String> {
        toml::to_string(self).map_err(|e| ChromeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = ChromeConfig::from_toml_str(
            r#"
            border_trigger_width = 8
            drag_borders = 15
            min_size = { width = 320, height = 240 }
            max_size = { width = 1920, height = 1080 }
            "#,
        )
        .unwrap();

        assert_eq!(config.border_trigger_width, 8);
        assert_eq!(config.drag_borders, DragBorders::EDGES);
        assert_eq!(config.min_size, Size::new(320, 240));
        assert_eq!(config.max_size, Size::new(1920, 1080));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ChromeConfig::from_toml_str("border_trigger_width = 4").unwrap();
        assert_eq!(config.border_trigger_width, 4);
        assert_eq!(config.drag_borders, DragBorders::ALL);
        assert_eq!(config.max_size, Size::MAX);

        assert_eq!(ChromeConfig::from_toml_str("").unwrap(), ChromeConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        // Mask does not fit in eight bits.
        let err = ChromeConfig::from_toml_str("drag_borders = 300").unwrap_err();
        assert!(matches!(err, ChromeError::Config(_)));

        let err = ChromeConfig::from_toml_str("border_trigger_width = -1").unwrap_err();
        assert!(matches!(err, ChromeError::Config(_)));
    }

    #[test]
    fn test_negative_sizes_rejected() {
        let err = ChromeConfig::from_toml_str("min_size = { width = -50, height = -1 }").unwrap_err();
        assert!(err.to_string().contains("min_size must not be negative"));

        let err = ChromeConfig::from_toml_str("max_size = { width = 800, height = -600 }").unwrap_err();
        assert!(err.to_string().contains("max_size must not be negative"));
    }

    #[test]
    fn test_min_larger_than_max_rejected() {
        let err = ChromeConfig::from_toml_str(
            r#"
            min_size = { width = 320, height = 240 }
            max_size = { width = 10, height = 10 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ChromeError::Config(ref msg) if msg.contains("exceeds max_size")));

        // Equal limits pin the size and are fine.
        let pinned = ChromeConfig::from_toml_str(
            r#"
            min_size = { width = 640, height = 480 }
            max_size = { width = 640, height = 480 }
            "#,
        )
        .unwrap();
        assert_eq!(pinned.min_size, pinned.max_size);
    }

    #[test]
    fn test_to_toml_and_back() {
        let config = ChromeConfig {
            border_trigger_width: 3,
            ..ChromeConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ChromeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChromeConfig::load("/nonexistent/horizon-chrome.toml").unwrap_err();
        assert!(err.to_string().contains("horizon-chrome.toml"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chrome.toml");
        std::fs::write(&path, "border_trigger_width = 9\n").unwrap();

        let config = ChromeConfig::load(&path).unwrap();
        assert_eq!(config.border_trigger_width, 9);
    }
}
