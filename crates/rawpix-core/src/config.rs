//! Viewer configuration.

use serde::{Deserialize, Serialize};

/// Width used before the user picks a resolution.
pub const DEFAULT_WIDTH: u32 = 1536;
/// Height used before the user picks a resolution.
pub const DEFAULT_HEIGHT: u32 = 2048;
/// Largest width or height a session accepts.
pub const DEFAULT_MAX_DIMENSION: u32 = 5000;

/// Settings for a [`ViewerSession`](crate::session::ViewerSession).
///
/// Missing fields fall back to their defaults when deserializing, so a caller
/// can pass a partial object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    /// Initial grid width in pixels
    pub default_width: u32,
    /// Initial grid height in pixels
    pub default_height: u32,
    /// Upper bound on width and height accepted by `set_resolution`
    pub max_dimension: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl ViewerConfig {
    /// Create a new ViewerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `width` x `height` is a resolution this config accepts.
    pub fn accepts(&self, width: u32, height: u32) -> bool {
        (1..=self.max_dimension).contains(&width) && (1..=self.max_dimension).contains(&height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new();
        assert_eq!(config.default_width, 1536);
        assert_eq!(config.default_height, 2048);
        assert_eq!(config.max_dimension, 5000);
    }

    #[test]
    fn test_accepts() {
        let config = ViewerConfig::default();
        assert!(config.accepts(1, 1));
        assert!(config.accepts(5000, 5000));
        assert!(!config.accepts(0, 10));
        assert!(!config.accepts(10, 0));
        assert!(!config.accepts(5001, 10));
        assert!(!config.accepts(10, 5001));
    }

    #[test]
    fn test_partial_deserialize() {
        let config: ViewerConfig = serde_json::from_str(r#"{"maxDimension":100}"#).unwrap();
        assert_eq!(config.max_dimension, 100);
        assert_eq!(config.default_width, DEFAULT_WIDTH);
        assert_eq!(config.default_height, DEFAULT_HEIGHT);
    }
}
