//! User-facing configuration for a smoke emitter.

use serde::{Deserialize, Serialize};

use crate::ColorSpec;

/// Emitter configuration as read from a config file.
///
/// Every field is optional; unset fields take the documented defaults when
/// the emitter is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Number of sprites in the ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_count: Option<usize>,
    /// Center colour of each sprite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorSpec>,
    /// Middle colour of each sprite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midground: Option<ColorSpec>,
    /// Edge colour of each sprite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,
    /// Radius a sprite is reset to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_radius: Option<f64>,
    /// Emission origin x, defaults to the horizontal center of the surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Emission origin y, defaults to the vertical center of the surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Opacity a sprite is reset to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Milliseconds between ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,
    /// Seed for the default drift; random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Solid colour behind the sprites on hosts that need one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<ColorSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: SmokeConfig = toml::from_str("").unwrap();
        assert_eq!(config, SmokeConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
sprite_count = 8
foreground = [10, 20, 30]
midground = [1, 2, 3, 0.5]
sprite_radius = 100.0
animation_ms = 120
"#;
        let config: SmokeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sprite_count, Some(8));
        assert_eq!(config.foreground, Some(ColorSpec::rgb(10, 20, 30)));
        assert_eq!(config.midground, Some(ColorSpec::rgba(1, 2, 3, 0.5)));
        assert_eq!(config.background, None);
        assert_eq!(config.sprite_radius, Some(100.0));
        assert_eq!(config.animation_ms, Some(120));
    }

    #[test]
    fn test_parse_rejects_short_color() {
        let result: Result<SmokeConfig, _> = toml::from_str("foreground = [1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let config = SmokeConfig {
            sprite_count: Some(4),
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(text.trim(), "sprite_count = 4");
    }
}
