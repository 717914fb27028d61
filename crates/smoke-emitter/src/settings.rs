//! Resolved emitter settings.

use std::time::Duration;

use smoke_core::{Palette, Result, SmokeConfig, SmokeError};

/// Sprites in the ring when none is configured.
pub const DEFAULT_SPRITE_COUNT: usize = 16;
/// Radius a sprite is reset to when none is configured.
pub const DEFAULT_SPRITE_RADIUS: f64 = 50.0;
/// Opacity a sprite is reset to when none is configured.
pub const DEFAULT_OPACITY: f64 = 1.0;
/// Tick interval when none is configured.
pub const DEFAULT_ANIMATION_MS: u64 = 200;
/// Lowest stacking order handed out to a sprite.
pub const Z_BASE: i64 = 10;

/// Configuration with every default filled in. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Ring capacity, always at least one.
    pub sprite_count: usize,
    pub palette: Palette,
    pub sprite_radius: f64,
    /// Emission origin.
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub interval: Duration,
}

impl Settings {
    /// Fill unset fields of `config`, centering the origin in a content box
    /// of `content_size`.
    pub fn resolve(config: &SmokeConfig, content_size: (f64, f64)) -> Result<Self> {
        let sprite_count = config.sprite_count.unwrap_or(DEFAULT_SPRITE_COUNT);
        if sprite_count == 0 {
            return Err(SmokeError::InvalidSpriteCount(sprite_count));
        }

        let (width, height) = content_size;
        Ok(Self {
            sprite_count,
            palette: Palette::resolve(config.foreground, config.midground, config.background),
            sprite_radius: config.sprite_radius.unwrap_or(DEFAULT_SPRITE_RADIUS),
            x: config.x.unwrap_or(width / 2.0),
            y: config.y.unwrap_or(height / 2.0),
            opacity: config.opacity.unwrap_or(DEFAULT_OPACITY),
            interval: Duration::from_millis(config.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS)),
        })
    }
}
