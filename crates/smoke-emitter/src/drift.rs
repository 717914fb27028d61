//! Per-tick increments applied to aging sprites.

use rand::{Rng, RngCore};

use crate::{Settings, SpriteState};

/// Rule deciding how much each attribute of an aging sprite changes per tick.
///
/// Every method has the stock behaviour as its default body, so an
/// implementation only overrides the attributes it wants to change.
pub trait Drift {
    /// Radius increment. Shrinks a sprite to zero over one full ring cycle.
    fn radius(&self, settings: &Settings, _sprite: &SpriteState, _rng: &mut dyn RngCore) -> f64 {
        -settings.sprite_radius / settings.sprite_count as f64
    }

    /// Horizontal increment, uniform in `[-20, 15)`.
    fn x(&self, _settings: &Settings, _sprite: &SpriteState, rng: &mut dyn RngCore) -> f64 {
        rng.random_range(-20.0..15.0)
    }

    /// Vertical increment. Pulls a sprite back by 10 once it sits more than 5
    /// units past the origin, otherwise uniform in `[-25, 10)`.
    fn y(&self, settings: &Settings, sprite: &SpriteState, rng: &mut dyn RngCore) -> f64 {
        if sprite.y - settings.y > 5.0 {
            -10.0
        } else {
            rng.random_range(-25.0..10.0)
        }
    }

    /// Opacity increment. Fades a sprite to zero over one full ring cycle.
    fn opacity(&self, settings: &Settings, _sprite: &SpriteState, _rng: &mut dyn RngCore) -> f64 {
        -1.0 / settings.sprite_count as f64
    }

    /// All four increments for one tick.
    fn step(&self, settings: &Settings, sprite: &SpriteState, rng: &mut dyn RngCore) -> SpriteState {
        SpriteState {
            x: self.x(settings, sprite, rng),
            y: self.y(settings, sprite, rng),
            radius: self.radius(settings, sprite, rng),
            opacity: self.opacity(settings, sprite, rng),
        }
    }
}

/// The stock drift: rising, wobbling, shrinking and fading.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDrift;

impl Drift for DefaultDrift {}
