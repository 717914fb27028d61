//! Smoke trail emitter.
//!
//! A fixed ring of sprites is recycled one slot per tick: the slot under the
//! cursor is reset to the emission origin while every other live sprite
//! drifts, shrinks and fades. Sprites are drawn onto any host implementing
//! [`Surface`], which keeps this crate free of a particular display backend.

mod drift;
mod emitter;
mod schedule;
mod settings;
mod sprite;
mod style;
mod surface;

pub use drift::{DefaultDrift, Drift};
pub use emitter::{Emitter, SmokeOptions, stacking_order};
pub use schedule::{Schedule, StopHandle};
pub use settings::{
    DEFAULT_ANIMATION_MS, DEFAULT_OPACITY, DEFAULT_SPRITE_COUNT, DEFAULT_SPRITE_RADIUS, Settings,
    Z_BASE,
};
pub use sprite::{Sprite, SpriteState};
pub use style::ElementStyle;
pub use surface::Surface;
