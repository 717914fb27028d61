//! A single smoke puff and the display primitive it owns.

use crate::Settings;

/// Numeric state of a sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl SpriteState {
    /// State of a freshly reset sprite: at the origin, full size and opacity.
    pub fn spawn(settings: &Settings) -> Self {
        Self {
            x: settings.x,
            y: settings.y,
            radius: settings.sprite_radius,
            opacity: settings.opacity,
        }
    }

    /// Add per-attribute increments.
    pub fn apply(&mut self, delta: &SpriteState) {
        self.x += delta.x;
        self.y += delta.y;
        self.radius += delta.radius;
        self.opacity += delta.opacity;
    }
}

/// One slot of the ring.
///
/// Created the first time its slot comes under the cursor and reset, never
/// recreated, on every later pass.
#[derive(Debug)]
pub struct Sprite<H> {
    state: SpriteState,
    z_index: i64,
    element: H,
    resets: u64,
    age: u64,
}

impl<H> Sprite<H> {
    pub(crate) fn new(element: H) -> Self {
        Self {
            state: SpriteState::default(),
            z_index: 0,
            element,
            resets: 0,
            age: 0,
        }
    }

    pub(crate) fn reset(&mut self, settings: &Settings) {
        self.state = SpriteState::spawn(settings);
        self.resets += 1;
        self.age = 0;
    }

    pub(crate) fn advance(&mut self, delta: &SpriteState) {
        self.state.apply(delta);
        self.age += 1;
    }

    pub(crate) fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    pub(crate) fn into_element(self) -> H {
        self.element
    }

    pub fn state(&self) -> &SpriteState {
        &self.state
    }

    /// Stacking order assigned on the latest tick.
    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    /// Display primitive owned by this sprite.
    pub fn element(&self) -> &H {
        &self.element
    }

    /// How many times this sprite has been reset.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Ticks since the last reset.
    pub fn age(&self) -> u64 {
        self.age
    }
}
