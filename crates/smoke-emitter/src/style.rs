//! Mapping from sprite state to display properties.

use smoke_core::{Palette, Rgba};

use crate::SpriteState;

/// Visual properties of one display primitive.
///
/// Offsets and sizes are in surface units relative to the container's
/// top-left corner. The fill is a closest-side radial gradient through the
/// three stops, center first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i64,
    pub gradient: [Rgba; 3],
}

impl ElementStyle {
    /// Style of a primitive that has not been drawn yet.
    pub const fn hidden() -> Self {
        let clear = Rgba::new(0, 0, 0, 0.0);
        Self {
            visible: false,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            z_index: 0,
            gradient: [clear; 3],
        }
    }

    /// Style of a sprite: a `2 * radius` square whose top-left corner sits
    /// half a radius up and left of the sprite, filled with the palette
    /// faded by the sprite's opacity.
    pub fn for_sprite(sprite: &SpriteState, z_index: i64, palette: &Palette) -> Self {
        let radius = non_negative(sprite.radius);
        let opacity = non_negative(sprite.opacity);
        Self {
            visible: true,
            left: sprite.x - radius / 2.0,
            top: sprite.y - radius / 2.0,
            width: 2.0 * radius,
            height: 2.0 * radius,
            z_index,
            gradient: palette.faded(opacity),
        }
    }

    /// Center point of the box, where the gradient starts.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_offset_by_half_radius() {
        let sprite = SpriteState {
            x: 100.0,
            y: 60.0,
            radius: 20.0,
            opacity: 1.0,
        };
        let style = ElementStyle::for_sprite(&sprite, 12, &Palette::default());
        assert!(style.visible);
        assert_eq!((style.left, style.top), (90.0, 50.0));
        assert_eq!(style.width, 40.0);
        assert_eq!(style.height, 40.0);
        assert_eq!(style.center(), (110.0, 70.0));
        assert_eq!(style.z_index, 12);
    }

    #[test]
    fn test_gradient_follows_opacity() {
        let sprite = SpriteState {
            opacity: 0.5,
            radius: 1.0,
            ..Default::default()
        };
        let style = ElementStyle::for_sprite(&sprite, 0, &Palette::default());
        assert_eq!(style.gradient[0].a, 0.5);
        assert!((style.gradient[1].a - 0.3).abs() < 1e-9);
        assert_eq!(style.gradient[2].a, 0.0);
    }

    #[test]
    fn test_negative_and_non_finite_values_clamp() {
        let sprite = SpriteState {
            x: 10.0,
            y: 10.0,
            radius: -3.0,
            opacity: f64::NAN,
        };
        let style = ElementStyle::for_sprite(&sprite, 0, &Palette::default());
        assert_eq!(style.width, 0.0);
        assert_eq!(style.left, 10.0);
        assert!(style.gradient.iter().all(|stop| stop.a == 0.0));
    }
}
