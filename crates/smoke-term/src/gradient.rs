//! Radial gradient sampling and alpha compositing.

use ratatui::style::Color;
use smoke_core::Rgba;
use smoke_emitter::ElementStyle;

/// A colour with its channels multiplied by alpha, channels in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Premultiplied {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Premultiplied {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl From<Rgba> for Premultiplied {
    fn from(color: Rgba) -> Self {
        let a = if color.a.is_finite() {
            color.a.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            r: f64::from(color.r) / 255.0 * a,
            g: f64::from(color.g) / 255.0 * a,
            b: f64::from(color.b) / 255.0 * a,
            a,
        }
    }
}

/// Colour of a three-stop gradient at `t`, stops evenly spaced over 0.0-1.0.
/// Past the last stop the edge colour continues.
pub fn radial_sample(stops: &[Rgba; 3], t: f64) -> Premultiplied {
    let t = t.clamp(0.0, 1.0);
    let [center, middle, edge] = (*stops).map(Premultiplied::from);
    if t <= 0.5 {
        center.lerp(middle, t * 2.0)
    } else {
        middle.lerp(edge, (t - 0.5) * 2.0)
    }
}

/// Sample an element's fill at surface point (`x`, `y`).
///
/// `None` outside the element's box or when it is hidden or empty.
pub fn element_sample(style: &ElementStyle, x: f64, y: f64) -> Option<Premultiplied> {
    if !style.visible {
        return None;
    }
    let inside = x >= style.left
        && x < style.left + style.width
        && y >= style.top
        && y < style.top + style.height;
    if !inside {
        return None;
    }

    // closest-side: the gradient ends at the nearer edge of the box
    let reach = style.width.min(style.height) / 2.0;
    if reach <= 0.0 {
        return None;
    }
    let (cx, cy) = style.center();
    let distance = (x - cx).hypot(y - cy);
    Some(radial_sample(&style.gradient, distance / reach))
}

/// Composite `src` over an opaque `dst`.
pub fn over(dst: [f64; 3], src: Premultiplied) -> [f64; 3] {
    let keep = 1.0 - src.a;
    [
        src.r + dst[0] * keep,
        src.g + dst[1] * keep,
        src.b + dst[2] * keep,
    ]
}

/// Convert an opaque 0.0-1.0 colour to a terminal colour.
pub fn to_color(rgb: [f64; 3]) -> Color {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

#[cfg(test)]
mod tests {
    use smoke_core::Palette;
    use smoke_emitter::SpriteState;

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_radial_sample_stops() {
        let stops = [
            Rgba::new(255, 0, 0, 1.0),
            Rgba::new(0, 255, 0, 0.5),
            Rgba::new(0, 0, 255, 0.0),
        ];
        let center = radial_sample(&stops, 0.0);
        assert!(approx(center.r, 1.0) && approx(center.a, 1.0));

        let middle = radial_sample(&stops, 0.5);
        assert!(approx(middle.g, 0.5) && approx(middle.a, 0.5));

        let edge = radial_sample(&stops, 1.0);
        assert_eq!(edge, Premultiplied::TRANSPARENT);
        assert_eq!(radial_sample(&stops, 3.0), edge);
    }

    #[test]
    fn test_element_sample_bounds() {
        let sprite = SpriteState {
            x: 50.0,
            y: 50.0,
            radius: 10.0,
            opacity: 1.0,
        };
        let style = ElementStyle::for_sprite(&sprite, 0, &Palette::default());

        // Box spans 45..65 on both axes, gradient starts at its middle
        let center = element_sample(&style, 55.0, 55.0).unwrap();
        assert!(approx(center.a, 1.0));
        assert!(approx(center.r, 144.0 / 255.0));

        let corner = element_sample(&style, 50.0, 50.0).unwrap();
        assert!(corner.a < 1.0);

        assert!(element_sample(&style, 44.0, 55.0).is_none());
        assert!(element_sample(&style, 55.0, 65.0).is_none());
        assert!(element_sample(&ElementStyle::hidden(), 0.0, 0.0).is_none());
    }

    #[test]
    fn test_over_compositing() {
        let black = [0.0, 0.0, 0.0];
        let white = Premultiplied::from(Rgba::new(255, 255, 255, 1.0));
        assert_eq!(over(black, white), [1.0, 1.0, 1.0]);

        let half = Premultiplied::from(Rgba::new(255, 255, 255, 0.5));
        assert_eq!(over(black, half), [0.5, 0.5, 0.5]);
        assert_eq!(over([1.0, 0.0, 0.0], Premultiplied::TRANSPARENT), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color([1.0, 0.5, 0.0]), Color::Rgb(255, 128, 0));
        assert_eq!(to_color([2.0, -1.0, 0.0]), Color::Rgb(255, 0, 0));
    }
}
