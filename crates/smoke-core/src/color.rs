//! Colours and the foreground/midground/background defaulting rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SmokeError;

/// Neutral gray used when no foreground is configured.
pub const DEFAULT_FOREGROUND: [u8; 3] = [144, 144, 144];
/// Alpha given to a foreground that omits one.
pub const FOREGROUND_ALPHA: f64 = 1.0;
/// Alpha given to a midground that omits one.
pub const MIDGROUND_ALPHA: f64 = 0.6;
/// Alpha given to a background that omits one.
pub const BACKGROUND_ALPHA: f64 = 0.0;

/// A resolved colour: three 0-255 channels plus an alpha in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Scale the alpha channel by `opacity`.
    pub fn faded(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity,
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// A colour as written in configuration, `[r, g, b]` or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ColorSpec {
    pub rgb: [u8; 3],
    pub alpha: Option<f64>,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: Some(a),
        }
    }

    /// Resolve against the alpha used when none was given.
    pub fn or_alpha(self, alpha: f64) -> Rgba {
        Rgba::from_rgb(self.rgb, self.alpha.unwrap_or(alpha))
    }
}

impl TryFrom<Vec<f64>> for ColorSpec {
    type Error = SmokeError;

    fn try_from(channels: Vec<f64>) -> Result<Self, Self::Error> {
        let channel = |v: f64| v.clamp(0.0, 255.0).round() as u8;
        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(*r), channel(*g), channel(*b))),
            [r, g, b, a] => Ok(Self::rgba(channel(*r), channel(*g), channel(*b), *a)),
            other => Err(SmokeError::InvalidColor(other.len())),
        }
    }
}

impl From<ColorSpec> for Vec<f64> {
    fn from(spec: ColorSpec) -> Self {
        let mut channels: Vec<f64> = spec.rgb.iter().map(|&c| f64::from(c)).collect();
        if let Some(a) = spec.alpha {
            channels.push(a);
        }
        channels
    }
}

/// The three gradient stops of every sprite: center, middle and edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub foreground: Rgba,
    pub midground: Rgba,
    pub background: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl Palette {
    /// Fill in unset colours.
    ///
    /// Midground and background inherit the foreground's RGB only when they
    /// are entirely unset. A colour given without alpha gets its own slot's
    /// default alpha, never the foreground's.
    pub fn resolve(
        foreground: Option<ColorSpec>,
        midground: Option<ColorSpec>,
        background: Option<ColorSpec>,
    ) -> Self {
        let foreground = foreground
            .unwrap_or(ColorSpec {
                rgb: DEFAULT_FOREGROUND,
                alpha: Some(FOREGROUND_ALPHA),
            })
            .or_alpha(FOREGROUND_ALPHA);
        let inherit = ColorSpec::rgb(foreground.r, foreground.g, foreground.b);

        Self {
            foreground,
            midground: midground.unwrap_or(inherit).or_alpha(MIDGROUND_ALPHA),
            background: background.unwrap_or(inherit).or_alpha(BACKGROUND_ALPHA),
        }
    }

    /// Gradient stops with every alpha scaled by `opacity`.
    pub fn faded(&self, opacity: f64) -> [Rgba; 3] {
        [
            self.foreground.faded(opacity),
            self.midground.faded(opacity),
            self.background.faded(opacity),
        ]
    }
}
