//! Core types shared by the smoke emitter, its hosts and its configuration.

mod color;
mod config;
mod error;

pub use color::{
    BACKGROUND_ALPHA, ColorSpec, DEFAULT_FOREGROUND, FOREGROUND_ALPHA, MIDGROUND_ALPHA, Palette,
    Rgba,
};
pub use config::SmokeConfig;
pub use error::{Result, SmokeError};
