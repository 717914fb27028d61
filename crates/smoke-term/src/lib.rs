//! Terminal rendering for the smoke trail effect.
//!
//! [`TerminalSurface`] implements the emitter's host surface on top of a
//! ratatui buffer. Every terminal cell covers a fixed block of surface units
//! and is drawn as an upper half block, giving two colour samples per cell.

mod gradient;
mod surface;

pub use gradient::{Premultiplied, element_sample, over, radial_sample, to_color};
pub use surface::{CELL_HEIGHT, CELL_WIDTH, ElementId, HALF_BLOCK, TerminalSurface};
