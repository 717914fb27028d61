//! A ratatui-backed host surface.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use smoke_emitter::{ElementStyle, Surface};
use tracing::debug;

use crate::gradient::{element_sample, over, to_color};

/// Surface units covered by one terminal column.
pub const CELL_WIDTH: f64 = 8.0;
/// Surface units covered by one terminal row.
pub const CELL_HEIGHT: f64 = 16.0;
/// Glyph whose foreground paints the top half of a cell.
pub const HALF_BLOCK: char = '▀';

/// Handle to one element on a [`TerminalSurface`].
#[derive(Debug, PartialEq, Eq)]
pub struct ElementId(usize);

/// Terminal-sized container of absolutely positioned elements.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    columns: u16,
    rows: u16,
    /// Solid colour behind every element.
    backdrop: [u8; 3],
    elements: Vec<Option<ElementStyle>>,
    /// Released slots of `elements`.
    free: Vec<usize>,
}

impl TerminalSurface {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            backdrop: [0, 0, 0],
            elements: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_backdrop(mut self, backdrop: [u8; 3]) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Follow a terminal resize. Elements keep their positions.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        debug!(columns, rows, "resizing smoke surface");
        self.columns = columns;
        self.rows = rows;
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of elements currently attached.
    pub fn element_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    pub fn style(&self, element: &ElementId) -> Option<&ElementStyle> {
        self.elements.get(element.0).and_then(Option::as_ref)
    }

    /// Visible elements, lowest stacking order first.
    fn layers(&self) -> Vec<&ElementStyle> {
        let mut layers: Vec<&ElementStyle> = self
            .elements
            .iter()
            .flatten()
            .filter(|style| style.visible)
            .collect();
        layers.sort_by_key(|style| style.z_index);
        layers
    }

    /// Composite colour at surface point (`x`, `y`), channels in 0.0-1.0.
    pub fn sample(&self, x: f64, y: f64) -> [f64; 3] {
        composite(&self.layers(), self.backdrop, x, y)
    }
}

fn composite(layers: &[&ElementStyle], backdrop: [u8; 3], x: f64, y: f64) -> [f64; 3] {
    let base = backdrop.map(|c| f64::from(c) / 255.0);
    layers
        .iter()
        .filter_map(|style| element_sample(style, x, y))
        .fold(base, over)
}

impl Surface for TerminalSurface {
    type Handle = ElementId;

    fn content_size(&self) -> (f64, f64) {
        (
            f64::from(self.columns) * CELL_WIDTH,
            f64::from(self.rows) * CELL_HEIGHT,
        )
    }

    fn create_element(&mut self) -> ElementId {
        let hidden = Some(ElementStyle::hidden());
        match self.free.pop() {
            Some(slot) => {
                self.elements[slot] = hidden;
                ElementId(slot)
            }
            None => {
                self.elements.push(hidden);
                ElementId(self.elements.len() - 1)
            }
        }
    }

    fn apply(&mut self, element: &ElementId, style: &ElementStyle) {
        if let Some(slot) = self.elements.get_mut(element.0) {
            *slot = Some(*style);
        }
    }

    fn remove_element(&mut self, element: ElementId) {
        if let Some(slot) = self.elements.get_mut(element.0) {
            *slot = None;
            self.free.push(element.0);
        }
    }

    fn document_root() -> Option<Self> {
        crossterm::terminal::size()
            .ok()
            .map(|(columns, rows)| Self::new(columns, rows))
    }
}

impl Widget for &TerminalSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layers = self.layers();
        let width = area.width.min(self.columns);
        let height = area.height.min(self.rows);

        for row in 0..height {
            for col in 0..width {
                // Sample the middle of each half cell
                let x = (f64::from(col) + 0.5) * CELL_WIDTH;
                let top = (f64::from(row) + 0.25) * CELL_HEIGHT;
                let bottom = (f64::from(row) + 0.75) * CELL_HEIGHT;

                let upper = composite(&layers, self.backdrop, x, top);
                let lower = composite(&layers, self.backdrop, x, bottom);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK)
                        .set_fg(to_color(upper))
                        .set_bg(to_color(lower));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;
    use smoke_core::Rgba;

    use super::*;

    fn opaque_box(left: f64, top: f64, size: f64, z_index: i64, rgb: [u8; 3]) -> ElementStyle {
        ElementStyle {
            visible: true,
            left,
            top,
            width: size,
            height: size,
            z_index,
            gradient: [Rgba::from_rgb(rgb, 1.0); 3],
        }
    }

    #[test]
    fn test_content_size_in_surface_units() {
        let surface = TerminalSurface::new(80, 24);
        assert_eq!(surface.content_size(), (640.0, 384.0));
    }

    #[test]
    fn test_resize_changes_content_size() {
        let mut surface = TerminalSurface::new(80, 24);
        surface.resize(100, 30);
        assert_eq!((surface.columns(), surface.rows()), (100, 30));
        assert_eq!(surface.content_size(), (800.0, 480.0));
    }

    #[test]
    fn test_elements_start_hidden_and_slots_are_reused() {
        let mut surface = TerminalSurface::new(10, 10);
        let a = surface.create_element();
        let b = surface.create_element();
        assert_eq!(surface.element_count(), 2);
        assert!(!surface.style(&a).unwrap().visible);

        surface.remove_element(a);
        assert_eq!(surface.element_count(), 1);
        let c = surface.create_element();
        assert_eq!(c, ElementId(0));
        assert_ne!(c, b);
    }

    #[test]
    fn test_sample_respects_stacking_order() {
        let mut surface = TerminalSurface::new(10, 10);
        let low = surface.create_element();
        let high = surface.create_element();
        surface.apply(&high, &opaque_box(0.0, 0.0, 40.0, 20, [0, 0, 255]));
        surface.apply(&low, &opaque_box(0.0, 0.0, 40.0, 10, [255, 0, 0]));

        assert_eq!(surface.sample(20.0, 20.0), [0.0, 0.0, 1.0]);
        // Outside both boxes only the backdrop shows
        assert_eq!(surface.sample(70.0, 70.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_render_half_blocks() {
        let mut surface = TerminalSurface::new(2, 1).with_backdrop([0, 255, 0]);
        let element = surface.create_element();
        // Covers only the top half of the first cell
        surface.apply(&element, &opaque_box(0.0, 0.0, 8.0, 10, [255, 0, 0]));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        (&surface).render(area, &mut buf);

        let first = &buf[(0, 0)];
        assert_eq!(first.symbol(), "▀");
        assert_eq!(first.fg, Color::Rgb(255, 0, 0));
        assert_eq!(first.bg, Color::Rgb(0, 255, 0));

        let second = &buf[(1, 0)];
        assert_eq!(second.fg, Color::Rgb(0, 255, 0));
        assert_eq!(second.bg, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_render_clips_to_area() {
        let surface = TerminalSurface::new(10, 10);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        (&surface).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].bg, Color::Rgb(0, 0, 0));
    }
}
