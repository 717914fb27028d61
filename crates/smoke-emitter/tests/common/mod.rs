use std::collections::BTreeMap;

use smoke_emitter::{ElementStyle, Surface};

/// Identifier of a recorded element.
#[derive(Debug, PartialEq, Eq)]
pub struct ElementId(pub usize);

/// Surface that remembers the latest style of every element.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub created: usize,
    pub removed: Vec<usize>,
    pub styles: BTreeMap<usize, ElementStyle>,
    pub applied: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Surface for RecordingSurface {
    type Handle = ElementId;

    fn content_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn create_element(&mut self) -> ElementId {
        let id = self.created;
        self.created += 1;
        self.styles.insert(id, ElementStyle::hidden());
        ElementId(id)
    }

    fn apply(&mut self, element: &ElementId, style: &ElementStyle) {
        self.styles.insert(element.0, *style);
        self.applied += 1;
    }

    fn remove_element(&mut self, element: ElementId) {
        self.styles.remove(&element.0);
        self.removed.push(element.0);
    }
}
