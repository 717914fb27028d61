//! The host a smoke emitter draws onto.

use crate::ElementStyle;

/// A container that can hold absolutely positioned display primitives.
///
/// `Handle` identifies one primitive. It is deliberately not required to be
/// `Clone`: the sprite that created it owns it until the emitter is disposed.
pub trait Surface {
    /// Handle to one display primitive on this surface.
    type Handle;

    /// Width and height of the content box, in surface units.
    fn content_size(&self) -> (f64, f64);

    /// Create a hidden, absolutely positioned primitive appended to this
    /// container.
    fn create_element(&mut self) -> Self::Handle;

    /// Update the visual properties of a primitive.
    fn apply(&mut self, element: &Self::Handle, style: &ElementStyle);

    /// Detach and release a primitive.
    fn remove_element(&mut self, element: Self::Handle);

    /// The surface used when no parent is configured.
    fn document_root() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}
