//! The drawing surface contract.

use crate::{Area, Position, Rgba};

/// Anything the flock can paint onto.
///
/// Frame scheduling is not part of the surface; the host drives frames and
/// hands the surface to the flock once per frame.
pub trait Surface {
    /// Current drawing area.
    fn area(&self) -> Area;

    /// Draw a filled circle.
    fn draw_circle(&mut self, center: Position, radius: f32, color: Rgba);

    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Resize the backing store to a new viewport.
    fn adjust(&mut self, area: Area);
}
