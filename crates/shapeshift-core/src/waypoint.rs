//! Waypoints queued on particles.

use crate::Position;

/// Hold value that makes a particle jump straight to its target.
pub const SNAP: i32 = -1;

/// A state a particle eases toward.
///
/// Every field is optional; `None` keeps the particle's value at the time
/// the waypoint is dequeued. `Some(0.0)` is a real target, not "unset".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Waypoint {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub size: Option<f32>,
    pub alpha: Option<f32>,
    /// Frames to wait once arrived. `-1` snaps instead of easing.
    pub hold: Option<i32>,
}

impl Waypoint {
    /// A waypoint at the given position.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn hold(mut self, hold: i32) -> Self {
        self.hold = Some(hold);
        self
    }

    /// Target position, falling back to `current` for missing coordinates.
    pub fn position_or(&self, current: Position) -> Position {
        Position::new(self.x.unwrap_or(current.x), self.y.unwrap_or(current.y))
    }
}
