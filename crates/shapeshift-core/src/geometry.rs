//! Plain geometry values.

/// A point in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Dimensions of a drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// An area with no drawable pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Grid-sampled silhouette of a label.
///
/// `points` are relative to the rasterizer's offscreen grid. `width` and
/// `height` are the combined extents (`max + min` on each axis) that the
/// flock uses to center the cloud; they are not a bounding box size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Position>,
    pub width: f32,
    pub height: f32,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
