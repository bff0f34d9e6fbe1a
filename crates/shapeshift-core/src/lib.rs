//! Core types for the shapeshift particle text effect.
//!
//! Everything shared between the rasterizer, the flock and the terminal
//! host lives here: geometry, colors, waypoints, point clouds and the
//! [`Surface`] drawing contract.

mod color;
mod geometry;
mod surface;
mod waypoint;

pub use color::{Rgba, Theme};
pub use geometry::{Area, PointCloud, Position};
pub use surface::Surface;
pub use waypoint::{SNAP, Waypoint};

/// Delay between two sequencer fires, in milliseconds.
pub const CADENCE_MS: u64 = 5000;

/// Viewports narrower than this collapse the effect.
pub const NARROW_VIEWPORT_WIDTH: f32 = 768.0;

/// Labels cycled by the effect when the host does not supply its own.
pub const DEFAULT_LABELS: &str = "WEB DEVELOPER|SINGAPOREAN|VIDEO GAMER|BOOKWORM|TECH ENTHUSIAST";
