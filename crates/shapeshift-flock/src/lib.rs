//! Particle flock for shapeshift.
//!
//! Particles ease through waypoint queues; the flock morphs them onto the
//! point clouds produced by the glyph rasterizer; the sequencer decides
//! which label comes next and when. [`Effect`] wires all of it to a
//! [`Surface`](shapeshift_core::Surface) and the host's clock.

mod effect;
mod flock;
mod particle;
mod sequencer;
mod timer;

pub use effect::{
    DEFAULT_FRAME_INTERVAL_MS, Effect, EffectError, EffectOptions, FLOCK_RESIZE_DEBOUNCE_MS,
    SURFACE_RESIZE_DEBOUNCE_MS,
};
pub use flock::{BACKGROUND_BATCH, Flock};
pub use particle::{DEFAULT_EASING, IDLE_EASING, MIN_ALPHA, MIN_SIZE, Particle};
pub use sequencer::{COMMAND_PREFIX, Command, ERROR_LABEL, LabelSequence, Mode, Sequencer};
pub use timer::{Debouncer, FrameDriver, Interval};
