//! The effect as a whole: surface, rasterizer, flock and sequencer wired
//! together and driven by the host's clock.

use shapeshift_core::{Area, DEFAULT_LABELS, NARROW_VIEWPORT_WIDTH, Surface};
use shapeshift_glyphs::GlyphRasterizer;
use thiserror::Error;
use tracing::{debug, info};

use crate::flock::Flock;
use crate::sequencer::{Command, LabelSequence, Mode, Sequencer};
use crate::timer::{Debouncer, FrameDriver};

/// Quiet period before the surface and rasterizer follow a resize.
pub const SURFACE_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Quiet period before the flock reacts to a resize.
pub const FLOCK_RESIZE_DEBOUNCE_MS: u64 = 500;

/// Default frame interval (about 30 frames per second).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

/// Errors raised while starting the effect.
#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    #[error("no drawing surface available (area is {width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },
}

/// Options fixed at construction.
#[derive(Debug, Clone)]
pub struct EffectOptions {
    pub labels: LabelSequence,
    pub mode: Mode,
    pub seed: Option<u64>,
    pub frame_interval_ms: u64,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            labels: LabelSequence::from(DEFAULT_LABELS),
            mode: Mode::Loop,
            seed: None,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// One running instance of the particle text effect.
#[derive(Debug)]
pub struct Effect<S> {
    surface: S,
    rasterizer: GlyphRasterizer,
    flock: Flock,
    sequencer: Sequencer,
    frames: FrameDriver,
    surface_resize: Debouncer,
    flock_resize: Debouncer,
    viewport: Area,
    options: EffectOptions,
    initialized: bool,
}

impl<S: Surface> Effect<S> {
    pub fn new(surface: S, options: EffectOptions) -> Self {
        let area = surface.area();
        let flock = match options.seed {
            Some(seed) => Flock::with_seed(seed),
            None => Flock::new(),
        };
        Self {
            surface,
            rasterizer: GlyphRasterizer::new(area),
            flock,
            sequencer: Sequencer::new(),
            frames: FrameDriver::new(options.frame_interval_ms),
            surface_resize: Debouncer::new(SURFACE_RESIZE_DEBOUNCE_MS),
            flock_resize: Debouncer::new(FLOCK_RESIZE_DEBOUNCE_MS),
            viewport: area,
            options,
            initialized: false,
        }
    }

    /// Fit the rasterizer, start the label sequence and the frame driver.
    pub fn init(&mut self, now_ms: u64) -> Result<(), EffectError> {
        let area = self.surface.area();
        if area.is_empty() {
            return Err(EffectError::SurfaceUnavailable {
                width: area.width,
                height: area.height,
            });
        }

        self.viewport = area;
        self.rasterizer.fit(area);

        let labels = self.options.labels.clone();
        let first = match self.options.mode {
            Mode::Loop => self.sequencer.loop_action(labels, now_ms),
            Mode::Once => self.sequencer.perform_action(labels, now_ms),
        };
        if let Some(command) = first {
            self.apply(&command);
        }

        self.initialized = true;
        self.frames.start(now_ms);
        info!(
            width = area.width,
            height = area.height,
            mode = ?self.options.mode,
            "effect initialized"
        );
        Ok(())
    }

    /// Stop the sequencer and the frame driver and clear the surface.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.frames.stop();
        self.surface_resize.cancel();
        self.flock_resize.cancel();
        self.surface.clear();
        info!("effect reset");
    }

    /// Whether [`Effect::init`] has completed at least once.
    pub fn has_initialized(&self) -> bool {
        self.initialized
    }

    /// Run `tokens` once, the first immediately.
    pub fn perform_action(&mut self, tokens: impl Into<LabelSequence>, now_ms: u64) {
        if let Some(command) = self.sequencer.perform_action(tokens, now_ms) {
            self.apply(&command);
        }
    }

    /// Cycle through `tokens` until reset.
    pub fn loop_action(&mut self, tokens: impl Into<LabelSequence>, now_ms: u64) {
        if let Some(command) = self.sequencer.loop_action(tokens, now_ms) {
            self.apply(&command);
        }
    }

    /// Stop the sequencer, optionally dissolving the current shape.
    pub fn reset_sequence(&mut self, clear_shape: bool) {
        self.sequencer.reset();
        if clear_shape {
            let cloud = self.rasterizer.render("");
            self.flock.transition(cloud, false, self.surface.area());
        }
    }

    /// Skip the wait and show the next label now.
    pub fn next_now(&mut self, now_ms: u64) {
        if let Some(command) = self.sequencer.fire_now(now_ms) {
            self.apply(&command);
        }
    }

    /// Report a viewport change. The reaction is debounced.
    pub fn on_resize(&mut self, viewport: Area, now_ms: u64) {
        self.viewport = viewport;
        self.surface_resize.trigger(now_ms);
        self.flock_resize.trigger(now_ms);
    }

    /// Advance timers and render a frame if one is due.
    ///
    /// Returns true when a frame was drawn.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.surface_resize.poll(now_ms) {
            self.surface.adjust(self.viewport);
            self.rasterizer.fit(self.viewport);
        }

        if self.flock_resize.poll(now_ms) {
            debug!(width = self.viewport.width, height = self.viewport.height, "viewport settled");
            self.flock.shuffle_idle(self.surface.area());
            if self.viewport.width < NARROW_VIEWPORT_WIDTH {
                self.reset_sequence(true);
            }
        }

        for command in self.sequencer.poll(now_ms) {
            self.apply(&command);
        }

        if !self.frames.frame_due(now_ms) {
            return false;
        }
        self.surface.clear();
        self.flock.render(&mut self.surface);
        true
    }

    /// Pause or resume the frame driver.
    pub fn toggle_frames(&mut self, now_ms: u64) {
        if self.frames.is_running() {
            self.frames.stop();
        } else {
            self.frames.start(now_ms);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.frames.is_running()
    }

    /// Milliseconds the host may sleep before the next frame.
    pub fn until_next_frame(&self, now_ms: u64) -> Option<u64> {
        self.frames.until_next_frame(now_ms)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn pool_len(&self) -> usize {
        self.flock.len()
    }

    pub fn active_count(&self) -> usize {
        self.flock.active_count()
    }

    fn apply(&mut self, command: &Command) {
        let cloud = self.rasterizer.render(command.label());
        self.flock.transition(cloud, false, self.surface.area());
    }
}
