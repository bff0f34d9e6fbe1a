use shapeshift_core::{Area, CADENCE_MS, NARROW_VIEWPORT_WIDTH, Position, Rgba, Surface};
use shapeshift_flock::{
    Effect, EffectError, EffectOptions, FLOCK_RESIZE_DEBOUNCE_MS, LabelSequence, Mode,
    SURFACE_RESIZE_DEBOUNCE_MS,
};

/// Surface that records what the effect does to it.
#[derive(Debug, Default)]
struct RecordingSurface {
    area: Area,
    draws: usize,
    clears: usize,
    adjusted: Vec<Area>,
}

impl RecordingSurface {
    fn new(width: f32, height: f32) -> Self {
        Self {
            area: Area::new(width, height),
            ..Self::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn area(&self) -> Area {
        self.area
    }

    fn draw_circle(&mut self, _center: Position, radius: f32, color: Rgba) {
        assert!(radius >= 1.0);
        assert!(color.a >= 0.1);
        self.draws += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.draws = 0;
    }

    fn adjust(&mut self, area: Area) {
        self.area = area;
        self.adjusted.push(area);
    }
}

fn effect(labels: &str, mode: Mode) -> Effect<RecordingSurface> {
    let options = EffectOptions {
        labels: LabelSequence::from(labels),
        mode,
        seed: Some(42),
        ..EffectOptions::default()
    };
    Effect::new(RecordingSurface::new(1000.0, 600.0), options)
}

#[test]
fn init_requires_a_surface() {
    let mut effect = Effect::new(RecordingSurface::new(0.0, 0.0), EffectOptions::default());
    assert_eq!(
        effect.init(0),
        Err(EffectError::SurfaceUnavailable {
            width: 0.0,
            height: 0.0
        })
    );
    assert!(!effect.has_initialized());
    assert!(!effect.is_animating());
}

#[test]
fn init_shows_first_label_and_starts_frames() {
    let mut effect = effect("A|B", Mode::Loop);
    assert!(!effect.has_initialized());
    effect.init(0).unwrap();

    assert!(effect.has_initialized());
    assert!(effect.is_animating());
    assert!(effect.sequencer().is_running());
    assert!(effect.active_count() > 0);
    assert!(effect.pool_len() >= effect.active_count() + 500);
}

#[test]
fn every_frame_draws_the_whole_pool() {
    let mut effect = effect("HELLO", Mode::Loop);
    effect.init(0).unwrap();

    assert!(effect.tick(0));
    assert_eq!(effect.surface().draws, effect.pool_len());
    assert!(!effect.tick(1));
    assert!(effect.tick(100));
    assert_eq!(effect.surface().draws, effect.pool_len());
}

#[test]
fn loop_mode_keeps_firing_on_cadence() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();
    for n in 1..=5 {
        effect.tick(n * CADENCE_MS);
    }
    assert_eq!(effect.sequencer().steps(), 6);
    assert!(effect.sequencer().is_running());
}

#[test]
fn once_mode_stops_after_last_label() {
    let mut effect = effect("A|B", Mode::Once);
    effect.init(0).unwrap();
    effect.tick(CADENCE_MS);
    assert_eq!(effect.sequencer().steps(), 2);
    assert!(!effect.sequencer().is_running());
    effect.tick(CADENCE_MS * 4);
    assert_eq!(effect.sequencer().steps(), 2);
}

#[test]
fn next_now_skips_the_wait() {
    let mut effect = effect("A|B|C", Mode::Loop);
    effect.init(0).unwrap();
    effect.next_now(10);
    assert_eq!(effect.sequencer().steps(), 2);
    effect.tick(CADENCE_MS);
    assert_eq!(effect.sequencer().steps(), 2);
    effect.tick(CADENCE_MS + 10);
    assert_eq!(effect.sequencer().steps(), 3);
}

#[test]
fn clearing_the_shape_retires_every_active_particle() {
    let mut effect = effect("SHAPE", Mode::Loop);
    effect.init(0).unwrap();
    let pool = effect.pool_len();
    assert!(effect.active_count() > 0);

    effect.reset_sequence(true);
    assert_eq!(effect.active_count(), 0);
    assert_eq!(effect.pool_len(), pool);
    assert!(!effect.sequencer().is_running());
    assert_eq!(effect.sequencer().pending().count(), 0);
}

#[test]
fn resize_is_debounced_before_the_surface_adjusts() {
    let mut effect = effect("A", Mode::Loop);
    effect.init(0).unwrap();

    effect.on_resize(Area::new(1100.0, 700.0), 100);
    effect.on_resize(Area::new(1200.0, 800.0), 200);
    effect.tick(200 + SURFACE_RESIZE_DEBOUNCE_MS - 1);
    assert!(effect.surface().adjusted.is_empty());

    effect.tick(200 + SURFACE_RESIZE_DEBOUNCE_MS);
    assert_eq!(effect.surface().adjusted, [Area::new(1200.0, 800.0)]);
}

#[test]
fn narrow_resize_collapses_the_effect() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();

    effect.on_resize(Area::new(600.0, 400.0), 100);
    effect.tick(100 + FLOCK_RESIZE_DEBOUNCE_MS - 1);
    assert!(effect.sequencer().is_running());
    assert!(effect.active_count() > 0);

    effect.tick(100 + FLOCK_RESIZE_DEBOUNCE_MS);
    assert!(!effect.sequencer().is_running());
    assert_eq!(effect.active_count(), 0);
}

#[test]
fn wide_resize_only_shuffles_idle_particles() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();
    effect.toggle_frames(0);
    assert!(!effect.is_animating());

    let before: Vec<(bool, usize)> = effect
        .flock()
        .particles()
        .iter()
        .map(|p| (p.is_active(), p.pending()))
        .collect();

    effect.on_resize(Area::new(1200.0, 800.0), 10);
    assert!(!effect.tick(10 + FLOCK_RESIZE_DEBOUNCE_MS));
    assert!(effect.sequencer().is_running());

    for (p, (active, pending)) in effect.flock().particles().iter().zip(before) {
        assert_eq!(p.is_active(), active);
        if active {
            assert_eq!(p.pending(), pending);
        } else {
            assert_eq!(p.pending(), pending + 1);
        }
    }
}

#[test]
fn resize_to_exactly_the_narrow_threshold_keeps_the_shape() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();
    effect.toggle_frames(0);

    let before: Vec<_> = effect
        .flock()
        .particles()
        .iter()
        .map(|p| (p.is_active(), p.target_position(), p.pending()))
        .collect();
    let active = effect.active_count();

    effect.on_resize(Area::new(NARROW_VIEWPORT_WIDTH, 600.0), 10);
    effect.tick(10 + FLOCK_RESIZE_DEBOUNCE_MS);

    assert!(effect.sequencer().is_running());
    assert_eq!(effect.active_count(), active);
    for (p, (was_active, target, pending)) in effect.flock().particles().iter().zip(before) {
        if was_active {
            assert!(p.is_active());
            assert_eq!(p.target_position(), target);
            assert_eq!(p.pending(), pending);
        }
    }
}

#[test]
fn reset_is_idempotent() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();
    effect.tick(0);

    effect.reset();
    effect.reset();
    assert!(!effect.is_animating());
    assert!(!effect.sequencer().is_running());
    assert_eq!(effect.surface().draws, 0);
    assert!(!effect.tick(CADENCE_MS));
    assert!(effect.has_initialized());
}

#[test]
fn reinit_after_reset_resumes() {
    let mut effect = effect("A|B", Mode::Loop);
    effect.init(0).unwrap();
    effect.reset();
    effect.init(1000).unwrap();
    assert!(effect.is_animating());
    assert!(effect.tick(1000));
}
