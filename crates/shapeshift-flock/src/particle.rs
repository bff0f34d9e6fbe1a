//! A single dot and its waypoint queue.

use std::collections::VecDeque;
use std::f32::consts::PI;

use rand::Rng;
use shapeshift_core::{Position, Rgba, SNAP, Surface, Waypoint};

/// Alpha never eases below this.
pub const MIN_ALPHA: f32 = 0.1;

/// Size never eases below this.
pub const MIN_SIZE: f32 = 1.0;

/// Share of the remaining alpha and size gap closed each frame.
const FADE_RATE: f32 = 0.05;

/// Easing rate of freshly spawned shape particles.
pub const DEFAULT_EASING: f32 = 0.07;

/// Easing rate of idle and background particles.
pub const IDLE_EASING: f32 = 0.04;

/// Size of a freshly spawned shape particle.
const SPAWN_SIZE: f32 = 5.0;

/// Half the side of the square an idle particle wanders within.
const WANDER_RANGE: f32 = 25.0;

/// What a particle is currently heading for.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Target {
    position: Position,
    size: f32,
    alpha: f32,
}

/// A dot that eases through a queue of waypoints.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Position,
    size: f32,
    alpha: f32,
    /// Frames left to wait at the target, or [`SNAP`].
    hold: i32,
    /// Fraction of the remaining distance closed per frame.
    easing: f32,
    target: Target,
    queue: VecDeque<Waypoint>,
    /// Part of the visible shape; idle particles wander instead of jitter.
    active: bool,
    /// Decorative particle added alongside pool growth.
    background: bool,
    color: Rgba,
}

impl Particle {
    /// Spawn a shape particle at `position`.
    pub fn new(position: Position, rng: &mut impl Rng) -> Self {
        Self::spawn(position, SPAWN_SIZE, MIN_ALPHA, DEFAULT_EASING, rng)
    }

    /// Spawn a decorative background particle at `position`.
    pub fn background(position: Position, rng: &mut impl Rng) -> Self {
        let size = rng.random::<f32>() * 4.0;
        let mut particle = Self::spawn(position, size, 0.2, IDLE_EASING, rng);
        particle.background = true;
        particle
    }

    fn spawn(position: Position, size: f32, alpha: f32, easing: f32, rng: &mut impl Rng) -> Self {
        let size = size.max(MIN_SIZE);
        let alpha = alpha.max(MIN_ALPHA);
        let grey = rng.random_range(0..100u8);
        Self {
            position,
            size,
            alpha,
            hold: 0,
            easing,
            target: Target {
                position,
                size,
                alpha,
            },
            queue: VecDeque::new(),
            active: true,
            background: false,
            color: Rgba::grey(grey, alpha),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn hold(&self) -> i32 {
        self.hold
    }

    pub fn easing(&self) -> f32 {
        self.easing
    }

    pub fn set_easing(&mut self, easing: f32) {
        self.easing = easing;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_background(&self) -> bool {
        self.background
    }

    /// Position the particle is currently easing toward.
    pub fn target_position(&self) -> Position {
        self.target.position
    }

    /// Waypoints not yet started.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Waypoints not yet started, in order.
    #[cfg(test)]
    pub(crate) fn queued(&self) -> &VecDeque<Waypoint> {
        &self.queue
    }

    /// Color with the current alpha applied.
    pub fn color(&self) -> Rgba {
        self.color.with_alpha(self.alpha)
    }

    /// Queue a waypoint.
    pub fn move_to(&mut self, waypoint: Waypoint) {
        self.queue.push_back(waypoint);
    }

    /// Queue a waypoint unless the particle already sits on it.
    pub fn move_unless_static(&mut self, waypoint: Waypoint) {
        let destination = waypoint.position_or(self.position);
        if self.position.distance_to(destination) > 1.0 {
            self.queue.push_back(waypoint);
        }
    }

    /// Advance one animation frame.
    pub fn step(&mut self, rng: &mut impl Rng) {
        if self.advance() {
            self.next_waypoint(rng);
        }

        self.alpha = (self.alpha - (self.alpha - self.target.alpha) * FADE_RATE).max(MIN_ALPHA);
        self.size = (self.size - (self.size - self.target.size) * FADE_RATE).max(MIN_SIZE);
    }

    /// Draw at the current position.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_circle(self.position, self.size, self.color());
    }

    /// Step then draw.
    pub fn render(&mut self, surface: &mut dyn Surface, rng: &mut impl Rng) {
        self.step(rng);
        self.draw(surface);
    }

    /// Move toward the target. Returns true once arrived and done holding.
    fn advance(&mut self) -> bool {
        if self.hold == SNAP {
            self.position = self.target.position;
            return true;
        }

        let dx = self.position.x - self.target.position.x;
        let dy = self.position.y - self.target.position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > 1.0 {
            let travel = self.easing * distance;
            self.position.x -= dx / distance * travel;
            self.position.y -= dy / distance * travel;
            false
        } else if self.hold > 0 {
            self.hold -= 1;
            false
        } else {
            true
        }
    }

    fn next_waypoint(&mut self, rng: &mut impl Rng) {
        if let Some(waypoint) = self.queue.pop_front() {
            self.target = Target {
                position: waypoint.position_or(self.position),
                size: waypoint.size.unwrap_or(self.size),
                alpha: waypoint.alpha.unwrap_or(self.alpha),
            };
            self.hold = waypoint.hold.unwrap_or(0);
        } else if self.active {
            self.position.x -= (rng.random::<f32>() * PI).sin();
            self.position.y -= (rng.random::<f32>() * PI).sin();
        } else {
            let x = self.position.x + rng.random::<f32>() * WANDER_RANGE * 2.0 - WANDER_RANGE;
            let y = self.position.y + rng.random::<f32>() * WANDER_RANGE * 2.0 - WANDER_RANGE;
            self.move_to(Waypoint::at(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_spawn_defaults() {
        let mut rng = rng();
        let p = Particle::new(Position::new(10.0, 20.0), &mut rng);
        assert_eq!(p.position(), Position::new(10.0, 20.0));
        assert_eq!(p.size(), 5.0);
        assert_eq!(p.alpha(), MIN_ALPHA);
        assert_eq!(p.easing(), DEFAULT_EASING);
        assert!(p.is_active());
        assert!(!p.is_background());
        assert!(p.color().r < 100);
    }

    #[test]
    fn test_background_spawn() {
        let mut rng = rng();
        let p = Particle::background(Position::new(1.0, 2.0), &mut rng);
        assert!(p.is_background());
        assert_eq!(p.easing(), IDLE_EASING);
        assert!((p.alpha() - 0.2).abs() < f32::EPSILON);
        assert!(p.size() >= MIN_SIZE && p.size() <= 4.0);
    }

    #[test]
    fn test_eases_toward_waypoint() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.move_to(Waypoint::at(100.0, 0.0));

        // First frame arrives at the spawn target and picks up the waypoint.
        p.step(&mut rng);
        assert_eq!(p.target_position(), Position::new(100.0, 0.0));

        p.step(&mut rng);
        // Exponential approach: closes the easing share of the distance.
        assert!((p.position().x - 100.0 * DEFAULT_EASING).abs() < 1e-3);

        for _ in 0..200 {
            p.step(&mut rng);
        }
        // Settled particles jitter up to one pixel per axis before easing back.
        assert!(p.position().distance_to(Position::new(100.0, 0.0)) <= 1.0 + 2f32.sqrt());
    }

    #[test]
    fn test_hold_delays_next_waypoint() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.move_to(Waypoint::default().hold(3));
        p.move_to(Waypoint::at(50.0, 50.0));

        p.step(&mut rng);
        assert_eq!(p.hold(), 3);
        for expected in [2, 1, 0] {
            p.step(&mut rng);
            assert_eq!(p.hold(), expected);
            assert_eq!(p.pending(), 1);
        }
        p.step(&mut rng);
        assert_eq!(p.pending(), 0);
        assert_eq!(p.target_position(), Position::new(50.0, 50.0));
    }

    #[test]
    fn test_snap_jumps_on_the_step_after_dequeue() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.move_to(Waypoint::at(321.5, -17.25).hold(SNAP));
        p.move_to(Waypoint::default().hold(5));

        // The first step only dequeues the snap waypoint.
        p.step(&mut rng);
        assert_eq!(p.hold(), SNAP);
        assert_eq!(p.position(), Position::new(0.0, 0.0));

        p.step(&mut rng);
        assert_eq!(p.position(), Position::new(321.5, -17.25));
        assert_eq!(p.hold(), 5);
        assert_eq!(p.target_position(), Position::new(321.5, -17.25));
    }

    #[test]
    fn test_idle_particle_wanders_after_snap() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.set_active(false);
        p.move_to(Waypoint::at(200.0, 200.0).hold(SNAP));

        p.step(&mut rng);
        p.step(&mut rng);
        assert_eq!(p.position(), Position::new(200.0, 200.0));
        assert_eq!(p.pending(), 1);

        p.step(&mut rng);
        assert_eq!(p.pending(), 0);
        assert_eq!(p.hold(), 0);
        let target = p.target_position();
        assert!((target.x - 200.0).abs() <= WANDER_RANGE);
        assert!((target.y - 200.0).abs() <= WANDER_RANGE);
    }

    #[test]
    fn test_settled_particle_jitters_after_snap() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.move_to(Waypoint::at(50.0, 50.0).hold(SNAP));
        p.step(&mut rng);
        p.step(&mut rng);

        assert_eq!(p.pending(), 0);
        let position = p.position();
        assert!(position.x <= 50.0 && position.x >= 49.0);
        assert!(position.y <= 50.0 && position.y >= 49.0);
    }

    #[test]
    fn test_zero_coordinates_are_honored() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(30.0, 30.0), &mut rng);
        p.set_active(false);
        p.move_to(Waypoint::at(0.0, 0.0).hold(SNAP));
        p.step(&mut rng);
        p.step(&mut rng);
        assert_eq!(p.position(), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_alpha_and_size_stay_clamped() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(0.0, 0.0), &mut rng);
        p.move_to(Waypoint::at(5.0, 5.0).size(0.0).alpha(0.0));
        p.move_to(Waypoint::at(500.0, 5.0).size(-20.0).alpha(-3.0));
        for _ in 0..500 {
            p.step(&mut rng);
            assert!(p.alpha() >= MIN_ALPHA);
            assert!(p.size() >= MIN_SIZE);
        }
    }

    #[test]
    fn test_move_unless_static() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(10.0, 10.0), &mut rng);
        p.move_unless_static(Waypoint::at(10.5, 10.0));
        assert_eq!(p.pending(), 0);
        p.move_unless_static(Waypoint::default().alpha(1.0));
        assert_eq!(p.pending(), 0);
        p.move_unless_static(Waypoint::at(12.0, 10.0));
        assert_eq!(p.pending(), 1);
    }

    #[test]
    fn test_idle_particle_wanders() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(100.0, 100.0), &mut rng);
        p.set_active(false);
        p.step(&mut rng);
        assert_eq!(p.pending(), 1);

        p.step(&mut rng);
        let target = p.target_position();
        assert!((target.x - 100.0).abs() <= WANDER_RANGE);
        assert!((target.y - 100.0).abs() <= WANDER_RANGE);
    }

    #[test]
    fn test_settled_particle_jitters_in_place() {
        let mut rng = rng();
        let mut p = Particle::new(Position::new(100.0, 100.0), &mut rng);
        p.step(&mut rng);
        assert_eq!(p.pending(), 0);
        let moved = Position::new(100.0, 100.0).distance_to(p.position());
        assert!(moved <= 2f32.sqrt());
        assert!(p.position().x <= 100.0 && p.position().y <= 100.0);
    }

    #[test]
    fn test_draw_uses_current_state() {
        #[derive(Default)]
        struct Recorder(Vec<(Position, f32, Rgba)>);
        impl Surface for Recorder {
            fn area(&self) -> shapeshift_core::Area {
                shapeshift_core::Area::new(100.0, 100.0)
            }
            fn draw_circle(&mut self, center: Position, radius: f32, color: Rgba) {
                self.0.push((center, radius, color));
            }
            fn clear(&mut self) {
                self.0.clear();
            }
            fn adjust(&mut self, _area: shapeshift_core::Area) {}
        }

        let mut rng = rng();
        let mut p = Particle::new(Position::new(3.0, 4.0), &mut rng);
        p.move_to(Waypoint::default().alpha(1.0));
        let mut surface = Recorder::default();
        p.render(&mut surface, &mut rng);
        let (center, radius, color) = surface.0[0];
        assert_eq!(center, p.position());
        assert_eq!(radius, p.size());
        assert_eq!(color.a, p.alpha());
    }
}
