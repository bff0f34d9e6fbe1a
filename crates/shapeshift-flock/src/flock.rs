//! The particle pool and the morph between point clouds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shapeshift_core::{Area, PointCloud, Position, Surface, Waypoint};
use tracing::debug;

use crate::particle::{IDLE_EASING, Particle};

/// Background particles appended on every pool growth.
pub const BACKGROUND_BATCH: usize = 500;

/// Shapes sit below the true vertical center by this divisor.
const VERTICAL_BIAS: f32 = 1.35;

/// Easing rates used while morphing.
const FAST_EASING: f32 = 0.25;
const ACTIVE_EASING: f32 = 0.14;
const ACTIVATED_EASING: f32 = 0.11;

/// Size and alpha a particle settles at once it sits in a shape.
const SHAPE_SIZE: f32 = 5.0;
const SHAPE_ALPHA: f32 = 1.0;

/// Alpha of retired particles.
const RETIRED_ALPHA: f32 = 0.3;

/// Owns every particle and morphs them onto point clouds.
#[derive(Debug, Clone)]
pub struct Flock {
    particles: Vec<Particle>,
    cloud_width: f32,
    cloud_height: f32,
    offset: Position,
    rng: SmallRng,
}

impl Default for Flock {
    fn default() -> Self {
        Self::new()
    }
}

impl Flock {
    /// Create an empty flock seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Create an empty flock with a reproducible random sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            particles: Vec::new(),
            cloud_width: 0.0,
            cloud_height: 0.0,
            offset: Position::default(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles currently part of the shape.
    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }

    pub fn background_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_background()).count()
    }

    /// Offset added to cloud points to center them on the surface.
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Morph the pool onto `cloud`.
    ///
    /// Cloud points are handed out to particles in pool order, each particle
    /// drawing a uniformly random remaining point. Paths may cross.
    pub fn transition(&mut self, cloud: PointCloud, fast: bool, area: Area) {
        let PointCloud {
            mut points,
            width,
            height,
        } = cloud;

        self.cloud_width = width;
        self.cloud_height = height;
        self.compensate(area);

        if points.len() > self.particles.len() {
            self.grow(points.len() - self.particles.len(), area);
        }

        let mut index = 0;
        while !points.is_empty() {
            let pick = self.rng.random_range(0..points.len());
            let point = points.swap_remove(pick);
            let destination = Waypoint::at(point.x + self.offset.x, point.y + self.offset.y)
                .size(SHAPE_SIZE)
                .alpha(SHAPE_ALPHA)
                .hold(0);
            let rng = &mut self.rng;
            let particle = &mut self.particles[index];

            let was_active = particle.is_active();
            particle.set_easing(if fast {
                FAST_EASING
            } else if was_active {
                ACTIVE_EASING
            } else {
                ACTIVATED_EASING
            });

            let expand = if was_active {
                Waypoint::default()
                    .size(rng.random::<f32>() * 20.0 + 10.0)
                    .alpha(rng.random::<f32>())
                    .hold(18)
            } else {
                Waypoint::default()
                    .size(rng.random::<f32>() * 5.0 + 5.0)
                    .hold(if fast { 18 } else { 30 })
            };
            particle.move_to(expand);
            particle.set_active(true);
            particle.move_to(destination);

            index += 1;
        }

        let retired = self.retire_from(index, area);
        debug!(
            shape = index,
            retired,
            pool = self.particles.len(),
            fast,
            "flock transition"
        );
    }

    /// Redirect every idle particle to a random spot in `area`.
    pub fn shuffle_idle(&mut self, area: Area) {
        let rng = &mut self.rng;
        for particle in self.particles.iter_mut().filter(|p| !p.is_active()) {
            particle.move_to(Waypoint::at(
                rng.random::<f32>() * area.width,
                rng.random::<f32>() * area.height,
            ));
        }
    }

    /// Step and draw every particle in pool order.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        for particle in &mut self.particles {
            particle.render(surface, &mut self.rng);
        }
    }

    fn compensate(&mut self, area: Area) {
        self.offset = Position::new(
            area.width / 2.0 - self.cloud_width / 2.0,
            area.height / VERTICAL_BIAS - self.cloud_height / 2.0,
        );
    }

    /// Append `count` shape particles plus a batch of background particles.
    fn grow(&mut self, count: usize, area: Area) {
        let spawn = Position::new(area.width / 2.0, area.height / 3.0 * 2.0);
        for _ in 0..count {
            let particle = Particle::new(spawn, &mut self.rng);
            self.particles.push(particle);
        }

        // Appended on every growth, not just the first.
        for _ in 0..BACKGROUND_BATCH {
            let position = Position::new(
                self.rng.random::<f32>() * area.width,
                self.rng.random::<f32>() * area.height,
            );
            let particle = Particle::background(position, &mut self.rng);
            self.particles.push(particle);
        }

        debug!(added = count, background = BACKGROUND_BATCH, "grew flock");
    }

    /// Retire active particles from `start` onward. Returns how many retired.
    fn retire_from(&mut self, start: usize, area: Area) -> usize {
        let rng = &mut self.rng;
        let mut retired = 0;

        for particle in self.particles.iter_mut().skip(start) {
            if !particle.is_active() {
                continue;
            }

            if !particle.is_background() {
                particle.move_to(
                    Waypoint::default()
                        .size(rng.random::<f32>() * 20.0 + 10.0)
                        .alpha(rng.random::<f32>())
                        .hold(20),
                );
            }

            particle.set_active(false);
            particle.set_easing(IDLE_EASING);

            let rest = if particle.is_background() {
                particle.position()
            } else {
                Position::new(
                    rng.random::<f32>() * area.width,
                    rng.random::<f32>() * area.height,
                )
            };
            particle.move_to(
                Waypoint::at(rest.x, rest.y)
                    .alpha(RETIRED_ALPHA)
                    .size(rng.random::<f32>() * 4.0)
                    .hold(0),
            );
            retired += 1;
        }

        retired
    }
}
