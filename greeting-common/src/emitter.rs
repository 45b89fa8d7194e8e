//! The live particle set and the per-frame update/draw/cull pass.

use crate::{Particle, Surface};
use rand::Rng;

pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// Upper bound on live particles, `0` disables the cap.
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles.min(512)),
            max_particles,
        }
    }

    /// Spawn a burst of `count` particles at `(x, y)`.
    ///
    /// When the cap would be exceeded the oldest particles are evicted first.
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, count: usize, rng: &mut R) {
        let count = match self.max_particles {
            0 => count,
            cap => count.min(cap),
        };
        self.particles
            .extend((0..count).map(|_| Particle::spawn(x, y, rng)));
        self.enforce_cap();
    }

    /// Add an already built particle, subject to the cap.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
        self.enforce_cap();
    }

    fn enforce_cap(&mut self) {
        if self.max_particles == 0 || self.particles.len() <= self.max_particles {
            return;
        }
        let excess = self.particles.len() - self.max_particles;
        self.particles.drain(..excess);
        log::debug!("particle cap reached, evicted {} oldest", excess);
    }

    /// Run one frame: clear the surface, then update, draw and cull every
    /// particle. Returns whether any particle is still alive.
    pub fn tick(&mut self, surface: &mut impl Surface) -> bool {
        surface.clear();
        self.particles.retain_mut(|p| {
            p.update();
            p.draw(surface);
            !p.is_dead()
        });
        !self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::{Color, Point, Vector};
    use rand::{rngs::SmallRng, SeedableRng};

    fn marked(size: f32, decay: f32) -> Particle {
        Particle::new(
            Point::new(0.0, 0.0),
            Vector::new(0.0, 0.0),
            decay,
            Color::new(1.0, 1.0, 1.0),
            size,
        )
    }

    #[test]
    fn test_spawn_appends_at_origin() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut system = ParticleSystem::new(0);
        system.spawn(100.0, 100.0, 40, &mut rng);
        system.spawn(10.0, 10.0, 5, &mut rng);
        assert_eq!(system.len(), 45);
        assert_eq!(
            system.iter().filter(|p| p.pos == Point::new(100.0, 100.0)).count(),
            40
        );
    }

    #[test]
    fn test_burst_fully_culled() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut system = ParticleSystem::new(0);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        system.spawn(100.0, 100.0, 40, &mut rng);

        let mut frames = 0;
        while system.tick(&mut surface) {
            frames += 1;
            assert!(frames < 200, "particles outlived their decay");
        }
        assert!(system.is_empty());
        // slowest possible decay is 0.015 per step
        assert!(frames <= 67);
    }

    #[test]
    fn test_tick_clears_then_draws_survivors() {
        let mut system = ParticleSystem::new(0);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        system.push(marked(1.0, 0.5));
        system.push(marked(2.0, 0.1));

        assert!(system.tick(&mut surface));
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 2);

        // first particle reaches alpha 0 on this frame and is culled
        assert!(system.tick(&mut surface));
        assert_eq!(system.len(), 1);
        assert_eq!(system.iter().next().map(|p| p.size), Some(2.0));
    }

    #[test]
    fn test_tick_on_empty_system() {
        let mut system = ParticleSystem::new(10);
        let mut surface = RecordingSurface::new(1.0, 1.0);
        assert!(!system.tick(&mut surface));
        assert_eq!(surface.clears, 1);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut system = ParticleSystem::new(3);
        for i in 0..5 {
            system.push(marked(i as f32, 0.1));
        }
        assert_eq!(system.len(), 3);
        let sizes: Vec<f32> = system.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![2.0, 3.0, 4.0]);

        let mut rng = SmallRng::seed_from_u64(4);
        system.spawn(0.0, 0.0, 100, &mut rng);
        assert_eq!(system.len(), 3);
        assert!(system.iter().all(|p| p.decay <= 0.03));
    }
}
