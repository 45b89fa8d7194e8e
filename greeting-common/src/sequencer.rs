//! Firework bursts at preset screen positions.

use crate::{ParticleSystem, Point, Settings};
use rand::Rng;

/// Launch points as fractions of the viewport width and height.
pub const PRESET_POSITIONS: [(f32, f32); 5] = [
    (0.2, 0.3),
    (0.5, 0.2),
    (0.8, 0.3),
    (0.3, 0.5),
    (0.7, 0.45),
];

/// Resolve [`PRESET_POSITIONS`] against a viewport.
pub fn preset_points(width: f32, height: f32) -> Vec<Point> {
    PRESET_POSITIONS
        .iter()
        .map(|&(fx, fy)| Point::new(width * fx, height * fy))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequencer {
    pub burst_particles: usize,
    pub stagger_particles: usize,
    pub pointer_particles: usize,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Sequencer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            burst_particles: settings.burst_particles,
            stagger_particles: settings.stagger_particles,
            pointer_particles: settings.pointer_particles,
        }
    }

    /// Spawn at every preset position at once.
    pub fn burst<R: Rng + ?Sized>(
        &self,
        system: &mut ParticleSystem,
        width: f32,
        height: f32,
        rng: &mut R,
    ) {
        for pt in preset_points(width, height) {
            system.spawn(pt.x, pt.y, self.burst_particles, rng);
        }
    }

    /// Small burst where the user clicked.
    pub fn pointer<R: Rng + ?Sized>(&self, system: &mut ParticleSystem, x: f32, y: f32, rng: &mut R) {
        system.spawn(x, y, self.pointer_particles, rng);
    }

    /// Positions are resolved now; later resizes do not move them.
    pub fn staggered(&self, width: f32, height: f32) -> StaggeredSequence {
        StaggeredSequence {
            points: preset_points(width, height),
            next: 0,
            count: self.stagger_particles,
        }
    }
}

/// One burst per timer tick until the preset positions run out.
#[derive(Clone, Debug)]
pub struct StaggeredSequence {
    points: Vec<Point>,
    next: usize,
    count: usize,
}

impl StaggeredSequence {
    /// Spawn the next burst. Returns `false` once every position was used,
    /// at which point the caller should cancel its timer.
    pub fn advance<R: Rng + ?Sized>(&mut self, system: &mut ParticleSystem, rng: &mut R) -> bool {
        match self.points.get(self.next) {
            Some(pt) => {
                system.spawn(pt.x, pt.y, self.count, rng);
                self.next += 1;
                true
            }
            None => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.points.len() - self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
