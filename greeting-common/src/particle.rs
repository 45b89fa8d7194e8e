//! A single firework spark.

use crate::{Color, Point, Surface, Vector, EPS};
use rand::Rng;

/// Downward acceleration added to the vertical velocity every step.
pub const GRAVITY: f32 = 0.1;

/// Half-width of the uniform range for the initial velocity components.
const SPREAD: f32 = 4.0;
/// Extra upward push applied at launch.
const LIFT: f32 = 2.0;

const MIN_DECAY: f32 = 0.015;
const DECAY_RANGE: f32 = 0.015;
const MIN_SIZE: f32 = 2.0;
const SIZE_RANGE: f32 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Vector,
    /// Opacity in `[0, 1]` at launch, only ever decreases.
    pub alpha: f32,
    /// Alpha lost per step, fixed at creation.
    pub decay: f32,
    pub color: Color,
    /// Radius in canvas pixels
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Point, vel: Vector, decay: f32, color: Color, size: f32) -> Self {
        Self {
            pos,
            vel,
            alpha: 1.0,
            decay,
            color,
            size,
        }
    }

    /// Launch a spark at `(x, y)` with randomized velocity, lifetime, hue and size.
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let vx = (rng.random::<f32>() - 0.5) * SPREAD * 2.0;
        let vy = (rng.random::<f32>() - 0.5) * SPREAD * 2.0 - LIFT;
        let decay = rng.random::<f32>() * DECAY_RANGE + MIN_DECAY;
        let color = Color::vivid(rng.random::<f32>() * 360.0);
        let size = rng.random::<f32>() * SIZE_RANGE + MIN_SIZE;
        Self::new(Point::new(x, y), Vector::new(vx, vy), decay, color, size)
    }

    /// Advance one fixed step.
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += GRAVITY;
        self.alpha -= self.decay;
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.size, self.color, self.alpha.max(0.0));
    }

    /// Alpha within f32 rounding of zero counts as zero, so a particle dies
    /// after exactly `ceil(1 / decay)` updates.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.alpha <= EPS
    }
}
