//! Fireworks Greeting - Common Types & Logic
//!
//! Everything here is platform independent; the browser bindings live in
//! `greeting-client`.

pub use anyhow::Result;
pub type Point = nalgebra::Point2<f32>;
pub type Vector = nalgebra::Vector2<f32>;

pub const EPS: f32 = 1e-5;

pub mod audio;

mod color;
pub use color::Color;

mod surface;
pub use surface::Surface;

mod particle;
pub use particle::{Particle, GRAVITY};

mod emitter;
pub use emitter::ParticleSystem;

mod frame;
pub use frame::FrameLoop;

mod sequencer;
pub use sequencer::{preset_points, Sequencer, StaggeredSequence, PRESET_POSITIONS};

mod wishes;
pub use wishes::{fallback_wish, format_wish, WishCatalog, DEFAULT_KEY};

mod settings;
pub use settings::{ElementIds, Settings};

mod guest;
pub use guest::GuestName;
