//! Frame loop bookkeeping.
//!
//! The host owns the actual frame callback; this type decides when one has to
//! be scheduled so that at most one callback chain is active.

use crate::{ParticleSystem, Surface};

#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the loop to run. Returns `true` if the caller must schedule the
    /// first frame, `false` if a loop is already running.
    pub fn request(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Run one frame. Returns `true` if the next frame must be scheduled.
    pub fn frame(&mut self, system: &mut ParticleSystem, surface: &mut impl Surface) -> bool {
        self.frames += 1;
        let alive = system.tick(surface);
        if !alive {
            self.running = false;
        }
        alive
    }

    /// Mark the loop idle, e.g. when the host refused to schedule a frame.
    pub fn reset(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
