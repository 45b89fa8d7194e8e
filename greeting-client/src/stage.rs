//! State shared by every event handler and the frame callback.

use std::cell::RefCell;
use std::rc::Rc;

use greeting_common::{
    FrameLoop, GuestName, ParticleSystem, Sequencer, Settings, StaggeredSequence, Surface,
    WishCatalog,
};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{audio::AudioCue, canvas::CanvasSurface};

pub type SharedStage = Rc<RefCell<Stage>>;

pub struct Stage {
    pub settings: Settings,
    pub sequencer: Sequencer,
    pub system: ParticleSystem,
    pub frame_loop: FrameLoop,
    pub surface: CanvasSurface,
    /// Empty until `wishes.json` has been fetched (or replaced by the builtin set)
    pub catalog: WishCatalog,
    pub guest: Option<GuestName>,
    pub audio: AudioCue,
    pub rng: SmallRng,
}

impl Stage {
    pub fn new(settings: Settings, surface: CanvasSurface) -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self {
            sequencer: Sequencer::from_settings(&settings),
            system: ParticleSystem::new(settings.max_particles),
            frame_loop: FrameLoop::new(),
            surface,
            catalog: WishCatalog::default(),
            guest: None,
            audio: AudioCue::new(),
            rng: SmallRng::seed_from_u64(seed),
            settings,
        }
    }

    pub fn into_shared(self) -> SharedStage {
        Rc::new(RefCell::new(self))
    }

    /// Run one animation frame. Returns `true` if another one is needed.
    pub fn frame(&mut self) -> bool {
        let Stage {
            system,
            frame_loop,
            surface,
            ..
        } = self;
        frame_loop.frame(system, surface)
    }

    /// Fire at every preset position.
    pub fn celebrate(&mut self) {
        let (width, height) = (self.surface.width(), self.surface.height());
        let Stage {
            sequencer,
            system,
            rng,
            ..
        } = self;
        sequencer.burst(system, width, height, rng);
    }

    /// A staggered show over the current viewport.
    pub fn staggered(&self) -> StaggeredSequence {
        self.sequencer
            .staggered(self.surface.width(), self.surface.height())
    }

    pub fn burst_at(&mut self, x: f32, y: f32) {
        let Stage {
            sequencer,
            system,
            rng,
            ..
        } = self;
        sequencer.pointer(system, x, y, rng);
    }

    /// Up to `wishes_per_display` wishes for `name`.
    pub fn pick_wishes(&mut self, name: &str) -> Vec<String> {
        let limit = self.settings.wishes_per_display;
        self.catalog
            .pick_many(name, limit, &mut self.rng)
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn pick_greeting(&mut self, name: &str) -> String {
        self.catalog.pick_one(name, &mut self.rng)
    }
}
