//! Runtime configuration, supplied as a JS object or JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Particles per position when everything fires at once
    pub burst_particles: usize,
    /// Particles per position in the staggered sequence
    pub stagger_particles: usize,
    /// Particles for a click burst
    pub pointer_particles: usize,
    pub stagger_interval_ms: i32,
    /// Delay between name submission and the staggered sequence
    pub auto_start_delay_ms: i32,
    /// Live particle cap, `0` disables it
    pub max_particles: usize,
    pub wishes_per_display: usize,
    pub wishes_url: String,
    pub log_level: String,
    pub elements: ElementIds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            burst_particles: 50,
            stagger_particles: 60,
            pointer_particles: 30,
            stagger_interval_ms: 400,
            auto_start_delay_ms: 1000,
            max_particles: 2000,
            wishes_per_display: 3,
            wishes_url: "wishes.json".to_string(),
            log_level: "info".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid settings")
    }

    /// Configured log level, `Info` when unrecognized.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// DOM element ids the page glue looks up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    /// Container the canvas is appended to
    pub fireworks: String,
    pub name_modal: String,
    pub main_page: String,
    pub name_input: String,
    pub submit_button: String,
    pub greeting: String,
    pub wishes_container: String,
    pub music_player: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            fireworks: "fireworks".to_string(),
            name_modal: "nameModal".to_string(),
            main_page: "mainPage".to_string(),
            name_input: "nameInput".to_string(),
            submit_button: "submitBtn".to_string(),
            greeting: "greeting".to_string(),
            wishes_container: "wishesContainer".to_string(),
            music_player: "musicPlayer".to_string(),
        }
    }
}
