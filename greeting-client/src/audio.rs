use greeting_common::audio::{self, Tone};
use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// Synthesized sound cues. The `AudioContext` is created on first use and
/// reused for the rest of the session.
pub struct AudioCue {
    ctx: Option<AudioContext>,
}

impl AudioCue {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new()?);
        }
        self.ctx
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio context unavailable"))
    }

    /// Five quick ascending tones.
    pub fn beep(&mut self) -> Result<(), JsValue> {
        self.play(&audio::beep())
    }

    /// Fallback tune for when the music file can't be played.
    pub fn melody(&mut self) -> Result<(), JsValue> {
        let tones = audio::melody();
        log::debug!(
            "playing synthesized melody ({:.1}s)",
            audio::total_duration(&tones)
        );
        self.play(&tones)
    }

    /// Schedule every tone relative to the context's current time.
    pub fn play(&mut self, tones: &[Tone]) -> Result<(), JsValue> {
        let ctx = self.context()?;
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume()?;
        }
        let now = ctx.current_time();
        let base_ctx: &web_sys::BaseAudioContext = ctx.as_ref();
        let destination = base_ctx.destination();

        for tone in tones {
            let osc = ctx.create_oscillator()?;
            let gain = ctx.create_gain()?;
            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&destination)?;

            let at = now + tone.start;
            let until = at + tone.duration;
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value_at_time(tone.frequency, at)?;
            gain.gain().set_value_at_time(tone.start_gain, at)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(tone.end_gain, until)?;

            osc.start_with_when(at)?;
            osc.stop_with_when(until)?;
        }
        Ok(())
    }
}
