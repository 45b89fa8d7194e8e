//! Procedural celebration sounds as plain oscillator schedules.

/// One oscillator note. Times are seconds relative to the moment the
/// schedule starts playing. Every note is a sine wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub start: f64,
    pub duration: f64,
    /// Gain at `start`, ramped exponentially down to `end_gain`.
    pub start_gain: f32,
    pub end_gain: f32,
}

impl Tone {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Length of a schedule in seconds.
pub fn total_duration(tones: &[Tone]) -> f64 {
    tones.iter().map(Tone::end).fold(0.0, f64::max)
}

const BEEP_COUNT: usize = 5;
const BEEP_BASE_FREQ: f32 = 800.0;
const BEEP_STEP_FREQ: f32 = 200.0;
const BEEP_LENGTH: f64 = 0.1;

/// Five quick ascending tones.
pub fn beep() -> Vec<Tone> {
    (0..BEEP_COUNT)
        .map(|i| Tone {
            frequency: BEEP_BASE_FREQ + i as f32 * BEEP_STEP_FREQ,
            start: i as f64 * BEEP_LENGTH,
            duration: BEEP_LENGTH,
            start_gain: 0.3,
            end_gain: 0.01,
        })
        .collect()
}

const C5: f32 = 523.25;
const D5: f32 = 587.33;
const E5: f32 = 659.25;
const G5: f32 = 783.99;

/// `(frequency, duration)` pairs of the fallback tune.
pub const MELODY: [(f32, f64); 12] = [
    (C5, 0.5),
    (C5, 0.5),
    (D5, 0.5),
    (C5, 0.5),
    (E5, 0.5),
    (G5, 1.0),
    (C5, 0.5),
    (C5, 0.5),
    (D5, 0.5),
    (C5, 0.5),
    (E5, 0.5),
    (G5, 1.5),
];

/// Silence between consecutive melody notes.
pub const NOTE_GAP: f64 = 0.1;

/// The fallback tune, played when the music file can't be.
pub fn melody() -> Vec<Tone> {
    let mut at = 0.0;
    MELODY
        .iter()
        .map(|&(frequency, duration)| {
            let tone = Tone {
                frequency,
                start: at,
                duration,
                start_gain: 0.2,
                end_gain: 0.01,
                };
            at += duration + NOTE_GAP;
            tone
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beep_ascends() {
        let tones = beep();
        let freqs: Vec<f32> = tones.iter().map(|t| t.frequency).collect();
        assert_eq!(freqs, vec![800.0, 1000.0, 1200.0, 1400.0, 1600.0]);
        for (i, t) in tones.iter().enumerate() {
            assert!((t.start - i as f64 * 0.1).abs() < 1e-9);
            assert!((t.duration - 0.1).abs() < 1e-9);
        }
        assert!((total_duration(&tones) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_melody_is_back_to_back() {
        let tones = melody();
        assert_eq!(tones.len(), MELODY.len());
        assert_eq!(tones[0].start, 0.0);
        for pair in tones.windows(2) {
            assert!((pair[1].start - (pair[0].end() + NOTE_GAP)).abs() < 1e-9);
        }
        assert_eq!(tones[5].frequency, G5);
        assert_eq!(tones[11].duration, 1.5);
        // 10 short notes, 1.0 + 1.5, and 11 gaps
        assert!((total_duration(&tones) - (5.0 + 2.5 + 1.1)).abs() < 1e-9);
    }

    #[test]
    fn test_envelopes_fade_out() {
        assert!(beep()
            .iter()
            .all(|t| t.start_gain == 0.3 && t.end_gain == 0.01));
        assert!(melody()
            .iter()
            .all(|t| t.start_gain == 0.2 && t.end_gain == 0.01));
    }
}
