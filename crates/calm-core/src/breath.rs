//! Breathing tone envelope.
//!
//! One 12 second cycle: 4 s inhale (rise), 2 s hold, 6 s exhale (fall). The
//! phase drives both pitch and loudness of a single sine oscillator.

pub const CYCLE_MS: f64 = 12_000.0;
pub const INHALE_MS: f64 = 4_000.0;
pub const HOLD_MS: f64 = 2_000.0;
pub const EXHALE_MS: f64 = CYCLE_MS - INHALE_MS - HOLD_MS;

pub const BASE_FREQUENCY_HZ: f32 = 174.0;
pub const FREQUENCY_SPAN_HZ: f32 = 26.0;
pub const BASE_GAIN: f32 = 0.002;
pub const GAIN_SPAN: f32 = 0.02;
// Gain set before the first envelope sample lands
pub const INITIAL_GAIN: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreathSample {
    pub phase: f32,
    pub frequency_hz: f32,
    pub gain: f32,
}

/// Envelope position in `[0, 1]` for a time since the tone started.
pub fn breath_phase(elapsed_ms: f64) -> f32 {
    let cyc = elapsed_ms.max(0.0) % CYCLE_MS;
    let phase = if cyc < INHALE_MS {
        cyc / INHALE_MS
    } else if cyc < INHALE_MS + HOLD_MS {
        1.0
    } else {
        1.0 - (cyc - INHALE_MS - HOLD_MS) / EXHALE_MS
    };
    phase as f32
}

pub fn breath_sample(elapsed_ms: f64) -> BreathSample {
    let phase = breath_phase(elapsed_ms);
    BreathSample {
        phase,
        frequency_hz: BASE_FREQUENCY_HZ + FREQUENCY_SPAN_HZ * phase,
        gain: BASE_GAIN + GAIN_SPAN * phase,
    }
}
