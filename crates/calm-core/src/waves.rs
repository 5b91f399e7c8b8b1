//! Relax-zone wave outline.

pub const WAVE_PRIMARY_PERIOD: f64 = 38.0;
pub const WAVE_PRIMARY_AMPLITUDE: f64 = 18.0;
pub const WAVE_SECONDARY_PERIOD: f64 = 85.0;
pub const WAVE_SECONDARY_AMPLITUDE: f64 = 10.0;
pub const WAVE_STEP_PER_FRAME: f64 = 1.8;

/// Height of the wave surface at column `x` for time offset `t`.
#[inline]
pub fn wave_y(x: f64, t: f64, height: f64) -> f64 {
    height / 2.0
        + ((x + t) / WAVE_PRIMARY_PERIOD).sin() * WAVE_PRIMARY_AMPLITUDE
        + ((x + t) / WAVE_SECONDARY_PERIOD).sin() * WAVE_SECONDARY_AMPLITUDE
}

#[derive(Clone, Debug, Default)]
pub struct WaveField {
    // f64 so the phase keeps advancing on pages left open for days
    pub t: f64,
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self) {
        self.t += WAVE_STEP_PER_FRAME;
    }

    /// One surface point per pixel column, left to right.
    pub fn surface(&self, width: u32, height: u32) -> impl Iterator<Item = (f64, f64)> + '_ {
        let h = height as f64;
        (0..width).map(move |x| {
            let x = x as f64;
            (x, wave_y(x, self.t, h))
        })
    }
}
