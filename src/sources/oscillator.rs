//! Oscillator signal source - generates waveforms (sine, saw, square, triangle)

use crate::sources::SignalSource;
use std::f32::consts::PI;

/// Waveform types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

/// Free-running oscillator with phase tracking
///
/// The oscillator is silent until started: `is_active` reflects the
/// started state, and the analyzer reads zeros from a stopped oscillator.
///
/// # Example
/// ```
/// use overtone::sources::{Oscillator, Waveform};
///
/// let mut osc = Oscillator::new(440.0, Waveform::Sine);
/// osc.start();
/// ```
pub struct Oscillator {
    freq: f32,
    amplitude: f32,
    waveform: Waveform,
    phase: f32, // Internal state (0.0 to 1.0)
    started: bool,
}

impl Oscillator {
    /// Create an oscillator at the given frequency. Amplitude defaults to 0.5.
    pub fn new(freq: f32, waveform: Waveform) -> Self {
        Self {
            freq,
            amplitude: 0.5,
            waveform,
            phase: 0.0,
            started: false,
        }
    }

    /// 440 Hz sine, the conventional default
    pub fn default_sine() -> Self {
        Self::new(440.0, Waveform::Sine)
    }

    /// Begin producing audio
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Stop producing audio; phase is retained
    pub fn stop(&mut self) {
        self.started = false;
    }

    /// Set frequency in Hz
    pub fn set_freq(&mut self, freq: f32) {
        self.freq = freq;
    }

    /// Get frequency in Hz
    pub fn freq(&self) -> f32 {
        self.freq
    }

    /// Set amplitude (linear gain applied to the waveform)
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Get current phase (0.0 to 1.0)
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Reset phase to 0.0
    pub fn reset_phase(&mut self) {
        self.phase = 0.0;
    }

    /// Set waveform type
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    /// Get waveform type
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }
}

impl SignalSource for Oscillator {
    fn is_active(&self) -> bool {
        self.started
    }

    fn fill_block(&mut self, output: &mut [f32], sample_rate: f32) {
        if !self.started {
            output.fill(0.0);
            return;
        }

        for sample in output.iter_mut() {
            // Generate sample based on waveform
            let raw = match self.waveform {
                Waveform::Sine => (self.phase * 2.0 * PI).sin(),

                Waveform::Saw => 2.0 * self.phase - 1.0,

                Waveform::Square => {
                    if self.phase < 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }

                Waveform::Triangle => {
                    if self.phase < 0.5 {
                        4.0 * self.phase - 1.0
                    } else {
                        -4.0 * self.phase + 3.0
                    }
                }
            };

            *sample = raw * self.amplitude;

            // Advance phase
            self.phase += self.freq / sample_rate;

            // Wrap phase to [0.0, 1.0)
            while self.phase >= 1.0 {
                self.phase -= 1.0;
            }
            while self.phase < 0.0 {
                self.phase += 1.0;
            }
        }
    }

    fn name(&self) -> &str {
        "Oscillator"
    }
}
