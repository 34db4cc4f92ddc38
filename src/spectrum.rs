//! FFT plumbing for the analyzer
//!
//! Converts one time-domain frame into a smoothed magnitude spectrum.
//! The processor owns the realfft plan, the Hann window, and the smoothing
//! state so that successive snapshots decay into each other with the
//! analyzer's smoothing time constant.

use realfft::{num_complex::Complex32, RealFftPlanner, RealToComplex};
use std::f32::consts::PI;
use std::sync::Arc;

/// Full-scale value for a magnitude bin, matching the byte range of the
/// original analyzer's frequency data.
pub const SPECTRUM_SCALE: f32 = 255.0;

/// Forward-FFT processor with exponential magnitude smoothing
///
/// # Example
/// ```
/// use overtone::spectrum::SpectrumProcessor;
///
/// let mut proc = SpectrumProcessor::new(1024);
/// let frame = vec![0.0; 2048]; // fft_size = bins * 2
/// let spectrum = proc.process(&frame, 0.8);
/// assert_eq!(spectrum.len(), 1024);
/// ```
pub struct SpectrumProcessor {
    bins: usize,
    fft_size: usize,

    // FFT planner output (created once, reused)
    r2c: Arc<dyn RealToComplex<f32>>,

    window: Vec<f32>,
    windowed: Vec<f32>,
    spectrum: Vec<Complex32>,

    // Smoothed magnitudes, scaled to [0, SPECTRUM_SCALE]
    smoothed: Vec<f32>,
}

impl SpectrumProcessor {
    /// Create a processor producing `bins` magnitude values per frame.
    /// The FFT size is `bins * 2`; `bins` must be a positive power of two.
    pub fn new(bins: usize) -> Self {
        let fft_size = bins * 2;

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        // Hann window
        let window: Vec<f32> = (0..fft_size)
            .map(|i| {
                let phase = 2.0 * PI * i as f32 / (fft_size as f32 - 1.0);
                0.5 * (1.0 - phase.cos())
            })
            .collect();

        let spectrum = vec![Complex32::new(0.0, 0.0); fft_size / 2 + 1];

        Self {
            bins,
            fft_size,
            r2c,
            window,
            windowed: vec![0.0; fft_size],
            spectrum,
            smoothed: vec![0.0; bins],
        }
    }

    /// Number of magnitude bins per snapshot
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Number of time-domain samples consumed per snapshot
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Transform one frame and fold it into the smoothing state.
    ///
    /// `frame` must hold `fft_size()` samples. `smoothing` in [0, 1] is the
    /// weight of the previous snapshot: 0 tracks the input instantly, values
    /// near 1 decay slowly.
    pub fn process(&mut self, frame: &[f32], smoothing: f32) -> &[f32] {
        debug_assert_eq!(frame.len(), self.fft_size, "frame length mismatch");

        for i in 0..self.fft_size {
            self.windowed[i] = frame[i] * self.window[i];
        }

        // Lengths are fixed by the plan, so this cannot fail
        self.r2c
            .process(&mut self.windowed, &mut self.spectrum)
            .unwrap();

        // Normalize so a full-scale sine lands near SPECTRUM_SCALE. The Hann
        // window halves the coherent gain, hence 4/N instead of 2/N.
        let norm = 4.0 / self.fft_size as f32;
        for i in 0..self.bins {
            let magnitude = (self.spectrum[i].norm() * norm).min(1.0) * SPECTRUM_SCALE;
            self.smoothed[i] = smoothing * self.smoothed[i] + (1.0 - smoothing) * magnitude;
        }

        &self.smoothed
    }

    /// Most recent smoothed snapshot
    pub fn last_spectrum(&self) -> &[f32] {
        &self.smoothed
    }

    /// Zero the smoothing state
    pub fn reset(&mut self) {
        self.smoothed.fill(0.0);
    }

    /// Map a frequency in Hz to its bin index at the given sample rate
    pub fn bin_for_frequency(&self, freq_hz: f32, sample_rate: f32) -> usize {
        let hz_per_bin = sample_rate / self.fft_size as f32;
        ((freq_hz / hz_per_bin) as usize).min(self.bins - 1)
    }

    /// Average magnitude over the bins covering [low_hz, high_hz]
    pub fn band_energy(&self, low_hz: f32, high_hz: f32, sample_rate: f32) -> f32 {
        let lo = self.bin_for_frequency(low_hz.min(high_hz), sample_rate);
        let hi = self.bin_for_frequency(low_hz.max(high_hz), sample_rate);

        let slice = &self.smoothed[lo..=hi];
        slice.iter().sum::<f32>() / slice.len() as f32
    }

    /// Magnitude-weighted mean frequency of the last snapshot, in Hz.
    /// Returns 0.0 for a silent spectrum.
    pub fn centroid(&self, sample_rate: f32) -> f32 {
        let hz_per_bin = sample_rate / self.fft_size as f32;

        let mut weighted = 0.0;
        let mut total = 0.0;
        for (i, &magnitude) in self.smoothed.iter().enumerate() {
            weighted += i as f32 * hz_per_bin * magnitude;
            total += magnitude;
        }

        if total > 0.0 {
            weighted / total
        } else {
            0.0
        }
    }
}
