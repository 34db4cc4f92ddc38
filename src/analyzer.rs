//! Frequency-domain analyzer
//!
//! `FftAnalyzer` is the main entry point of the crate: attach a signal
//! source, take non-blocking spectrum snapshots with `analyze()`, query
//! band energy and spectral centroid, or read the raw time-domain frame.
//!
//! The analyzer never owns its input. Sources are shared behind
//! `Arc<Mutex<_>>`, so disposing the analyzer leaves the source alive and
//! disposing the source's owner leaves the analyzer well-defined (it just
//! reads silence).

use crate::error::AnalyzerError;
use crate::sources::AnalyzerInput;
use crate::spectrum::SpectrumProcessor;
use tracing::debug;

/// Default bin count (FFT size 2048)
pub const DEFAULT_BINS: usize = 1024;

/// Default smoothing time constant
pub const DEFAULT_SMOOTHING: f32 = 0.8;

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

/// FFT spectrum analyzer with magnitude smoothing
///
/// # Example
/// ```
/// use overtone::analyzer::FftAnalyzer;
/// use overtone::sources::{Oscillator, Waveform};
/// use std::sync::{Arc, Mutex};
///
/// let mut fft = FftAnalyzer::new();
/// assert_eq!(fft.bins(), 1024);
///
/// let osc = Arc::new(Mutex::new(Oscillator::new(440.0, Waveform::Sine)));
/// osc.lock().unwrap().start();
///
/// fft.set_input(osc.clone());
/// let spectrum = fft.analyze().unwrap();
/// assert_eq!(spectrum.len(), 1024);
/// ```
pub struct FftAnalyzer {
    bins: usize,
    smoothing: f32,
    sample_rate: f32,
    input: Option<AnalyzerInput>,

    processor: SpectrumProcessor,

    // Most recent time-domain frame pulled from the input
    frame: Vec<f32>,

    disposed: bool,
}

impl std::fmt::Debug for FftAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftAnalyzer")
            .field("bins", &self.bins)
            .field("smoothing", &self.smoothing)
            .field("sample_rate", &self.sample_rate)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl FftAnalyzer {
    /// Create an analyzer with the defaults: smoothing 0.8, 1024 bins.
    pub fn new() -> Self {
        // Defaults always satisfy the parameter checks
        Self::with_params(DEFAULT_SMOOTHING, DEFAULT_BINS).unwrap()
    }

    /// Create an analyzer with explicit smoothing and bin count.
    ///
    /// `smoothing` follows the same validation as [`set_smoothing`]:
    /// it must be a number in [0, 1]. `bins` must be a positive power of
    /// two (the FFT size is `bins * 2`).
    ///
    /// [`set_smoothing`]: FftAnalyzer::set_smoothing
    pub fn with_params(smoothing: f32, bins: usize) -> Result<Self, AnalyzerError> {
        validate_smoothing(smoothing)?;

        if bins == 0 || !bins.is_power_of_two() {
            return Err(AnalyzerError::InvalidArgument(format!(
                "bins must be a positive power of two, got {}",
                bins
            )));
        }

        Ok(Self {
            bins,
            smoothing,
            sample_rate: DEFAULT_SAMPLE_RATE,
            input: None,
            processor: SpectrumProcessor::new(bins),
            frame: vec![0.0; bins * 2],
            disposed: false,
        })
    }

    /// Number of frequency bins per snapshot, fixed at construction
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Current smoothing time constant
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Set the smoothing time constant and return the applied value.
    ///
    /// Values outside [0, 1] and NaN are rejected with
    /// [`AnalyzerError::InvalidArgument`] and leave the previous value
    /// untouched.
    pub fn set_smoothing(&mut self, value: f32) -> Result<f32, AnalyzerError> {
        self.check_disposed()?;
        validate_smoothing(value)?;
        self.smoothing = value;
        Ok(value)
    }

    /// Sample rate used for block generation and frequency mapping
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Override the sample rate (44100 Hz by default)
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    /// Attach an input source. Accepts any [`SignalSource`] behind
    /// `Arc<Mutex<_>>`, an [`AnalyzerInput`] built with
    /// [`AnalyzerInput::from_source`], or [`AnalyzerInput::Unknown`] for
    /// objects that are not audio producers. Never fails; unknown inputs
    /// simply analyze to all-zero snapshots.
    ///
    /// [`SignalSource`]: crate::sources::SignalSource
    pub fn set_input(&mut self, input: impl Into<AnalyzerInput>) {
        let input = input.into();
        debug!("Analyzer input set to {}", input.name());
        self.input = Some(input);
    }

    /// Detach the current input, if any
    pub fn clear_input(&mut self) {
        self.input = None;
    }

    /// Take a spectrum snapshot.
    ///
    /// Pulls one FFT frame from the attached input at the instant of the
    /// call (never blocking on audio progress), transforms it, and folds
    /// the magnitudes into the smoothing state. The result always has
    /// exactly `bins()` values in [0, 255]. Inactive, unknown, or missing
    /// inputs yield a silent frame, so with no prior signal the snapshot
    /// is exactly all-zero.
    ///
    /// The only failure is [`AnalyzerError::Disposed`].
    pub fn analyze(&mut self) -> Result<Vec<f32>, AnalyzerError> {
        self.check_disposed()?;
        self.pull_frame();
        Ok(self.processor.process(&self.frame, self.smoothing).to_vec())
    }

    /// Time-domain snapshot: the most recent frame pulled from the input,
    /// truncated to `bins()` samples.
    pub fn waveform(&mut self) -> Result<Vec<f32>, AnalyzerError> {
        self.check_disposed()?;
        self.pull_frame();
        Ok(self.frame[..self.bins].to_vec())
    }

    /// Average magnitude over the bins covering [low_hz, high_hz] in the
    /// last snapshot taken by [`analyze`](FftAnalyzer::analyze).
    pub fn energy(&self, low_hz: f32, high_hz: f32) -> Result<f32, AnalyzerError> {
        self.check_disposed()?;
        Ok(self.processor.band_energy(low_hz, high_hz, self.sample_rate))
    }

    /// Spectral centroid of the last snapshot, in Hz. 0.0 for silence.
    pub fn centroid(&self) -> Result<f32, AnalyzerError> {
        self.check_disposed()?;
        Ok(self.processor.centroid(self.sample_rate))
    }

    /// Release the analyzer. Drops the input reference and zeroes the
    /// smoothing state. Idempotent; every other operation fails with
    /// [`AnalyzerError::Disposed`] afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!("Analyzer disposed");
        self.input = None;
        self.processor.reset();
        self.disposed = true;
    }

    /// Whether `dispose()` has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn check_disposed(&self) -> Result<(), AnalyzerError> {
        if self.disposed {
            Err(AnalyzerError::Disposed)
        } else {
            Ok(())
        }
    }

    fn pull_frame(&mut self) {
        match &self.input {
            Some(input) => input.fill_block(&mut self.frame, self.sample_rate),
            None => self.frame.fill(0.0),
        }
    }
}

impl Default for FftAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_smoothing(value: f32) -> Result<(), AnalyzerError> {
    if value.is_nan() {
        return Err(AnalyzerError::InvalidArgument(
            "smoothing must be a number".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(AnalyzerError::InvalidArgument(format!(
            "smoothing must be between 0.0 and 1.0, got {}",
            value
        )));
    }
    Ok(())
}
