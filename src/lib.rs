//! # Overtone - FFT Spectrum Analysis for Live Coding Audio
//!
//! Overtone provides a frequency-domain analyzer for creative-coding audio
//! programs: attach a signal source, take non-blocking spectrum snapshots,
//! and query derived features like band energy and spectral centroid.
//!
//! ## Core Features
//!
//! - **Spectrum snapshots**: `analyze()` returns a fixed-length magnitude
//!   spectrum reflecting whatever the input is producing at call time
//! - **Magnitude smoothing**: a validated smoothing time constant in [0, 1]
//!   blends successive snapshots, exactly like the smoothing of a platform
//!   analyser node
//! - **Pluggable sources**: oscillators, decoded sound files, or anything
//!   implementing [`SignalSource`](sources::SignalSource)
//! - **Graceful degradation**: inputs that are not real audio producers are
//!   accepted and analyze to all-zero snapshots instead of erroring
//! - **Derived features**: time-domain waveform, band energy, spectral
//!   centroid
//!
//! ## Quick Start
//!
//! ### Analyzing an oscillator
//!
//! ```rust
//! use overtone::analyzer::FftAnalyzer;
//! use overtone::sources::{Oscillator, Waveform};
//! use std::sync::{Arc, Mutex};
//!
//! let mut fft = FftAnalyzer::new(); // 1024 bins, smoothing 0.8
//!
//! // The oscillator stays owned by its creator; the analyzer only
//! // holds a reference
//! let osc = Arc::new(Mutex::new(Oscillator::new(440.0, Waveform::Sine)));
//! osc.lock().unwrap().start();
//!
//! fft.set_input(osc.clone());
//!
//! let spectrum = fft.analyze().unwrap();
//! assert_eq!(spectrum.len(), 1024);
//! assert!(spectrum.iter().any(|&m| m != 0.0));
//! ```
//!
//! ### Analyzing a sound file
//!
//! ```rust,no_run
//! use overtone::analyzer::FftAnalyzer;
//! use overtone::sources::SamplePlayer;
//! use std::sync::{Arc, Mutex};
//!
//! let mut fft = FftAnalyzer::new();
//!
//! let player = Arc::new(Mutex::new(SamplePlayer::load("drum.wav").unwrap()));
//! player.lock().unwrap().play();
//!
//! fft.set_input(player.clone());
//! let spectrum = fft.analyze().unwrap();
//! ```
//!
//! ### Unknown inputs degrade to silence
//!
//! ```rust
//! use overtone::analyzer::FftAnalyzer;
//! use overtone::sources::AnalyzerInput;
//!
//! let mut fft = FftAnalyzer::new();
//! fft.set_input(AnalyzerInput::Unknown);
//!
//! let spectrum = fft.analyze().unwrap();
//! assert!(spectrum.iter().all(|&m| m == 0.0));
//! ```
//!
//! ## Architecture
//!
//! - [`analyzer`] - The [`FftAnalyzer`](analyzer::FftAnalyzer) entry point
//! - [`spectrum`] - FFT plan, Hann window, and magnitude smoothing
//! - [`sources`] - The [`SignalSource`](sources::SignalSource) seam and the
//!   built-in oscillator and sample player
//! - [`error`] - [`AnalyzerError`](error::AnalyzerError)
//!
//! ## Snapshot Semantics
//!
//! `analyze()` is a synchronous, non-blocking read: it pulls one FFT frame
//! from the attached source at the instant of the call. It makes no ordering
//! guarantee relative to a source that was just started; callers that need
//! signal in the snapshot should let the source run first. Only
//! `set_smoothing` validates anything, and the only post-construction
//! failure of the remaining operations is use after `dispose()`.

pub mod analyzer;
pub mod error;
pub mod sources;
pub mod spectrum;

pub use analyzer::FftAnalyzer;
pub use error::AnalyzerError;
pub use sources::{AnalyzerInput, Oscillator, SamplePlayer, SignalSource, Waveform};
