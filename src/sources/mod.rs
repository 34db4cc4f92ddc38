//! Signal sources the analyzer can attach to
//!
//! Anything that can say whether it is currently producing audio and fill a
//! block of samples is a [`SignalSource`]. Real sources (oscillators, sample
//! players) are shared behind `Arc<Mutex<_>>` so the analyzer never owns
//! them: dropping the analyzer leaves the source alive and vice versa.

pub mod oscillator;
pub mod sample_player;

pub use oscillator::{Oscillator, Waveform};
pub use sample_player::SamplePlayer;

use std::sync::{Arc, Mutex};

/// A source of audio samples
pub trait SignalSource {
    /// Whether the source is currently producing audio
    fn is_active(&self) -> bool;

    /// Write the next `output.len()` samples. Inactive sources write silence.
    fn fill_block(&mut self, output: &mut [f32], sample_rate: f32);

    /// Source name for logging
    fn name(&self) -> &str;
}

/// What an analyzer is listening to.
///
/// `Unknown` stands in for any object that is not a real audio producer: the
/// analyzer accepts it without complaint and reads silence from it, so
/// `analyze()` degrades to an all-zero snapshot instead of failing.
#[derive(Clone)]
pub enum AnalyzerInput {
    /// A live signal source, shared with its owner
    Source(Arc<Mutex<dyn SignalSource + Send>>),
    /// Anything that does not produce audio
    Unknown,
}

impl AnalyzerInput {
    /// Wrap an owned source when the caller does not need to keep a handle
    /// to it. Prefer `From<Arc<Mutex<_>>>` when the source should outlive
    /// the analyzer.
    pub fn from_source<S: SignalSource + Send + 'static>(source: S) -> Self {
        AnalyzerInput::Source(Arc::new(Mutex::new(source)))
    }

    /// Name of the attached source, for logging
    pub fn name(&self) -> String {
        match self {
            AnalyzerInput::Source(source) => source
                .lock()
                .map(|s| s.name().to_string())
                .unwrap_or_else(|_| "poisoned".to_string()),
            AnalyzerInput::Unknown => "unknown".to_string(),
        }
    }

    /// Pull one block of samples from the input. Unknown inputs and sources
    /// that are not currently producing audio yield silence.
    pub(crate) fn fill_block(&self, output: &mut [f32], sample_rate: f32) {
        output.fill(0.0);

        if let AnalyzerInput::Source(source) = self {
            if let Ok(mut source) = source.lock() {
                if source.is_active() {
                    source.fill_block(output, sample_rate);
                }
            }
        }
    }
}

impl<S: SignalSource + Send + 'static> From<Arc<Mutex<S>>> for AnalyzerInput {
    fn from(source: Arc<Mutex<S>>) -> Self {
        AnalyzerInput::Source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource {
        active: bool,
    }

    impl SignalSource for FakeSource {
        fn is_active(&self) -> bool {
            self.active
        }

        fn fill_block(&mut self, output: &mut [f32], _sample_rate: f32) {
            output.fill(1.0);
        }

        fn name(&self) -> &str {
            "FakeSource"
        }
    }

    #[test]
    fn test_unknown_input_yields_silence() {
        let input = AnalyzerInput::Unknown;
        let mut block = vec![0.5; 64];
        input.fill_block(&mut block, 44100.0);
        assert!(block.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_inactive_source_yields_silence() {
        let input = AnalyzerInput::from_source(FakeSource { active: false });
        let mut block = vec![0.5; 64];
        input.fill_block(&mut block, 44100.0);
        assert!(block.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_active_source_fills_block() {
        let input = AnalyzerInput::from_source(FakeSource { active: true });
        let mut block = vec![0.0; 64];
        input.fill_block(&mut block, 44100.0);
        assert!(block.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_shared_source_survives_input_drop() {
        let source = Arc::new(Mutex::new(FakeSource { active: true }));
        let input = AnalyzerInput::from(source.clone());
        drop(input);
        assert!(source.lock().unwrap().is_active());
    }
}
