//! Sample file playback source
//!
//! Decodes a WAV file with hound (int16, int24, float32; stereo is downmixed
//! to mono) and plays it through a simple playhead. The analyzer reads from
//! the playhead position, so a snapshot reflects wherever playback has
//! reached at the instant of the call.

use crate::error::AnalyzerError;
use crate::sources::SignalSource;
use std::path::Path;
use tracing::info;

/// Decoded sound file with a playhead
///
/// # Example
/// ```no_run
/// use overtone::sources::SamplePlayer;
///
/// let mut player = SamplePlayer::load("drum.wav").unwrap();
/// player.play();
/// ```
#[derive(Debug)]
pub struct SamplePlayer {
    frames: Vec<f32>,
    file_sample_rate: u32,
    playhead: usize,
    playing: bool,
    looping: bool,
    label: String,
}

impl SamplePlayer {
    /// Load and decode a WAV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        // Read raw samples as f32
        let raw_samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(AnalyzerError::from)?,
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<Result<_, _>>()
                    .map_err(AnalyzerError::from)?
            }
        };

        // Downmix to mono; the analyzer reads a single channel
        let frames = if spec.channels > 1 {
            let channels = spec.channels as usize;
            raw_samples
                .chunks(channels)
                .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                .collect()
        } else {
            raw_samples
        };

        if frames.is_empty() {
            return Err(AnalyzerError::Decode(format!(
                "{} contains no audio frames",
                path.display()
            )));
        }

        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sample".to_string());

        info!(
            "Loaded {}: {} frames at {} Hz",
            label,
            frames.len(),
            spec.sample_rate
        );

        Ok(Self {
            frames,
            file_sample_rate: spec.sample_rate,
            playhead: 0,
            playing: false,
            looping: false,
            label,
        })
    }

    /// Build a player from already-decoded frames
    pub fn from_frames(frames: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            frames,
            file_sample_rate: sample_rate,
            playhead: 0,
            playing: false,
            looping: false,
            label: "frames".to_string(),
        }
    }

    /// Start playback from the current playhead
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop playback; the playhead stays where it is
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Rewind the playhead to the start
    pub fn rewind(&mut self) {
        self.playhead = 0;
    }

    /// Loop back to the start instead of going silent at end-of-file
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Sample rate the file was recorded at
    pub fn file_sample_rate(&self) -> u32 {
        self.file_sample_rate
    }

    /// Number of decoded mono frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the file decoded to zero frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current playhead position in frames
    pub fn playhead(&self) -> usize {
        self.playhead
    }
}

impl SignalSource for SamplePlayer {
    fn is_active(&self) -> bool {
        self.playing
            && !self.frames.is_empty()
            && (self.looping || self.playhead < self.frames.len())
    }

    fn fill_block(&mut self, output: &mut [f32], _sample_rate: f32) {
        // An empty buffer has nothing to loop over; treat it as silence
        if !self.playing || self.frames.is_empty() {
            output.fill(0.0);
            return;
        }

        for sample in output.iter_mut() {
            if self.playhead >= self.frames.len() {
                if self.looping {
                    self.playhead = 0;
                } else {
                    *sample = 0.0;
                    continue;
                }
            }
            *sample = self.frames[self.playhead];
            self.playhead += 1;
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}
