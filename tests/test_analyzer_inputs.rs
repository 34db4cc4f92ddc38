//! Input attachment behaviors: oscillator, sample player, unknown objects

use overtone::analyzer::FftAnalyzer;
use overtone::sources::{AnalyzerInput, Oscillator, SamplePlayer, SignalSource, Waveform};
use std::f32::consts::PI;
use std::sync::{Arc, Mutex};

#[test]
fn test_started_oscillator_produces_nonzero_spectrum() {
    let mut fft = FftAnalyzer::new();

    let osc = Arc::new(Mutex::new(Oscillator::new(440.0, Waveform::Sine)));
    fft.set_input(osc.clone());
    osc.lock().unwrap().start();

    // Let the oscillator run for a few frames, as a caller would wait
    // for a real source to begin producing signal
    let mut spectrum = Vec::new();
    for _ in 0..4 {
        spectrum = fft.analyze().unwrap();
    }

    let some_frequency_is_not_zero = spectrum.iter().any(|&m| m != 0.0);
    assert!(
        some_frequency_is_not_zero,
        "Started oscillator should show up in the spectrum"
    );
}

#[test]
fn test_stopped_oscillator_analyzes_to_zero() {
    let mut fft = FftAnalyzer::new();

    let osc = Oscillator::default_sine();
    assert_eq!(osc.freq(), 440.0);
    assert_eq!(osc.waveform(), Waveform::Sine);
    fft.set_input(Arc::new(Mutex::new(osc)));

    let spectrum = fft.analyze().unwrap();
    assert!(
        spectrum.iter().all(|&m| m == 0.0),
        "Oscillator that was never started should analyze to silence"
    );
}

#[test]
fn test_playing_sample_produces_nonzero_spectrum() {
    let mut fft = FftAnalyzer::new();

    // A decoded "sound file": one second of 220 Hz tone
    let frames: Vec<f32> = (0..44100)
        .map(|i| (2.0 * PI * 220.0 * i as f32 / 44100.0).sin() * 0.8)
        .collect();
    let player = Arc::new(Mutex::new(SamplePlayer::from_frames(frames, 44100)));

    fft.set_input(player.clone());
    player.lock().unwrap().play();

    let spectrum = fft.analyze().unwrap();
    let some_frequency_is_not_zero = spectrum.iter().any(|&m| m != 0.0);
    assert!(
        some_frequency_is_not_zero,
        "Playing sample should show up in the spectrum"
    );
}

#[test]
fn test_empty_looping_player_analyzes_to_zero() {
    let mut fft = FftAnalyzer::new();

    // A degenerate sound file with zero frames, set to loop and playing
    let player = Arc::new(Mutex::new(SamplePlayer::from_frames(vec![], 44100)));
    {
        let mut guard = player.lock().unwrap();
        guard.set_looping(true);
        guard.play();
    }
    fft.set_input(player);

    let spectrum = fft.analyze().unwrap();
    assert_eq!(spectrum.len(), fft.bins());
    assert!(
        spectrum.iter().all(|&m| m == 0.0),
        "A source with no frames must degrade to silence, not fail"
    );
}

#[test]
fn test_unknown_input_analyzes_to_zero() {
    let mut fft = FftAnalyzer::new();
    fft.set_input(AnalyzerInput::Unknown);

    let spectrum = fft.analyze().unwrap();
    assert_eq!(spectrum.len(), fft.bins());
    assert!(
        spectrum.iter().all(|&m| m == 0.0),
        "Unknown input must degrade to an all-zero snapshot, not fail"
    );
}

#[test]
fn test_input_can_be_replaced() {
    let mut fft = FftAnalyzer::with_params(0.0, 256).unwrap();

    let osc = Arc::new(Mutex::new(Oscillator::new(1000.0, Waveform::Sine)));
    osc.lock().unwrap().start();
    fft.set_input(osc);

    let with_signal = fft.analyze().unwrap();
    assert!(with_signal.iter().any(|&m| m != 0.0));

    // Swapping to an unknown object silences subsequent snapshots
    fft.set_input(AnalyzerInput::Unknown);
    let silent = fft.analyze().unwrap();
    assert!(silent.iter().all(|&m| m == 0.0));
}

#[test]
fn test_analyzer_does_not_own_its_source() {
    let osc = Arc::new(Mutex::new(Oscillator::new(440.0, Waveform::Sine)));
    osc.lock().unwrap().start();

    {
        let mut fft = FftAnalyzer::new();
        fft.set_input(osc.clone());
        fft.dispose();
    } // analyzer gone

    // The source is untouched by the analyzer's lifecycle
    let mut guard = osc.lock().unwrap();
    assert!(guard.is_active(), "Source must survive the analyzer");
    guard.stop();
}
