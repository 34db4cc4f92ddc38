//! Spectrum snapshot CLI - print a frequency report for a WAV file

use overtone::analyzer::FftAnalyzer;
use overtone::sources::SamplePlayer;
use std::env;
use std::sync::{Arc, Mutex};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <wav_file> [--frames N]", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let frames = args
        .iter()
        .position(|a| a == "--frames")
        .and_then(|i| args.get(i + 1))
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(8);

    match snapshot_report(filename, frames) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error analyzing {filename}: {e}");
            std::process::exit(2);
        }
    }
}

fn snapshot_report(filename: &str, frames: usize) -> Result<String, Box<dyn std::error::Error>> {
    let player = SamplePlayer::load(filename)?;
    let file_rate = player.file_sample_rate() as f32;
    let num_frames = player.len();

    let shared = Arc::new(Mutex::new(player));
    shared.lock().unwrap().play();

    let mut fft = FftAnalyzer::new();
    fft.set_sample_rate(file_rate);
    fft.set_input(shared.clone());

    // Run several snapshots so the smoothed spectrum settles
    let mut spectrum = Vec::new();
    for _ in 0..frames {
        spectrum = fft.analyze()?;
    }

    let hz_per_bin = file_rate / (fft.bins() as f32 * 2.0);
    let (peak_bin, peak_mag) = spectrum
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, &m)| (i, m))
        .unwrap_or((0, 0.0));

    let mut report = String::new();
    report.push_str(&format!("=== Spectrum Snapshot: {} ===\n", filename));
    report.push_str(&format!("Sample Rate: {} Hz\n", file_rate));
    report.push_str(&format!(
        "Duration:    {:.3} seconds ({} frames)\n",
        num_frames as f32 / file_rate,
        num_frames
    ));
    report.push('\n');

    if peak_mag == 0.0 {
        report.push_str("EMPTY AUDIO (silence detected)\n");
        return Ok(report);
    }

    report.push_str("[Frequency Analysis]\n");
    report.push_str(&format!(
        "Dominant Freq:      {:.1} Hz (magnitude {:.1})\n",
        peak_bin as f32 * hz_per_bin,
        peak_mag
    ));
    report.push_str(&format!(
        "Spectral Centroid:  {:.1} Hz\n",
        fft.centroid()?
    ));

    report.push_str("\n[Band Energy]\n");
    let bands = [
        ("bass", 20.0, 250.0),
        ("low-mid", 250.0, 1000.0),
        ("mid", 1000.0, 4000.0),
        ("high", 4000.0, (file_rate / 2.0).min(16000.0)),
    ];
    for (label, lo, hi) in bands {
        report.push_str(&format!(
            "{:<10} {:>7.1} - {:>7.1} Hz: {:>6.1}\n",
            label,
            lo,
            hi,
            fft.energy(lo, hi)?
        ));
    }

    Ok(report)
}
