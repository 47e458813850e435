//! Renders every tone offline and checks what reaches the output.

use rustfft::{num_complex::Complex, FftPlanner};
use tonekit::{play_tone_on, Destination, OfflineContext, SoundId};

const SAMPLE_RATE: f32 = 48_000.0;

fn render(id: SoundId, seconds: f64) -> Vec<f32> {
    let mut ctx = OfflineContext::new(SAMPLE_RATE);
    play_tone_on(Some(&ctx), id);
    ctx.render(seconds)
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |m, s| m.max(s.abs()))
}

fn index(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64) as usize
}

/// Frequency of the strongest bin in `samples` (Hann windowed)
fn dominant_frequency(samples: &[f32]) -> f32 {
    let n = samples.len();
    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let w = 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / n as f32).cos();
            Complex::new(s * w, 0.0)
        })
        .collect();

    FftPlanner::new().plan_fft_forward(n).process(&mut buffer);

    let (bin, _) = buffer[1..n / 2]
        .iter()
        .enumerate()
        .fold((0, 0.0f32), |best, (i, c)| {
            let mag = c.norm();
            if mag > best.1 {
                (i + 1, mag)
            } else {
                best
            }
        });
    bin as f32 * SAMPLE_RATE / n as f32
}

#[test]
fn every_tone_is_audible_and_bounded() {
    let limits = [
        (SoundId::Classic, 0.3),
        (SoundId::Ethereal, 0.6),
        (SoundId::Cosmic, 0.1),
        (SoundId::Zen, 0.5),
        (SoundId::Digital, 0.1),
    ];

    for (id, limit) in limits {
        let out = render(id, 4.5);
        assert!(out.iter().all(|s| s.is_finite()), "{id}: non-finite sample");
        let p = peak(&out);
        assert!(p > 0.0, "{id}: silent");
        assert!(p <= limit + 1e-4, "{id}: peak {p} above {limit}");
    }
}

#[test]
fn tones_are_silent_after_their_last_stop() {
    let ends = [
        (SoundId::Classic, 0.25),
        (SoundId::Ethereal, 3.0),
        (SoundId::Cosmic, 0.6),
        (SoundId::Zen, 4.0),
        (SoundId::Digital, 0.4),
    ];

    for (id, end) in ends {
        let out = render(id, 4.5);
        let tail = &out[index(end) + 2..];
        assert!(tail.iter().all(|&s| s == 0.0), "{id}: sound after {end}s");
    }
}

#[test]
fn classic_has_a_gap_between_beeps() {
    let out = render(SoundId::Classic, 0.3);
    assert!(peak(&out[..index(0.1)]) > 0.25);
    assert_eq!(peak(&out[index(0.1) + 1..index(0.15) - 1]), 0.0);
    assert!(peak(&out[index(0.15)..index(0.25)]) > 0.25);
}

#[test]
fn finished_graphs_are_released() {
    let mut ctx = OfflineContext::new(SAMPLE_RATE);
    for id in SoundId::ALL {
        play_tone_on(Some(&ctx), id);
    }
    assert_eq!(ctx.active_graphs(), 5);

    ctx.render(0.5);
    // classic (0.25) and digital (0.4) are gone
    assert_eq!(ctx.active_graphs(), 3);

    ctx.render(4.0);
    assert_eq!(ctx.active_graphs(), 0);
}

#[test]
fn overlapping_playbacks_are_independent() {
    let classic = render(SoundId::Classic, 0.5);
    let digital = render(SoundId::Digital, 0.5);

    let mut ctx = OfflineContext::new(SAMPLE_RATE);
    play_tone_on(Some(&ctx), SoundId::Classic);
    play_tone_on(Some(&ctx), SoundId::Digital);
    let both = ctx.render(0.5);

    for ((b, c), d) in both.iter().zip(&classic).zip(&digital) {
        assert!((b - (c + d)).abs() < 1e-6);
    }
}

#[test]
fn repeated_playback_starts_from_current_time() {
    let first = render(SoundId::Digital, 0.5);

    let mut ctx = OfflineContext::new(SAMPLE_RATE);
    ctx.render(1.0);
    assert!((ctx.current_time() - 1.0).abs() < 1e-12);
    play_tone_on(Some(&ctx), SoundId::Digital);
    let second = ctx.render(0.5);

    let p1 = peak(&first);
    let p2 = peak(&second);
    assert!((p1 - p2).abs() < 1e-6);
}

#[test]
fn digital_steps_through_the_arpeggio() {
    let out = render(SoundId::Digital, 0.4);
    let expected = [523.25, 659.25, 783.99, 1046.50];
    let window = 4096;
    let resolution = SAMPLE_RATE / window as f32;

    for (i, &freq) in expected.iter().enumerate() {
        let start = index(i as f64 * 0.1) + 352;
        let found = dominant_frequency(&out[start..start + window]);
        assert!(
            (found - freq).abs() <= 2.0 * resolution,
            "step {i}: expected {freq} Hz, found {found} Hz"
        );
    }
}

#[test]
fn zen_settles_on_its_carrier() {
    let out = render(SoundId::Zen, 3.0);
    let window = 8192;
    let resolution = SAMPLE_RATE / window as f32;

    let start = index(2.5);
    let found = dominant_frequency(&out[start..start + window]);
    assert!(
        (found - 200.0).abs() <= 2.0 * resolution,
        "expected 200 Hz, found {found} Hz"
    );
}
