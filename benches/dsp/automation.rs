//! Benchmarks for parameter automation lookups.
//!
//! Every scheduled node evaluates its parameters once per frame, so
//! `value_at` sits on the hot path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonekit::dsp::automation::AudioParam;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_automation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/automation");

    // A constant parameter: no events to search
    let flat = AudioParam::new(0.5);

    // The longest curve any tone uses
    let mut curve = AudioParam::new(1.0);
    let _ = curve
        .set_value_at_time(0.0, 0.0)
        .and_then(|p| p.linear_ramp_to_value_at_time(0.5, 0.05))
        .and_then(|p| p.exponential_ramp_to_value_at_time(0.001, 4.0));

    // Many steps, to show the binary search
    let mut steps = AudioParam::new(0.0);
    for i in 0..256 {
        let _ = steps.set_value_at_time(i as f32, i as f64 * 0.01);
    }

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let dt = 1.0 / SAMPLE_RATE as f64;

        for (name, param) in [("flat", &flat), ("envelope", &curve), ("steps", &steps)] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (i, sample) in buffer.iter_mut().enumerate() {
                        *sample = param.value_at(black_box(1.0 + i as f64 * dt));
                    }
                })
            });
        }
    }

    group.finish();
}
