//! Benchmarks for the five notification tones.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonekit::{
    graph::{GraphNode, RenderCtx},
    play_tone_on,
    tones::{self, SoundId},
    OfflineContext,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_tones(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/tones");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        // Mid-tone for every sound, while all of its sources are running
        let ctx = RenderCtx::new(SAMPLE_RATE, 0.1);

        for id in SoundId::ALL {
            let Ok(mut graph) = tones::build(id, 0.0) else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(id.as_str(), size), &size, |b, _| {
                b.iter(|| {
                    graph.render_block(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}

/// Every tone triggered at once, rendered through the offline destination
pub fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/overlap");

    group.bench_function("all_tones_1s", |b| {
        b.iter(|| {
            let mut ctx = OfflineContext::new(SAMPLE_RATE);
            for id in SoundId::ALL {
                play_tone_on(Some(&ctx), id);
            }
            black_box(ctx.render(1.0));
        })
    });

    group.finish();
}
