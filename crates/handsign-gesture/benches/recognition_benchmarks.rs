//! Benchmarks for per-frame recognition cost.
//!
//! Frames arrive at camera rate (30 fps, 33ms apart). Classifying a frame and
//! updating evidence must stay far below that so the tracker and overlay
//! renderer keep the rest of the budget. Target: full per-frame update
//! < 1ms p95.

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use handsign_core::config::RecognitionConfig;
use handsign_core::{LandmarkFrame, Timestamp};
use handsign_gesture::fixtures::{self, Finger};
use handsign_gesture::{GestureCatalog, GestureRecognizer};

/// A cycle of hand shapes so predicates take both branches.
fn frame_cycle() -> Vec<LandmarkFrame> {
    let mut two = fixtures::open_hand();
    fixtures::fold(&mut two, Finger::Ring);
    fixtures::fold(&mut two, Finger::Pinky);

    let mut fist_centre = fixtures::fist();
    fixtures::move_to(&mut fist_centre, 0.5, 0.5);

    vec![
        fixtures::open_hand(),
        fixtures::fist(),
        fixtures::pointing(),
        fixtures::palm_down(),
        two,
        fist_centre,
    ]
}

fn bench_catalog_evaluate(c: &mut Criterion) {
    let catalog = GestureCatalog::builtin();
    let frames = frame_cycle();

    let mut group = c.benchmark_group("catalog");
    group.sample_size(200);

    group.bench_function("evaluate_builtin", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let detections = catalog.evaluate(&frames[idx % frames.len()]);
            idx += 1;
            detections
        });
    });

    group.finish();
}

fn bench_recognizer_update(c: &mut Criterion) {
    let frames = frame_cycle();
    let catalog = Arc::new(GestureCatalog::builtin());

    let mut group = c.benchmark_group("recognizer");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    // Same shape held: exercises live confidence and commits.
    group.bench_function("held_gesture", |b| {
        let mut recognizer = GestureRecognizer::new(Arc::clone(&catalog), RecognitionConfig::default());
        let mut t = 0i64;
        b.iter(|| {
            t += 33;
            recognizer.process(Some(&frames[2]), Timestamp(t))
        });
    });

    // Changing shape every frame: mostly decay.
    group.bench_function("changing_gesture", |b| {
        let mut recognizer = GestureRecognizer::new(Arc::clone(&catalog), RecognitionConfig::default());
        let mut t = 0i64;
        let mut idx = 0usize;
        b.iter(|| {
            t += 33;
            idx += 1;
            recognizer.process(Some(&frames[idx % frames.len()]), Timestamp(t))
        });
    });

    group.bench_function("no_hand", |b| {
        let mut recognizer = GestureRecognizer::new(Arc::clone(&catalog), RecognitionConfig::default());
        let mut t = 0i64;
        b.iter(|| {
            t += 33;
            recognizer.process(None, Timestamp(t))
        });
    });

    group.finish();
}

/// Explicit p95 latency assertion for one full frame update.
fn bench_frame_latency_assertion(c: &mut Criterion) {
    let frames = frame_cycle();
    let mut recognizer = GestureRecognizer::with_builtin_catalog();
    let target = Duration::from_micros(1000);

    let mut group = c.benchmark_group("frame_latency_assertion");
    group.sample_size(100);
    group.bench_function("process_frame", |b| {
        let mut t = 0i64;
        let mut idx = 0usize;
        b.iter(|| {
            t += 33;
            idx += 1;
            recognizer.process(Some(&frames[idx % frames.len()]), Timestamp(t))
        });
    });
    group.finish();

    let mut recognizer = GestureRecognizer::with_builtin_catalog();
    let mut times = Vec::with_capacity(1000);
    for i in 0..1000usize {
        let frame = &frames[(i / 20) % frames.len()];
        let start = std::time::Instant::now();
        let _outcome = recognizer.process(Some(frame), Timestamp(i as i64 * 33));
        times.push(start.elapsed());
    }

    times.sort();
    let p95 = times[949];
    let median = times[499];

    eprintln!("\n=== Per-frame recognition latency (1000 frames) ===");
    eprintln!("Median:  {:?}", median);
    eprintln!("p95:     {:?} (target: {:?})", p95, target);
    eprintln!("Commits: {}", recognizer.transcript().tokens().count());

    assert!(
        p95 < target,
        "Per-frame recognition p95 {:?} exceeds target {:?}",
        p95,
        target
    );
}

criterion_group!(
    benches,
    bench_catalog_evaluate,
    bench_recognizer_update,
    bench_frame_latency_assertion
);
criterion_main!(benches);
