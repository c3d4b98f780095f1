use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mineterm_core::{Frame, MineLayout, PlayEngine, RenderOptions, parse_layout};
use std::hint::black_box;

fn largest_board() -> MineLayout {
    let mut text = ".".repeat(20 * 21);
    for row in 0..20 {
        text.replace_range(row * 21 + 20..row * 21 + 21, "\n");
    }
    text.replace_range(20 * 21 - 2..20 * 21 - 1, "*");
    parse_layout(&text).expect("benchmark board is valid")
}

fn bench_reveal(c: &mut Criterion) {
    let layout = largest_board();

    c.bench_function("cascade_20x20", |b| {
        b.iter_batched(
            || PlayEngine::new(layout.clone()),
            |mut engine| black_box(engine.reveal((0, 0))),
            BatchSize::SmallInput,
        )
    });

    let mut engine = PlayEngine::new(layout.clone());
    let _ = engine.reveal((0, 0));
    c.bench_function("render_20x20", |b| {
        b.iter(|| black_box(Frame::from_engine(&engine, None, RenderOptions::default()).to_string()))
    });
}

criterion_group!(benches, bench_reveal);
criterion_main!(benches);
