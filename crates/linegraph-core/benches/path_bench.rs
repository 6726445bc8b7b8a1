use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linegraph_core::{area_path, line_path, ClientRect, LineGraph, ScaleMapper, Series, ViewConfig, XOrigin};

fn make_series(n: usize) -> Series {
    Series::from_triples((0..n).map(|i| {
        let x = i as f64;
        let y = (x * 0.01).sin() * 100.0 + x * 0.001 + 1_000.0;
        (x, y, 1_700_000_000_000 + i as i64 * 60_000)
    }))
    .expect("non-empty")
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");
    let view = ViewConfig::new(800.0, 400.0);
    for &n in &[1_000usize, 100_000usize] {
        let series = make_series(n);
        group.bench_function(format!("line_area_{n}"), |b| {
            b.iter(|| {
                let scale = ScaleMapper::new(&series, &view, XOrigin::Zero).expect("valid view");
                let line = line_path(&series, &scale);
                let area = area_path(&series, &scale);
                black_box((line.to_string(), area.to_string()));
            })
        });
    }
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut graph = LineGraph::new("bench", make_series(100_000))
        .with_view(ViewConfig::new(800.0, 400.0))
        .expect("valid view");
    let rect = ClientRect::new(0.0, 0.0, 800.0, 400.0);
    c.bench_function("pointer_move_100k", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x = (x + 7.0) % 800.0;
            black_box(*graph.pointer_move(x, &rect));
        })
    });
}

criterion_group!(benches, bench_paths, bench_hover);
criterion_main!(benches);
