// File: crates/linegraph-core/tests/smoke.rs
// Purpose: End-to-end raster render smoke test writing a PNG, idle and hovering.

use linegraph_core::{ClientRect, LineGraph, RenderOptions, TextShaper};

fn graph() -> LineGraph {
    LineGraph::from_triples(
        "smoke",
        [(0.0, 0.0, 0), (1.0, 2.0, 60_000), (2.0, 1.0, 120_000), (3.0, 3.5, 180_000), (4.0, 2.5, 240_000)],
    )
    .unwrap()
}

#[test]
fn render_smoke_png() {
    let g = graph();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    g.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = g.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_hovering_png() {
    let mut g = graph();
    g.pointer_move(120.0, &ClientRect::new(0.0, 0.0, 300.0, 150.0));
    assert!(g.hover().is_hovering());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let hovering = g.render_to_png_bytes(&opts).expect("render bytes");
    assert!(hovering.starts_with(&[137, 80, 78, 71]));

    opts.draw_hover = false;
    let plain = g.render_to_png_bytes(&opts).expect("render bytes");
    assert_ne!(hovering, plain, "guide line and marker should change the image");
}

#[test]
fn labelled_renders_share_one_text_shaper() {
    let mut g = graph();
    g.pointer_move(120.0, &ClientRect::new(0.0, 0.0, 300.0, 150.0));

    let opts = RenderOptions::default();
    let first = g.render_to_png_bytes(&opts).expect("render bytes");
    let shaper: *const TextShaper = opts.text_shaper();
    let second = g.render_to_png_bytes(&opts).expect("render bytes");
    assert!(std::ptr::eq(shaper, opts.text_shaper()), "font collection should be built once");
    assert_eq!(first, second);
}
