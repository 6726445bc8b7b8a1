// File: crates/linegraph-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use linegraph_core::{LineGraph, RenderOptions, Theme, ViewConfig};

#[test]
fn render_rgba8_buffer() {
    let g = LineGraph::from_triples("rgba", [(0.0, 0.0, 0), (4.0, 4.0, 0)])
        .unwrap()
        .with_view(ViewConfig::new(120.0, 80.0))
        .unwrap();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = g.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (120, 80));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left sits above the rising line: plain background.
    let bg = Theme::default().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);

    // Bottom-left sits inside the filled area: not background.
    let row = (h as usize - 2) * stride;
    assert_ne!(&px[row..row + 3], &[bg.r(), bg.g(), bg.b()]);
}
