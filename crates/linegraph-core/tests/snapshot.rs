// File: crates/linegraph-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small graph (with a hover overlay) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use linegraph_core::{ClientRect, LineGraph, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let mut g = LineGraph::from_triples(
        "golden",
        [(0.0, 0.0, 0), (1.0, 1.0, 1_000), (2.0, 0.0, 2_000), (3.0, 1.5, 3_000), (4.0, 1.0, 4_000)],
    )
    .expect("valid series");
    g.pointer_move(150.0, &ClientRect::new(0.0, 0.0, 300.0, 150.0));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    g.render_to_png_bytes(&opts).expect("render bytes")
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_hover_graph() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("hover_graph.png");

    if bless_mode() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), (300, 150));
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        assert_eq!(got_img.dimensions(), (300, 150));
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
