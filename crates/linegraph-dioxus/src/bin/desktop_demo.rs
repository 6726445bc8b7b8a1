// File: crates/linegraph-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop LineGraphView demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = linegraph_dioxus::ui::run_demo_ui() {
        eprintln!("linegraph-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = linegraph_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
}
