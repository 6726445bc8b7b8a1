// File: crates/linegraph-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs for the raster renderer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
