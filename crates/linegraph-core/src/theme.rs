// File: crates/linegraph-core/src/theme.rs
// Summary: Color presets for the raster renderer and the gradient stops in SVG markup.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub line_stroke: skia::Color,
    /// Area gradient color at the top of the surface.
    pub area_top: skia::Color,
    /// Area gradient color at the bottom of the surface.
    pub area_bottom: skia::Color,
    pub guide_line: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    /// Light-blue line over a fading fill on white.
    pub fn sky() -> Self {
        Self {
            name: "sky",
            background: skia::Color::from_argb(255, 255, 255, 255),
            line_stroke: skia::Color::from_argb(255, 0x77, 0xBD, 0xF7),
            area_top: skia::Color::from_argb(191, 0x77, 0xBD, 0xF7),   // 0.75
            area_bottom: skia::Color::from_argb(64, 0x77, 0xBD, 0xF7), // 0.25
            guide_line: skia::Color::from_argb(255, 0xBD, 0xC2, 0xC6),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            marker_stroke: skia::Color::from_argb(255, 0x77, 0xBD, 0xF7),
            tooltip_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            area_top: skia::Color::from_argb(160, 64, 160, 255),
            area_bottom: skia::Color::from_argb(24, 64, 160, 255),
            guide_line: skia::Color::from_argb(255, 255, 230, 70),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            marker_stroke: skia::Color::from_argb(255, 64, 160, 255),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            area_top: skia::Color::from_argb(140, 32, 120, 200),
            area_bottom: skia::Color::from_argb(20, 32, 120, 200),
            guide_line: skia::Color::from_argb(255, 30, 120, 240),
            marker_fill: skia::Color::from_argb(255, 250, 250, 252),
            marker_stroke: skia::Color::from_argb(255, 32, 120, 200),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::sky() }
}

/// `#rrggbb` for an SVG/CSS color attribute (alpha goes in a separate opacity attribute).
pub fn css_hex(c: skia::Color) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

/// Alpha channel as a 0..=1 opacity, trimmed to two decimals.
pub fn css_opacity(c: skia::Color) -> f64 {
    (c.a() as f64 / 255.0 * 100.0).round() / 100.0
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::sky(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to sky.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
