// File: crates/linegraph-core/src/text.rs
// Summary: Tooltip label shaping and drawing with Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular digits keep the dollar amount from jittering while hovering.
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` horizontally centered on `cx`, with its top edge at `top`.
    /// The label is shifted back inside `[0, surface_width]` when it would overflow.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        top: f32,
        surface_width: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = (cx - w * 0.5).min(surface_width - w).max(0.0);
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
