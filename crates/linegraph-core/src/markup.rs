// File: crates/linegraph-core/src/markup.rs
// Summary: Headless SVG / HTML rendering of a LineGraph (paths, gradient, hover overlay, tooltips).

use crate::chart::LineGraph;
use crate::error::Result;
use crate::hover::HoverOverlay;
use crate::path;
use crate::theme::{css_hex, css_opacity, Theme};

/// Id of the gradient the area path fills with.
pub const GRADIENT_ID: &str = "Gradient";

/// The `<svg>` element: gradient defs, line and area paths, and the hover guide/marker.
pub fn render_svg(graph: &LineGraph, theme: &Theme) -> Result<String> {
    let scale = graph.scale()?;
    let view = graph.view();
    let line = path::line_path(graph.series(), &scale);
    let area = path::area_path(graph.series(), &scale);

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg id="{id}" class="linechart-svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        id = escape(graph.id()),
        w = view.width,
        h = view.height,
    ));
    out.push_str(&format!(
        concat!(
            r#"<defs><linearGradient id="{gid}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" stop-color="{c0}" stop-opacity="{o0}"/>"#,
            r#"<stop offset="100%" stop-color="{c1}" stop-opacity="{o1}"/>"#,
            r#"</linearGradient></defs>"#,
        ),
        gid = GRADIENT_ID,
        c0 = css_hex(theme.area_top),
        o0 = css_opacity(theme.area_top),
        c1 = css_hex(theme.area_bottom),
        o1 = css_opacity(theme.area_bottom),
    ));
    out.push_str(&format!(r#"<path class="linechart-path" d="{line}"/>"#));
    out.push_str(&format!(r#"<path class="linechart-area" d="{area}" style="fill: url(#{GRADIENT_ID})"/>"#));

    if let Some(o) = HoverOverlay::from_state(graph.hover(), &scale, view.height, graph.options().utc_offset) {
        out.push_str(&format!(
            r#"<line class="linechart-line" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
            x = o.guide_x,
            y1 = o.guide_y1,
            y2 = o.guide_y2,
        ));
        out.push_str(&format!(
            r#"<circle class="linechart-point" r="{r}" cx="{cx}" cy="{cy}"/>"#,
            r = o.marker_radius,
            cx = o.marker_x,
            cy = o.marker_y,
        ));
    }
    out.push_str("</svg>");
    Ok(out)
}

/// The whole component: a `div.linechart` holding the two tooltips (while hovering) and the SVG.
pub fn render_html(graph: &LineGraph, theme: &Theme) -> Result<String> {
    let svg = render_svg(graph, theme)?;
    let mut out = String::from(r#"<div class="linechart">"#);
    if let Some(o) = graph.hover_overlay() {
        out.push_str(&format!(
            r#"<div class="linechart-tooltip top" style="transform: translateX(calc({x}px - 50%))"><p>{label}</p></div>"#,
            x = o.guide_x,
            label = escape(&o.value_label),
        ));
        out.push_str(&format!(
            r#"<div class="linechart-tooltip bottom" style="transform: translate(calc({x}px - 50%), 50%); bottom: {b}px"><p>{label}</p></div>"#,
            x = o.guide_x,
            b = o.date_bottom,
            label = escape(&o.date_label),
        ));
    }
    out.push_str(&svg);
    out.push_str("</div>");
    Ok(out)
}

/// Escape text for use in XML attribute values and element content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
