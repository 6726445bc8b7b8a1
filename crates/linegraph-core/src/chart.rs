// File: crates/linegraph-core/src/chart.rs
// Summary: LineGraph component model (series, view, hover state) and headless PNG/RGBA
//          rendering using Skia CPU raster surfaces.

use std::cell::OnceCell;

use anyhow::Result;
use skia_safe as skia;

use crate::error::Result as GraphResult;
use crate::geometry::SurfaceGeometry;
use crate::hover::{HoverOverlay, HoverState, PointerTracker};
use crate::path::{self, Path, PathCommand};
use crate::scale::ScaleMapper;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::{GraphOptions, ViewConfig};

pub struct RenderOptions {
    pub theme: Theme,
    /// Draw the value/date tooltips (needs system fonts; tests usually turn it off).
    pub draw_labels: bool,
    /// Draw the guide line and marker when hovering.
    pub draw_hover: bool,
    pub line_width: f32,
    pub label_size: f32,
    /// Built on the first labelled render, then reused by every render with these options.
    shaper: OnceCell<TextShaper>,
}

impl RenderOptions {
    pub fn text_shaper(&self) -> &TextShaper {
        self.shaper.get_or_init(TextShaper::new)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            draw_labels: true,
            draw_hover: true,
            line_width: 2.0,
            label_size: 11.0,
            shaper: OnceCell::new(),
        }
    }
}

/// One line graph instance: its data, surface size, options and current hover state.
#[derive(Clone, Debug)]
pub struct LineGraph {
    id: String,
    series: Series,
    view: ViewConfig,
    options: GraphOptions,
    hover: HoverState,
}

impl LineGraph {
    /// `id` names the rendered surface; hosts use it to look up its on-screen geometry.
    pub fn new(id: impl Into<String>, series: Series) -> Self {
        Self {
            id: id.into(),
            series,
            view: ViewConfig::default(),
            options: GraphOptions::default(),
            hover: HoverState::Idle,
        }
    }

    pub fn from_triples(
        id: impl Into<String>,
        data: impl IntoIterator<Item = (f64, f64, i64)>,
    ) -> GraphResult<Self> {
        Ok(Self::new(id, Series::from_triples(data)?))
    }

    pub fn with_view(mut self, view: ViewConfig) -> GraphResult<Self> {
        self.set_view(view)?;
        Ok(self)
    }

    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn series(&self) -> &Series { &self.series }
    pub fn view(&self) -> &ViewConfig { &self.view }
    pub fn options(&self) -> &GraphOptions { &self.options }
    pub fn hover(&self) -> &HoverState { &self.hover }

    /// Replace the data. The hover state is reset: its index referred to the old series.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
        self.hover = HoverState::Idle;
    }

    pub fn set_view(&mut self, view: ViewConfig) -> GraphResult<()> {
        view.validate()?;
        self.view = view;
        self.hover = HoverState::Idle;
        Ok(())
    }

    /// Fresh scales for the current series and view.
    pub fn scale(&self) -> GraphResult<ScaleMapper> {
        ScaleMapper::new(&self.series, &self.view, self.options.x_origin)
    }

    pub fn line_path(&self) -> GraphResult<Path> {
        Ok(path::line_path(&self.series, &self.scale()?))
    }

    pub fn area_path(&self) -> GraphResult<Path> {
        Ok(path::area_path(&self.series, &self.scale()?))
    }

    pub fn tracker(&self) -> PointerTracker {
        PointerTracker::new(&self.view, &self.options)
    }

    /// Pointer moved to `client_x` (viewport pixels); geometry is looked up by this graph's id.
    pub fn pointer_move<G: SurfaceGeometry + ?Sized>(&mut self, client_x: f64, geometry: &G) -> &HoverState {
        match self.scale() {
            Ok(scale) => {
                self.hover = self.tracker().on_move(&self.hover, client_x, &self.id, geometry, &self.series, &scale);
            }
            Err(e) => log::error!("pointer move on '{}' skipped: {e}", self.id),
        }
        &self.hover
    }

    pub fn pointer_leave(&mut self) -> &HoverState {
        self.hover = self.tracker().on_leave(&self.hover);
        &self.hover
    }

    /// Guide line, marker and tooltip texts for the current hover, if any.
    pub fn hover_overlay(&self) -> Option<HoverOverlay> {
        let scale = self.scale().ok()?;
        HoverOverlay::from_state(&self.hover, &scale, self.view.height, self.options.utc_offset)
    }

    /// Render the graph to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        log::debug!("rendered '{}' to {} PNG bytes", self.id, data.size());
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8. Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = self.view.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = self.view.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        let scale = self.scale()?;
        let theme = &opts.theme;
        canvas.clear(theme.background);

        draw_area(canvas, &path::area_path(&self.series, &scale), theme, self.view.height as f32);
        draw_line(canvas, &path::line_path(&self.series, &scale), theme, opts.line_width);

        let Some(overlay) = HoverOverlay::from_state(&self.hover, &scale, self.view.height, self.options.utc_offset)
        else {
            return Ok(());
        };
        if opts.draw_hover {
            draw_guide_and_marker(canvas, &overlay, theme);
        }
        if opts.draw_labels {
            let shaper = opts.text_shaper();
            let w = self.view.width as f32;
            let size = opts.label_size;
            let x = overlay.guide_x as f32;
            shaper.draw_centered(canvas, &overlay.value_label, x, 2.0, w, size, theme.tooltip_text);
            let date_top = self.view.height as f32 - size * 1.4;
            shaper.draw_centered(canvas, &overlay.date_label, x, date_top, w, size, theme.tooltip_text);
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(x, y) => { out.move_to((x as f32, y as f32)); }
            PathCommand::LineTo(x, y) => { out.line_to((x as f32, y as f32)); }
        }
    }
    out
}

fn draw_area(canvas: &skia::Canvas, area: &Path, theme: &Theme, height: f32) {
    let mut sk = to_skia_path(area);
    sk.close();

    let stops = [theme.area_top, theme.area_bottom];
    let shader = skia::Shader::linear_gradient(
        ((0.0, 0.0), (0.0, height)),
        &stops[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    match shader {
        Some(s) => { fill.set_shader(s); }
        None => { fill.set_color(theme.area_bottom); }
    }
    canvas.draw_path(&sk, &fill);
}

fn draw_line(canvas: &skia::Canvas, line: &Path, theme: &Theme, width: f32) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(theme.line_stroke);
    canvas.draw_path(&to_skia_path(line), &stroke);
}

fn draw_guide_and_marker(canvas: &skia::Canvas, overlay: &HoverOverlay, theme: &Theme) {
    let mut guide = skia::Paint::default();
    guide.set_anti_alias(true);
    guide.set_style(skia::paint::Style::Stroke);
    guide.set_stroke_width(1.0);
    guide.set_color(theme.guide_line);
    let x = overlay.guide_x as f32;
    canvas.draw_line((x, overlay.guide_y1 as f32), (x, overlay.guide_y2 as f32), &guide);

    let center = (overlay.marker_x as f32, overlay.marker_y as f32);
    let r = overlay.marker_radius as f32;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);
    canvas.draw_circle(center, r, &fill);

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    ring.set_color(theme.marker_stroke);
    canvas.draw_circle(center, r, &ring);
}
