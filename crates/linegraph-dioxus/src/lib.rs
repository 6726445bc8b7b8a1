// File: crates/linegraph-dioxus/src/lib.rs
// Summary: Dioxus LineGraphView component (desktop only) plus the renderer-agnostic frame it draws.
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - `GraphFrame` holds everything the component puts on screen for one render. It is
//   plain data, so it is built and tested without a UI runtime.

use linegraph_core::error::Result;
use linegraph_core::markup::GRADIENT_ID;
use linegraph_core::theme::{css_hex, css_opacity};
use linegraph_core::{HoverOverlay, HoverState, LineGraph, Theme};

/// Gradient stop as SVG attribute values.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: &'static str,
    pub color: String,
    pub opacity: f64,
}

/// One render's worth of component output.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphFrame {
    pub id: String,
    pub view_box: String,
    pub width: f64,
    pub height: f64,
    pub gradient_id: &'static str,
    pub stops: [GradientStop; 2],
    pub line_d: String,
    pub area_d: String,
    pub area_style: String,
    pub overlay: Option<HoverOverlay>,
}

impl GraphFrame {
    /// Derive the frame for `graph` under an externally owned `hover` state.
    pub fn build(graph: &LineGraph, hover: &HoverState, theme: &Theme) -> Result<Self> {
        let scale = graph.scale()?;
        let view = graph.view();
        let line = linegraph_core::line_path(graph.series(), &scale);
        let area = linegraph_core::area_path(graph.series(), &scale);
        Ok(Self {
            id: graph.id().to_string(),
            view_box: format!("0 0 {} {}", view.width, view.height),
            width: view.width,
            height: view.height,
            gradient_id: GRADIENT_ID,
            stops: [
                GradientStop { offset: "0%", color: css_hex(theme.area_top), opacity: css_opacity(theme.area_top) },
                GradientStop { offset: "100%", color: css_hex(theme.area_bottom), opacity: css_opacity(theme.area_bottom) },
            ],
            line_d: line.to_string(),
            area_d: area.to_string(),
            area_style: format!("fill: url(#{GRADIENT_ID})"),
            overlay: HoverOverlay::from_state(hover, &scale, view.height, graph.options().utc_offset),
        })
    }

    /// Inline style of the value tooltip (above the surface, centered on the guide line).
    pub fn top_tooltip_style(&self) -> Option<String> {
        self.overlay.as_ref().map(|o| format!("transform: translateX(calc({}px - 50%))", o.guide_x))
    }

    /// Inline style of the date tooltip (below the surface).
    pub fn bottom_tooltip_style(&self) -> Option<String> {
        self.overlay
            .as_ref()
            .map(|o| format!("transform: translate(calc({}px - 50%), 50%); bottom: {}px", o.guide_x, o.date_bottom))
    }
}

/// Orders pointer moves whose geometry arrives asynchronously.
///
/// Every move takes a ticket before it awaits the surface rect; once the rect arrives
/// only the newest ticket may update the hover state, so moves settle in delivery order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveSequencer {
    issued: u64,
}

impl MoveSequencer {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// False once a later move has been issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use linegraph_core::{ClientRect, GraphOptions, Point, Series, ViewConfig};
    use std::rc::Rc;

    #[derive(Props, Clone)]
    pub struct LineGraphProps {
        /// Element id of the SVG surface; must be unique in the document.
        pub id: String,
        /// Non-empty, ordered by x.
        pub data: Vec<Point>,
        #[props(default = 300.0)]
        pub width: f64,
        #[props(default = 150.0)]
        pub height: f64,
        #[props(default)]
        pub options: GraphOptions,
        #[props(default = Theme::sky())]
        pub theme: Theme,
        /// Called with every new hover state (move and leave).
        #[props(default)]
        pub on_hover: Option<EventHandler<HoverState>>,
    }

    impl PartialEq for LineGraphProps {
        fn eq(&self, other: &Self) -> bool {
            // Theme carries no PartialEq; compare by preset name.
            self.id == other.id
                && self.data == other.data
                && self.width == other.width
                && self.height == other.height
                && self.options == other.options
                && self.theme.name == other.theme.name
        }
    }

    fn graph_from_props(props: &LineGraphProps) -> linegraph_core::error::Result<LineGraph> {
        let series = Series::try_new(props.data.clone())?;
        Ok(LineGraph::new(props.id.clone(), series)
            .with_view(ViewConfig::new(props.width, props.height))?
            .with_options(props.options))
    }

    /// Line graph with hover guide line, marker and currency/date tooltips.
    ///
    /// Hover state lives in a signal and is replaced wholesale by the tracker on every
    /// pointer event. The surface geometry is read from the mounted SVG element.
    #[component]
    pub fn LineGraphView(props: LineGraphProps) -> Element {
        let mut hover = use_signal(HoverState::default);
        let mut surface = use_signal(|| Option::<Rc<MountedData>>::None);
        let mut moves = use_signal(MoveSequencer::default);

        let graph = match graph_from_props(&props) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("line graph '{}' not rendered: {e}", props.id);
                return rsx! { div { class: "linechart linechart-error", "{e}" } };
            }
        };
        let frame = match GraphFrame::build(&graph, &hover.read(), &props.theme) {
            Ok(f) => f,
            Err(e) => return rsx! { div { class: "linechart linechart-error", "{e}" } },
        };
        let on_hover = props.on_hover;

        let move_graph = graph.clone();
        let onmousemove = move |evt: MouseEvent| {
            let client_x = evt.client_coordinates().x;
            let graph = move_graph.clone();
            let ticket = moves.write().issue();
            spawn(async move {
                let rect = match surface.cloned() {
                    Some(el) => el
                        .get_client_rect()
                        .await
                        .ok()
                        .map(|r| ClientRect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)),
                    None => None,
                };
                if !moves.peek().is_current(ticket) {
                    log::trace!("dropping stale pointer move at {client_x}");
                    return;
                }
                let Ok(scale) = graph.scale() else { return };
                let current = hover.cloned();
                let next = graph.tracker().on_move(&current, client_x, graph.id(), &rect, graph.series(), &scale);
                if next != current {
                    hover.set(next);
                    if let Some(cb) = &on_hover { cb.call(next); }
                }
            });
        };

        let tracker = graph.tracker();
        let onmouseleave = move |_: MouseEvent| {
            // a move still awaiting its rect must not re-enter after the leave
            moves.write().issue();
            let current = hover.cloned();
            let next = tracker.on_leave(&current);
            if next != current {
                hover.set(next);
                if let Some(cb) = &on_hover { cb.call(next); }
            }
        };

        let top_style = frame.top_tooltip_style();
        let bottom_style = frame.bottom_tooltip_style();
        let [s0, s1] = frame.stops.clone();
        let overlay = frame.overlay.clone();

        rsx! {
            div { class: "linechart",
                if let (Some(o), Some(style)) = (overlay.clone(), top_style) {
                    div { class: "linechart-tooltip top", style: style,
                        p { {o.value_label} }
                    }
                }
                if let (Some(o), Some(style)) = (overlay.clone(), bottom_style) {
                    div { class: "linechart-tooltip bottom", style: style,
                        p { {o.date_label} }
                    }
                }
                svg {
                    id: frame.id.clone(),
                    class: "linechart-svg",
                    view_box: frame.view_box.clone(),
                    width: frame.width,
                    height: frame.height,
                    onmounted: move |evt: MountedEvent| surface.set(Some(evt.data())),
                    onmousemove: onmousemove,
                    onmouseleave: onmouseleave,
                    defs {
                        linearGradient { id: frame.gradient_id, x1: "0%", y1: "0%", x2: "0%", y2: "100%",
                            stop { offset: s0.offset, stop_color: s0.color, stop_opacity: s0.opacity }
                            stop { offset: s1.offset, stop_color: s1.color, stop_opacity: s1.opacity }
                        }
                    }
                    path { class: "linechart-path", d: frame.line_d.clone() }
                    path { class: "linechart-area", d: frame.area_d.clone(), style: frame.area_style.clone() }
                    if let Some(o) = overlay {
                        line { class: "linechart-line", x1: o.guide_x, y1: o.guide_y1, x2: o.guide_x, y2: o.guide_y2 }
                        circle { class: "linechart-point", r: o.marker_radius, cx: o.marker_x, cy: o.marker_y }
                    }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> std::result::Result<(), String> {
        #[component]
        fn App() -> Element {
            // A day of minute prices drifting around $100.
            let start_ms = 1_700_000_000_000i64;
            let data: Vec<Point> = (0..240)
                .map(|i| {
                    let x = i as f64;
                    let y = 100.0 + (x / 18.0).sin() * 6.0 + (x / 5.0).cos() * 1.5;
                    Point::new(x, y, start_ms + i as i64 * 60_000)
                })
                .collect();
            let mut last = use_signal(|| String::from("move the pointer over the graph"));
            rsx! {
                div { style: "padding:24px; font-family:sans-serif;",
                    super::ui::LineGraphView {
                        id: "demo-graph",
                        data,
                        width: 600.0,
                        height: 300.0,
                        on_hover: move |s: HoverState| {
                            last.set(match s.index() {
                                Some(i) => format!("hovering index {i}"),
                                None => "idle".to_string(),
                            })
                        },
                    }
                    p { "{last}" }
                }
            }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;height:100%}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> std::result::Result<(), &'static str> {
    Err("linegraph-dioxus built without `desktop` feature; enable features to run UI demo")
}
