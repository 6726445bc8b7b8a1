// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y,timestamp CSV (or a synthetic series), optionally hovers, and writes SVG/HTML/PNG.

use anyhow::{Context, Result};
use linegraph_core::{render_html, render_svg, theme, GraphOptions, LeaveBehavior, LineGraph, RenderOptions, Series, ViewConfig};
use linegraph_demo::{load_series_csv, parse_args, simulate_pointer, synthetic_series};
use std::path::PathBuf;

fn main() -> Result<()> {
    init_logging()?;
    let args = parse_args(std::env::args().skip(1))?;

    let series = match &args.csv_path {
        Some(path) => {
            let points = load_series_csv(path, args.time_unit)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            log::info!("loaded {} points from {}", points.len(), path.display());
            Series::try_new(points).context("CSV rows do not form a valid series")?
        }
        None => {
            log::info!("no CSV given; using a synthetic series");
            synthetic_series()?
        }
    };

    let view = ViewConfig::new(
        args.width.unwrap_or(linegraph_core::types::DEFAULT_WIDTH),
        args.height.unwrap_or(linegraph_core::types::DEFAULT_HEIGHT),
    );
    let options = GraphOptions {
        leave: if args.clear_on_leave { LeaveBehavior::Clear } else { LeaveBehavior::Retain },
        ..GraphOptions::default()
    };
    let mut graph = LineGraph::new("linegraph-demo", series).with_view(view)?.with_options(options);
    simulate_pointer(&mut graph, args.hover, args.leave);

    let mut opts = RenderOptions::default();
    if let Some(name) = &args.theme {
        opts.theme = theme::find(name);
        if !opts.theme.name.eq_ignore_ascii_case(name) {
            log::warn!("unknown theme '{name}'; using {}", opts.theme.name);
        }
    }
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let svg_path = out_dir.join("linegraph.svg");
    std::fs::write(&svg_path, render_svg(&graph, &opts.theme)?).with_context(|| format!("writing {}", svg_path.display()))?;
    println!("Wrote {}", svg_path.display());

    let html_path = out_dir.join("linegraph.html");
    std::fs::write(&html_path, render_html(&graph, &opts.theme)?)
        .with_context(|| format!("writing {}", html_path.display()))?;
    println!("Wrote {}", html_path.display());

    let png_path = out_dir.join("linegraph.png");
    graph.render_to_png(&opts, &png_path)?;
    println!("Wrote {}", png_path.display());

    Ok(())
}

/// stderr logger; level from `LINEGRAPH_LOG` (default info).
fn init_logging() -> Result<()> {
    let level = std::env::var("LINEGRAPH_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("installing logger")?;
    Ok(())
}
