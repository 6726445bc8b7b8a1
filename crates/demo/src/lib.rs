// File: crates/demo/src/lib.rs
// Summary: Demo plumbing: CLI arguments, CSV loading and the simulated pointer session.

use anyhow::{Context, Result};
use linegraph_core::{ClientRect, HoverState, LineGraph, Point, Series};
use std::path::{Path, PathBuf};

/// Unit of the CSV timestamp column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeUnit {
    #[default]
    Millis,
    Seconds,
}

impl std::str::FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ms" => Ok(TimeUnit::Millis),
            "s" => Ok(TimeUnit::Seconds),
            other => anyhow::bail!("unknown timestamp unit '{other}' (expected ms or s)"),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub csv_path: Option<PathBuf>,
    pub hover: Option<f64>,
    /// Move the pointer off the surface after the hover.
    pub leave: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub clear_on_leave: bool,
    pub theme: Option<String>,
    pub time_unit: TimeUnit,
}

pub fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--hover" => args.hover = Some(parse_num(&mut it, "--hover")?),
            "--leave" => args.leave = true,
            "--width" => args.width = Some(parse_num(&mut it, "--width")?),
            "--height" => args.height = Some(parse_num(&mut it, "--height")?),
            "--clear-on-leave" => args.clear_on_leave = true,
            "--theme" => args.theme = Some(it.next().context("--theme needs a name")?),
            "--timestamp-unit" => args.time_unit = it.next().context("--timestamp-unit needs ms or s")?.parse()?,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            _ if args.csv_path.is_none() => args.csv_path = Some(PathBuf::from(&a)),
            _ => anyhow::bail!("unexpected argument {a}"),
        }
    }
    Ok(args)
}

fn parse_num(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64> {
    let raw = it.next().with_context(|| format!("{flag} needs a value"))?;
    raw.parse::<f64>().with_context(|| format!("{flag}: '{raw}' is not a number"))
}

/// Hover at `hover` (if given), then leave when `leave` is set.
/// The surface sits at the client origin at its configured size.
pub fn simulate_pointer(graph: &mut LineGraph, hover: Option<f64>, leave: bool) -> HoverState {
    let rect = ClientRect::new(0.0, 0.0, graph.view().width, graph.view().height);
    if let Some(client_x) = hover {
        let state = *graph.pointer_move(client_x, &rect);
        match graph.hover_overlay() {
            Some(o) => log::info!("hover {:?}: {} at {}", state.index(), o.value_label, o.date_label),
            None => log::info!("hover at {client_x} left the graph idle"),
        }
    }
    if leave {
        let state = *graph.pointer_leave();
        log::info!("pointer left ({:?}): hovering = {}", graph.options().leave, state.is_hovering());
    }
    *graph.hover()
}

/// Load an `x,y,timestamp` CSV. Headers are matched case-insensitively; rows that fail to parse are skipped.
///
/// A `timestamp_ms` column is always milliseconds; `timestamp`/`time` use `unit`.
pub fn load_series_csv(path: &Path, unit: TimeUnit) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_x = idx(&["x", "index"]);
    let i_y = idx(&["y", "value", "price", "close"]).context("no y/value column")?;
    let (i_t, unit) = match idx(&["timestamp_ms"]) {
        Some(i) => (Some(i), TimeUnit::Millis),
        None => (idx(&["timestamp", "time"]), unit),
    };
    if i_t.is_none() {
        log::warn!("no timestamp column; dates will read as the epoch");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let x = match i_x {
            Some(i) => num(i),
            None => Some(row as f64),
        };
        let ts = match i_t {
            Some(i) => num(i).and_then(|v| to_millis(v, unit)),
            None => Some(0),
        };
        match (x, num(i_y), ts) {
            (Some(x), Some(y), Some(ts)) => out.push(Point::new(x, y, ts)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} unparseable rows");
    }
    Ok(out)
}

/// Fractional values are rounded to the nearest millisecond.
fn to_millis(value: f64, unit: TimeUnit) -> Option<i64> {
    let ms = match unit {
        TimeUnit::Millis => value,
        TimeUnit::Seconds => value * 1000.0,
    }
    .round();
    (ms.is_finite() && ms.abs() <= i64::MAX as f64).then_some(ms as i64)
}

/// A day of hourly prices drifting around $100.
pub fn synthetic_series() -> Result<Series> {
    let start_ms = 1_700_000_000_000i64;
    let points = (0..24)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 100.0 + (x / 3.0).sin() * 8.0 + (x / 1.7).cos() * 2.0, start_ms + i * 3_600_000)
        })
        .collect::<Vec<_>>();
    Ok(Series::try_new(points)?)
}
