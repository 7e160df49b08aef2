// File: crates/demo/src/main.rs
// Summary: Demo loads a dated value CSV (or built-in sample), simulates a drag across the chart,
//          prints readouts and writes PNG snapshots.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trendline_core::{
    ChartOptions, EdgePolicy, LineChart, LineShape, PointerEvent, SampleSeries, SpecifierFormatter,
};
use trendline_render_skia::{plot_area, render_to_png, RenderOptions};

const USAGE: &str = "usage: trendline-demo [CSV] [--straight] [--clamp] [--sticky] [--drag X] [--format SPEC]";

#[derive(Debug, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    shape: LineShape,
    policy: EdgePolicy,
    sticky: bool,
    drag: Option<f64>,
    format: String,
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: None,
        shape: LineShape::Curved,
        policy: EdgePolicy::Deselect,
        sticky: false,
        drag: None,
        format: "%.1f".to_string(),
    };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--straight" => args.shape = LineShape::Straight,
            "--clamp" => args.policy = EdgePolicy::Clamp,
            "--sticky" => args.sticky = true,
            "--drag" => {
                let v = it.next().context("--drag needs a value")?;
                args.drag = Some(v.parse().with_context(|| format!("invalid --drag value '{v}'"))?);
            }
            "--format" => args.format = it.next().context("--format needs a value")?,
            "-h" | "--help" => anyhow::bail!("{USAGE}"),
            other if other.starts_with("--") => anyhow::bail!("unknown flag '{other}'\n{USAGE}"),
            other => args.input = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let formatter = SpecifierFormatter::new(&args.format)
        .with_context(|| format!("bad --format '{}'", args.format))?;

    let series = match &args.input {
        Some(path) => {
            println!("Using input file: {}", path.display());
            let samples = load_dated_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            SampleSeries::from_dated(samples)
        }
        None => {
            println!("No input file; using built-in sample data");
            sample_series()
        }
    };
    println!("Loaded {} samples", series.count());
    if series.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    let opts = RenderOptions::default();
    let chart_opts = ChartOptions {
        shape: args.shape,
        edge_policy: args.policy,
        sticky_readout: args.sticky,
        ..ChartOptions::default()
    };
    let mut chart = LineChart::with_formatter(series, plot_area(&opts), chart_opts, formatter)?;

    if let (Some(min), Some(max)) = (&chart.geometry().min_label, &chart.geometry().max_label) {
        println!("Low  {} at #{} (label x={:.1})", min.label, min.index, min.point.x);
        println!("High {} at #{} (label x={:.1})", max.label, max.index, max.point.x);
    }
    print_readout(&chart, "Headline");

    let out_dir = PathBuf::from("target/out");
    let out = out_dir.join("trendline.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    // Simulated drag: either to the requested x, or a sweep across the area.
    let area = chart.area();
    let xs: Vec<f64> = match args.drag {
        Some(x) => vec![x],
        None => (0..=4).map(|i| area.x + area.width * i as f64 / 4.0).collect(),
    };
    let mid_y = area.y + area.height * 0.5;
    chart.handle_pointer(PointerEvent::start(xs[0], mid_y));
    for &x in &xs {
        let update = chart.handle_pointer(PointerEvent::moved(x, mid_y));
        if update.index_changed {
            info!(x, index = ?update.state.active_index, "selection moved");
        }
    }
    match chart.selected() {
        Some(sel) => {
            print_readout(&chart, &format!("Selected #{}", sel.index));
            let out_sel = out_dir.join("trendline_selected.png");
            render_to_png(&chart, &opts, &out_sel)?;
            println!("Wrote {}", out_sel.display());
        }
        None => warn!("drag ended outside the chart; nothing selected"),
    }
    chart.handle_pointer(PointerEvent::end(xs[xs.len() - 1], mid_y));
    Ok(())
}

fn print_readout(chart: &LineChart, title: &str) {
    let Some(r) = chart.readout() else { return };
    let pct = r.percent_change.map(|p| format!(" ({p}%)")).unwrap_or_default();
    let when = r.timestamp.map(|t| format!(" @ {}", t.format("%Y-%m-%d %H:%M"))).unwrap_or_default();
    let dir = if r.is_gain() { "+" } else { "" };
    println!(
        "{title}: {}{when}  change {dir}{}{pct}",
        chart.format_value(r.value),
        chart.format_value(r.change)
    );
}

/// The widget's preview data.
fn sample_series() -> SampleSeries {
    SampleSeries::new(vec![
        333.502, 332.495, 331.51, 285.019, 285.197, 286.118, 288.737, 288.455, 289.391, 287.691, 285.878,
        286.46, 286.252, 284.652, 284.129, 284.188,
    ])
}

/// Load `date,value` rows. Header names are matched loosely; rows with unparseable
/// values are skipped, unparseable dates fall back to one day per row.
fn load_dated_csv(path: &Path) -> Result<Vec<(DateTime<Utc>, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["date", "time", "timestamp", "datetime"]);
    let i_value = idx(&["value", "close", "price", "data"])
        .with_context(|| format!("no value column in headers {headers:?}"))?;
    if i_time.is_none() {
        warn!(?headers, "no date column; using row order");
    }

    let epoch = DateTime::<Utc>::UNIX_EPOCH;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite()) else {
            warn!(row, "skipping row without a numeric value");
            continue;
        };
        let t = i_time
            .and_then(|i| rec.get(i))
            .and_then(parse_time)
            .unwrap_or_else(|| epoch + chrono::Duration::days(row as i64));
        out.push((t, value));
    }
    Ok(out)
}

fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec
        return if n > 10_i64.pow(12) {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        };
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
