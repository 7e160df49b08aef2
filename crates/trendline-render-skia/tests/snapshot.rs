// File: crates/trendline-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots for straight and curved charts with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing to ease first run.

use trendline_core::{ChartOptions, LineChart, LineShape, PointerEvent, SampleSeries};
use trendline_render_skia::{plot_area, render_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(shape: LineShape, drag_x: Option<f64>) -> Vec<u8> {
    let opts = RenderOptions::default();
    let series = SampleSeries::new(vec![333.5, 332.5, 331.5, 285.0, 285.2, 286.1, 288.7, 288.5, 289.4, 287.7]);
    let mut chart = LineChart::new(series, plot_area(&opts), ChartOptions { shape, ..ChartOptions::default() })
        .expect("chart");
    if let Some(x) = drag_x {
        chart.handle_pointer(PointerEvent::start(x, 0.0));
    }
    render_to_png_bytes(&chart, &opts).expect("render bytes")
}

#[test]
fn golden_straight() {
    write_or_compare("straight.png", &render(LineShape::Straight, None));
}

#[test]
fn golden_curved_with_selection() {
    write_or_compare("curved_selected.png", &render(LineShape::Curved, Some(200.0)));
}
