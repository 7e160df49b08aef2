// File: crates/trendline-render-skia/src/lib.rs
// Summary: Headless Skia renderer for trendline charts: gradient fill, line stroke and selection indicator.
// Notes:
// - Geometry comes from `LineChart::geometry()` in draw-area coordinates; the chart's
//   area should be `plot_area(&opts)` so the drawing lines up with the surface insets.
// - Labels are left to the host; this crate draws shapes only.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;
use trendline_core::{DrawArea, Insets, LineChart, PathCommand};

/// Default surface width in pixels.
pub const WIDTH: i32 = 480;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 240;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub line: skia::Color,
    pub line_width: f32,
    /// Gradient stops for the area under the line, top to bottom.
    pub fill_top: skia::Color,
    pub fill_bottom: skia::Color,
    pub indicator: skia::Color,
    pub indicator_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::new(0.0, 24.0, 16.0, 16.0),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            line: skia::Color::from_argb(255, 64, 160, 255),
            line_width: 2.0,
            fill_top: skia::Color::from_argb(110, 64, 160, 255),
            fill_bottom: skia::Color::from_argb(0, 64, 160, 255),
            indicator: skia::Color::from_argb(255, 200, 60, 220),
            indicator_radius: 6.0,
        }
    }
}

/// Draw area inside the surface for the given options.
pub fn plot_area(opts: &RenderOptions) -> DrawArea {
    DrawArea::from_size(opts.width as f64, opts.height as f64).inset(&opts.insets)
}

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let pt = |p: trendline_core::ScreenPoint| skia::Point::new(p.x as f32, p.y as f32);
    let mut path = skia::Path::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to(pt(p)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p)); }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => { path.cubic_to(pt(ctrl1), pt(ctrl2), pt(to)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn draw_chart(canvas: &skia::Canvas, chart: &LineChart, opts: &RenderOptions) {
    canvas.clear(opts.background);
    let geometry = chart.geometry();
    if geometry.line.is_empty() {
        return;
    }
    let area = chart.area();

    // Fill
    let fill_path = to_skia_path(&geometry.fill.commands());
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    let colors = [opts.fill_top, opts.fill_bottom];
    let shader = skia::Shader::linear_gradient(
        (
            skia::Point::new(area.x as f32, area.y as f32),
            skia::Point::new(area.x as f32, area.bottom() as f32),
        ),
        &colors[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );
    match shader {
        Some(s) => { fill.set_shader(s); }
        None => { fill.set_color(opts.fill_top); }
    }
    canvas.draw_path(&fill_path, &fill);

    // Line
    let line_path = to_skia_path(&geometry.line.commands());
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_color(opts.line);
    canvas.draw_path(&line_path, &stroke);

    // Indicator
    if let Some(sel) = chart.selected() {
        let mut guide = skia::Paint::default();
        guide.set_anti_alias(true);
        guide.set_stroke_width(1.0);
        guide.set_color(opts.indicator.with_a(120));
        let x = sel.point.x as f32;
        canvas.draw_line((x, area.y as f32), (x, area.bottom() as f32), &guide);

        let mut knob = skia::Paint::default();
        knob.set_anti_alias(true);
        knob.set_style(skia::paint::Style::Fill);
        knob.set_color(opts.indicator);
        canvas.draw_circle((x, sel.point.y as f32), opts.indicator_radius, &knob);
    }
}

/// Render into a tightly packed, unpremultiplied RGBA8 buffer.
/// Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &LineChart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    anyhow::ensure!(opts.width > 0 && opts.height > 0, "surface size must be positive, got {}x{}", opts.width, opts.height);
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    draw_chart(surface.canvas(), chart, opts);

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = opts.width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("failed to read back surface pixels");
    }
    debug!(width = opts.width, height = opts.height, "rendered chart");
    Ok((pixels, opts.width as u32, opts.height as u32, row_bytes))
}

/// Render and encode as PNG in memory.
pub fn render_to_png_bytes(chart: &LineChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (pixels, w, h, _) = render_to_rgba8(chart, opts)?;
    let img = image::RgbaImage::from_raw(w, h, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG")?;
    Ok(out.into_inner())
}

/// Render the chart to a PNG file, creating parent directories as needed.
pub fn render_to_png(chart: &LineChart, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
