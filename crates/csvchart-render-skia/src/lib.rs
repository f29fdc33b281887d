// File: crates/csvchart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of chart descriptions using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use csvchart_core::chart::{ChartDescription, ChartKind};
use csvchart_core::grid::{format_tick, label_stride, linspace};
use csvchart_core::scale::{CategoryScale, ValueRange, ValueScale};
use csvchart_core::theme::{Rgba, Theme};
use csvchart_core::types::PlotRect;
use csvchart_core::RenderOptions;

const VALUE_TICKS: usize = 6;
const MIN_LABEL_SPACING_PX: f32 = 72.0;
const BAR_FILL_RATIO: f32 = 0.6;

/// Render `chart` to PNG bytes.
pub fn render_png_bytes(chart: &ChartDescription, opts: &RenderOptions) -> Result<Vec<u8>> {
    let w = i32::try_from(opts.width)?;
    let h = i32::try_from(opts.height)?;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    let theme = &opts.theme;
    canvas.clear(color(theme.background));

    let rect = PlotRect::new(opts.width, opts.height, &opts.insets);
    let vs = ValueScale::new(&rect, ValueRange::from_chart(chart));
    let cs = CategoryScale::new(&rect, chart.len());

    draw_grid(canvas, &rect, &vs, theme);
    draw_axes(canvas, &rect, theme);
    match chart.kind {
        ChartKind::Line => draw_line_series(canvas, chart, &vs, &cs, theme),
        ChartKind::Bar => draw_bar_series(canvas, chart, &vs, &cs, theme),
    }
    if opts.draw_labels {
        draw_labels(canvas, chart, opts, &rect, &vs, &cs);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    chart: &ChartDescription,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(chart, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(canvas: &skia::Canvas, rect: &PlotRect, vs: &ValueScale, theme: &Theme) {
    let paint = stroke(theme.grid, 1.0);
    for v in linspace(vs.range.min, vs.range.max, VALUE_TICKS) {
        let y = vs.to_px(v);
        canvas.draw_line((rect.left, y), (rect.right, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, rect: &PlotRect, theme: &Theme) {
    let paint = stroke(theme.axis_line, 1.5);
    canvas.draw_line((rect.left, rect.bottom), (rect.right, rect.bottom), &paint);
    canvas.draw_line((rect.left, rect.top), (rect.left, rect.bottom), &paint);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    chart: &ChartDescription,
    vs: &ValueScale,
    cs: &CategoryScale,
    theme: &Theme,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (i, v) in chart.values().enumerate() {
        if !v.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (cs.center(i), vs.to_px(v));
        if pen_down { path.line_to(p); } else { path.move_to(p); }
        pen_down = true;
    }
    canvas.draw_path(&path, &stroke(theme.line_stroke, 2.0));

    let dot = fill(theme.line_stroke);
    for (i, v) in chart.values().enumerate().filter(|(_, v)| v.is_finite()) {
        canvas.draw_circle((cs.center(i), vs.to_px(v)), 3.0, &dot);
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    chart: &ChartDescription,
    vs: &ValueScale,
    cs: &CategoryScale,
    theme: &Theme,
) {
    let base = vs.to_px(0.0_f64.clamp(vs.range.min, vs.range.max));
    let half = (cs.band * BAR_FILL_RATIO).max(1.0) * 0.5;
    let body = fill(theme.bar_fill);
    for (i, v) in chart.values().enumerate().filter(|(_, v)| v.is_finite()) {
        let x = cs.center(i);
        let y = vs.to_px(v);
        let top = y.min(base);
        let bot = y.max(base).max(top + 1.0);
        canvas.draw_rect(skia::Rect::from_ltrb(x - half, top, x + half, bot), &body);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    chart: &ChartDescription,
    opts: &RenderOptions,
    rect: &PlotRect,
    vs: &ValueScale,
    cs: &CategoryScale,
) {
    let theme = &opts.theme;
    let mut font = skia::Font::default();

    // Title
    font.set_size(18.0);
    let (title_w, _) = font.measure_str(&chart.title, None);
    canvas.draw_str(
        &chart.title,
        ((opts.width as f32 - title_w) * 0.5, 28.0),
        &font,
        &fill(theme.title),
    );

    // Legend
    font.set_size(12.0);
    let mid_x = opts.width as f32 * 0.5;
    let swatch = match chart.kind {
        ChartKind::Line => theme.line_stroke,
        ChartKind::Bar => theme.bar_fill,
    };
    canvas.draw_rect(skia::Rect::from_xywh(mid_x - 40.0, 42.0, 14.0, 10.0), &fill(swatch));
    canvas.draw_str(&chart.series_name, (mid_x - 20.0, 51.0), &font, &fill(theme.axis_label));

    // Value ticks, right-aligned against the plot
    font.set_size(11.0);
    let tick_paint = fill(theme.tick);
    for v in linspace(vs.range.min, vs.range.max, VALUE_TICKS) {
        let label = format_tick(v);
        let (w, _) = font.measure_str(&label, None);
        canvas.draw_str(&label, (rect.left - 8.0 - w, vs.to_px(v) + 4.0), &font, &tick_paint);
    }

    // Category ticks
    let max_labels = ((rect.width() / MIN_LABEL_SPACING_PX) as usize).max(1);
    let stride = label_stride(chart.len(), max_labels);
    for (i, c) in chart.categories().enumerate().step_by(stride) {
        let (w, _) = font.measure_str(c, None);
        canvas.draw_str(c, (cs.center(i) - w * 0.5, rect.bottom + 18.0), &font, &tick_paint);
    }

    // Axis titles; the value title is drawn rotated around its anchor
    font.set_size(13.0);
    let label_paint = fill(theme.axis_label);
    let (cw, _) = font.measure_str(&chart.category_axis.label, None);
    canvas.draw_str(
        &chart.category_axis.label,
        (rect.left + (rect.width() - cw) * 0.5, opts.height as f32 - 16.0),
        &font,
        &label_paint,
    );
    let (vw, _) = font.measure_str(&chart.value_axis.label, None);
    let vy = rect.top + rect.height() * 0.5;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(20.0, vy)));
    canvas.draw_str(&chart.value_axis.label, (20.0 - vw * 0.5, vy + 4.0), &font, &label_paint);
    canvas.restore();
}
