// File: crates/csvchart-cli/src/main.rs
// Summary: Loads a CSV file from disk and writes a line or bar chart of two of its columns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use csvchart_core::render::Format;
use csvchart_server::telemetry::init_tracing;
use csvchart_core::{build_chart, default_title, theme, Alignment, ChartDescription, ChartKind, ChartRequest, RenderOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Html,
    Json,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
            Self::Json => "json",
            Self::Png => "png",
        }
    }
}

/// Chart two columns of a CSV file.
#[derive(Parser, Debug)]
#[command(name = "csvchart", version)]
struct Args {
    /// Input CSV file
    input: PathBuf,

    /// Category (X-axis) column
    #[arg(long = "x")]
    x_column: String,

    /// Value (Y-axis) column
    #[arg(long = "y")]
    y_column: String,

    /// Chart kind: line or bar
    #[arg(long, default_value = "line")]
    kind: ChartKind,

    /// Chart title (defaults to "<y> vs <x>")
    #[arg(long)]
    title: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Output path (defaults to target/out/chart_<stem>_<kind>.<ext>)
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = Alignment::RowSynchronized)]
    alignment: Alignment,

    #[arg(long, default_value = "westeros")]
    theme: String,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let path = &args.input;
    info!("Using input file: {}", path.display());
    let bytes = read_input(path)?;
    let title = args
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default_title(&args.y_column, &args.x_column));
    let request = ChartRequest::new(args.kind, &args.x_column, &args.y_column)
        .with_title(title)
        .with_alignment(args.alignment);

    let chart = build_chart(&bytes, &request)
        .with_context(|| format!("failed to chart '{}'", path.display()))?;
    info!("Charted {} points ({} alignment)", chart.len(), args.alignment);

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| out_name_with(path, args.kind, args.format.extension()));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    write_output(&chart, &opts, args.format, &out)?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn write_output(chart: &ChartDescription, opts: &RenderOptions, format: OutputFormat, out: &Path) -> Result<()> {
    let text_format = match format {
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Html => Format::Html,
        OutputFormat::Json => Format::Json,
        OutputFormat::Png => return write_png(chart, opts, out),
    };
    let body = text_format.render(chart, opts)?;
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(chart: &ChartDescription, opts: &RenderOptions, out: &Path) -> Result<()> {
    csvchart_render_skia::render_to_png(chart, opts, out)
}

#[cfg(not(feature = "png"))]
fn write_png(_chart: &ChartDescription, _opts: &RenderOptions, _out: &Path) -> Result<()> {
    anyhow::bail!("PNG output needs the `png` feature (cargo run -p csvchart-cli --features png)");
}

/// Read the named file as-is; no alternate spelling is tried.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Produce output file name like target/out/chart_<stem>_<kind>.<ext>
fn out_name_with(input: &Path, kind: ChartKind, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{kind}.{ext}"));
    } else {
        out.push(format!("chart_{stem}_{kind}.{ext}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_read_only_under_its_own_name() {
        let dir = std::env::temp_dir().join(format!("csvchart-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let real = dir.join("sleep.csv");
        std::fs::write(&real, "date,score\n2024-01-01,85\n").unwrap();

        assert_eq!(read_input(&real).unwrap(), b"date,score\n2024-01-01,85\n");
        let err = read_input(&dir.join("sleep.cvs")).unwrap_err();
        assert!(err.to_string().contains("sleep.cvs"), "{err}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_output_name() {
        let out = out_name_with(Path::new("data/oura_sleep.csv"), ChartKind::Bar, "svg");
        assert_eq!(out, PathBuf::from("target/out/chart_oura_sleep_bar.svg"));
    }

    #[test]
    fn args_parse_with_defaults() {
        let a = Args::parse_from(["csvchart", "in.csv", "--x", "date", "--y", "steps"]);
        assert_eq!(a.kind, ChartKind::Line);
        assert_eq!(a.format, OutputFormat::Svg);
        assert_eq!(a.alignment, Alignment::RowSynchronized);
        assert!(a.title.is_none());
    }

    #[test]
    fn bad_kind_is_rejected() {
        assert!(Args::try_parse_from(["csvchart", "in.csv", "--x", "d", "--y", "s", "--kind", "pie"]).is_err());
    }
}
