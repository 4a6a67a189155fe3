use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use heartview::config::Config;
use heartview::draw::Color;
use heartview::heart::{MeasureSpec, SizeBasis};
use heartview::units::{DisplayMetrics, Unit};
use heartview::HeartRenderer;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "heartview")]
#[command(version, about = "Render a shaded heart widget to PNG")]
struct Cli {
    /// Config file (defaults to ~/.config/heartview/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Exact widget width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// Exact widget height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<f64>,

    /// Axis that drives the size; the other follows the heart's aspect ratio
    #[arg(long, value_enum, value_name = "BASIS")]
    size_basis: Option<SizeBasisArg>,

    /// Fill color (name, #RRGGBB or #AARRGGBB)
    #[arg(long, value_name = "COLOR", value_parser = parse_color_arg)]
    fill: Option<Color>,

    /// Gradient edge color
    #[arg(long, value_name = "COLOR", value_parser = parse_color_arg)]
    edge: Option<Color>,

    /// Outline color; its alpha applies to the whole ring
    #[arg(long, value_name = "COLOR", value_parser = parse_color_arg)]
    stroke: Option<Color>,

    /// Outline width, in --unit
    #[arg(long, value_name = "LEN")]
    stroke_width: Option<f64>,

    /// Padding on every side, in --unit
    #[arg(long, value_name = "LEN")]
    padding: Option<f64>,

    /// Unit for --stroke-width and --padding
    #[arg(long, value_enum, default_value = "dip")]
    unit: UnitArg,

    /// Gradient radius multiplier
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    radius: Option<f64>,

    /// Normalized gradient center, each axis in -1..1
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    center: Option<(f64, f64)>,

    /// Gradient center from a touch point in widget pixels
    #[arg(
        long,
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true,
        conflicts_with = "center"
    )]
    touch: Option<(f64, f64)>,

    /// Pixels per dp
    #[arg(long, value_name = "DENSITY")]
    density: Option<f64>,

    /// PNG output path
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the computed geometry as JSON instead of writing a PNG
    #[arg(long, action = ArgAction::SetTrue)]
    print_geometry: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeBasisArg {
    None,
    Width,
    Height,
}

impl From<SizeBasisArg> for SizeBasis {
    fn from(arg: SizeBasisArg) -> Self {
        match arg {
            SizeBasisArg::None => SizeBasis::None,
            SizeBasisArg::Width => SizeBasis::Width,
            SizeBasisArg::Height => SizeBasis::Height,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Px,
    Dip,
    Sp,
    Pt,
    In,
    Mm,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Px => Unit::Px,
            UnitArg::Dip => Unit::Dip,
            UnitArg::Sp => Unit::Sp,
            UnitArg::Pt => Unit::Pt,
            UnitArg::In => Unit::In,
            UnitArg::Mm => Unit::Mm,
        }
    }
}

#[derive(Serialize)]
struct GeometryReport<'a> {
    size: heartview::heart::Size,
    geometry: Option<&'a heartview::heart::CachedGeometry>,
    draw_list: heartview::draw::DrawList,
}

fn parse_color_arg(value: &str) -> Result<Color, String> {
    heartview::util::parse_color(value).ok_or_else(|| format!("unknown color '{value}'"))
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate '{part}': {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(density) = cli.density {
        config.output.density = density;
        config.validate_and_clamp();
    }

    let metrics = DisplayMetrics::with_density(config.output.density);
    let mut renderer = HeartRenderer::from_style(&config.heart, metrics);
    apply_overrides(&mut renderer, &cli);

    let exact = |value: Option<f64>| value.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);
    let size = renderer.measure(
        exact(cli.width.or(config.output.width)),
        exact(cli.height.or(config.output.height)),
    );
    if let Some((x, y)) = cli.touch {
        renderer.touch(x, y);
    }

    if cli.print_geometry {
        let draw_list = renderer.paint();
        let report = GeometryReport {
            size,
            geometry: renderer.geometry(),
            draw_list,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let path = cli.output.unwrap_or(config.output.path);
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    renderer
        .render_png(&mut writer)
        .with_context(|| format!("Failed to render heart to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!(
        "Wrote {:.0}x{:.0} heart to {}",
        size.width,
        size.height,
        path.display()
    );
    Ok(())
}

fn apply_overrides(renderer: &mut HeartRenderer, cli: &Cli) {
    if let Some(basis) = cli.size_basis {
        renderer.set_size_basis(basis.into());
    }
    if let Some(color) = cli.fill {
        renderer.set_fill_color(color);
    }
    if let Some(color) = cli.edge {
        renderer.set_edge_color(color);
    }
    if let Some(color) = cli.stroke {
        renderer.set_stroke_color(color);
    }
    if let Some(width) = cli.stroke_width {
        renderer.set_stroke_width(width.max(0.0), cli.unit.into());
    }
    if let Some(padding) = cli.padding {
        renderer.set_uniform_padding(padding.max(0.0), cli.unit.into());
    }
    if let Some(radius) = cli.radius {
        renderer.set_radius_percent(radius);
    }
    if let Some((x, y)) = cli.center {
        renderer.set_gradient_center(x, y);
    }
}
