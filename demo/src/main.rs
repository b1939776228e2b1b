use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use tessera_step_indicator::{
    CommandRecorder, Density, MeshCanvas, PxSize, StepIndicator, StepIndicatorStyle,
};
use tracing::info;

/// Renders a step indicator, then updates it after a delay.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Total steps applied after the delay
    #[arg(long, default_value_t = 10)]
    total: i32,
    /// Successful steps applied after the delay
    #[arg(long, default_value_t = 5)]
    successful: i32,
    /// Failed steps applied after the delay
    #[arg(long, default_value_t = 3)]
    failed: i32,
    /// Surface width in physical pixels
    #[arg(long, default_value_t = 360.0)]
    width: f32,
    /// Surface height in physical pixels
    #[arg(long, default_value_t = 360.0)]
    height: f32,
    /// Physical pixels per dp
    #[arg(long, default_value_t = 1.0)]
    density: f64,
    /// Delay before the update, in milliseconds
    #[arg(long, default_value_t = 3000)]
    delay_ms: u64,
    /// TOML file overriding the default style
    #[arg(long)]
    style: Option<PathBuf>,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,step_indicator_demo=info,tessera_step_indicator=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn load_style(path: Option<&PathBuf>) -> anyhow::Result<StepIndicatorStyle> {
    let Some(path) = path else {
        return Ok(StepIndicatorStyle::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn draw_frame(indicator: &mut StepIndicator, size: PxSize) -> anyhow::Result<()> {
    if !indicator.take_redraw_request() {
        return Ok(());
    }

    let mut recorder = CommandRecorder::new();
    indicator.render(&mut recorder, size);
    for command in recorder.commands() {
        info!(
            start = command.start_angle_degrees,
            sweep = command.sweep_angle_degrees,
            color = %command.paint.color.to_hex(),
            "arc"
        );
    }

    let mut canvas = MeshCanvas::new();
    indicator.render(&mut canvas, size);
    let mesh = canvas.finish().context("Failed to tessellate step arcs")?;

    let counts = indicator.counts();
    info!(
        total = counts.total(),
        successful = counts.successful(),
        failed = counts.failed(),
        pending = counts.pending(),
        arcs = mesh.arc_count,
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len() / 3,
        "frame drawn"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let style = load_style(args.style.as_ref())?;
    let size = PxSize::new(args.width, args.height);
    let mut indicator = StepIndicator::new(style, Density::new(args.density));

    draw_frame(&mut indicator, size)?;

    tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
    indicator.set_data(args.total, args.successful, args.failed);

    draw_frame(&mut indicator, size)
}
