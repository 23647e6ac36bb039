use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use squiggly::{CpuSurface, ProgressConfig, Rect, Rgba8, SquigglyProgress, Timestamp, TintDef};

#[derive(Parser, Debug)]
#[command(name = "squiggly", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the bar as it looks after `--time-ms` of animation, as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct SurfaceArgs {
    /// Progress config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 48)]
    height: u32,

    /// Override the config's progress fraction.
    #[arg(long)]
    level: Option<f64>,

    /// Opaque background as #RRGGBB; transparent when omitted.
    #[arg(long)]
    background: Option<TintDef>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Simulated time since the first frame.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Simulation frame rate used to reach `--time-ms`.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Number of frames to write.
    #[arg(long)]
    frames: u32,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop animating at this frame index, to capture the wave flattening out.
    #[arg(long)]
    stop_at: Option<u32>,

    /// Output directory; frames are written as `frame_00000.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut bar, bounds, background) = prepare(&args.surface)?;
    let step = frame_step_ms(args.fps)?;

    let mut t = 0u64;
    while t < args.time_ms {
        bar.advance(Timestamp(t));
        t = t.saturating_add(step);
    }

    let mut surface = CpuSurface::new(args.surface.width, args.surface.height, background)?;
    bar.draw(&mut surface, bounds, Timestamp(args.time_ms));
    write_png(&args.out, surface)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let (mut bar, bounds, background) = prepare(&args.surface)?;
    let step = frame_step_ms(args.fps)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        if args.stop_at == Some(i) {
            bar.set_animate(false);
        }
        let now = Timestamp(u64::from(i) * step);
        let mut surface = CpuSurface::new(args.surface.width, args.surface.height, background)?;
        bar.draw(&mut surface, bounds, now);
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), surface)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn prepare(args: &SurfaceArgs) -> anyhow::Result<(SquigglyProgress, Rect, Option<Rgba8>)> {
    let cfg = match &args.config {
        Some(path) => ProgressConfig::from_path(path)?,
        None => ProgressConfig::default(),
    };
    let mut bar = SquigglyProgress::from_config(&cfg);
    if let Some(level) = args.level {
        bar.set_level(level);
    }

    let background = args.background.map(TintDef::to_rgba8);

    let bounds = Rect::new(0.0, 0.0, f64::from(args.width), f64::from(args.height));
    Ok((bar, bounds, background))
}

fn frame_step_ms(fps: u32) -> anyhow::Result<u64> {
    anyhow::ensure!(fps > 0, "fps must be > 0");
    Ok((1000 / u64::from(fps)).max(1))
}

fn write_png(path: &Path, surface: CpuSurface) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let frame = surface.into_frame();
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
