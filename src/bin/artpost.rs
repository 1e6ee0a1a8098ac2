use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use artpost::pipeline;

#[derive(Parser, Debug)]
#[command(name = "artpost", version, about = "Post-process card, icon and animation art")]
struct Cli {
    /// Log debug detail.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate sparkling glints over the opaque, bright parts of an image (GIF).
    AnimateGlints(GlintArgs),
    /// Animate a looping hue rotation of the colorful parts of an image (GIF).
    AnimateShimmer(ShimmerArgs),
    /// Remove the background, crop and fit onto a 600x420 card canvas (PNG).
    ProcessCard(CardArgs),
    /// Crop to content, pad to a square and resize (PNG).
    ProcessIcon(IconArgs),
    /// Resize to a square favicon (PNG).
    ResizeFavicon(FaviconArgs),
    /// Print image size and channel layout.
    CheckImage(CheckArgs),
}

#[derive(Args, Debug)]
struct InOut {
    /// Input image.
    input: PathBuf,
    /// Output path.
    output: PathBuf,
}

#[derive(Args, Debug)]
struct GlintArgs {
    #[command(flatten)]
    io: InOut,

    /// Number of frames in the loop.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Per-frame delay in milliseconds.
    #[arg(long, default_value_t = 100)]
    duration: u32,

    /// Roughly how many glints are visible at once.
    #[arg(long, default_value_t = 8)]
    glints: u32,

    /// Seed for glint placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Args, Debug)]
struct ShimmerArgs {
    #[command(flatten)]
    io: InOut,

    /// Number of frames in the loop.
    #[arg(long, default_value_t = 48)]
    frames: u32,

    /// Per-frame delay in milliseconds.
    #[arg(long, default_value_t = 120)]
    duration: u32,
}

#[derive(Args, Debug)]
struct CardArgs {
    #[command(flatten)]
    io: InOut,

    /// Color distance from the corner color still treated as background.
    #[arg(long, default_value_t = 30)]
    fuzz: u32,
}

#[derive(Args, Debug)]
struct IconArgs {
    #[command(flatten)]
    io: InOut,

    /// Square canvas color as R,G,B.
    #[arg(long = "bg-color", default_value = "45,38,34")]
    bg_color: artpost::Rgb,

    /// Padding around the content, percent of its longer side.
    #[arg(long, default_value_t = 5)]
    padding: u32,

    /// Output side length in pixels.
    #[arg(long, default_value_t = 1024)]
    size: u32,
}

#[derive(Args, Debug)]
struct FaviconArgs {
    #[command(flatten)]
    io: InOut,

    /// Output side length in pixels.
    #[arg(long, default_value_t = artpost::FAVICON_SIZE)]
    size: u32,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Input image.
    input: PathBuf,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::AnimateGlints(args) => cmd_glints(args),
        Command::AnimateShimmer(args) => cmd_shimmer(args),
        Command::ProcessCard(args) => cmd_card(args),
        Command::ProcessIcon(args) => cmd_icon(args),
        Command::ResizeFavicon(args) => cmd_favicon(args),
        Command::CheckImage(args) => cmd_check(args),
    }
}

fn cmd_glints(args: GlintArgs) -> anyhow::Result<()> {
    let opts = artpost::GlintOptions {
        frames: args.frames,
        delay_ms: args.duration,
        glints: args.glints,
        seed: args.seed,
        ..artpost::GlintOptions::default()
    };
    let summary = pipeline::animate_glints(&args.io.input, &args.io.output, &opts)
        .with_context(|| format!("animate glints '{}'", args.io.input.display()))?;
    eprintln!(
        "wrote {} ({} frames, {:.1}s loop, {} KB)",
        args.io.output.display(),
        summary.frames,
        summary.loop_secs(),
        summary.bytes / 1024
    );
    Ok(())
}

fn cmd_shimmer(args: ShimmerArgs) -> anyhow::Result<()> {
    let opts = artpost::ShimmerOptions {
        frames: args.frames,
        delay_ms: args.duration,
    };
    let summary = pipeline::animate_shimmer(&args.io.input, &args.io.output, &opts)
        .with_context(|| format!("animate shimmer '{}'", args.io.input.display()))?;
    eprintln!(
        "wrote {} ({} frames, {:.1}s loop, {} KB)",
        args.io.output.display(),
        summary.frames,
        summary.loop_secs(),
        summary.bytes / 1024
    );
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let opts = artpost::CardOptions {
        fuzz: f64::from(args.fuzz),
        ..artpost::CardOptions::default()
    };
    pipeline::card_file(&args.io.input, &args.io.output, &opts)
        .with_context(|| format!("process card '{}'", args.io.input.display()))?;
    eprintln!("wrote {}", args.io.output.display());
    Ok(())
}

fn cmd_icon(args: IconArgs) -> anyhow::Result<()> {
    let opts = artpost::IconOptions {
        bg_color: args.bg_color,
        padding_pct: args.padding,
        size: args.size,
        ..artpost::IconOptions::default()
    };
    pipeline::icon_file(&args.io.input, &args.io.output, &opts)
        .with_context(|| format!("process icon '{}'", args.io.input.display()))?;
    eprintln!(
        "wrote {} ({}x{})",
        args.io.output.display(),
        opts.size,
        opts.size
    );
    Ok(())
}

fn cmd_favicon(args: FaviconArgs) -> anyhow::Result<()> {
    let info = pipeline::favicon_file(&args.io.input, &args.io.output, args.size)
        .with_context(|| format!("resize favicon '{}'", args.io.input.display()))?;
    eprintln!(
        "wrote {} ({}x{})",
        args.io.output.display(),
        info.width,
        info.height
    );
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let info = pipeline::inspect_file(&args.input)
        .with_context(|| format!("check image '{}'", args.input.display()))?;
    println!("{info}");
    Ok(())
}
