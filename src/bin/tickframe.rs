use std::path::PathBuf;

use clap::Parser;

use tickframe::{GenerateOpts, StyleCatalog, format_time, generate, preview};

#[derive(Parser, Debug)]
#[command(
    name = "tickframe",
    version,
    about = "Generate countdown timer video frames in various styles",
    after_help = "Assemble into video:\n  \
        ffmpeg -framerate 30 -i output/modern/frame_%08d.png \\\n    \
        -c:v libx264 -pix_fmt yuv420p -crf 18 countdown_modern.mp4"
)]
struct Cli {
    /// Visual style for the countdown, or "all" for every catalog entry.
    #[arg(long, default_value = "modern")]
    style: String,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Countdown duration in seconds.
    #[arg(long, default_value_t = 86_400)]
    duration: u64,

    /// Start time in seconds (86400 = 24:00:00).
    #[arg(long, default_value_t = 86_400)]
    start: u64,

    /// Output directory.
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// List all available styles and exit.
    #[arg(long)]
    list_styles: bool,

    /// Render a single preview frame instead of a full sequence.
    #[arg(long)]
    preview: bool,

    /// Render preview frames for every style.
    #[arg(long)]
    preview_all: bool,

    /// Render countdown seconds in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = StyleCatalog::builtin()?;

    if cli.list_styles {
        println!("Available countdown styles:");
        println!("{}", "-".repeat(60));
        for entry in catalog.entries() {
            println!("  {:14} - {}", entry.name(), entry.description());
        }
        println!("\nTotal: {} styles", catalog.len());
        return Ok(());
    }

    if cli.preview_all || (cli.preview && cli.style == "all") {
        for name in catalog.names().collect::<Vec<_>>() {
            let path = preview(&catalog, name, &cli.output)?;
            println!("Preview saved: {}", path.display());
        }
        println!("\nAll previews saved to {}/", cli.output.display());
        return Ok(());
    }

    if cli.preview {
        let path = preview(&catalog, &cli.style, &cli.output)?;
        println!("Preview saved: {}", path.display());
        return Ok(());
    }

    let opts = GenerateOpts {
        fps: cli.fps,
        duration: cli.duration,
        start_seconds: cli.start,
        parallel: cli.parallel,
        threads: cli.threads,
    };

    if cli.style == "all" {
        for name in catalog.names().collect::<Vec<_>>() {
            run_sequence(&catalog, name, &cli, &opts)?;
        }
    } else {
        run_sequence(&catalog, &cli.style, &cli, &opts)?;
    }

    Ok(())
}

fn run_sequence(
    catalog: &StyleCatalog,
    name: &str,
    cli: &Cli,
    opts: &GenerateOpts,
) -> anyhow::Result<()> {
    let style = catalog.get(name)?;
    let canvas = style.canvas();
    let total_frames = opts.duration * u64::from(opts.fps);
    let (dh, dm, ds) = format_time(opts.duration);

    println!(
        "Generating {name} countdown: {total_frames} frames at {} fps",
        opts.fps
    );
    println!("  Resolution: {}x{}", canvas.width, canvas.height);
    println!("  Output: {}/{name}/", cli.output.display());
    println!("  Duration: {}s ({dh}h {dm}m {ds}s)", opts.duration);
    println!();

    let summary = generate(catalog, name, &cli.output, opts, &mut |p| {
        println!(
            "  Progress: {}/{} frames ({}%) - Timer at {} - ~{} min of frames remaining",
            p.frames_written, p.total_frames, p.percent, p.displayed, p.minutes_remaining
        );
    })?;

    println!(
        "\nDone! {} frames saved to {}/",
        summary.frames_written,
        summary.frame_dir.display()
    );
    println!("\nTo create video with ffmpeg:");
    println!(
        "  ffmpeg -framerate {} -i {}/frame_%08d.png \\",
        opts.fps,
        summary.frame_dir.display()
    );
    println!("    -c:v libx264 -pix_fmt yuv420p -crf 18 countdown_{name}.mp4");

    Ok(())
}
