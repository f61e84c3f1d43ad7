//! Metaballs entry point
//!
//! Parses arguments, resolves settings and renders every frame to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use metaballs::Settings;
use metaballs::frame::render_run;
use metaballs::persistence::FrameStore;

/// Render bouncing metaballs as a sequence of jgraph frames
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of frames to render
    frames: Option<u32>,

    /// RNG seed (time-derived when omitted). Negative values wrap to u64.
    #[arg(allow_negative_numbers = true)]
    seed: Option<i64>,

    /// JSON settings file; command line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving frameNNNNN.jgr files
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(frames) = args.frames {
        settings.frames = frames;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed as u64);
    }
    if let Some(dir) = &args.out_dir {
        settings.output_dir = dir.clone();
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    if args.dump_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let seed = settings.resolve_seed();
    log::info!(
        "Metaballs starting: {} frames, {} bodies, seed {}",
        settings.frames,
        settings.body_count,
        seed
    );

    let store = FrameStore::create(&settings.output_dir)
        .with_context(|| format!("cannot use output directory {}", settings.output_dir.display()))?;
    let summary = render_run(&settings, seed, &store).context("rendering aborted")?;

    log::info!(
        "Done: {} frames in {}",
        summary.frames,
        store.dir().display()
    );
    Ok(())
}
