use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use labeld::{FontFace, ServiceConfig};

/// Serve text labels as transparent PNG badges.
#[derive(Parser, Debug)]
#[command(name = "labeld", version, about)]
struct Args {
    /// Listen address, e.g. 0.0.0.0:2467
    #[arg(long)]
    listen: Option<String>,

    /// Path to an outline font file (TTF/OTF)
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON config file; CLI flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw the debug crosshair on every label
    #[arg(long)]
    crosshair: bool,

    /// Draw a border on every label
    #[arg(long)]
    border: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listen = listen;
    }
    if let Some(font) = args.font {
        config.font = Some(font);
    }
    if args.crosshair {
        config.style.crosshair = true;
    }
    if args.border {
        config.style.border = true;
    }

    // A missing or unparsable font is reported but never fatal: the built-in
    // bitmap face guarantees a working render path.
    let face = match &config.font {
        Some(path) => match FontFace::load(path) {
            Ok(face) => {
                info!("Loaded font {}", path.display());
                face
            }
            Err(e) => {
                warn!("{}; falling back to the built-in bitmap face", e);
                FontFace::bitmap_fallback()
            }
        },
        None => {
            info!("No font configured; using the built-in bitmap face");
            FontFace::bitmap_fallback()
        }
    };

    labeld::server::serve(config, Arc::new(face)).context("running label server")?;
    Ok(())
}
