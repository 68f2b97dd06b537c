//! Camera Request CLI
//!
//! Assembles a camera request from an optional TOML file and
//! command-line overrides, then prints it.

use camera_request::{CameraRequest, CameraRequestBuilder, FileConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "camera-request", version, about = "Build and print a camera request")]
struct Args {
    /// TOML file with a `[request]` table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preview width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Preview height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Camera identifier.
    #[arg(long)]
    camera_id: Option<String>,

    /// Request the front-facing camera.
    #[arg(long)]
    front: bool,

    /// Lock autofocus instead of running it continuously.
    #[arg(long)]
    no_continuous_af: bool,

    /// Lock auto-exposure instead of running it continuously.
    #[arg(long)]
    no_continuous_ae: bool,
}

impl Args {
    fn apply(&self, mut builder: CameraRequestBuilder) -> CameraRequestBuilder {
        if let Some(width) = self.width {
            builder = builder.preview_width(width);
        }
        if let Some(height) = self.height {
            builder = builder.preview_height(height);
        }
        if let Some(ref id) = self.camera_id {
            builder = builder.camera_id(id.clone());
        }
        if self.front {
            builder = builder.front_camera(true);
        }
        if self.no_continuous_af {
            builder = builder.continuous_af_model(false);
        }
        if self.no_continuous_ae {
            builder = builder.continuous_auto_model(false);
        }
        builder
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Camera Request v{}", camera_request::VERSION);

    let mut builder = CameraRequest::builder();
    if let Some(ref path) = args.config {
        match FileConfig::from_file(path) {
            Ok(config) => builder = config.request.apply(builder),
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        }
    }

    let request = args.apply(builder).build();
    info!(
        width = request.preview_width(),
        height = request.preview_height(),
        camera_id = request.camera_id(),
        "Camera request ready"
    );

    println!("{}", request);
}
