use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod io;
mod preprocessing;

use preprocessing::Pipeline;

#[derive(Parser, Debug)]
#[command(name = "scanprep")]
#[command(about = "Binarize a document image for OCR: grayscale, resize, blur, adaptive threshold")]
#[command(version)]
pub struct Args {
    /// Image to read (any format the decoder recognises)
    pub input: PathBuf,

    /// Where to write the result; the format follows the file extension
    pub output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::info!("Starting scanprep v{}", env!("CARGO_PKG_VERSION"));

    run(&config)
}

fn run(config: &config::Config) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(config.pipeline)?;

    let image = io::decode(&config.input)?;
    tracing::info!(
        "Decoded {:?} ({}x{})",
        config.input,
        image.width(),
        image.height()
    );

    let result = pipeline.process(image)?;
    let summary: Vec<String> = result
        .steps
        .iter()
        .map(|step| format!("{}={}ms", step.name, step.time_ms))
        .collect();
    tracing::info!("Steps: {}", summary.join(", "));

    io::encode(&result.image, &config.output)?;
    tracing::info!(
        "Wrote {:?} ({}x{}) in {}ms",
        config.output,
        result.image.width(),
        result.image.height(),
        result.total_time_ms
    );

    Ok(())
}
