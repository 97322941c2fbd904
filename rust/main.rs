mod cli;
mod input;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use file_preview_core::config::OutputFormat;
use file_preview_core::report::{Classification, render};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::input::{collect_inputs, read_inputs};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let listed = match (&cli.from_file, cli.inputs.is_empty()) {
        (Some(path), _) => read_inputs(path).await?,
        (None, true) => read_inputs(Path::new("-")).await?,
        (None, false) => Vec::new(),
    };
    let inputs = collect_inputs(cli.inputs, listed, cli.skip_empty);

    info!(count = inputs.len(), format = ?cli.format, "classify_start");

    let output = render_all(&inputs, cli.format)?;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(output.as_bytes())
        .await
        .context("failed to write classifications")?;
    stdout.flush().await.context("failed to flush stdout")?;

    info!(count = inputs.len(), "classify_done");
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn render_all(inputs: &[String], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    for input in inputs {
        let item = Classification::of(input.as_str());
        debug!(input = %item.input, category = %item.category, "input_classified");
        out.push_str(&render(&item, format)?);
        out.push('\n');
    }
    Ok(out)
}
