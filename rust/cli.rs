use std::path::PathBuf;

use clap::Parser;
use file_preview_core::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "file-preview",
    version,
    about = "Classify file URLs as image, pdf or other by their extension"
)]
pub struct Cli {
    #[arg(value_name = "INPUT", help = "URLs or paths to classify")]
    pub inputs: Vec<String>,

    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        help = "read newline-separated inputs from a file ('-' for stdin)"
    )]
    pub from_file: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        ignore_case = true,
        env = "PREVIEW_FORMAT",
        default_value = "plain",
        help = "output format (plain lines are tab-separated; use json for inputs containing tabs or newlines)"
    )]
    pub format: OutputFormat,

    #[arg(long, help = "drop empty inputs instead of reporting them as unknown")]
    pub skip_empty: bool,
}
