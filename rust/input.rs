use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Reads newline-separated inputs from `path`, or from stdin when it is `-`.
pub async fn read_inputs(path: &Path) -> Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read inputs from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read input list: {}", path.display()))?
    };

    Ok(split_lines(&text))
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

pub fn collect_inputs(positional: Vec<String>, listed: Vec<String>, skip_empty: bool) -> Vec<String> {
    positional
        .into_iter()
        .chain(listed)
        .filter(|input| !(skip_empty && input.is_empty()))
        .collect()
}
