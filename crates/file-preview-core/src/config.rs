use std::str::FromStr;

use clap::ValueEnum;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "text", alias = "tsv")]
    Plain,
    #[value(alias = "jsonl")]
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "tsv" => Ok(Self::Plain),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(AppError::InvalidConfig(format!(
                "unsupported output format: {other}. use plain|json"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_format_aliases() {
        assert_eq!("TSV".parse::<OutputFormat>().ok(), Some(OutputFormat::Plain));
        assert_eq!(" jsonl ".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("unsupported output format: yaml"));
    }
}
