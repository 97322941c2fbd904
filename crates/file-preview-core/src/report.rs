use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::file_kind::{Category, classify_str};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub input: String,
    pub category: Category,
}

impl Classification {
    pub fn of(input: impl Into<String>) -> Self {
        let input = input.into();
        let category = classify_str(&input);
        Self { input, category }
    }
}

/// Renders one classification as an output line, without the newline.
///
/// `Plain` writes the input verbatim after a tab, so inputs containing tabs
/// or newlines are ambiguous there. `Json` escapes them and always yields a
/// single line.
pub fn render(item: &Classification, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Plain => Ok(format!("{}\t{}", item.category, item.input)),
        OutputFormat::Json => Ok(serde_json::to_string(item)?),
    }
}
