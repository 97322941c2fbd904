use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// How a file should be previewed, decided from its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Unknown,
    Image,
    Pdf,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Unknown,
        Category::Image,
        Category::Pdf,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Other => "other",
        }
    }

    /// Lowercase extensions recognized for this category. `Unknown` and
    /// `Other` have no table of their own.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Pdf => PDF_EXTENSIONS,
            Self::Unknown | Self::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "image" => Ok(Self::Image),
            "pdf" => Ok(Self::Pdf),
            "other" => Ok(Self::Other),
            other => Err(AppError::UnknownCategory(other.to_string())),
        }
    }
}

/// Text after the last `.`, or the whole input when there is none.
///
/// Query strings and fragments are kept as part of the extension, so
/// `photo.jpg?w=200` yields `jpg?w=200`.
pub fn candidate_extension(input: &str) -> &str {
    input.rsplit('.').next().unwrap_or(input)
}

pub fn classify(input: Option<&str>) -> Category {
    let Some(input) = input.filter(|value| !value.is_empty()) else {
        return Category::Unknown;
    };

    let ext = candidate_extension(input).to_lowercase();

    // only image and pdf carry tables, checked in that order
    Category::ALL
        .into_iter()
        .find(|category| category.extensions().contains(&ext.as_str()))
        .unwrap_or(Category::Other)
}

pub fn classify_str(input: &str) -> Category {
    classify(Some(input))
}
