//! Source language identifier

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages with a grammar wired into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Python,
}

impl Language {
    /// Every supported language, in a stable order
    pub const ALL: [Self; 2] = [Self::Go, Self::Python];

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "go" => Some(Self::Go),
            "py" | "pyi" => Some(Self::Python),
            _ => None,
        }
    }

    /// Canonical lowercase name, also the manifest table key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Self::Go),
            "python" | "py" => Ok(Self::Python),
            other => Err(Error::UnsupportedLanguage {
                name: other.to_string(),
            }),
        }
    }
}
