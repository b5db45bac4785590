//! Supported draft languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language code of a draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Lt,
}

impl Lang {
    /// Accepted language codes
    pub const CODES: &'static [&'static str] = &["en", "lt"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Lt => "lt",
        }
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "lt" => Ok(Lang::Lt),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
