//! Persistence API flavors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which persistence API namespace generated code imports from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persistence {
    /// `jakarta.persistence` (Spring Boot 3+)
    #[default]
    Jakarta,
    /// `javax.persistence` (Spring Boot 2)
    Javax,
}

impl Persistence {
    /// Returns the flavor identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persistence::Jakarta => "jakarta",
            Persistence::Javax => "javax",
        }
    }

    /// The Java package annotations and exceptions live in.
    pub fn package(&self) -> &'static str {
        match self {
            Persistence::Jakarta => "jakarta.persistence",
            Persistence::Javax => "javax.persistence",
        }
    }
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Persistence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jakarta" | "jakarta.persistence" => Ok(Persistence::Jakarta),
            "javax" | "javax.persistence" => Ok(Persistence::Javax),
            _ => Err(format!(
                "unknown persistence API '{}', expected 'jakarta' or 'javax'",
                s
            )),
        }
    }
}
