//! UI framework targets for generated bindings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Framework the generated component and hooks are written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React component and hooks
    #[default]
    React,
    /// Types and plain utility functions only
    None,
}

impl Framework {
    /// Returns the framework identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::None => "none",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" | "tsx" => Ok(Framework::React),
            "none" | "vanilla" => Ok(Framework::None),
            _ => Err(format!(
                "unknown framework '{}', expected 'react' or 'none'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Framework::from_str("react").unwrap(), Framework::React);
        assert_eq!(Framework::from_str("React").unwrap(), Framework::React);
        assert_eq!(Framework::from_str("none").unwrap(), Framework::None);
        assert!(Framework::from_str("vue").is_err());
    }

    #[test]
    fn test_deserialize() {
        let react: Framework = serde_json::from_str(r#""react""#).unwrap();
        assert_eq!(react, Framework::React);
        assert_eq!(Framework::None.to_string(), "none");
    }
}
