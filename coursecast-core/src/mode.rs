//! Runtime mode configuration for Coursecast.

use serde::{Deserialize, Serialize};

/// Runtime mode for Coursecast services.
///
/// Controls whether searches reach the real backend or are answered from
/// built-in demo data, keeping the same interfaces for offline development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeMode {
    /// Production mode - searches go to the configured backend over HTTP
    Production,
    /// Development mode - searches are answered by the demo backend
    Development,
}

impl RuntimeMode {
    /// Check if running in development mode.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if running in production mode.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Default for RuntimeMode {
    fn default() -> Self {
        Self::Production
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "PRODUCTION"),
            Self::Development => write!(f, "DEVELOPMENT"),
        }
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "demo" => Ok(Self::Development),
            _ => Err(format!(
                "Invalid runtime mode: '{s}'. Valid options are: production, development"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("prod".parse::<RuntimeMode>(), Ok(RuntimeMode::Production));
        assert_eq!("Demo".parse::<RuntimeMode>(), Ok(RuntimeMode::Development));
        assert!("staging".parse::<RuntimeMode>().is_err());
        assert!(RuntimeMode::default().is_production());
    }
}
