//! JSON configuration for the solver dispatcher

use crate::dispatch::Method;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Direct solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Method used by [`crate::DirectSolver::solve_default`]
    #[serde(default)]
    pub method: Method,
    /// Verbosity level (0 = quiet, 1 = summary, 2+ = detailed)
    #[serde(default)]
    pub verbosity: usize,
}

impl SolverConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.method, Method::Gauss);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_parse_config() {
        let config = SolverConfig::from_json(r#"{"method": "LUP", "verbosity": 1}"#).unwrap();
        assert_eq!(config.method, Method::Lup);
        assert_eq!(config.verbosity, 1);

        let partial = SolverConfig::from_json(r#"{"method": "crout"}"#).unwrap();
        assert_eq!(partial.method, Method::Crout);
        assert_eq!(partial.verbosity, 0);

        let empty = SolverConfig::from_json("{}").unwrap();
        assert_eq!(empty, SolverConfig::default());
    }

    #[test]
    fn test_parse_invalid_method() {
        let err = SolverConfig::from_json(r#"{"method": "bogus"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.json");
        let config = SolverConfig {
            method: Method::Cholesky,
            verbosity: 2,
        };

        config.to_file(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"cholesky\""));

        let loaded = SolverConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = SolverConfig::from_file("/nonexistent/solver.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
