//! Configuration loading functionality.
//!
//! Loads the engine policy configuration from a YAML file, falling back
//! to compiled-in defaults when no file is deployed.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads the policy configuration from the given YAML file.
///
/// # Example
///
/// ```no_run
/// use timebank_engine::config::load_config;
///
/// let config = load_config("./config/policy.yaml")?;
/// assert_eq!(config.state_for_hub(Some("Brasília")), Some("DF"));
/// # Ok::<(), timebank_engine::error::EngineError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = load_config("/definitely/missing/policy.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("timebank_engine_bad_policy.yaml");
        fs::write(&path, "monthly_hour_baseline: [not a number").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_valid_file_loads() {
        let dir = std::env::temp_dir();
        let path = dir.join("timebank_engine_good_policy.yaml");
        fs::write(&path, "monthly_hour_baseline: 180\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.monthly_hour_baseline,
            rust_decimal::Decimal::from(180)
        );

        fs::remove_file(&path).ok();
    }
}
