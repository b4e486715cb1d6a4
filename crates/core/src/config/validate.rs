use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Paths section exists (enforced by serde)
/// - Input and output directories differ
/// - Documents subfolder name is not empty
/// - Done marker and lock prefix are exactly two characters
/// - Soffice timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.paths.input_dir == config.paths.output_dir {
        return Err(ConfigError::ValidationError(
            "paths.input_dir and paths.output_dir must differ".to_string(),
        ));
    }

    if config.ingest.documents_subdir.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "ingest.documents_subdir cannot be empty".to_string(),
        ));
    }

    if config.naming.done_marker.chars().count() != 2 {
        return Err(ConfigError::ValidationError(
            "naming.done_marker must be exactly two characters".to_string(),
        ));
    }

    if config.naming.lock_prefix.chars().count() != 2 {
        return Err(ConfigError::ValidationError(
            "naming.lock_prefix must be exactly two characters".to_string(),
        ));
    }

    if let Some(soffice) = &config.converter.soffice {
        if soffice.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "converter.soffice.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    fn base_config() -> Config {
        load_config_from_str(
            r#"
[paths]
input_dir = "/in"
output_dir = "/out"
params_file = "/p.json"
registry_file = "/r.json"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_validate_valid_config() {
        let config = base_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_same_input_output_fails() {
        let mut config = base_config();
        config.paths.output_dir = config.paths.input_dir.clone();
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_documents_subdir_fails() {
        let mut config = base_config();
        config.ingest.documents_subdir = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_long_done_marker_fails() {
        let mut config = base_config();
        config.naming.done_marker = "DONE".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_cyrillic_done_marker_counts_chars_not_bytes() {
        let config = base_config();
        // The default "ОК" is four bytes but two characters.
        assert_eq!(config.naming.done_marker.chars().count(), 2);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = base_config();
        config.converter.soffice = Some(crate::config::SofficeConfig {
            binary_path: "soffice".into(),
            timeout_secs: 0,
        });
        assert!(validate_config(&config).is_err());
    }
}
