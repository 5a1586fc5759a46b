use pwforge::charset::{CharacterClass, DEFAULT_SPECIAL_CHARS};
use pwforge::configtool::*;
use pwforge::error::ConfigError;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let config = AppConfig::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_length, 16);
        assert!(config.require_all);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            default_length: 24,
            default_count: 3,
            exclude_ambiguous: true,
            special_chars: Some("#$".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "default_length": 32 }"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_length, 32);
        assert_eq!(config.clipboard_clear_seconds, 30);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_charset_config_selection() {
        let default = AppConfig::default().charset_config().unwrap();
        assert_eq!(default.special().len(), DEFAULT_SPECIAL_CHARS.len());

        let url_safe = AppConfig { url_safe: true, ..Default::default() }.charset_config().unwrap();
        assert_eq!(url_safe.special(), &['-', '.', '_', '~']);

        let custom = AppConfig {
            url_safe: true,
            special_chars: Some("@".to_string()),
            ..Default::default()
        }
        .charset_config()
        .unwrap();
        assert_eq!(custom.special(), &['@']);
        assert_eq!(custom.members(CharacterClass::Digit).len(), 10);

        let invalid = AppConfig { special_chars: Some("ab".to_string()), ..Default::default() };
        assert!(invalid.charset_config().is_err());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempdir().expect("Failed to create temp directory");
        let explicit = dir.path().join("custom.json");
        assert_eq!(resolve_config_path(Some(&explicit)).unwrap(), explicit);
    }
}
