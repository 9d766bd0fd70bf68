//! Settings parser for `snipdesk.toml`

use super::types::Settings;
use snipdesk_core::prelude::*;

/// Settings file location, relative to the page
pub const SETTINGS_PATH: &str = "snipdesk.toml";

/// Parse settings text, returning an error for malformed TOML
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    Ok(settings.normalized())
}

/// Load settings from the fetched file contents.
///
/// `None` means the file does not exist. Missing or unparseable files fall
/// back to defaults; the page never fails to start because of settings.
pub fn load_settings(content: Option<&str>) -> Settings {
    let Some(content) = content else {
        debug!("No {} found, using defaults", SETTINGS_PATH);
        return Settings::default();
    };

    match parse_settings(content) {
        Ok(settings) => {
            debug!("Loaded settings from {}", SETTINGS_PATH);
            settings
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", SETTINGS_PATH, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LogLevel;

    #[test]
    fn test_load_settings_defaults() {
        let settings = load_settings(None);

        assert_eq!(settings.workspace.manifest_path, "snippets.json");
        assert_eq!(settings.workspace.storage_key, "codeWorkspace");
        assert_eq!(settings.workspace.autosave_secs, 30);
        assert!(settings.workspace.restore_on_load);
        assert_eq!(settings.ui.collapse_threshold, 20);
        assert_eq!(settings.ui.notification_ms, 3000);
        assert_eq!(settings.ui.copied_feedback_ms, 2000);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_settings_custom() {
        let config = r#"
[workspace]
manifest_path = "data/manifest.json"
autosave_secs = 60

[ui]
collapse_threshold = 40

[logging]
level = "debug"
"#;
        let settings = load_settings(Some(config));

        assert_eq!(settings.workspace.manifest_path, "data/manifest.json");
        assert_eq!(settings.workspace.autosave_secs, 60);
        assert_eq!(settings.workspace.storage_key, "codeWorkspace");
        assert_eq!(settings.ui.collapse_threshold, 40);
        assert_eq!(settings.ui.notification_ms, 3000);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let settings = load_settings(Some("[workspace\nautosave_secs = "));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_settings_reports_errors() {
        assert!(matches!(
            parse_settings("[ui]\ncollapse_threshold = \"many\""),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_values_are_clamped() {
        let settings = load_settings(Some(
            "[workspace]\nautosave_secs = 0\nstorage_key = \"\"\n[ui]\ncollapse_threshold = 0\n",
        ));
        assert_eq!(settings.workspace.autosave_secs, 5);
        assert_eq!(settings.workspace.storage_key, "codeWorkspace");
        assert_eq!(settings.ui.collapse_threshold, 1);
    }

    #[test]
    fn test_shipped_settings_file_matches_defaults() {
        let settings = parse_settings(include_str!("../../../../web/snipdesk.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
