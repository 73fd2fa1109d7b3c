//! Settings file loading and persistence
//!
//! Settings live in `<config_dir>/teslagrid/config.toml` unless a path is
//! passed explicitly (`--config`).

use std::path::{Path, PathBuf};

use teslagrid_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "teslagrid";

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Read and parse `config_path`
///
/// Returns `ConfigNotFound` for a missing file and `ConfigInvalid` when the
/// TOML does not describe valid settings.
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", config_path.display(), e)))?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Load settings from `config_path`
///
/// A missing or unparseable file falls back to defaults; problems are logged.
pub fn load_settings(config_path: &Path) -> Settings {
    match try_load_settings(config_path) {
        Ok(settings) => settings,
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No config file at {:?}, using defaults", config_path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings for a session together with the path changes may be saved to
///
/// A file that exists but cannot be read or parsed yields defaults and no
/// save path, so persisting a setting never replaces the user's file with
/// values it did not contain.
pub fn load_session_settings(config_path: &Path) -> (Settings, Option<PathBuf>) {
    match try_load_settings(config_path) {
        Ok(settings) => (settings, Some(config_path.to_path_buf())),
        Err(Error::ConfigNotFound { .. }) => (Settings::default(), Some(config_path.to_path_buf())),
        Err(e) => {
            warn!("{}; using defaults, settings changes will not be saved", e);
            (Settings::default(), None)
        }
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    ensure_parent_dir(config_path)?;

    let default_content = r#"# TeslaGrid Configuration

[ui]
# Icon set: "unicode" (works everywhere) or "nerd_fonts"
icons = "unicode"
# Path opened at startup: "/", "/dashboard/network",
# "/dashboard/work-orders" or "/dashboard/forecast"
start_path = "/"

[network]
# Network health view mode at startup: "list" or "map"
default_view = "list"
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Save settings to `config_path`
///
/// Uses atomic write (temp file + rename).
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    ensure_parent_dir(config_path)?;

    let temp_path = config_path.with_extension("toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, config_path).context("Failed to replace settings file")?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn ensure_parent_dir(config_path: &Path) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
        }
    }
    Ok(())
}

fn generate_config_header() -> String {
    r#"# TeslaGrid Configuration
# Generated by teslagrid

"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use crate::state::ViewMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_invalid_toml_returns_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui\nicons = ").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_try_load_reports_missing_and_invalid_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        assert!(matches!(
            try_load_settings(&path),
            Err(Error::ConfigNotFound { .. })
        ));

        std::fs::write(&path, "[ui]\nicons = \"nerdfonts\"\n").unwrap();
        assert!(matches!(
            try_load_settings(&path),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_session_settings_without_file_can_be_saved() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let (settings, save_path) = load_session_settings(&path);
        assert_eq!(settings, Settings::default());
        assert_eq!(save_path, Some(path));
    }

    #[test]
    fn test_session_settings_from_invalid_file_are_never_saved() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\nicons = \"nerdfonts\"\nstart_path = \"/dashboard/forecast\"\n",
        )
        .unwrap();

        let (settings, save_path) = load_session_settings(&path);
        assert_eq!(settings, Settings::default());
        assert_eq!(save_path, None);
    }

    #[test]
    fn test_load_custom_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
icons = "nerd_fonts"
start_path = "/dashboard/forecast"

[network]
default_view = "map"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.start_path, "/dashboard/forecast");
        assert_eq!(settings.network.default_view, ViewMode::Map);
    }

    #[test]
    fn test_init_config_file_content_is_valid() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nicons = \"nerd_fonts\"\n").unwrap();

        init_config_file(&path).unwrap();

        // Existing file is left untouched
        assert_eq!(load_settings(&path).ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("teslagrid").join("config.toml");

        let mut settings = Settings::default();
        settings.ui.icons = IconMode::NerdFonts;
        settings.network.default_view = ViewMode::Map;

        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        assert!(default_config_path().ends_with("teslagrid/config.toml"));
    }
}
