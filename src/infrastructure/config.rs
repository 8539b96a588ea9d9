pub mod keybindings;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::domain::{keymodel::DEFAULT_TAB_WIDTH, ArrowMode, KeyOptions};
use crate::utils;

pub use keybindings::KeyBindings;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Directories resolved at load time. A user file may move `data_dir`.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct KeyboardConfig {
    #[serde(default)]
    pub arrow_mode: ArrowMode,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub print_on_exit: bool,
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            arrow_mode: ArrowMode::default(),
            tab_width: DEFAULT_TAB_WIDTH,
            print_on_exit: false,
        }
    }
}

impl KeyboardConfig {
    pub fn key_options(&self) -> KeyOptions {
        KeyOptions {
            arrow_mode: self.arrow_mode,
            tab_width: self.tab_width,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads the configuration from the user's config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The embedded defaults alone.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads `config.*` from `config_dir` over the embedded defaults.
    /// User files are optional.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::Action;

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let cfg = Config::defaults()?;
        assert_eq!(cfg.keyboard, KeyboardConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_load_without_user_file() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let data = dir.path().join("data");
        let cfg = Config::load(dir.path(), &data)?;
        assert_eq!(cfg.config.config_dir, dir.path());
        assert_eq!(cfg.config.data_dir, data);
        assert_eq!(cfg.keyboard.tab_width, 3);
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Action::ToggleCapsLock)
        );
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_and_merges() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        std::fs::write(
            dir.path().join("config.json5"),
            r#"{ data_dir: "/srv/vkeyboard", keybindings: { "<f5>": "ToggleLanguage" }, keyboard: { arrow_mode: "insert", tab_width: 4 } }"#,
        )
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;

        let cfg = Config::load(dir.path(), dir.path())?;
        assert_eq!(cfg.config.data_dir, PathBuf::from("/srv/vkeyboard"));
        assert_eq!(cfg.keyboard.arrow_mode, ArrowMode::Insert);
        assert_eq!(cfg.keyboard.key_options().tab_width, 4);
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            Some(Action::ToggleLanguage)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        Ok(())
    }
}
