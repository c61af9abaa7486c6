use crate::app::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration, read from `~/.config/unbind-tui/config.toml`.
/// Every field has a default so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub keymap: KeyConfig,
    pub palette: PaletteType,

    /// Scope the palette opens in. A project id narrows the team scope;
    /// an environment id further pins the settings route.
    pub team: String,
    pub project: Option<String>,
    pub environment: Option<String>,

    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keymap: KeyConfig::default(),
            palette: PaletteType::Dark,
            team: "default".to_string(),
            project: None,
            environment: None,
            api_url: None,
            api_token: None,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("unbind-tui");
        path.push("config.toml");
        path
    })
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        get_config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str::<Config>(&content) {
                    return config;
                }
            }
        }
        Config::default()
    }
}
