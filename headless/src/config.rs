use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::serpent::SerpentSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "serpent_headless_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

fn default_event_log_size() -> usize {
    64
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: SerpentSettings,
    pub games: u32,
    pub seed: Option<u64>,
    /// Games still running after this many ticks are abandoned.
    pub max_ticks_per_game: u64,
    #[serde(default = "default_event_log_size")]
    pub event_log_size: usize,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.games == 0 {
            return Err("games must be at least 1".to_string());
        }
        if self.games > 10_000 {
            return Err("games must not exceed 10000".to_string());
        }
        if self.max_ticks_per_game < 100 {
            return Err("max_ticks_per_game must be at least 100".to_string());
        }
        if self.event_log_size == 0 || self.event_log_size > 4096 {
            return Err("event_log_size must be between 1 and 4096".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: SerpentSettings::default(),
            games: 3,
            seed: None,
            max_ticks_per_game: 50_000,
            event_log_size: default_event_log_size(),
        }
    }
}
