use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use snake_engine::GameSettings;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "snake_console_config.yaml";

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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum AutopilotKind {
    Greedy,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub autopilot: Option<AutopilotKind>,
    pub show_board: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            autopilot: None,
            show_board: true,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameSettings,
    pub console: ConsoleConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if !self.console.show_board && self.console.autopilot.is_none() {
            return Err("Manual play needs the board to be shown".to_string());
        }
        Ok(())
    }
}
