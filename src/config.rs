use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "pair-finder";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_output: bool,
    pub show_explanations: bool,
    pub default_test_file: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_output: true,
            show_explanations: true,
            default_test_file: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    /// Test case file to judge: the CLI flag wins over the configured default.
    pub fn test_file(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.default_test_file.clone())
    }

    pub fn get_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}

pub fn reset_config() -> Result<Config> {
    let config = Config::default();
    config.save()?;
    Ok(config)
}
