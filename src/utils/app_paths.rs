use anyhow::{anyhow, Result};
use std::path::PathBuf;

const APP_DIR: &str = "table-view";

pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join(APP_DIR))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
