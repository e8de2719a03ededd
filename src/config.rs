use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional on-disk configuration, overridden by CLI flags
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TodoConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_origin: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("todo-api.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("todos.db")
}

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TodoConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TodoConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TodoConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
