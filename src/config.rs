use std::path::PathBuf;

use crate::error::AppError;

pub const API_BASE_URL: &str = "https://free-to-play-games-database.p.rapidapi.com/api/games";
pub const API_HOST: &str = "free-to-play-games-database.p.rapidapi.com";
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";
pub const HOME_ENV: &str = "FREEGAMES_CLI_HOME";

const DATA_DIR_NAME: &str = ".freegames-cli-rs";
const DB_FILE_NAME: &str = "freegames.db";

// Baked in when the binary is built with RAPIDAPI_KEY set.
const BUILD_API_KEY: Option<&str> = option_env!("RAPIDAPI_KEY");

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: String,
}

impl ApiConfig {
    /// Runtime `RAPIDAPI_KEY` wins over the build-time value.
    pub fn from_env() -> Result<Self, AppError> {
        let runtime = std::env::var(API_KEY_ENV).ok();
        let api_key = resolve_api_key(runtime.as_deref(), BUILD_API_KEY).ok_or_else(|| {
            AppError::Unauthorized(format!("{API_KEY_ENV} is required to load the catalog"))
        })?;

        Ok(Self {
            base_url: API_BASE_URL.to_string(),
            host: API_HOST.to_string(),
            api_key,
        })
    }
}

fn resolve_api_key(runtime: Option<&str>, build: Option<&str>) -> Option<String> {
    [runtime, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_string)
}

pub fn data_dir() -> Result<PathBuf, AppError> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let mut dir = dirs::home_dir()
        .ok_or_else(|| AppError::Internal("home directory not found".to_string()))?;
    dir.push(DATA_DIR_NAME);
    Ok(dir)
}

pub fn db_path() -> Result<PathBuf, AppError> {
    let mut path = data_dir()?;
    path.push(DB_FILE_NAME);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_key_overrides_build_key() {
        let key = resolve_api_key(Some("runtime"), Some("baked"));
        assert_eq!(key.as_deref(), Some("runtime"));
    }

    #[test]
    fn blank_runtime_key_falls_back_to_build_key() {
        let key = resolve_api_key(Some("   "), Some("baked"));
        assert_eq!(key.as_deref(), Some("baked"));
    }

    #[test]
    fn no_key_anywhere() {
        assert!(resolve_api_key(None, None).is_none());
        assert!(resolve_api_key(Some(""), Some("")).is_none());
    }
}
