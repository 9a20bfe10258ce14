use self::models::SelectsConfig;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

pub mod loader;
pub mod models;

pub const CONFIG_FILE_NAME: &str = "selects.toml";

pub struct ConfigManager {
    pub config: SelectsConfig,
    pub path: PathBuf,
    /// false when the built-in demo is used because the default file is missing
    pub loaded: bool,
}

impl ConfigManager {
    /// Load `path`, or the default selects file when `None`. A missing
    /// default file falls back to the demo selects; a missing explicit path
    /// is an error.
    pub fn new(path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (default_path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(format!("Selects file '{}' not found.", path.display()).into());
            }
            info!(path = %path.display(), "no selects file, using demo");
            return Ok(Self {
                config: SelectsConfig::demo(),
                path,
                loaded: false,
            });
        }

        let config = loader::read_config(&path)?;
        info!(path = %path.display(), selects = config.select.len(), "loaded selects");
        Ok(Self {
            config,
            path,
            loaded: true,
        })
    }

    pub fn write(&self) -> Result<(), Box<dyn Error>> {
        loader::write_config(&self.path, &self.config)
    }
}

pub fn default_path() -> Result<PathBuf, Box<dyn Error>> {
    let base = dirs::config_dir().ok_or("Could not find config directory")?;
    Ok(base.join("term-select").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ConfigManager::new(Some(missing)).err().unwrap();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[[select]]\ntitle = \"Only\"\noptions = [{ label = \"x\", value = \"x\" }]\n",
        )
        .unwrap();

        let manager = ConfigManager::new(Some(path)).unwrap();
        assert!(manager.loaded);
        assert_eq!(manager.config.select[0].title, "Only");
    }
}
