use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::models::SelectsConfig;

pub fn read_config(path: &Path) -> Result<SelectsConfig, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(SelectsConfig::default());
    }

    toml::from_str(&content)
        .map_err(|e| format!("Invalid selects file '{}': {e}", path.display()).into())
}

pub fn write_config(path: &Path, config: &SelectsConfig) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_keeps_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selects.toml");

        write_config(&path, &SelectsConfig::demo()).unwrap();
        let config = read_config(&path).unwrap();

        assert_eq!(config.select.len(), 2);
        assert_eq!(config.select[1].title, "Multiple");
        assert!(config.select[1].multiple);
        assert_eq!(config.select[0].options[2].label, "C");
    }

    #[test]
    fn empty_file_has_no_selects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selects.toml");
        fs::write(&path, "\n").unwrap();

        assert!(read_config(&path).unwrap().select.is_empty());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[select]]\nmultiple = true\n").unwrap();

        let err = read_config(&path).unwrap_err().to_string();
        assert!(err.contains("broken.toml"));
    }
}
