use crate::config::ConfigManager;
use crate::config::models::SelectsConfig;
use crate::utils::display;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = match config {
        Some(path) => path,
        None => crate::config::default_path()?,
    };

    if path.exists() && !force {
        return Err(format!(
            "'{}' already exists, use --force to overwrite it.",
            path.display()
        )
        .into());
    }

    let config_manager = ConfigManager {
        config: SelectsConfig::demo(),
        path,
        loaded: false,
    };
    config_manager.write()?;

    display::show_success(&format!(
        "Wrote demo selects to '{}'",
        config_manager.path.display()
    ));
    Ok(())
}
