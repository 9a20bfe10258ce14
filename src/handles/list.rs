use crate::config::ConfigManager;
use crate::utils::display;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(config)?;

    if !config_manager.loaded {
        display::show_info(&format!(
            "'{}' does not exist, showing the demo selects",
            config_manager.path.display()
        ));
    }

    if config_manager.config.select.is_empty() {
        display::show_info("No selects defined.");
        return Ok(());
    }

    config_manager.config.display_tree();
    Ok(())
}
