use crate::config::ConfigManager;
use crate::tui;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(config)?;
    let fields = tui::run(config_manager.config.into_fields())?;

    for field in fields {
        println!("{}", field.output_line());
    }
    Ok(())
}
