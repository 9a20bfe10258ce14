use crate::config::ConfigManager;
use crate::utils::display;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(config)?;

    if !config_manager.loaded {
        display::show_warning(&format!(
            "'{}' does not exist, checking the demo selects",
            config_manager.path.display()
        ));
    }

    let issues = config_manager.config.issues();
    if issues.is_empty() {
        display::show_success("All selects are valid.");
        return Ok(());
    }

    for issue in &issues {
        display::show_error(issue);
    }
    Err(format!("Found {} issue(s) in the selects file.", issues.len()).into())
}
