use crate::config::models::{FieldConfig, SelectsConfig};
use colored::*;

impl SelectsConfig {
    pub fn display_tree(&self) {
        if self.select.is_empty() {
            return;
        }

        eprintln!("{}", "Selects:".yellow());
        let mut fields_iter = self.select.iter().peekable();
        while let Some(field) = fields_iter.next() {
            let is_last_field = fields_iter.peek().is_none();
            let branch = if is_last_field { "└──" } else { "├──" };
            let mode = if field.multiple { "multiple" } else { "single" };
            eprintln!(
                "{branch} {} {}",
                field.title.cyan(),
                format!("({mode})").dimmed()
            );

            let indent = if is_last_field { "    " } else { "│   " };
            field.display_options_with_indent(indent);
        }
    }
}

impl FieldConfig {
    fn display_options_with_indent(&self, indent: &str) {
        let mut options_iter = self.options.iter().peekable();
        while let Some(option) = options_iter.next() {
            let prefix = if options_iter.peek().is_none() {
                "└──"
            } else {
                "├──"
            };
            eprintln!(
                "{indent}{prefix} {} = {}",
                option.label.green(),
                format!("{}", option.value).truecolor(180, 180, 180)
            );
        }
    }
}

pub fn show_success(message: &str) {
    eprintln!("{}", format!("✔ {message}").green());
}

pub fn show_error(message: &str) {
    eprintln!("{}", format!("✗ {message}").red());
}

pub fn show_info(message: &str) {
    eprintln!("{}", format!("ℹ {message}").blue());
}

pub fn show_warning(message: &str) {
    eprintln!("{}", format!("⚠ {message}").yellow());
}
