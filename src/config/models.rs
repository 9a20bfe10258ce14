use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::tui::components::field::SelectField;
use crate::tui::components::select::{OptionValue, SelectOption};

// The whole selects file: one `[[select]]` table per field.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectsConfig {
    #[serde(default)]
    pub select: Vec<FieldConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldConfig {
    pub title: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl FieldConfig {
    pub fn new(title: &str, multiple: bool, options: Vec<SelectOption>) -> Self {
        Self {
            title: title.to_string(),
            multiple,
            options,
        }
    }

    /// Every option gets its own allocation, so equal entries stay distinct.
    pub fn into_field(self) -> SelectField {
        let options = self.options.into_iter().map(Rc::new).collect();
        SelectField::new(self.title, options, self.multiple)
    }

    pub fn issues(&self, position: usize) -> Vec<String> {
        let mut issues = Vec::new();
        let name = if self.title.trim().is_empty() {
            issues.push(format!("Select #{position} has an empty title"));
            format!("#{position}")
        } else {
            format!("'{}'", self.title)
        };

        if self.options.is_empty() {
            issues.push(format!("Select {name} has no options"));
        }

        for (i, option) in self.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                issues.push(format!("Select {name}: option #{} has an empty label", i + 1));
            }
            // reported once, at the first repeat
            let earlier = self.options[..i]
                .iter()
                .filter(|o| o.value == option.value)
                .count();
            if earlier == 1 {
                issues.push(format!(
                    "Select {name}: value '{}' is used by more than one option",
                    option.value
                ));
            }
        }
        issues
    }
}

impl SelectsConfig {
    /// Used when no selects file exists yet
    pub fn demo() -> Self {
        let letters = vec![
            SelectOption {
                label: "A".to_string(),
                value: OptionValue::Int(1),
            },
            SelectOption {
                label: "B".to_string(),
                value: OptionValue::Int(2),
            },
            SelectOption {
                label: "C".to_string(),
                value: OptionValue::Int(3),
            },
        ];
        Self {
            select: vec![
                FieldConfig::new("Single", false, letters.clone()),
                FieldConfig::new("Multiple", true, letters),
            ],
        }
    }

    pub fn into_fields(self) -> Vec<SelectField> {
        self.select.into_iter().map(FieldConfig::into_field).collect()
    }

    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.select.is_empty() {
            issues.push("No selects defined".to_string());
        }
        for (i, field) in self.select.iter().enumerate() {
            issues.extend(field.issues(i + 1));
        }
        issues
    }
}
