use super::select::{SelectComponent, SelectOption, SelectValue};
use std::rc::Rc;

/// A titled select hosted by the app. The app owns `value` and writes back
/// whatever the component reports through `on_change`.
#[derive(Debug)]
pub struct SelectField {
    pub title: String,
    pub component: SelectComponent,
    pub value: SelectValue,
}

impl SelectField {
    pub fn new(title: impl Into<String>, options: Vec<Rc<SelectOption>>, multiple: bool) -> Self {
        let value = if multiple {
            SelectValue::Multiple(Vec::new())
        } else {
            SelectValue::Single(None)
        };
        Self {
            title: title.into(),
            component: SelectComponent::new(options),
            value,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.value.is_multiple()
    }

    /// `title=labels`, the line printed for this field when the UI exits
    pub fn output_line(&self) -> String {
        format!("{}={}", self.title, self.value.summary())
    }
}
