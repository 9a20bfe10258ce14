use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// The value carried by an option. Integers and floats are kept apart so a
/// TOML `1` round-trips as `1` rather than `1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(v) => write!(f, "{v}"),
            OptionValue::Float(v) => write!(f, "{v}"),
            OptionValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// One selectable entry. Options are immutable and shared as
/// `Rc<SelectOption>`; two options are the same option only when they are
/// the same allocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: OptionValue) -> Rc<Self> {
        Rc::new(Self {
            label: label.into(),
            value,
        })
    }
}

/// The caller-owned selection. The variant decides the mode of the select.
#[derive(Clone, Debug)]
pub enum SelectValue {
    Single(Option<Rc<SelectOption>>),
    Multiple(Vec<Rc<SelectOption>>),
}

impl SelectValue {
    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectValue::Multiple(_))
    }

    /// Reference-equality membership test
    pub fn contains(&self, option: &Rc<SelectOption>) -> bool {
        match self {
            SelectValue::Single(current) => {
                current.as_ref().is_some_and(|c| Rc::ptr_eq(c, option))
            }
            SelectValue::Multiple(values) => values.iter().any(|v| Rc::ptr_eq(v, option)),
        }
    }

    /// Selected options in display order
    pub fn selected(&self) -> Vec<Rc<SelectOption>> {
        match self {
            SelectValue::Single(current) => current.iter().cloned().collect(),
            SelectValue::Multiple(values) => values.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(current) => current.is_none(),
            SelectValue::Multiple(values) => values.is_empty(),
        }
    }

    /// Labels joined by `", "`, empty when nothing is selected
    pub fn summary(&self) -> String {
        self.selected()
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Local state of a dropdown selector. Selection is never stored here: every
/// operation that may change it takes the current value and reports the new
/// one through `on_change`.
#[derive(Debug, Default)]
pub struct SelectComponent {
    pub options: Vec<Rc<SelectOption>>,
    is_open: bool,
    highlighted_index: usize,
}

impl SelectComponent {
    pub fn new(options: Vec<Rc<SelectOption>>) -> Self {
        Self {
            options,
            is_open: false,
            highlighted_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    /// Only a closed -> open transition resets the highlight.
    fn set_open(&mut self, open: bool) {
        if open && !self.is_open {
            self.highlighted_index = 0;
        }
        self.is_open = open;
    }

    pub fn toggle_open(&mut self) {
        self.set_open(!self.is_open);
    }

    pub fn blur(&mut self) {
        self.set_open(false);
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.options.len() {
            self.highlighted_index = index;
        }
    }

    pub fn clear_option(&self, value: &SelectValue, on_change: &mut impl FnMut(SelectValue)) {
        if value.is_multiple() {
            on_change(SelectValue::Multiple(Vec::new()));
        } else {
            on_change(SelectValue::Single(None));
        }
    }

    pub fn select_option(
        &self,
        value: &SelectValue,
        option: &Rc<SelectOption>,
        on_change: &mut impl FnMut(SelectValue),
    ) {
        match value {
            SelectValue::Multiple(values) => {
                if value.contains(option) {
                    let remaining = values
                        .iter()
                        .filter(|v| !Rc::ptr_eq(v, option))
                        .cloned()
                        .collect();
                    on_change(SelectValue::Multiple(remaining));
                } else {
                    let mut appended = values.clone();
                    appended.push(Rc::clone(option));
                    on_change(SelectValue::Multiple(appended));
                }
            }
            SelectValue::Single(_) => {
                if !value.contains(option) {
                    on_change(SelectValue::Single(Some(Rc::clone(option))));
                }
            }
        }
    }

    pub fn is_option_selected(&self, value: &SelectValue, option: &Rc<SelectOption>) -> bool {
        value.contains(option)
    }

    /// Click on an option row: select it, then close the list.
    pub fn click_option(
        &mut self,
        index: usize,
        value: &SelectValue,
        on_change: &mut impl FnMut(SelectValue),
    ) {
        if let Some(option) = self.options.get(index).cloned() {
            self.select_option(value, &option, on_change);
        }
        self.set_open(false);
    }

    /// Click on a badge's remove button. The open flag is left untouched.
    pub fn click_badge(
        &self,
        index: usize,
        value: &SelectValue,
        on_change: &mut impl FnMut(SelectValue),
    ) {
        if let SelectValue::Multiple(values) = value
            && let Some(option) = values.get(index)
        {
            self.select_option(value, option, on_change);
        }
    }

    /// Click on the clear button. The open flag is left untouched.
    pub fn click_clear(&self, value: &SelectValue, on_change: &mut impl FnMut(SelectValue)) {
        self.clear_option(value, on_change);
    }
}
