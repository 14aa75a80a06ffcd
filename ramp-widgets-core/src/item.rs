//! Caller items as the dropdown sees them.

use std::fmt;

/// Identity of an item for highlight and selection comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Text(text) => f.write_str(text),
            ItemValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        ItemValue::Text(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        ItemValue::Text(value.to_string())
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        ItemValue::Number(value)
    }
}

impl From<u32> for ItemValue {
    fn from(value: u32) -> Self {
        ItemValue::Number(value.into())
    }
}

impl From<i32> for ItemValue {
    fn from(value: i32) -> Self {
        ItemValue::Number(value.into())
    }
}

/// Label and identity projected from an opaque item by the caller's `parse_item`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedItem {
    pub label: String,
    pub value: ItemValue,
}

impl ParsedItem {
    pub fn new(label: impl Into<String>, value: impl Into<ItemValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Key used to identify the rendered row.
    pub fn key(&self) -> String {
        self.value.to_string()
    }
}
