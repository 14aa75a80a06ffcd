//! What an open dropdown lists.

use crate::class_names;
use crate::config::{loading_row_text, NO_ITEMS_LABEL};
use crate::item::ParsedItem;
use crate::select::SelectState;

/// One selectable row.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub index: usize,
    pub key: String,
    pub label: String,
    pub highlighted: bool,
    pub selected: bool,
}

impl ItemRow {
    pub fn class_name(&self) -> String {
        class_names::dropdown_item(self.highlighted, self.selected)
    }
}

/// Contents of the dropdown container.
#[derive(Clone, Debug, PartialEq)]
pub enum DropdownRows {
    /// List is closed; nothing is rendered.
    Hidden,
    /// Single non-selectable row carrying the loading text.
    Loading(String),
    /// Single non-selectable "No items" row.
    Empty,
    Items(Vec<ItemRow>),
}

impl DropdownRows {
    pub fn build<T, P>(
        state: &SelectState<T>,
        items: &[T],
        parse_item: P,
        is_loading: bool,
        loading_label: &str,
    ) -> Self
    where
        T: Clone,
        P: Fn(&T) -> ParsedItem,
    {
        if !state.is_open() {
            return Self::Hidden;
        }
        if is_loading {
            return Self::Loading(loading_row_text(loading_label));
        }
        if items.is_empty() {
            return Self::Empty;
        }

        let selected_value = state.selected_value(&parse_item);
        let highlighted = state.highlighted_index();
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let parsed = parse_item(item);
                ItemRow {
                    index,
                    key: parsed.key(),
                    selected: selected_value.as_ref() == Some(&parsed.value),
                    highlighted: highlighted == Some(index),
                    label: parsed.label,
                }
            })
            .collect();
        Self::Items(rows)
    }

    /// Text of the placeholder row, if this is a placeholder.
    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            Self::Loading(text) => Some(text.as_str()),
            Self::Empty => Some(NO_ITEMS_LABEL),
            Self::Hidden | Self::Items(_) => None,
        }
    }

    /// Number of rows that can be highlighted or chosen.
    pub fn selectable_count(&self) -> usize {
        match self {
            Self::Items(rows) => rows.len(),
            _ => 0,
        }
    }
}
