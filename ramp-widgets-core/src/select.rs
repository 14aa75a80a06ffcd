//! Open/highlight/selection state machine behind `InputSelect`.
//!
//! The component owns one `SelectState` and forwards DOM events to it. Nothing
//! here touches the DOM.

use crate::geometry::DropdownOffset;
use crate::item::{ItemValue, ParsedItem};

/// Keyboard intent, decoded from `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Open,
    Next,
    Previous,
    First,
    Last,
    Confirm,
    Dismiss,
}

impl KeyCommand {
    /// Decode a key for the current open state. Keys that do nothing in that
    /// state return `None` so the browser keeps its default handling.
    pub fn from_key(key: &str, is_open: bool) -> Option<Self> {
        match (key, is_open) {
            ("ArrowDown", true) => Some(Self::Next),
            ("ArrowUp", true) => Some(Self::Previous),
            ("Home", true) => Some(Self::First),
            ("End", true) => Some(Self::Last),
            ("Enter", true) => Some(Self::Confirm),
            ("Escape" | "Tab", true) => Some(Self::Dismiss),
            ("ArrowDown" | "ArrowUp" | "Enter" | " ", false) => Some(Self::Open),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectState<T> {
    is_open: bool,
    highlighted: Option<usize>,
    selected: Option<T>,
    offset: DropdownOffset,
}

impl<T: Clone> SelectState<T> {
    pub fn new(default_value: Option<T>) -> Self {
        Self {
            is_open: false,
            highlighted: None,
            selected: default_value,
            offset: DropdownOffset::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn offset(&self) -> DropdownOffset {
        self.offset
    }

    pub fn set_offset(&mut self, offset: DropdownOffset) {
        self.offset = offset;
    }

    /// Projected value of the current selection.
    pub fn selected_value<P>(&self, parse_item: P) -> Option<ItemValue>
    where
        P: Fn(&T) -> ParsedItem,
    {
        self.selected.as_ref().map(|item| parse_item(item).value)
    }

    /// Text for the input surface: the selection's label, or empty.
    pub fn display_label<P>(&self, parse_item: P) -> String
    where
        P: Fn(&T) -> ParsedItem,
    {
        self.selected
            .as_ref()
            .map(|item| parse_item(item).label)
            .unwrap_or_default()
    }

    /// Closed -> Open. The highlight starts on the selected row when it is
    /// still listed.
    pub fn open<P>(&mut self, offset: DropdownOffset, items: &[T], parse_item: P)
    where
        P: Fn(&T) -> ParsedItem,
    {
        let selected_value = self.selected_value(&parse_item);
        self.highlighted = selected_value
            .and_then(|value| items.iter().position(|item| parse_item(item).value == value));
        self.offset = offset;
        self.is_open = true;
        log::debug!("select opened, highlight={:?}", self.highlighted);
    }

    /// Open -> Closed without committing. Returns whether the list was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        self.highlighted = None;
        if was_open {
            log::debug!("select dismissed");
        }
        was_open
    }

    /// Click on the input surface: open when closed, dismiss when open.
    pub fn toggle<P>(&mut self, offset: DropdownOffset, items: &[T], parse_item: P)
    where
        P: Fn(&T) -> ParsedItem,
    {
        if self.is_open {
            self.dismiss();
        } else {
            self.open(offset, items, parse_item);
        }
    }

    /// Point the highlight at `index` (mouse enter). Ignored when closed or out of range.
    pub fn highlight(&mut self, index: usize, row_count: usize) {
        if self.is_open && index < row_count {
            self.highlighted = Some(index);
        }
    }

    /// Apply a navigation command over `row_count` selectable rows. Moves wrap.
    pub fn navigate(&mut self, command: KeyCommand, row_count: usize) {
        if !self.is_open || row_count == 0 {
            return;
        }
        let last = row_count - 1;
        self.highlighted = match (command, self.highlighted) {
            (KeyCommand::Next, Some(i)) if i < last => Some(i + 1),
            (KeyCommand::Next, _) => Some(0),
            (KeyCommand::Previous, Some(i)) if i > 0 && i <= last => Some(i - 1),
            (KeyCommand::Previous, _) => Some(last),
            (KeyCommand::First, _) => Some(0),
            (KeyCommand::Last, _) => Some(last),
            (_, current) => current,
        };
    }

    /// Item under the highlight, if any. Nothing is selectable while loading.
    pub fn highlighted_item(&self, items: &[T], is_loading: bool) -> Option<T> {
        if is_loading {
            return None;
        }
        self.highlighted.and_then(|i| items.get(i).cloned())
    }

    /// Open -> Closed, committing `choice` when it resolved to an item.
    ///
    /// `on_change` runs before the selection is stored. A `None` choice only
    /// closes. Returns whether a commit happened.
    pub fn commit<F>(&mut self, choice: Option<T>, on_change: F) -> bool
    where
        F: FnOnce(&T),
    {
        self.is_open = false;
        self.highlighted = None;
        let Some(item) = choice else {
            log::debug!("select closed without a choice");
            return false;
        };
        on_change(&item);
        self.selected = Some(item);
        log::debug!("select committed");
        true
    }
}
