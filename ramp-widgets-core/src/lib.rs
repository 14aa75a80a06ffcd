pub mod checkbox;
pub mod class_names;
pub mod config;
pub mod geometry;
pub mod item;
pub mod rows;
pub mod select;
pub mod transaction;

pub use checkbox::CheckboxState;
pub use geometry::{ClientRect, DropdownOffset};
pub use item::{ItemValue, ParsedItem};
pub use rows::{DropdownRows, ItemRow};
pub use select::{KeyCommand, SelectState};
pub use transaction::{approval_message, Transaction};
