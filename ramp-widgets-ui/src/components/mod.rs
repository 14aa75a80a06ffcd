pub mod input_checkbox;
pub mod input_select;
pub mod transaction_item;

pub use input_checkbox::InputCheckbox;
pub use input_select::InputSelect;
pub use transaction_item::TransactionItem;
