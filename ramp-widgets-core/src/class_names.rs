//! Structural class names that external stylesheets target.
//!
//! These strings are a compatibility contract with the styling layer and must
//! not change.

pub const SELECT_ROOT: &str = "RampInputSelect--root";
pub const SELECT_LABEL: &str = "RampText--s RampText--hushed";
pub const BREAK_XS: &str = "RampBreak--xs";
pub const SELECT_INPUT: &str = "RampInputSelect--input";
pub const SELECT_DROPDOWN: &str = "RampInputSelect--dropdown-container";
pub const SELECT_DROPDOWN_OPENED: &str = "RampInputSelect--dropdown-container-opened";
pub const SELECT_ITEM: &str = "RampInputSelect--dropdown-item";
pub const SELECT_ITEM_HIGHLIGHTED: &str = "RampInputSelect--dropdown-item-highlighted";
pub const SELECT_ITEM_SELECTED: &str = "RampInputSelect--dropdown-item-selected";

pub const CHECKBOX_CONTAINER: &str = "RampInputCheckbox--container";
pub const CHECKBOX_LABEL: &str = "RampInputCheckbox--label";
pub const CHECKBOX_LABEL_CHECKED: &str = "RampInputCheckbox--label-checked";
pub const CHECKBOX_LABEL_DISABLED: &str = "RampInputCheckbox--label-disabled";
pub const CHECKBOX_INPUT: &str = "RampInputCheckbox--input";

pub const TRANSACTION_ITEM: &str = "TransactionItem";
pub const TRANSACTION_DETAILS: &str = "TransactionDetails";
pub const TRANSACTION_APPROVAL: &str = "TransactionApproval";
pub const APPROVAL_CHECKBOX: &str = "ApprovalCheckbox";

/// Join a base class with the modifiers whose flag is set.
pub fn with_modifiers(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut class = base.to_string();
    for (modifier, enabled) in modifiers {
        if *enabled {
            class.push(' ');
            class.push_str(modifier);
        }
    }
    class
}

pub fn dropdown_container(is_open: bool) -> String {
    with_modifiers(SELECT_DROPDOWN, &[(SELECT_DROPDOWN_OPENED, is_open)])
}

pub fn dropdown_item(highlighted: bool, selected: bool) -> String {
    with_modifiers(
        SELECT_ITEM,
        &[
            (SELECT_ITEM_HIGHLIGHTED, highlighted),
            (SELECT_ITEM_SELECTED, selected),
        ],
    )
}

pub fn checkbox_label(checked: bool, disabled: bool) -> String {
    with_modifiers(
        CHECKBOX_LABEL,
        &[
            (CHECKBOX_LABEL_CHECKED, checked),
            (CHECKBOX_LABEL_DISABLED, disabled),
        ],
    )
}
