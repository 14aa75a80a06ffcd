//! Local state of a checkbox control.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckboxState {
    pub checked: bool,
    pub disabled: bool,
}

impl CheckboxState {
    pub fn new(checked: bool, disabled: bool) -> Self {
        Self { checked, disabled }
    }

    /// Flip the checked flag and return the new value.
    ///
    /// A disabled checkbox never toggles, whether the change comes from the
    /// input, its label, or code.
    pub fn toggle(&mut self) -> Option<bool> {
        if self.disabled {
            return None;
        }
        self.checked = !self.checked;
        Some(self.checked)
    }
}
