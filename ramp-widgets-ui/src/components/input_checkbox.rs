//! Checkbox control with a styled label.

use leptos::*;
use ramp_widgets_core::{class_names, config::checkbox_input_id, CheckboxState};

/// Checkbox that keeps its own checked state and reports each toggle.
///
/// When `disabled`, toggles are ignored entirely: neither the local state
/// nor `on_change` sees them, whichever way the change arrives.
#[component]
pub fn InputCheckbox(
    /// Suffix for the element id and test id
    #[prop(into)]
    id: String,
    /// Initial checked state
    #[prop(optional)]
    checked: bool,
    /// Ignore every toggle and render the disabled modifier
    #[prop(optional)]
    disabled: bool,
    /// Called with the new checked value after the local state flips
    on_change: Callback<bool>,
) -> impl IntoView {
    let input_id = checkbox_input_id(&id);
    let state = create_rw_signal(CheckboxState::new(checked, disabled));
    let is_checked = move || state.with(|s| s.checked);

    let handle_change = move |_| {
        let mut next = state.get_untracked();
        let Some(new_value) = next.toggle() else {
            return;
        };
        state.set(next);
        on_change.call(new_value);
    };

    view! {
        <div class=class_names::CHECKBOX_CONTAINER data-testid=input_id.clone()>
            <label
                for=input_id.clone()
                class=move || class_names::checkbox_label(is_checked(), disabled)
            />
            <input
                id=input_id
                type="checkbox"
                class=class_names::CHECKBOX_INPUT
                prop:checked=is_checked
                disabled=disabled
                on:change=handle_change
            />
        </div>
    }
}
