// ramp-widgets-ui/src/positioning.rs
//! DOM side of dropdown placement.

use ramp_widgets_core::{ClientRect, DropdownOffset};
use wasm_bindgen::JsCast;
use web_sys::{DomRect, EventTarget, HtmlElement};

fn client_rect(rect: &DomRect) -> ClientRect {
    ClientRect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

/// Offset that places the dropdown under `target`.
///
/// Anything that is not an HTML element (the window, a text node, no target
/// at all) yields `{0, 0}`.
pub fn compute_dropdown_offset(target: Option<&EventTarget>) -> DropdownOffset {
    let Some(element) = target.and_then(|t| t.dyn_ref::<HtmlElement>()) else {
        return DropdownOffset::default();
    };

    let anchor = client_rect(&element.get_bounding_client_rect());
    let parent_top = element
        .offset_parent()
        .map(|parent| parent.get_bounding_client_rect().top());

    DropdownOffset::below(anchor, parent_top)
}
