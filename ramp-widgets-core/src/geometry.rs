//! Dropdown placement math.
//!
//! The DOM side reads bounding rects; everything here is plain arithmetic so it
//! can be tested without a browser.

/// Viewport-relative rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Where the dropdown list sits relative to its positioned ancestor.
///
/// `Default` is `{0, 0}`, the placement used whenever no anchor element is
/// available.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropdownOffset {
    pub top: f64,
    pub left: f64,
}

impl DropdownOffset {
    /// Offset that places the list directly under `anchor`.
    ///
    /// `top` is measured from the positioned ancestor's top edge (or from the
    /// viewport when there is none), `left` stays viewport-relative.
    pub fn below(anchor: ClientRect, positioned_parent_top: Option<f64>) -> Self {
        Self {
            top: anchor.top - positioned_parent_top.unwrap_or(0.0) + anchor.height,
            left: anchor.left,
        }
    }

    /// CSS custom property declarations exposing this offset to stylesheets.
    pub fn to_css_vars(self) -> String {
        format!(
            "--dropdown-top: {}px; --dropdown-left: {}px;",
            self.top, self.left
        )
    }
}
