mod window_scroll;

pub use window_scroll::use_on_window_scroll;
