// ramp-widgets-ui/src/hooks/window_scroll.rs
use leptos::*;

/// Call `on_scroll` on every window scroll for as long as the calling
/// component is mounted. Each call site owns its own listener, which is
/// removed when the component's owner is disposed.
pub fn use_on_window_scroll<F>(mut on_scroll: F)
where
    F: FnMut() + 'static,
{
    let _ = leptos_use::use_event_listener(leptos_use::use_window(), ev::scroll, move |_| {
        on_scroll();
    });
}
