//! Select control: an input surface that opens a list of caller items.

use leptos::*;
use leptos_use::on_click_outside;
use ramp_widgets_core::{class_names, DropdownRows, KeyCommand, ParsedItem, SelectState};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};

use crate::hooks::use_on_window_scroll;
use crate::positioning::compute_dropdown_offset;

/// Dropdown select over opaque items.
///
/// Items are only seen through `parse_item`, which yields the row label and
/// the value used to match highlight and selection. The selection is owned
/// here and starts at `default_value`. It is never re-checked against
/// `items`, so a selection that drops out of the list keeps its label.
#[component]
pub fn InputSelect<T, P>(
    /// Caption above the input surface
    #[prop(into)]
    label: String,
    /// Initial selection
    #[prop(optional)]
    default_value: Option<T>,
    /// Candidate items
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Projects an item to its label and identity
    parse_item: P,
    /// Show the loading row instead of items
    #[prop(optional, into)]
    is_loading: MaybeSignal<bool>,
    /// Loading row text ("..." is appended)
    #[prop(into)]
    loading_label: String,
    /// Called with the chosen item, before the selection updates
    on_change: Callback<T>,
) -> impl IntoView
where
    T: Clone + 'static,
    P: Fn(&T) -> ParsedItem + Copy + 'static,
{
    let state = create_rw_signal(SelectState::new(default_value));
    let is_loading = Signal::derive(move || is_loading.get());
    let loading_label = store_value(loading_label);
    let root_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Div>();

    let rows = move || {
        items.with(|items| {
            state.with(|s| {
                loading_label.with_value(|loading_label| {
                    DropdownRows::build(s, items, parse_item, is_loading.get(), loading_label)
                })
            })
        })
    };

    let is_open = move || state.with(|s| s.is_open());

    let input_offset = move || {
        input_ref
            .get_untracked()
            .map(|el| compute_dropdown_offset(Some(el.unchecked_ref::<EventTarget>())))
            .unwrap_or_default()
    };

    let open = move |target: Option<EventTarget>| {
        let offset = compute_dropdown_offset(target.as_ref());
        items.with_untracked(|items| state.update(|s| s.open(offset, items, parse_item)));
    };

    let dismiss = move || {
        if state.with_untracked(|s| s.is_open()) {
            state.update(|s| {
                s.dismiss();
            });
        }
    };

    // on_change runs against a copy so it never observes the signal mid-update
    let commit = move |choice: Option<T>| {
        let mut next = state.get_untracked();
        next.commit(choice, |item| on_change.call(item.clone()));
        state.set(next);
    };

    let choose = move |index: usize| {
        if is_loading.get_untracked() {
            return;
        }
        let choice = items.with_untracked(|items| items.get(index).cloned());
        commit(choice);
    };

    let highlight = move |index: usize| {
        let count = items.with_untracked(Vec::len);
        state.update(|s| s.highlight(index, count));
    };

    let on_input_click = move |ev: MouseEvent| {
        if state.with_untracked(|s| s.is_open()) {
            dismiss();
        } else {
            open(ev.target());
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        let Some(command) = KeyCommand::from_key(&key, state.with_untracked(|s| s.is_open()))
        else {
            return;
        };
        if key != "Tab" {
            ev.prevent_default();
        }

        match command {
            KeyCommand::Open => {
                let offset = input_offset();
                items.with_untracked(|items| state.update(|s| s.open(offset, items, parse_item)));
            }
            KeyCommand::Confirm => {
                let choice = items.with_untracked(|items| {
                    state.with_untracked(|s| s.highlighted_item(items, is_loading.get_untracked()))
                });
                commit(choice);
            }
            KeyCommand::Dismiss => dismiss(),
            navigation => {
                let count = if is_loading.get_untracked() {
                    0
                } else {
                    items.with_untracked(Vec::len)
                };
                state.update(|s| s.navigate(navigation, count));
            }
        }
    };

    use_on_window_scroll(move || {
        if state.with_untracked(|s| s.is_open()) {
            let offset = input_offset();
            state.update(|s| s.set_offset(offset));
        }
    });

    let _ = on_click_outside(root_ref, move |_| dismiss());

    view! {
        <div node_ref=root_ref class=class_names::SELECT_ROOT style="position: relative">
            <label class=class_names::SELECT_LABEL>{label}</label>
            <div class=class_names::BREAK_XS />
            <div
                node_ref=input_ref
                class=class_names::SELECT_INPUT
                tabindex="0"
                role="combobox"
                aria-expanded=move || is_open().to_string()
                on:click=on_input_click
                on:keydown=on_keydown
            >
                {move || state.with(|s| s.display_label(parse_item))}
            </div>

            <div
                class=move || class_names::dropdown_container(is_open())
                style=move || state.with(|s| s.offset().to_css_vars())
                role="listbox"
            >
                {move || match rows() {
                    DropdownRows::Hidden => ().into_view(),
                    DropdownRows::Items(rows) => rows
                        .into_iter()
                        .map(|row| {
                            let index = row.index;
                            view! {
                                <div
                                    class=row.class_name()
                                    role="option"
                                    aria-selected=row.selected.to_string()
                                    on:click=move |_| choose(index)
                                    on:mouseenter=move |_| highlight(index)
                                >
                                    {row.label}
                                </div>
                            }
                        })
                        .collect_view(),
                    placeholder => {
                        let text = placeholder.placeholder_text().unwrap_or_default().to_string();
                        view! { <div class=class_names::SELECT_ITEM>{text}</div> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Clone, Debug, PartialEq)]
    struct Employee {
        id: u32,
        label: &'static str,
    }

    fn parse_employee(employee: &Employee) -> ParsedItem {
        ParsedItem::new(employee.label, employee.id)
    }

    fn alice_and_bob() -> Vec<Employee> {
        vec![
            Employee { id: 1, label: "Alice" },
            Employee { id: 2, label: "Bob" },
        ]
    }

    fn fresh_container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    fn find(container: &HtmlElement, selector: &str) -> HtmlElement {
        container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    fn rows(container: &HtmlElement) -> Vec<HtmlElement> {
        let list = container
            .query_selector_all(&format!(".{}", class_names::SELECT_ITEM))
            .unwrap();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|node| node.unchecked_into())
            .collect()
    }

    fn press(target: &HtmlElement, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        let _ = target.dispatch_event(&event);
    }

    fn mount_select(
        items: Vec<Employee>,
        default_value: Option<Employee>,
        is_loading: bool,
    ) -> (HtmlElement, Rc<RefCell<Vec<Employee>>>) {
        let container = fresh_container();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);

        mount_to(container.clone(), move || {
            let (items, _) = create_signal(items);
            let on_change = Callback::new(move |employee: Employee| {
                sink.borrow_mut().push(employee);
            });
            match default_value {
                Some(default_value) => view! {
                    <InputSelect
                        label="Employee"
                        default_value=default_value
                        items=items
                        parse_item=parse_employee
                        is_loading=is_loading
                        loading_label="Loading employees"
                        on_change=on_change
                    />
                }
                .into_view(),
                None => view! {
                    <InputSelect
                        label="Employee"
                        items=items
                        parse_item=parse_employee
                        is_loading=is_loading
                        loading_label="Loading employees"
                        on_change=on_change
                    />
                }
                .into_view(),
            }
        });

        (container, changes)
    }

    #[wasm_bindgen_test]
    async fn choosing_an_item_commits_and_closes() {
        let (container, changes) = mount_select(alice_and_bob(), None, false);
        let input = find(&container, ".RampInputSelect--input");
        assert_eq!(input.text_content().unwrap_or_default(), "");

        input.click();
        TimeoutFuture::new(10).await;

        let listed = rows(&container);
        let labels: Vec<String> = listed
            .iter()
            .map(|row| row.text_content().unwrap_or_default())
            .collect();
        assert_eq!(labels, ["Alice", "Bob"]);
        assert!(listed
            .iter()
            .all(|row| !row.class_name().contains("dropdown-item-selected")));

        listed[1].click();
        TimeoutFuture::new(10).await;

        assert_eq!(*changes.borrow(), vec![Employee { id: 2, label: "Bob" }]);
        assert_eq!(input.text_content().unwrap_or_default(), "Bob");
        assert!(rows(&container).is_empty());
        let dropdown = find(&container, ".RampInputSelect--dropdown-container");
        assert!(!dropdown
            .class_name()
            .contains("RampInputSelect--dropdown-container-opened"));

        // Reopening marks the committed row
        input.click();
        TimeoutFuture::new(10).await;
        let listed = rows(&container);
        assert!(listed[1].class_name().contains("dropdown-item-selected"));
        assert!(!listed[0].class_name().contains("dropdown-item-selected"));

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn escape_dismisses_without_calling_on_change() {
        let alice = Employee { id: 1, label: "Alice" };
        let (container, changes) = mount_select(alice_and_bob(), Some(alice), false);
        let input = find(&container, ".RampInputSelect--input");
        assert_eq!(input.text_content().unwrap_or_default(), "Alice");

        input.click();
        TimeoutFuture::new(10).await;
        assert_eq!(rows(&container).len(), 2);

        press(&input, "Escape");
        TimeoutFuture::new(10).await;

        assert!(rows(&container).is_empty());
        assert!(changes.borrow().is_empty());
        assert_eq!(input.text_content().unwrap_or_default(), "Alice");

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn keyboard_highlight_and_confirm() {
        let (container, changes) = mount_select(alice_and_bob(), None, false);
        let input = find(&container, ".RampInputSelect--input");

        press(&input, "ArrowDown");
        TimeoutFuture::new(10).await;
        assert_eq!(rows(&container).len(), 2);

        press(&input, "ArrowDown");
        press(&input, "ArrowDown");
        TimeoutFuture::new(10).await;
        let listed = rows(&container);
        assert!(listed[1].class_name().contains("dropdown-item-highlighted"));
        assert!(!listed[0].class_name().contains("dropdown-item-highlighted"));

        press(&input, "Enter");
        TimeoutFuture::new(10).await;
        assert_eq!(*changes.borrow(), vec![Employee { id: 2, label: "Bob" }]);
        assert_eq!(input.text_content().unwrap_or_default(), "Bob");

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn loading_shows_single_unselectable_row() {
        let (container, changes) = mount_select(alice_and_bob(), None, true);
        let input = find(&container, ".RampInputSelect--input");

        input.click();
        TimeoutFuture::new(10).await;

        let listed = rows(&container);
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].text_content().unwrap_or_default(),
            "Loading employees..."
        );

        listed[0].click();
        press(&input, "ArrowDown");
        press(&input, "Enter");
        TimeoutFuture::new(10).await;
        assert!(changes.borrow().is_empty());

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn empty_items_show_no_items_row() {
        let (container, _changes) = mount_select(Vec::new(), None, false);
        let input = find(&container, ".RampInputSelect--input");

        input.click();
        TimeoutFuture::new(10).await;

        let listed = rows(&container);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text_content().unwrap_or_default(), "No items");

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn on_change_runs_before_the_input_shows_the_new_label() {
        let container = fresh_container();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let root = container.clone();

        mount_to(container.clone(), move || {
            let (items, _) = create_signal(alice_and_bob());
            let on_change = Callback::new(move |employee: Employee| {
                let shown = find(&root, ".RampInputSelect--input")
                    .text_content()
                    .unwrap_or_default();
                sink.borrow_mut().push((employee.label, shown));
            });
            view! {
                <InputSelect
                    label="Employee"
                    default_value=Employee { id: 1, label: "Alice" }
                    items=items
                    parse_item=parse_employee
                    loading_label="Loading employees"
                    on_change=on_change
                />
            }
        });

        let input = find(&container, ".RampInputSelect--input");
        input.click();
        TimeoutFuture::new(10).await;
        rows(&container)[1].click();
        TimeoutFuture::new(10).await;

        assert_eq!(*seen.borrow(), vec![("Bob", "Alice".to_string())]);
        assert_eq!(input.text_content().unwrap_or_default(), "Bob");

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn scrolling_while_open_repositions_the_dropdown() {
        let (container, _changes) = mount_select(alice_and_bob(), None, false);
        let input = find(&container, ".RampInputSelect--input");
        let dropdown = find(&container, ".RampInputSelect--dropdown-container");

        input.click();
        TimeoutFuture::new(10).await;
        let before = dropdown.get_attribute("style").unwrap_or_default();

        // Shift the control sideways; only a recompute can pick this up
        container.set_attribute("style", "margin-left: 60px;").unwrap();
        let scroll = web_sys::Event::new("scroll").unwrap();
        let _ = web_sys::window().unwrap().dispatch_event(&scroll);
        TimeoutFuture::new(10).await;

        let after = dropdown.get_attribute("style").unwrap_or_default();
        let left = input.get_bounding_client_rect().left();
        assert_ne!(before, after);
        assert!(after.contains(&format!("--dropdown-left: {}px", left)));

        container.remove();
    }

    #[wasm_bindgen_test]
    async fn clicking_outside_dismisses_without_committing() {
        let alice = Employee { id: 1, label: "Alice" };
        let (container, changes) = mount_select(alice_and_bob(), Some(alice), false);
        let input = find(&container, ".RampInputSelect--input");

        input.click();
        TimeoutFuture::new(10).await;
        assert_eq!(rows(&container).len(), 2);

        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
        body.click();
        TimeoutFuture::new(10).await;

        assert!(rows(&container).is_empty());
        assert!(changes.borrow().is_empty());
        assert_eq!(input.text_content().unwrap_or_default(), "Alice");

        container.remove();
    }
}
