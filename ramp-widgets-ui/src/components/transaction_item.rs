use leptos::*;
use ramp_widgets_core::{approval_message, class_names, Transaction};

/// A transaction row with an approval checkbox. Approval changes are logged.
#[component]
pub fn TransactionItem(transaction: Transaction) -> impl IntoView {
    let (is_approved, set_is_approved) = create_signal(false);
    let transaction_id = transaction.id;

    let handle_change = move |_| {
        set_is_approved.update(|approved| {
            *approved = !*approved;
            log::info!("{}", approval_message(transaction_id, *approved));
        });
    };

    view! {
        <div class=class_names::TRANSACTION_ITEM>
            <div class=class_names::TRANSACTION_DETAILS>
                <span>{transaction.description}</span>
                <span>{transaction.amount}</span>
                <span>{transaction.date}</span>
            </div>
            <div class=class_names::TRANSACTION_APPROVAL>
                <input
                    type="checkbox"
                    class=class_names::APPROVAL_CHECKBOX
                    prop:checked=move || is_approved.get()
                    on:change=handle_change
                />
            </div>
        </div>
    }
}
