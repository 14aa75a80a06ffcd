// ramp-widgets-ui/src/app.rs
use crate::components::{InputCheckbox, InputSelect, TransactionItem};
use leptos::*;
use ramp_widgets_core::{ParsedItem, Transaction};
use serde::Deserialize;
use std::time::Duration;

const EMPLOYEE_LOAD_DELAY_MS: u64 = 400;

const EMPLOYEES_JSON: &str = r#"[
    {"id": "emp-1", "firstName": "Alice", "lastName": "Moreno"},
    {"id": "emp-2", "firstName": "Bob", "lastName": "Okafor"},
    {"id": "emp-3", "firstName": "Carmen", "lastName": "Liu"}
]"#;

const TRANSACTIONS_JSON: &str = r#"[
    {"id": 1, "description": "Team offsite catering", "amount": "$1,280.00", "date": "2024-02-12"},
    {"id": 2, "description": "Design software licence", "amount": "$600.00", "date": "2024-02-14"},
    {"id": 3, "description": "Conference travel", "amount": "$2,045.37", "date": "2024-02-19"}
]"#;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

fn parse_employee(employee: &Employee) -> ParsedItem {
    ParsedItem::new(
        format!("{} {}", employee.first_name, employee.last_name),
        employee.id.as_str(),
    )
}

fn load_employees() -> Vec<Employee> {
    serde_json::from_str(EMPLOYEES_JSON).unwrap_or_else(|e| {
        log::warn!("Failed to parse employee fixtures: {}", e);
        Vec::new()
    })
}

fn load_transactions() -> Vec<Transaction> {
    Transaction::parse_list(TRANSACTIONS_JSON).unwrap_or_else(|e| {
        log::warn!("Failed to parse transaction fixtures: {}", e);
        Vec::new()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let (employees, set_employees) = create_signal(Vec::<Employee>::new());
    let (is_loading, set_is_loading) = create_signal(true);

    // Stand-in for a fetch: items arrive shortly after mount
    set_timeout(
        move || {
            set_employees.set(load_employees());
            set_is_loading.set(false);
        },
        Duration::from_millis(EMPLOYEE_LOAD_DELAY_MS),
    );

    let on_employee_change = Callback::new(|employee: Employee| {
        log::info!("Filtering transactions by employee {}", employee.id);
    });

    let on_bulk_toggle = Callback::new(|checked: bool| {
        log::info!("Bulk approval mode {}", if checked { "on" } else { "off" });
    });

    view! {
        <main class="MainContainer">
            <h1 class="RampText--l">"Approve transactions"</h1>
            <div class="RampBreak--l" />
            <InputSelect
                label="Filter by employee"
                items=employees
                parse_item=parse_employee
                is_loading=is_loading
                loading_label="Loading employees"
                on_change=on_employee_change
            />
            <div class="RampBreak--l" />
            <InputCheckbox id="bulk-approval" on_change=on_bulk_toggle />
            <div class="RampBreak--l" />
            {load_transactions()
                .into_iter()
                .map(|transaction| view! { <TransactionItem transaction=transaction /> })
                .collect_view()}
        </main>
    }
}
