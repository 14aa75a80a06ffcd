//! Transactions awaiting approval.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl Transaction {
    /// Parse a JSON array of transactions.
    pub fn parse_list(json: &str) -> Result<Vec<Transaction>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Log line emitted when a transaction's approval flips.
pub fn approval_message(transaction_id: u32, approved: bool) -> String {
    let status = if approved { "approved" } else { "not approved" };
    format!("Transaction {transaction_id} is now {status}")
}
