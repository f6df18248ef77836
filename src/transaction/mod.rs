//! Transaction management for the transfer pricing application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its `asset`/`liability` and risk enumerations
//! - Database functions for storing, querying, and managing transactions
//! - The JSON payload validation and the CRUD endpoints

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;
mod payload;
mod update_transaction_endpoint;

pub use core::{
    NewTransaction, RiskLevel, Transaction, TransactionType, TransactionUpdate,
    create_transaction, create_transaction_table, delete_transaction, list_liabilities,
    list_transactions, map_transaction_row, update_transaction,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::{DeleteTransactionResponse, delete_transaction_endpoint};
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use payload::TransactionData;
pub use update_transaction_endpoint::update_transaction_endpoint;
