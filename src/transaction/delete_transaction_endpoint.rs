//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::{Transaction, core::delete_transaction},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body returned after a successful delete.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransactionResponse {
    /// A confirmation message.
    pub message: String,
    /// The transaction that was removed.
    pub deleted_transaction: Transaction,
}

/// A route handler for deleting a transaction, responds with the deleted
/// record so the client can offer an undo.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeleteTransactionResponse>, Error> {
    let connection = state.db_connection.lock().unwrap();

    let deleted_transaction = delete_transaction(transaction_id, &connection)?;

    Ok(Json(DeleteTransactionResponse {
        message: "Transaction deleted".to_owned(),
        deleted_transaction,
    }))
}
