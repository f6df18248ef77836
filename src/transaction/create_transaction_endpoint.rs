//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionData, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new transaction, responds with the created
/// record and status 201.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(data): Json<TransactionData>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let new_transaction = data.validate()?;

    let connection = state.db_connection.lock().unwrap();
    let transaction = create_transaction(new_transaction, &connection)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        transaction::{RiskLevel, TransactionData, TransactionType, core::list_transactions},
    };

    use super::{CreateTransactionState, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn valid_payload() -> TransactionData {
        TransactionData {
            transaction_type: Some("liability".to_owned()),
            amount: Some(100.0),
            description: Some("Term deposit".to_owned()),
            interest_rate: Some(5.0),
            risk: None,
            maturity: None,
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();

        let (status, Json(transaction)) =
            create_transaction_endpoint(State(state.clone()), Json(valid_payload()))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(transaction.amount, 100.0);
        assert_eq!(transaction.transaction_type, TransactionType::Liability);
        // Omitted fields fall back to their defaults.
        assert_eq!(transaction.risk, RiskLevel::Low);
        assert_eq!(transaction.maturity, 0.0);

        let connection = state.db_connection.lock().unwrap();
        let stored = list_transactions(&connection).unwrap();
        assert_eq!(stored, [transaction]);
    }

    #[tokio::test]
    async fn rejects_negative_amount_without_inserting() {
        let state = get_test_state();
        let payload = TransactionData {
            amount: Some(-5.0),
            ..valid_payload()
        };

        let result = create_transaction_endpoint(State(state.clone()), Json(payload)).await;

        assert_eq!(result.unwrap_err(), Error::InvalidAmount);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_transactions(&connection).unwrap(), []);
    }
}
