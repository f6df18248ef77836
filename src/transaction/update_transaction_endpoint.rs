//! Defines the endpoint for updating an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::{Transaction, TransactionData, TransactionUpdate, core::update_transaction},
};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for replacing the core fields of a transaction, responds
/// with the updated record.
///
/// The whole payload is validated, but only the type, amount, description,
/// and interest rate are written; risk and maturity keep their stored values.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let update = TransactionUpdate::from(data.validate()?);

    let connection = state.db_connection.lock().unwrap();

    update_transaction(transaction_id, update, &connection).map(Json)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        transaction::{
            NewTransaction, RiskLevel, TransactionData, TransactionType, core::create_transaction,
        },
    };

    use super::{UpdateTransactionState, update_transaction_endpoint};

    fn get_test_state() -> UpdateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        UpdateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn updated_payload() -> TransactionData {
        TransactionData {
            transaction_type: Some("asset".to_owned()),
            amount: Some(200.0),
            description: Some("Bridging loan".to_owned()),
            interest_rate: Some(9.0),
            risk: None,
            maturity: None,
        }
    }

    #[tokio::test]
    async fn updates_core_fields() {
        let state = get_test_state();
        let created = {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction {
                    transaction_type: TransactionType::Liability,
                    amount: 100.0,
                    description: "Term deposit".to_owned(),
                    interest_rate: 5.0,
                    risk: RiskLevel::Med,
                    maturity: 3.0,
                },
                &connection,
            )
            .unwrap()
        };

        let Json(updated) = update_transaction_endpoint(
            State(state),
            Path(created.id),
            Json(updated_payload()),
        )
        .await
        .unwrap();

        assert_eq!(updated.transaction_type, TransactionType::Asset);
        assert_eq!(updated.amount, 200.0);
        assert_eq!(updated.description, "Bridging loan");
        assert_eq!(updated.interest_rate, 9.0);
        assert_eq!(updated.risk, RiskLevel::Med);
        assert_eq!(updated.maturity, 3.0);
    }

    #[tokio::test]
    async fn responds_not_found_for_missing_id() {
        let state = get_test_state();

        let result =
            update_transaction_endpoint(State(state), Path(1337), Json(updated_payload())).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
    }

    #[tokio::test]
    async fn rejects_invalid_payload_before_touching_the_database() {
        let state = get_test_state();
        let payload = TransactionData {
            interest_rate: Some(0.0),
            ..updated_payload()
        };

        let result = update_transaction_endpoint(State(state), Path(1), Json(payload)).await;

        assert_eq!(result.unwrap_err(), Error::InvalidInterestRate);
    }
}
