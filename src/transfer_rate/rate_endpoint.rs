//! Defines the endpoint for the transfer rate across the whole liability book.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, transaction::list_liabilities, transfer_rate::rate::transfer_rate,
};

/// The state needed to compute the transfer rate.
#[derive(Debug, Clone)]
pub struct TransferRateState {
    /// The database connection for reading liabilities.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransferRateState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body returned by the transfer-rate endpoint.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRateResponse {
    /// The weighted-average cost of funds as a fraction, e.g. 0.0875.
    pub transfer_rate: f64,
}

/// A route handler for computing the transfer rate across all liabilities.
///
/// Assets are excluded; an empty liability book reports a rate of 0.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn transfer_rate_endpoint(
    State(state): State<TransferRateState>,
) -> Result<Json<TransferRateResponse>, Error> {
    let connection = state.db_connection.lock().unwrap();

    let liabilities = list_liabilities(&connection)?;

    Ok(Json(TransferRateResponse {
        transfer_rate: transfer_rate(&liabilities),
    }))
}
