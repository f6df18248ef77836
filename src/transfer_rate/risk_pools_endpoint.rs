//! Defines the endpoint for liability pools partitioned by risk tier.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::list_liabilities,
    transfer_rate::pools::{RiskPool, pool_by_risk},
};

/// The state needed to compute the risk pools.
#[derive(Debug, Clone)]
pub struct RiskPoolsState {
    /// The database connection for reading liabilities.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RiskPoolsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for partitioning the liability book into the three risk
/// tiers, each with its own transfer rate.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn risk_pools_endpoint(
    State(state): State<RiskPoolsState>,
) -> Result<Json<Vec<RiskPool>>, Error> {
    let connection = state.db_connection.lock().unwrap();

    let liabilities = list_liabilities(&connection)?;

    Ok(Json(pool_by_risk(liabilities)))
}
