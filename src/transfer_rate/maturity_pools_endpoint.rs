//! Defines the endpoint for liability pools partitioned by maturity range.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    transaction::list_liabilities,
    transfer_rate::{
        maturity::parse_ranges,
        pools::{MaturityPool, pool_by_maturity},
    },
};

/// The state needed to compute the maturity pools.
#[derive(Debug, Clone)]
pub struct MaturityPoolsState {
    /// The database connection for reading liabilities.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MaturityPoolsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the pool-by-maturity endpoint.
#[derive(Debug, Deserialize)]
pub struct RangesQuery {
    /// A comma-separated list of maturity ranges, e.g. "0-1,1-3,3+".
    pub ranges: Option<String>,
}

/// A route handler for partitioning the liability book into the caller's
/// maturity bands, each with its own transfer rate.
///
/// A missing, empty, or malformed `ranges` parameter is rejected with a 400
/// response.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn maturity_pools_endpoint(
    State(state): State<MaturityPoolsState>,
    Query(query): Query<RangesQuery>,
) -> Result<Json<Vec<MaturityPool>>, Error> {
    let raw_ranges = query.ranges.ok_or(Error::MissingRanges)?;
    let ranges = parse_ranges(&raw_ranges)?;

    let connection = state.db_connection.lock().unwrap();

    let liabilities = list_liabilities(&connection)?;

    Ok(Json(pool_by_maturity(liabilities, &ranges)))
}
