//! Application router configuration wiring every API endpoint.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};

use crate::{
    AppState, ErrorResponse, endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
    transfer_rate::{maturity_pools_endpoint, risk_pools_endpoint, transfer_rate_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::POOL_BY_RISK, get(risk_pools_endpoint))
        .route(endpoints::POOL_BY_MATURITY, get(maturity_pools_endpoint))
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::TRANSFER_RATE, get(transfer_rate_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Greet visitors at the root path.
async fn get_index() -> &'static str {
    "Welcome to the Transfer Pricing App!"
}

/// Respond with a JSON 404 body for unknown paths.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_owned(),
        }),
    )
        .into_response()
}
