//! Transfer Pricing is a small web app for recording financial transactions
//! (assets and liabilities) and computing the weighted-average cost of funds
//! across pools of liabilities.
//!
//! This library provides a JSON REST API backed by SQLite.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod routing;
mod transaction;
mod transfer_rate;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client gave a transaction type other than "asset" or "liability".
    #[error("Type must be either \"asset\" or \"liability\"")]
    InvalidTransactionType,

    /// The client gave a missing, non-positive, or non-finite amount.
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// The client gave a missing or empty description.
    #[error("Description is required and must not be empty")]
    MissingDescription,

    /// The client gave a missing, non-positive, or non-finite interest rate.
    #[error("Interest rate must be a positive number")]
    InvalidInterestRate,

    /// The client gave a risk tier other than "low", "med", or "high".
    #[error("Risk must be either \"low\", \"med\", or \"high\"")]
    InvalidRisk,

    /// The client gave a negative or non-finite maturity.
    #[error("Maturity must be a non-negative number")]
    InvalidMaturity,

    /// The maturity-pool endpoint was called without a `ranges` query parameter.
    #[error("The \"ranges\" query parameter is required, e.g. ranges=0-1,1-3,3+")]
    MissingRanges,

    /// A maturity range could not be parsed.
    ///
    /// Callers should pass in the range string that caused the error.
    #[error("\"{0}\" is not a valid maturity range; expected \"min-max\" or \"min+\"")]
    InvalidMaturityRange(String),

    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Transaction not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

/// The JSON body sent to clients when a request fails.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable description of what went wrong.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::SqlError(_) => {
                tracing::error!("An unexpected error occurred: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_owned(),
                )
            }
            _ => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
