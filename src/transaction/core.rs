//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    database_id::{DatabaseId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction is money owed to the business or by the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money owed to the business, e.g. a loan made to a customer.
    Asset,
    /// Money the business owes, e.g. a term deposit held for a customer.
    Liability,
}

impl TransactionType {
    /// The string stored in the database for this transaction type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Asset => "asset",
            TransactionType::Liability => "liability",
        }
    }

    /// Parse a transaction type from its database/API string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asset" => Some(TransactionType::Asset),
            "liability" => Some(TransactionType::Liability),
            _ => None,
        }
    }
}

/// The coarse risk tier assigned to a liability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// The default tier for transactions created without an explicit risk.
    #[default]
    Low,
    /// Medium risk.
    Med,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Every risk tier, in the order the pool-by-risk endpoint reports them.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Med, RiskLevel::High];

    /// The string stored in the database for this risk tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Med => "med",
            RiskLevel::High => "high",
        }
    }

    /// Parse a risk tier from its database/API string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskLevel::Low),
            "med" => Some(RiskLevel::Med),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

/// An asset or liability on the books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// Whether the transaction is an asset or a liability.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The principal amount in dollars. Always positive.
    pub amount: f64,
    /// A text description of what the transaction is for.
    pub description: String,
    /// The annual interest rate as a percentage, e.g. 5.0 for 5%.
    pub interest_rate: f64,
    /// The risk tier of the transaction.
    pub risk: RiskLevel,
    /// Time to maturity. Zero for transactions with no fixed maturity.
    pub maturity: f64,
    /// The date the transaction was recorded.
    pub date: Date,
}

/// A validated transaction ready to be inserted into the database.
///
/// Create one by validating a
/// [TransactionData](crate::transaction::TransactionData) payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the transaction is an asset or a liability.
    pub transaction_type: TransactionType,
    /// The principal amount in dollars. Always positive.
    pub amount: f64,
    /// A text description of what the transaction is for.
    pub description: String,
    /// The annual interest rate as a percentage.
    pub interest_rate: f64,
    /// The risk tier of the transaction.
    pub risk: RiskLevel,
    /// Time to maturity.
    pub maturity: f64,
}

/// The four core fields replaced by an update.
///
/// Risk and maturity are not part of an update, so updating a transaction
/// leaves those columns untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionUpdate {
    /// Whether the transaction is an asset or a liability.
    pub transaction_type: TransactionType,
    /// The principal amount in dollars. Always positive.
    pub amount: f64,
    /// A text description of what the transaction is for.
    pub description: String,
    /// The annual interest rate as a percentage.
    pub interest_rate: f64,
}

impl From<NewTransaction> for TransactionUpdate {
    fn from(new_transaction: NewTransaction) -> Self {
        Self {
            transaction_type: new_transaction.transaction_type,
            amount: new_transaction.amount,
            description: new_transaction.description,
            interest_rate: new_transaction.interest_rate,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The transaction's date is set to today (UTC).
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, amount, description, interest_rate, risk, maturity, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING id, type, amount, description, interest_rate, risk, maturity, date",
        )?
        .query_row(
            (
                new_transaction.transaction_type.as_str(),
                new_transaction.amount,
                &new_transaction.description,
                new_transaction.interest_rate,
                new_transaction.risk.as_str(),
                new_transaction.maturity,
                OffsetDateTime::now_utc().date(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all transactions, most recent first.
///
/// Rows created on the same date are returned newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, amount, description, interest_rate, risk, maturity, date
             FROM transactions
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve all liability transactions.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_liabilities(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, amount, description, interest_rate, risk, maturity, date
             FROM transactions
             WHERE type = ?1",
        )?
        .query_map([TransactionType::Liability.as_str()], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace the four core fields of the transaction with ID `id`.
///
/// The risk, maturity, and date columns are left untouched.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    update: TransactionUpdate,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "UPDATE transactions
             SET type = ?1, amount = ?2, description = ?3, interest_rate = ?4
             WHERE id = ?5
             RETURNING id, type, amount, description, interest_rate, risk, maturity, date",
        )?
        .query_row(
            (
                update.transaction_type.as_str(),
                update.amount,
                &update.description,
                update.interest_rate,
                id,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete the transaction with ID `id` and return the deleted row.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "DELETE FROM transactions
             WHERE id = ?1
             RETURNING id, type, amount, description, interest_rate, risk, maturity, date",
        )?
        .query_row([id], map_transaction_row)?;

    Ok(transaction)
}

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK (type IN ('asset', 'liability')),
                amount REAL NOT NULL CHECK (amount > 0),
                description TEXT NOT NULL,
                interest_rate REAL NOT NULL CHECK (interest_rate > 0),
                risk TEXT NOT NULL DEFAULT 'low' CHECK (risk IN ('low', 'med', 'high')),
                maturity REAL NOT NULL DEFAULT 0 CHECK (maturity >= 0),
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transactions', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;

    let raw_type: String = row.get(1)?;
    let transaction_type = TransactionType::from_str(&raw_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(Error::InvalidTransactionType),
        )
    })?;

    let amount = row.get(2)?;
    let description = row.get(3)?;
    let interest_rate = row.get(4)?;

    let raw_risk: String = row.get(5)?;
    let risk = RiskLevel::from_str(&raw_risk).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            Box::new(Error::InvalidRisk),
        )
    })?;

    let maturity = row.get(6)?;
    let date = row.get(7)?;

    Ok(Transaction {
        id,
        transaction_type,
        amount,
        description,
        interest_rate,
        risk,
        maturity,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
