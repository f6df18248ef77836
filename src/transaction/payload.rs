//! The JSON request payload for creating and updating transactions.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::{NewTransaction, RiskLevel, TransactionType},
};

/// The JSON body accepted by the create and update endpoints.
///
/// Every field is optional at the deserialization layer so that a missing or
/// invalid value produces the API's own 400 response instead of a generic
/// rejection. Call [TransactionData::validate] to turn a payload into a
/// [NewTransaction].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    /// Either "asset" or "liability".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// The principal amount in dollars. Must be positive.
    pub amount: Option<f64>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The annual interest rate as a percentage. Must be positive.
    pub interest_rate: Option<f64>,
    /// One of "low", "med", or "high". Defaults to "low".
    pub risk: Option<String>,
    /// Time to maturity. Must be non-negative. Defaults to 0.
    pub maturity: Option<f64>,
}

impl TransactionData {
    /// Check every field of the payload and produce a [NewTransaction].
    ///
    /// Omitted `risk` and `maturity` fields fall back to their defaults
    /// ("low" and 0 respectively).
    ///
    /// # Errors
    /// Returns the first failing check as an [Error] variant that maps to a
    /// 400 response:
    /// - [Error::InvalidTransactionType] for a missing or unknown type,
    /// - [Error::InvalidAmount] for a missing or non-positive amount,
    /// - [Error::MissingDescription] for a missing or blank description,
    /// - [Error::InvalidInterestRate] for a missing or non-positive rate,
    /// - [Error::InvalidRisk] for an unknown risk tier,
    /// - [Error::InvalidMaturity] for a negative maturity.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let transaction_type = self
            .transaction_type
            .as_deref()
            .and_then(TransactionType::from_str)
            .ok_or(Error::InvalidTransactionType)?;

        let amount = match self.amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(Error::InvalidAmount),
        };

        let description = match self.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => return Err(Error::MissingDescription),
        };

        let interest_rate = match self.interest_rate {
            Some(rate) if rate.is_finite() && rate > 0.0 => rate,
            _ => return Err(Error::InvalidInterestRate),
        };

        let risk = match self.risk.as_deref() {
            None => RiskLevel::default(),
            Some(raw) => RiskLevel::from_str(raw).ok_or(Error::InvalidRisk)?,
        };

        let maturity = match self.maturity {
            None => 0.0,
            Some(maturity) if maturity.is_finite() && maturity >= 0.0 => maturity,
            _ => return Err(Error::InvalidMaturity),
        };

        Ok(NewTransaction {
            transaction_type,
            amount,
            description,
            interest_rate,
            risk,
            maturity,
        })
    }
}
