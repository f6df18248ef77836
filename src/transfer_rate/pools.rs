//! Partitioning of the liability book into risk and maturity pools.

use serde::{Deserialize, Serialize};

use crate::{
    transaction::{RiskLevel, Transaction},
    transfer_rate::{MaturityRange, rate::transfer_rate},
};

/// The liabilities in one risk tier together with their transfer rate.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPool {
    /// The tier this pool covers.
    pub risk: RiskLevel,
    /// The liabilities in this tier.
    pub transactions: Vec<Transaction>,
    /// The weighted-average rate of this tier, 0 for an empty tier.
    pub transfer_rate: f64,
}

/// The liabilities in one maturity band together with their transfer rate.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityPool {
    /// The label of the band, e.g. "0-1" or "3+".
    pub range: String,
    /// The liabilities maturing within this band.
    pub transactions: Vec<Transaction>,
    /// The weighted-average rate of this band, 0 for an empty band.
    pub transfer_rate: f64,
}

/// Partition liabilities into the three fixed risk tiers and compute each
/// tier's transfer rate.
///
/// Always returns exactly three pools in the order low, med, high. Tiers with
/// no liabilities report a rate of 0.
pub fn pool_by_risk(liabilities: Vec<Transaction>) -> Vec<RiskPool> {
    RiskLevel::ALL
        .into_iter()
        .map(|risk| {
            let transactions: Vec<Transaction> = liabilities
                .iter()
                .filter(|transaction| transaction.risk == risk)
                .cloned()
                .collect();
            let transfer_rate = transfer_rate(&transactions);

            RiskPool {
                risk,
                transactions,
                transfer_rate,
            }
        })
        .collect()
}

/// Partition liabilities into the given maturity bands and compute each
/// band's transfer rate.
///
/// A liability joins every band that contains its maturity, so overlapping
/// bands (such as the shared boundary of "0-1" and "1-3") report the same
/// liability more than once. A liability maturing outside every band is
/// omitted entirely.
pub fn pool_by_maturity(
    liabilities: Vec<Transaction>,
    ranges: &[MaturityRange],
) -> Vec<MaturityPool> {
    ranges
        .iter()
        .map(|range| {
            let transactions: Vec<Transaction> = liabilities
                .iter()
                .filter(|transaction| range.contains(transaction.maturity))
                .cloned()
                .collect();
            let transfer_rate = transfer_rate(&transactions);

            MaturityPool {
                range: range.label(),
                transactions,
                transfer_rate,
            }
        })
        .collect()
}
