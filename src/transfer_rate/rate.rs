//! The weighted-average transfer rate calculation.

use crate::transaction::Transaction;

/// Compute the transfer rate of a set of liabilities: the amount-weighted
/// average of their interest rates, as a fraction.
///
/// Interest rates are stored as percentages, so each rate is divided by 100
/// before weighting. An empty set has a transfer rate of exactly 0, which
/// also covers the division by zero that a zero total amount would cause.
pub fn transfer_rate(liabilities: &[Transaction]) -> f64 {
    let total_amount: f64 = liabilities.iter().map(|liability| liability.amount).sum();

    if total_amount == 0.0 {
        return 0.0;
    }

    let weighted_cost: f64 = liabilities
        .iter()
        .map(|liability| liability.amount * liability.interest_rate / 100.0)
        .sum();

    weighted_cost / total_amount
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{RiskLevel, Transaction, TransactionType};

    use super::transfer_rate;

    fn liability(amount: f64, interest_rate: f64) -> Transaction {
        Transaction {
            id: 1,
            transaction_type: TransactionType::Liability,
            amount,
            description: "Term deposit".to_owned(),
            interest_rate,
            risk: RiskLevel::Low,
            maturity: 0.0,
            date: date!(2025 - 10 - 05),
        }
    }

    #[test]
    fn empty_set_has_rate_zero() {
        assert_eq!(transfer_rate(&[]), 0.0);
    }

    #[test]
    fn single_liability_rate_is_its_own_fractional_rate() {
        let liabilities = [liability(1000.0, 5.0)];

        assert_eq!(transfer_rate(&liabilities), 0.05);
    }

    #[test]
    fn weights_rates_by_amount() {
        // (100 * 0.05 + 300 * 0.10) / 400 = 0.0875
        let liabilities = [liability(100.0, 5.0), liability(300.0, 10.0)];

        assert_eq!(transfer_rate(&liabilities), 0.0875);
    }

    #[test]
    fn equal_amounts_average_the_rates() {
        let liabilities = [liability(200.0, 4.0), liability(200.0, 6.0)];

        assert_eq!(transfer_rate(&liabilities), 0.05);
    }
}
