//! The transfer-rate aggregation core and its endpoints.
//!
//! The transfer rate is the amount-weighted average interest rate across a
//! set of liabilities, expressed as a fraction. This module computes it for
//! the whole liability book and for pools partitioned by risk tier or
//! maturity range.

mod maturity;
mod maturity_pools_endpoint;
mod pools;
mod rate;
mod rate_endpoint;
mod risk_pools_endpoint;

pub use maturity::{MaturityRange, parse_ranges};
pub use maturity_pools_endpoint::maturity_pools_endpoint;
pub use pools::{MaturityPool, RiskPool, pool_by_maturity, pool_by_risk};
pub use rate::transfer_rate;
pub use rate_endpoint::{TransferRateResponse, transfer_rate_endpoint};
pub use risk_pools_endpoint::risk_pools_endpoint;
