//! sirjvp-rs: composite SIR-JVP equity screener.
//!
//! Combines four market-derived ratios (P/E, return on equity, beta, dividend
//! yield) with a manually supplied ESG score into one weighted number per
//! ticker, then ranks tickers by it. The scoring core is pure and synchronous;
//! fundamentals come from Yahoo Finance (or any [`FundamentalsSource`]).

pub mod core;
pub mod esg;
pub mod fundamentals;
pub mod report;
pub mod scoring;
pub mod screener;

pub use crate::core::services::FundamentalsSource;
pub use crate::core::{Backoff, JvpClient, JvpClientBuilder, JvpError, RetryConfig};
pub use esg::{DEFAULT_ESG_SCORE, EsgOverrides, resolve_esg};
pub use fundamentals::{FundamentalsBuilder, RawFundamentals};
pub use report::render_table;
pub use scoring::{ScoredTicker, TickerFundamentals, WeightSet};
pub use screener::{ScreenerBuilder, compute_rankings};
