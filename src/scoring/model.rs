use serde::{Deserialize, Serialize};

/// Fully resolved scoring inputs for one ticker.
///
/// Every field is always defined: missing provider values are replaced by
/// fallbacks during [`RawFundamentals::resolve`](crate::RawFundamentals::resolve),
/// so no missing or NaN value reaches the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerFundamentals {
    /// Ticker symbol, case-preserving for display.
    pub ticker: String,
    /// Trailing price-to-earnings ratio.
    pub pe_ratio: f64,
    /// Return on equity as a dimensionless ratio.
    pub roe: f64,
    /// Beta (or an equivalent volatility measure).
    pub volatility: f64,
    /// Fractional dividend yield (`0.02` = 2%).
    pub dividend_yield: f64,
    /// ESG score on a 0-100 scale.
    pub esg_score: f64,
}

/// Weights applied to the five component scores.
///
/// The weights are applied as given; no sum-to-one invariant is enforced.
/// Deserialization requires every key to be present (a partially specified
/// weight set is a configuration error, not something to default field by
/// field) — use [`WeightSet::default`] for the documented default set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightSet {
    pub pe: f64,
    pub roe: f64,
    pub volatility: f64,
    pub dividend: f64,
    pub esg: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            pe: 0.20,
            roe: 0.25,
            volatility: 0.25,
            dividend: 0.15,
            esg: 0.15,
        }
    }
}

/// A ticker's fundamentals together with its composite SIR-JVP score.
///
/// Produced once by [`aggregate`](crate::scoring::aggregate) and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTicker {
    /// The inputs the score was computed from.
    #[serde(flatten)]
    pub fundamentals: TickerFundamentals,
    /// The composite weighted score.
    pub sir_jvp_score: f64,
}
