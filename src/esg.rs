//! Manual ESG score resolution.
//!
//! ESG scores are supplied by the caller as a map from ticker to an optional
//! 0-100 value; an entry can be explicitly unset (`None`) for tickers with no
//! published rating (commodity ETFs and the like). Resolution never fails.

use std::collections::HashMap;

/// Fallback ESG score used when a ticker has no usable entry in the overrides.
pub const DEFAULT_ESG_SCORE: f64 = 50.0;

/// Caller-supplied ESG scores keyed by ticker. `None` marks a ticker that is
/// known but has no rating.
pub type EsgOverrides = HashMap<String, Option<f64>>;

/// Look up a ticker's ESG score, falling back to [`DEFAULT_ESG_SCORE`].
///
/// The lookup is case-insensitive on the ticker (normalized to uppercase).
/// A mapped value is returned unchanged: out-of-range inputs are not clamped.
pub fn resolve_esg(ticker: &str, overrides: &EsgOverrides) -> f64 {
    overrides
        .get(&ticker.to_uppercase())
        .copied()
        .flatten()
        .unwrap_or(DEFAULT_ESG_SCORE)
}
