use serde::Serialize;

use crate::scoring::TickerFundamentals;

/// Fallback trailing P/E when the provider has no value.
pub const FALLBACK_PE_RATIO: f64 = 25.0;
/// Fallback return on equity.
pub const FALLBACK_ROE: f64 = 0.10;
/// Fallback beta/volatility.
pub const FALLBACK_VOLATILITY: f64 = 0.25;
/// Fallback fractional dividend yield.
pub const FALLBACK_DIVIDEND_YIELD: f64 = 0.01;

/// Raw metric values as reported by a provider, before fallback substitution.
///
/// `None` means the provider had no value. `Default` (all `None`) is the
/// clean "no data" signal for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RawFundamentals {
    /// Trailing P/E ratio.
    pub pe_ratio: Option<f64>,
    /// Return on equity.
    pub roe: Option<f64>,
    /// Beta relative to the benchmark.
    pub beta: Option<f64>,
    /// Fractional dividend yield.
    pub dividend_yield: Option<f64>,
}

/// An absent value and a NaN from the provider are treated identically.
fn or_fallback(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(fallback)
}

impl RawFundamentals {
    /// Substitute fallbacks for missing metrics and attach the resolved ESG
    /// score, producing fully defined scoring inputs.
    ///
    /// Each metric falls back independently; a missing P/E has no bearing on
    /// whether ROE is substituted.
    pub fn resolve(self, ticker: impl Into<String>, esg_score: f64) -> TickerFundamentals {
        TickerFundamentals {
            ticker: ticker.into(),
            pe_ratio: or_fallback(self.pe_ratio, FALLBACK_PE_RATIO),
            roe: or_fallback(self.roe, FALLBACK_ROE),
            volatility: or_fallback(self.beta, FALLBACK_VOLATILITY),
            dividend_yield: or_fallback(self.dividend_yield, FALLBACK_DIVIDEND_YIELD),
            esg_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_resolves_to_all_fallbacks() {
        let resolved = RawFundamentals::default().resolve("SLV", 50.0);
        assert_eq!(resolved.ticker, "SLV");
        assert_eq!(resolved.pe_ratio, FALLBACK_PE_RATIO);
        assert_eq!(resolved.roe, FALLBACK_ROE);
        assert_eq!(resolved.volatility, FALLBACK_VOLATILITY);
        assert_eq!(resolved.dividend_yield, FALLBACK_DIVIDEND_YIELD);
        assert_eq!(resolved.esg_score, 50.0);
    }

    #[test]
    fn fallbacks_are_independent_per_metric() {
        let raw = RawFundamentals {
            pe_ratio: None,
            roe: Some(0.35),
            beta: None,
            dividend_yield: Some(0.05),
        };
        let resolved = raw.resolve("MSFT", 51.0);
        assert_eq!(resolved.pe_ratio, FALLBACK_PE_RATIO);
        assert_eq!(resolved.roe, 0.35);
        assert_eq!(resolved.volatility, FALLBACK_VOLATILITY);
        assert_eq!(resolved.dividend_yield, 0.05);
    }

    #[test]
    fn nan_is_treated_as_missing() {
        let raw = RawFundamentals {
            pe_ratio: Some(f64::NAN),
            roe: Some(f64::NAN),
            beta: Some(1.2),
            dividend_yield: Some(f64::NAN),
        };
        let resolved = raw.resolve("BA", 40.0);
        assert_eq!(resolved.pe_ratio, FALLBACK_PE_RATIO);
        assert_eq!(resolved.roe, FALLBACK_ROE);
        assert_eq!(resolved.volatility, 1.2);
        assert_eq!(resolved.dividend_yield, FALLBACK_DIVIDEND_YIELD);
    }
}
