//! The SIR-JVP scoring core: per-metric band scoring, weighted aggregation,
//! and ranking.
//!
//! Everything here is pure and synchronous. Each band function is total over
//! the reals and returns exactly one of four literal band values, with no
//! interpolation; the first matching band wins.

mod model;

pub use model::{ScoredTicker, TickerFundamentals, WeightSet};

/// Score a trailing P/E ratio. Lower multiples score higher.
pub fn score_pe(pe: f64) -> f64 {
    if pe < 10.0 {
        1.0
    } else if pe < 20.0 {
        0.8
    } else if pe < 40.0 {
        0.5
    } else {
        0.2
    }
}

/// Score a return on equity. Higher profitability scores higher.
pub fn score_roe(roe: f64) -> f64 {
    if roe > 0.30 {
        1.0
    } else if roe > 0.20 {
        0.8
    } else if roe > 0.10 {
        0.6
    } else if roe > 0.05 {
        0.4
    } else {
        0.2
    }
}

/// Score a beta/volatility measure. Lower volatility scores higher.
pub fn score_volatility(vol: f64) -> f64 {
    if vol < 0.15 {
        1.0
    } else if vol < 0.25 {
        0.8
    } else if vol < 0.35 {
        0.5
    } else {
        0.3
    }
}

/// Score a fractional dividend yield. Higher yield scores higher.
pub fn score_dividend(dy: f64) -> f64 {
    if dy > 0.04 {
        1.0
    } else if dy > 0.02 {
        0.8
    } else if dy > 0.01 {
        0.5
    } else {
        0.3
    }
}

/// Compute the composite SIR-JVP score for one ticker.
///
/// Applies the four band functions, normalizes the ESG score to `[0, 1]`,
/// and takes the weighted sum. Purely arithmetic; no error conditions.
pub fn aggregate(fundamentals: TickerFundamentals, weights: &WeightSet) -> ScoredTicker {
    let pe_score = score_pe(fundamentals.pe_ratio);
    let roe_score = score_roe(fundamentals.roe);
    let vol_score = score_volatility(fundamentals.volatility);
    let div_score = score_dividend(fundamentals.dividend_yield);
    let esg_norm = fundamentals.esg_score / 100.0;

    let total = weights.pe * pe_score
        + weights.roe * roe_score
        + weights.volatility * vol_score
        + weights.dividend * div_score
        + weights.esg * esg_norm;

    ScoredTicker {
        fundamentals,
        sir_jvp_score: total,
    }
}

/// Order scored tickers by composite score, descending.
///
/// The sort is stable, so tickers with equal scores keep their input order.
pub fn rank(mut scored: Vec<ScoredTicker>) -> Vec<ScoredTicker> {
    scored.sort_by(|a, b| b.sir_jvp_score.total_cmp(&a.sir_jvp_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fundamentals(ticker: &str, pe: f64, roe: f64, vol: f64, dy: f64, esg: f64) -> TickerFundamentals {
        TickerFundamentals {
            ticker: ticker.to_string(),
            pe_ratio: pe,
            roe,
            volatility: vol,
            dividend_yield: dy,
            esg_score: esg,
        }
    }

    #[test]
    fn pe_bands_at_boundaries() {
        assert_eq!(score_pe(9.9), 1.0);
        assert_eq!(score_pe(10.0), 0.8);
        assert_eq!(score_pe(19.9), 0.8);
        assert_eq!(score_pe(20.0), 0.5);
        assert_eq!(score_pe(39.9), 0.5);
        assert_eq!(score_pe(40.0), 0.2);
        // total over all reals, including nonsense inputs
        assert_eq!(score_pe(-5.0), 1.0);
        assert_eq!(score_pe(f64::MAX), 0.2);
    }

    #[test]
    fn roe_bands_at_boundaries() {
        assert_eq!(score_roe(0.31), 1.0);
        assert_eq!(score_roe(0.30), 0.8);
        assert_eq!(score_roe(0.21), 0.8);
        assert_eq!(score_roe(0.20), 0.6);
        assert_eq!(score_roe(0.11), 0.6);
        assert_eq!(score_roe(0.10), 0.4);
        assert_eq!(score_roe(0.051), 0.4);
        assert_eq!(score_roe(0.05), 0.2);
        assert_eq!(score_roe(-1.0), 0.2);
    }

    #[test]
    fn volatility_bands_at_boundaries() {
        assert_eq!(score_volatility(0.14), 1.0);
        assert_eq!(score_volatility(0.15), 0.8);
        assert_eq!(score_volatility(0.24), 0.8);
        assert_eq!(score_volatility(0.25), 0.5);
        assert_eq!(score_volatility(0.34), 0.5);
        assert_eq!(score_volatility(0.35), 0.3);
        assert_eq!(score_volatility(2.0), 0.3);
    }

    #[test]
    fn dividend_bands_at_boundaries() {
        assert_eq!(score_dividend(0.041), 1.0);
        assert_eq!(score_dividend(0.04), 0.8);
        assert_eq!(score_dividend(0.021), 0.8);
        assert_eq!(score_dividend(0.02), 0.5);
        assert_eq!(score_dividend(0.011), 0.5);
        assert_eq!(score_dividend(0.01), 0.3);
        assert_eq!(score_dividend(0.0), 0.3);
    }

    #[test]
    fn default_weights_match_documented_set() {
        let w = WeightSet::default();
        assert_eq!(w.pe, 0.20);
        assert_eq!(w.roe, 0.25);
        assert_eq!(w.volatility, 0.25);
        assert_eq!(w.dividend, 0.15);
        assert_eq!(w.esg, 0.15);
        assert!((w.pe + w.roe + w.volatility + w.dividend + w.esg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weight_set_rejects_missing_key() {
        let partial = r#"{"pe":0.2,"roe":0.25,"volatility":0.25,"dividend":0.15}"#;
        assert!(serde_json::from_str::<WeightSet>(partial).is_err());
    }

    #[test]
    fn weight_set_rejects_unknown_key() {
        let extra = r#"{"pe":0.2,"roe":0.25,"volatility":0.25,"dividend":0.15,"esg":0.15,"momentum":0.1}"#;
        assert!(serde_json::from_str::<WeightSet>(extra).is_err());
    }

    #[test]
    fn aggregate_matches_worked_example() {
        let w = WeightSet::default();
        let a = aggregate(fundamentals("A", 8.0, 0.35, 0.10, 0.05, 80.0), &w);
        assert!((a.sir_jvp_score - 0.97).abs() < 1e-12);

        let b = aggregate(fundamentals("B", 50.0, 0.02, 0.50, 0.005, 20.0), &w);
        assert!((b.sir_jvp_score - 0.2475).abs() < 1e-12);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let w = WeightSet::default();
        let f = fundamentals("KO", 24.3, 0.41, 0.6, 0.031, 42.0);
        let once = aggregate(f.clone(), &w).sir_jvp_score;
        let twice = aggregate(f, &w).sir_jvp_score;
        assert_eq!(once.to_bits(), twice.to_bits());
    }

    #[test]
    fn aggregate_passes_out_of_range_esg_through() {
        let w = WeightSet::default();
        let hot = aggregate(fundamentals("X", 8.0, 0.35, 0.10, 0.05, 140.0), &w);
        let cold = aggregate(fundamentals("X", 8.0, 0.35, 0.10, 0.05, -10.0), &w);
        // no clamping: the normalized ESG term can leave [0, 1]
        assert!(hot.sir_jvp_score > 1.0);
        assert!(cold.sir_jvp_score < aggregate(fundamentals("X", 8.0, 0.35, 0.10, 0.05, 0.0), &w).sir_jvp_score);
    }

    #[test]
    fn rank_sorts_descending_and_is_stable() {
        let w = WeightSet::default();
        let same_a = aggregate(fundamentals("FIRST", 8.0, 0.35, 0.10, 0.05, 50.0), &w);
        let same_b = aggregate(fundamentals("SECOND", 8.0, 0.35, 0.10, 0.05, 50.0), &w);
        let low = aggregate(fundamentals("LOW", 50.0, 0.02, 0.50, 0.005, 20.0), &w);

        let ranked = rank(vec![low.clone(), same_a, same_b]);
        let order: Vec<&str> = ranked.iter().map(|s| s.fundamentals.ticker.as_str()).collect();
        assert_eq!(order, vec!["FIRST", "SECOND", "LOW"]);
        assert_eq!(ranked[2].sir_jvp_score, low.sir_jvp_score);
    }

    #[test]
    fn rank_of_empty_is_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
