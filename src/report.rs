//! Tabular rendering of ranked results. Presentation only.

use crate::scoring::ScoredTicker;

/// Render `(ticker, sir_jvp_score)` pairs as a fixed-width table, one row per
/// entry in the order given (callers pass an already ranked slice).
pub fn render_table(ranked: &[ScoredTicker]) -> String {
    const TICKER_HEADER: &str = "ticker";
    const SCORE_HEADER: &str = "sir_jvp_score";

    let ticker_width = ranked
        .iter()
        .map(|s| s.fundamentals.ticker.len())
        .chain(std::iter::once(TICKER_HEADER.len()))
        .max()
        .unwrap_or(TICKER_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!("{TICKER_HEADER:<ticker_width$}  {SCORE_HEADER}\n"));
    for entry in ranked {
        out.push_str(&format!(
            "{:<ticker_width$}  {:.4}\n",
            entry.fundamentals.ticker, entry.sir_jvp_score
        ));
    }
    out
}
