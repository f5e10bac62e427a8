//! The screening pipeline: resolve fundamentals, score, rank.

use crate::core::services::FundamentalsSource;
use crate::esg::{EsgOverrides, resolve_esg};
use crate::fundamentals::RawFundamentals;
use crate::scoring::{self, ScoredTicker, WeightSet};

/// Score and rank a batch of already-fetched ticker records.
///
/// This is the pure entry point: it never touches the network. Each record is
/// resolved (fallback substitution + ESG lookup), aggregated under `weights`
/// (the documented default set when `None`), and the batch is stably sorted
/// by composite score, descending. One output entry is produced per input
/// entry; duplicate tickers stay duplicated, and ties keep input order.
pub fn compute_rankings(
    records: Vec<(String, RawFundamentals)>,
    esg: &EsgOverrides,
    weights: Option<WeightSet>,
) -> Vec<ScoredTicker> {
    let weights = weights.unwrap_or_default();
    let scored = records
        .into_iter()
        .map(|(ticker, raw)| {
            let esg_score = resolve_esg(&ticker, esg);
            scoring::aggregate(raw.resolve(ticker, esg_score), &weights)
        })
        .collect();
    scoring::rank(scored)
}

/// A builder for running a full screen: fetch fundamentals for a list of
/// tickers from a [`FundamentalsSource`], then score and rank them.
///
/// # Example
///
/// ```no_run
/// # use sirjvp_rs::{JvpClient, ScreenerBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JvpClient::default();
/// let ranked = ScreenerBuilder::new(&client)
///     .tickers(["MSFT", "KO", "XOM"])
///     .fetch()
///     .await;
/// println!("top pick: {}", ranked[0].fundamentals.ticker);
/// # Ok(())
/// # }
/// ```
pub struct ScreenerBuilder<'a> {
    source: &'a dyn FundamentalsSource,
    tickers: Vec<String>,
    esg_overrides: EsgOverrides,
    weights: Option<WeightSet>,
}

impl<'a> ScreenerBuilder<'a> {
    /// Creates a new `ScreenerBuilder` over a fundamentals source.
    pub fn new(source: &'a dyn FundamentalsSource) -> Self {
        Self {
            source,
            tickers: Vec::new(),
            esg_overrides: EsgOverrides::new(),
            weights: None,
        }
    }

    /// Sets the tickers to screen, in the order that breaks score ties.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the manual ESG scores. Tickers without a usable entry fall back to
    /// [`DEFAULT_ESG_SCORE`](crate::DEFAULT_ESG_SCORE).
    #[must_use]
    pub fn esg_overrides(mut self, overrides: EsgOverrides) -> Self {
        self.esg_overrides = overrides;
        self
    }

    /// Overrides the default weight set.
    #[must_use]
    pub fn weights(mut self, weights: WeightSet) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Fetches fundamentals for every ticker, then scores and ranks them.
    ///
    /// A source failure for an individual ticker is treated as a clean
    /// "no data" signal: the ticker stays in the result with all-fallback
    /// metrics rather than failing the whole screen. Set `JVP_DEBUG=1` to
    /// log such failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(tickers = self.tickers.len())))]
    pub async fn fetch(self) -> Vec<ScoredTicker> {
        let mut records = Vec::with_capacity(self.tickers.len());
        for ticker in self.tickers {
            let raw = match self.source.raw_fundamentals(&ticker).await {
                Ok(raw) => raw,
                Err(e) => {
                    if std::env::var("JVP_DEBUG").ok().as_deref() == Some("1") {
                        eprintln!("JVP_DEBUG(screener): no fundamentals for {ticker}: {e}");
                    }
                    RawFundamentals::default()
                }
            };
            records.push((ticker, raw));
        }
        compute_rankings(records, &self.esg_overrides, self.weights)
    }
}
