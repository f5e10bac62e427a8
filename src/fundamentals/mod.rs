mod api;
mod model;
mod wire;

pub use model::{
    FALLBACK_DIVIDEND_YIELD, FALLBACK_PE_RATIO, FALLBACK_ROE, FALLBACK_VOLATILITY, RawFundamentals,
};

use crate::core::services::FundamentalsSource;
use crate::core::{JvpClient, JvpError, client::RetryConfig};

/// A builder for fetching the raw screened metrics for a specific symbol.
pub struct FundamentalsBuilder<'a> {
    client: &'a JvpClient,
    symbol: String,
    retry_override: Option<RetryConfig>,
}

impl<'a> FundamentalsBuilder<'a> {
    /// Creates a new `FundamentalsBuilder` for a given symbol.
    pub fn new(client: &'a JvpClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            retry_override: None,
        }
    }

    /// Overrides the client's retry policy for this specific API call.
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the raw (possibly partial) metric set for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    /// A response that merely lacks some metrics is not an error; the missing
    /// metrics come back as `None`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<RawFundamentals, JvpError> {
        api::fetch_raw_fundamentals(self.client, &self.symbol, self.retry_override.as_ref()).await
    }
}

impl FundamentalsSource for JvpClient {
    fn raw_fundamentals<'a>(
        &'a self,
        symbol: &'a str,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<RawFundamentals, JvpError>> + Send + 'a>,
    > {
        Box::pin(api::fetch_raw_fundamentals(self, symbol, None))
    }
}
