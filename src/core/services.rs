use crate::core::JvpError;
use crate::fundamentals::RawFundamentals;

/// A trait for sources that can supply raw fundamentals for a symbol.
///
/// This abstracts the market-data provider away from the screening pipeline,
/// so tests and callers can substitute static data. It is implemented by
/// [`JvpClient`](crate::JvpClient), which fetches from Yahoo Finance.
///
/// Any metric the source cannot supply is reported as `None`; the scoring
/// layer substitutes its own fallback values. A source that has no data at
/// all for a symbol should return `RawFundamentals::default()` rather than
/// an error.
pub trait FundamentalsSource: Send + Sync {
    /// Asynchronously fetches the raw (possibly partial) metric set for a symbol.
    fn raw_fundamentals<'a>(
        &'a self,
        symbol: &'a str,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<RawFundamentals, JvpError>> + Send + 'a>,
    >;
}
