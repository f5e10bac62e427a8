use crate::core::{
    JvpClient, JvpError,
    client::RetryConfig,
    quotesummary,
    wire::from_raw,
};

use super::model::RawFundamentals;
use super::wire::V10Result;

/// Modules of the v10 quoteSummary response carrying the four screened metrics.
const MODULES: &str = "summaryDetail,financialData";

pub(super) async fn fetch_raw_fundamentals(
    client: &JvpClient,
    symbol: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<RawFundamentals, JvpError> {
    let root: V10Result = quotesummary::fetch_module_result(
        client,
        symbol,
        MODULES,
        "fundamentals",
        retry_override,
    )
    .await?;

    let summary = root.summary_detail;
    let financial = root.financial_data;

    // A node or field the response lacks is simply a missing metric, never an error.
    Ok(RawFundamentals {
        pe_ratio: summary.as_ref().and_then(|s| from_raw(s.trailing_pe)),
        roe: financial.as_ref().and_then(|f| from_raw(f.return_on_equity)),
        beta: summary.as_ref().and_then(|s| from_raw(s.beta)),
        dividend_yield: summary.as_ref().and_then(|s| from_raw(s.dividend_yield)),
    })
}
