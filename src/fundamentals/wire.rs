use serde::Deserialize;

use crate::core::wire::RawNum;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) summary_detail: Option<SummaryDetailNode>,
    pub(crate) financial_data: Option<FinancialDataNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailNode {
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum<f64>>,
    pub(crate) beta: Option<RawNum<f64>>,
    pub(crate) dividend_yield: Option<RawNum<f64>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FinancialDataNode {
    pub(crate) return_on_equity: Option<RawNum<f64>>,
}
