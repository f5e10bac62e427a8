//! Screens the sample watchlist with manually supplied ESG scores and prints
//! the ranked table.
//!
//! Run with `cargo run --example screen` (hits the live Yahoo endpoints).

use sirjvp_rs::{EsgOverrides, JvpClient, ScreenerBuilder, render_table};

const TICKERS: [&str; 24] = [
    "XOM", "BP", "SHEL", "BA", "MCG", "GLEN", "CURY.L", "MPC", "ALB", "AMAT", "BCDRF", "BEP",
    "DPZ", "GLD", "KO", "LLY", "MOAT", "MSFT", "NEE", "NVDA", "OPEN", "SLV", "XLV", "XYL",
];

const MANUAL_ESG_SCORES: [(&str, Option<f64>); 24] = [
    ("XOM", Some(36.0)),
    ("BP", Some(38.0)),
    ("SHEL", Some(41.0)),
    ("BA", Some(40.0)),
    ("MCG", Some(42.0)),
    ("GLEN", Some(19.0)),
    ("CURY.L", Some(45.0)),
    ("MPC", Some(51.0)),
    ("ALB", Some(61.0)),
    ("AMAT", Some(43.0)),
    ("BCDRF", Some(57.0)),
    ("BEP", Some(57.0)),
    ("DPZ", Some(23.0)),
    ("GLD", None),
    ("KO", Some(42.0)),
    ("LLY", Some(40.0)),
    ("MOAT", None),
    ("MSFT", Some(51.0)),
    ("NEE", Some(36.0)),
    ("NVDA", Some(61.0)),
    ("OPEN", None),
    ("SLV", None),
    ("XLV", None),
    ("XYL", Some(46.0)),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let esg: EsgOverrides = MANUAL_ESG_SCORES
        .iter()
        .map(|(t, v)| (t.to_string(), *v))
        .collect();

    let client = JvpClient::builder().build()?;
    let ranked = ScreenerBuilder::new(&client)
        .tickers(TICKERS)
        .esg_overrides(esg)
        .fetch()
        .await;

    print!("{}", render_table(&ranked));
    Ok(())
}
