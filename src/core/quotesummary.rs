use serde::Deserialize;

use crate::core::{JvpClient, JvpError, client::RetryConfig};

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: String,
}

pub(crate) async fn fetch(
    client: &JvpClient,
    symbol: &str,
    modules: &str,
    caller: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<V10Envelope, JvpError> {
    async fn attempt_fetch(
        client: &JvpClient,
        symbol: &str,
        modules: &str,
        retry_override: Option<&RetryConfig>,
    ) -> Result<V10Envelope, JvpError> {
        client.ensure_credentials().await?;

        let crumb = client
            .crumb()
            .await
            .ok_or_else(|| JvpError::Data("Crumb is not set".into()))?;

        let mut url = client.base_quote_api().join(symbol)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("modules", modules);
            qp.append_pair("crumb", &crumb);
        }

        let req = client.http().get(url);
        let resp = client.send_with_retry(req, retry_override).await?;
        let text = resp.text().await?;

        serde_json::from_str(&text)
            .map_err(|e| JvpError::Data(format!("quoteSummary json parse: {e}")))
    }

    for attempt in 0..=1 {
        let env = attempt_fetch(client, symbol, modules, retry_override).await?;

        if let Some(error) = env.quote_summary.as_ref().and_then(|qs| qs.error.as_ref()) {
            let desc = error.description.to_ascii_lowercase();
            if desc.contains("invalid crumb") && attempt == 0 {
                if std::env::var("JVP_DEBUG").ok().as_deref() == Some("1") {
                    eprintln!("JVP_DEBUG: Invalid crumb in {caller}; refreshing and retrying.");
                }
                client.clear_crumb().await;
                continue;
            }
            return Err(JvpError::Data(format!("yahoo error: {}", error.description)));
        }

        return Ok(env);
    }

    Err(JvpError::Data(format!(
        "{caller} API call failed after retry"
    )))
}

pub(crate) async fn fetch_module_result<T>(
    client: &JvpClient,
    symbol: &str,
    modules: &str,
    caller: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<T, JvpError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let env = fetch(client, symbol, modules, caller, retry_override).await?;

    let result_val = env
        .quote_summary
        .and_then(|qs| qs.result)
        .and_then(|mut v| v.pop())
        .ok_or_else(|| JvpError::Data("empty quoteSummary result".into()))?;

    serde_json::from_value(result_val)
        .map_err(|e| JvpError::Data(format!("quoteSummary result parse: {e}")))
}
