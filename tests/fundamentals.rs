use httpmock::{Method::GET, MockServer};
use url::Url;
use sirjvp_rs::{FundamentalsBuilder, JvpClient};

fn client_for(server: &MockServer) -> JvpClient {
    JvpClient::builder()
        .base_quote_api(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .preauth("cookie", "crumb")
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_fundamentals_parses_both_modules() {
    let server = MockServer::start();
    let sym = "MSFT";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "summaryDetail,financialData")
            .query_param("crumb", "crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "quoteSummary": {
                    "result": [{
                      "summaryDetail": {
                        "trailingPE": { "raw": 33.1, "fmt": "33.10" },
                        "beta": { "raw": 0.9 },
                        "dividendYield": { "raw": 0.0072 }
                      },
                      "financialData": {
                        "returnOnEquity": { "raw": 0.38 }
                      }
                    }],
                    "error": null
                  }
                }"#,
            );
    });

    let client = client_for(&server);
    let raw = FundamentalsBuilder::new(&client, sym).fetch().await.unwrap();

    mock.assert();
    assert_eq!(raw.pe_ratio, Some(33.1));
    assert_eq!(raw.roe, Some(0.38));
    assert_eq!(raw.beta, Some(0.9));
    assert_eq!(raw.dividend_yield, Some(0.0072));
}

#[tokio::test]
async fn missing_modules_map_to_missing_metrics() {
    let server = MockServer::start();
    let sym = "GLD";

    // commodity ETF: no financialData module, no P/E or yield either
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "quoteSummary": {
                    "result": [{
                      "summaryDetail": { "beta": { "raw": null } }
                    }],
                    "error": null
                  }
                }"#,
            );
    });

    let client = client_for(&server);
    let raw = FundamentalsBuilder::new(&client, sym).fetch().await.unwrap();

    assert_eq!(raw, sirjvp_rs::RawFundamentals::default());
}

#[tokio::test]
async fn invalid_crumb_refreshes_credentials_and_retries() {
    let server = MockServer::start();
    let sym = "AAPL";

    // first call with stale crumb -> Invalid Crumb
    let first = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("crumb", "stale");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#);
    });

    // cookie + crumb refresh endpoints
    let cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("fresh");
    });

    // second call with fresh crumb succeeds
    let ok = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("crumb", "fresh");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "quoteSummary": {
                    "result": [{
                      "summaryDetail": { "trailingPE": { "raw": 29.4 } }
                    }],
                    "error": null
                  }
                }"#,
            );
    });

    let client = JvpClient::builder()
        .base_quote_api(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .preauth("cookie", "stale")
        .build()
        .unwrap();

    let raw = FundamentalsBuilder::new(&client, sym).fetch().await.unwrap();

    first.assert();
    cookie.assert();
    crumb.assert();
    ok.assert();
    assert_eq!(raw.pe_ratio, Some(29.4));
}
