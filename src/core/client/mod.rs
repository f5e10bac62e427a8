//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb) and `constants` (UA + defaults).

mod auth;
mod constants;
mod retry;

use std::sync::Arc;
use std::time::Duration;

use constants::{DEFAULT_BASE_QUOTE_API, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENT};
use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::JvpError;

pub use retry::{Backoff, RetryConfig};

#[derive(Debug, Default)]
struct Credentials {
    cookie: Option<String>,
    crumb: Option<String>,
}

/// HTTP client for the Yahoo quoteSummary endpoint, shared by all fetch surfaces.
///
/// Cloning is cheap; clones share the credential state.
#[derive(Debug, Clone)]
pub struct JvpClient {
    http: Client,
    base_quote_api: Url,
    cookie_url: Url,
    crumb_url: Url,
    retry: RetryConfig,

    state: Arc<RwLock<Credentials>>,
    credential_fetch_lock: Arc<Mutex<()>>,
}

impl Default for JvpClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl JvpClient {
    /// Create a new builder.
    pub fn builder() -> JvpClientBuilder {
        JvpClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }
    pub(crate) fn cookie_url(&self) -> &Url {
        &self.cookie_url
    }
    pub(crate) fn crumb_url(&self) -> &Url {
        &self.crumb_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct JvpClientBuilder {
    user_agent: Option<String>,
    base_quote_api: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    retry: Option<RetryConfig>,

    preauth_cookie: Option<String>,
    preauth_crumb: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl JvpClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query1.finance.yahoo.com/v10/finance/quoteSummary/`).
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Override the default retry policy for all requests made by this client.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Provide pre-acquired credentials, bypassing the cookie/crumb fetch.
    ///
    /// Intended for tests running against a mock server.
    #[doc(hidden)]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth_cookie = Some(cookie.into());
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<JvpClient, JvpError> {
        let base_quote_api = self
            .base_quote_api
            .unwrap_or(Url::parse(DEFAULT_BASE_QUOTE_API)?);
        let cookie_url = self.cookie_url.unwrap_or(Url::parse(DEFAULT_COOKIE_URL)?);
        let crumb_url = self.crumb_url.unwrap_or(Url::parse(DEFAULT_CRUMB_URL)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(JvpClient {
            http,
            base_quote_api,
            cookie_url,
            crumb_url,
            retry: self.retry.unwrap_or_default(),
            state: Arc::new(RwLock::new(Credentials {
                cookie: self.preauth_cookie,
                crumb: self.preauth_crumb,
            })),
            credential_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
