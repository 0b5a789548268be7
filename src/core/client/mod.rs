//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb session) and `constants` (UA pool + defaults).

mod auth;
mod constants;

pub use auth::Session;
pub use constants::{USER_AGENTS, random_user_agent};

use crate::core::YfError;
use constants::{DEFAULT_API_BASE, DEFAULT_AUX_BASE, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL};
use reqwest::Client;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Yahoo Finance HTTP client.
///
/// Cloning is cheap; clones share the connection pool, the cookie jar and the
/// crumb, so one authenticated session serves every clone concurrently.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    api_base: Url,
    aux_base: Url,
    cookie_url: Url,
    crumb_url: Url,
    user_agent: Option<String>,
    session: Arc<Session>,
}

impl YfClient {
    /// Create a new builder.
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn api_base(&self) -> &Url {
        &self.api_base
    }
    pub(crate) fn aux_base(&self) -> &Url {
        &self.aux_base
    }

    /// The shared session (cookie jar + crumb) backing this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn pick_user_agent(&self) -> &str {
        match &self.user_agent {
            Some(ua) => ua,
            None => random_user_agent(),
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    api_base: Option<Url>,
    aux_base: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    preauth_crumb: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Pin a single User-Agent instead of picking from the built-in pool per request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the main API host (e.g., `https://query2.finance.yahoo.com`).
    /// A path prefix such as `http://proxy/yahoo` is kept.
    #[must_use]
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Override the secondary host used by sector, industry and market endpoints
    /// (e.g., `https://query1.finance.yahoo.com`). A path prefix is kept.
    #[must_use]
    pub fn aux_base(mut self, url: Url) -> Self {
        self.aux_base = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Start with an already-authenticated session (skips the first handshake).
    #[doc(hidden)]
    #[must_use]
    pub fn _preauth(mut self, crumb: impl Into<String>) -> Self {
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `YfError` if a default URL fails to parse or the underlying HTTP
    /// client cannot be constructed (e.g. TLS backend initialization).
    pub fn build(self) -> Result<YfClient, YfError> {
        let api_base = match self.api_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_BASE)?,
        };
        let aux_base = match self.aux_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_AUX_BASE)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_CRUMB_URL)?,
        };

        let jar = Arc::new(Jar::default());
        let mut httpb = reqwest::Client::builder().cookie_provider(Arc::clone(&jar));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb
            .build()
            .map_err(YfError::transport("building HTTP client"))?;

        Ok(YfClient {
            http,
            api_base,
            aux_base,
            cookie_url,
            crumb_url,
            user_agent: self.user_agent,
            session: Arc::new(Session::new(jar, self.preauth_crumb)),
        })
    }
}
