//! Cookie & crumb acquisition for Yahoo endpoints.
//!
//! The session moves between two states: unauthenticated (no crumb) and
//! authenticated (crumb present, cookies in the jar). Every successful handshake
//! bumps a generation counter so callers that saw a 401/403 can tell whether a
//! concurrent caller already refreshed the session while they were waiting.

use crate::core::error::YfError;
use reqwest::StatusCode;
use reqwest::cookie::Jar;
use reqwest::header::USER_AGENT;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Shared authentication state of a [`YfClient`](super::YfClient).
///
/// The cookie jar is wired into the HTTP client; the crumb sits behind a
/// read/write lock. The handshake holds the write half for both of its round
/// trips, so readers see either the previous crumb or the new one.
///
/// The generation is atomic so crumb-less requests can read it without waiting
/// on a handshake in progress. It is only written with the write lock held.
#[derive(Debug)]
pub struct Session {
    jar: Arc<Jar>,
    state: RwLock<Credentials>,
    generation: AtomicU64,
}

#[derive(Debug, Default)]
struct Credentials {
    // `Some` means authenticated; never holds an empty string.
    crumb: Option<String>,
}

/// A crumb together with the session generation it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct Credential {
    pub(crate) crumb: String,
    pub(crate) generation: u64,
}

impl Credentials {
    fn credential(&self, generation: u64) -> Option<Credential> {
        self.crumb.as_ref().map(|crumb| Credential {
            crumb: crumb.clone(),
            generation,
        })
    }
}

impl Session {
    pub(crate) fn new(jar: Arc<Jar>, preauth_crumb: Option<String>) -> Self {
        let crumb = preauth_crumb.filter(|c| !c.is_empty());
        let generation = u64::from(crumb.is_some());
        Self {
            jar,
            state: RwLock::new(Credentials { crumb }),
            generation: AtomicU64::new(generation),
        }
    }

    /// The cookie jar shared with the HTTP client.
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    /// The current crumb, if the session is authenticated.
    pub async fn crumb(&self) -> Option<String> {
        self.state.read().await.crumb.clone()
    }

    /// Whether a handshake has succeeded and its crumb is still considered valid.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.crumb.is_some()
    }

    /// Number of successful handshakes performed so far. Never blocks.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    // Callers hold a lock on `state`, which keeps the pair consistent.
    fn credential_of(&self, state: &Credentials) -> Option<Credential> {
        state.credential(self.generation())
    }
}

impl super::YfClient {
    /// Makes sure the session holds a crumb, running the handshake if it does not.
    ///
    /// Concurrent callers on a fresh client queue on the write lock; the first
    /// one performs the handshake and the rest pick up its crumb.
    ///
    /// # Errors
    ///
    /// Returns a transport error if either handshake request fails to complete,
    /// [`YfError::Crumb`] if the crumb endpoint does not answer `200 OK`, and
    /// [`YfError::Auth`] if it answers with an empty body.
    pub async fn ensure_credentials(&self) -> Result<String, YfError> {
        Ok(self.credential().await?.crumb)
    }

    pub(crate) async fn credential(&self) -> Result<Credential, YfError> {
        // Fast path under the read lock.
        let session = self.session();
        if let Some(c) = session.credential_of(&*session.state.read().await) {
            return Ok(c);
        }

        let mut state = session.state.write().await;

        // Another task may have authenticated while this one waited.
        if let Some(c) = session.credential_of(&state) {
            return Ok(c);
        }

        self.handshake(&mut state).await
    }

    /// Replaces a crumb the server rejected.
    ///
    /// `seen` is the generation the rejected request was sent with. If the
    /// session is already past it, someone else refreshed it and their crumb is
    /// reused instead of running a second handshake.
    pub(crate) async fn refresh_credential(&self, seen: u64) -> Result<Credential, YfError> {
        let session = self.session();
        let mut state = session.state.write().await;

        if session.generation() != seen
            && let Some(c) = session.credential_of(&state)
        {
            tracing::debug!(
                generation = c.generation,
                "session already refreshed by a concurrent request"
            );
            return Ok(c);
        }

        state.crumb = None;
        self.handshake(&mut state).await
    }

    async fn handshake(&self, state: &mut Credentials) -> Result<Credential, YfError> {
        tracing::debug!(cookie_url = %self.cookie_url, "starting cookie/crumb handshake");

        // Any status is fine here; the 404 still carries the Set-Cookie headers.
        let resp = self
            .http()
            .get(self.cookie_url.clone())
            .header(USER_AGENT, self.pick_user_agent())
            .send()
            .await
            .map_err(YfError::transport("fetching cookies"))?;
        tracing::debug!(status = resp.status().as_u16(), "cookie bootstrap answered");
        drop(resp);

        let resp = self
            .http()
            .get(self.crumb_url.clone())
            .header(USER_AGENT, self.pick_user_agent())
            .send()
            .await
            .map_err(YfError::transport("fetching crumb"))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(YfError::Crumb {
                status: status.as_u16(),
            });
        }

        let crumb = resp
            .text()
            .await
            .map_err(YfError::transport("reading crumb"))?;
        if crumb.is_empty() {
            return Err(YfError::Auth("received empty crumb".into()));
        }

        state.crumb = Some(crumb);
        let generation = self.session().generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(generation, "session authenticated");

        state
            .credential(generation)
            .ok_or_else(|| YfError::Auth("crumb missing after handshake".into()))
    }
}
