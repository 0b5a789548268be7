//! Request execution with the single auth-refresh retry, plus JSON decoding.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::request::redact_crumb;
use crate::core::{ApiRequest, YfClient, YfError};

/// Decode a JSON body into `T`.
///
/// # Errors
///
/// Returns [`YfError::Json`] if the body is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, YfError> {
    serde_json::from_slice(body).map_err(YfError::Json)
}

const fn is_auth_rejection(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

impl YfClient {
    /// Executes `req` and returns the raw body of a `200 OK` response.
    ///
    /// Crumb-bearing requests authenticate lazily first. A 401 or 403 triggers
    /// one session refresh and one more attempt; whatever that attempt returns
    /// is final. At most two requests reach the target endpoint per call.
    ///
    /// # Errors
    ///
    /// - transport failures (`YfError::Transport`),
    /// - handshake failures, wrapped in `YfError::Reauth` when they happen on the retry path,
    /// - `YfError::Status` when the final response is not `200 OK`.
    pub async fn get_bytes(&self, req: &ApiRequest) -> Result<Vec<u8>, YfError> {
        let (crumb, generation) = if req.requires_crumb() {
            let cred = self.credential().await?;
            (Some(cred.crumb), cred.generation)
        } else {
            (None, self.session().generation())
        };

        let mut url = req.resolve(self.api_base(), crumb.as_deref())?;
        let (mut status, mut body) = self.send(&url).await?;

        if is_auth_rejection(status) {
            tracing::warn!(
                status = status.as_u16(),
                path = url.path(),
                "request rejected, refreshing session"
            );
            let fresh = self
                .refresh_credential(generation)
                .await
                .map_err(|e| YfError::Reauth(Box::new(e)))?;

            let crumb = req.requires_crumb().then_some(fresh.crumb.as_str());
            url = req.resolve(self.api_base(), crumb)?;
            (status, body) = self.send(&url).await?;
        }

        if status != StatusCode::OK {
            return Err(YfError::Status {
                status: status.as_u16(),
                url: redact_crumb(&url),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    /// Executes `req` and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Any error from [`YfClient::get_bytes`], or [`YfError::Json`] if the body
    /// does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, YfError> {
        let body = self.get_bytes(req).await?;
        decode_json(&body)
    }

    async fn send(&self, url: &Url) -> Result<(StatusCode, Vec<u8>), YfError> {
        tracing::debug!(url = %redact_crumb(url), "GET");

        let resp = self
            .http()
            .get(url.clone())
            .header(USER_AGENT, self.pick_user_agent())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(YfError::transport("executing request"))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(YfError::transport("reading response"))?;

        Ok((status, body.to_vec()))
    }
}
