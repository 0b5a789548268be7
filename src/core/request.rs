use std::collections::BTreeMap;

use url::Url;

use crate::core::YfError;

/// Describes one GET against a Yahoo endpoint.
///
/// The descriptor is never mutated by the client. Each attempt (including the
/// retry after a 401/403) builds its URL from a fresh copy of the parameters
/// plus whatever crumb is current at that moment.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    target: Target,
    segments: Vec<String>,
    params: BTreeMap<String, String>,
    requires_crumb: bool,
}

#[derive(Debug, Clone)]
enum Target {
    /// Joined onto the client's API base.
    Path(String),
    Absolute(Url),
}

impl ApiRequest {
    /// A request against the client's main API host, e.g. `/v7/finance/quote`.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_target(Target::Path(path.into()))
    }

    /// A request against a fully-qualified URL.
    pub fn absolute(url: Url) -> Self {
        Self::with_target(Target::Absolute(url))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            segments: Vec::new(),
            params: BTreeMap::new(),
            requires_crumb: false,
        }
    }

    /// Appends one path segment. Reserved characters are percent-encoded, so a key
    /// containing `/` or `?` stays a single segment.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Sets a query parameter, replacing any previous value for the key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Marks the request as needing the session crumb.
    #[must_use]
    pub fn with_crumb(mut self) -> Self {
        self.requires_crumb = true;
        self
    }

    /// Whether the crumb is appended to this request.
    pub fn requires_crumb(&self) -> bool {
        self.requires_crumb
    }

    /// The query parameters, excluding any crumb.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Builds the final URL. Parameters are emitted in key order; `crumb` is
    /// set on a per-attempt copy of the parameter map.
    pub(crate) fn resolve(&self, base: &Url, crumb: Option<&str>) -> Result<Url, YfError> {
        let mut url = match &self.target {
            Target::Path(path) => join_under(base, path)?,
            Target::Absolute(url) => url.clone(),
        };

        if !self.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                .pop_if_empty()
                .extend(&self.segments);
        }

        let mut params = self.params.clone();
        if let Some(c) = crumb {
            params.insert("crumb".to_string(), c.to_string());
        }

        if !params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &params {
                qp.append_pair(k, v);
            }
        }

        Ok(url)
    }
}

/// Renders a URL for logs and error messages with the crumb removed.
/// Joins `path` below `base`, keeping any path prefix the base carries
/// (`http://proxy/yahoo` + `/v7/finance/quote` gives `http://proxy/yahoo/v7/finance/quote`).
pub(crate) fn join_under(base: &Url, path: &str) -> Result<Url, YfError> {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let with_slash = format!("{}/", dir.path());
        dir.set_path(&with_slash);
    }
    Ok(dir.join(path.trim_start_matches('/'))?)
}

pub(crate) fn redact_crumb(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "crumb") {
        return url.to_string();
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "crumb")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut out = url.clone();
    out.set_query(None);
    if !kept.is_empty() {
        let mut qp = out.query_pairs_mut();
        for (k, v) in &kept {
            qp.append_pair(k, v);
        }
    }
    out.to_string()
}
