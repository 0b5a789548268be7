use serde::Deserialize;

use crate::core::{ApiRequest, YfClient, YfError};

/// Number of matches returned when the caller passes no limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// One symbol match from `/v1/finance/search`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchQuote {
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "shortname")]
    pub short_name: Option<String>,
    #[serde(rename = "longname")]
    pub long_name: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "quoteType")]
    pub quote_type: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub score: Option<f64>,
}

#[derive(Deserialize)]
struct V1SearchEnvelope {
    quotes: Option<Vec<SearchQuote>>,
}

/// Searches for symbols by company name or ticker.
///
/// A `limit` of `None` or `0` falls back to [`DEFAULT_LIMIT`]. Fuzzy matching
/// is disabled so results track the query phrase.
///
/// # Errors
///
/// Returns `YfError` if the request fails or the response cannot be parsed.
#[tracing::instrument(skip(client), err)]
pub async fn search(
    client: &YfClient,
    query: &str,
    limit: Option<u32>,
) -> Result<Vec<SearchQuote>, YfError> {
    let limit = limit.filter(|n| *n > 0).unwrap_or(DEFAULT_LIMIT);

    let req = ApiRequest::new("/v1/finance/search")
        .param("q", query)
        .param("quotesCount", limit.to_string())
        .param("newsCount", "0")
        .param("enableFuzzyQuery", "false")
        .param("quotesQueryId", "tss_match_phrase_query");

    let env: V1SearchEnvelope = client.get_json(&req).await?;
    Ok(env.quotes.unwrap_or_default())
}
