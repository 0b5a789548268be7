//! Recent headlines for a symbol, served by the search endpoint's news section.

use serde::Deserialize;

use crate::core::{ApiRequest, YfClient, YfError};

/// Articles returned when the caller passes no count.
pub const DEFAULT_COUNT: u32 = 5;

/// A single news article.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    pub publisher: Option<String>,
    pub link: Option<String>,
    /// Unix seconds.
    pub provider_publish_time: Option<i64>,
}

#[derive(Deserialize)]
struct NewsEnvelope {
    news: Option<Vec<NewsArticle>>,
}

/// Fetches up to `count` recent articles mentioning `symbol`.
///
/// # Errors
///
/// Returns `YfError` if the request fails or the response cannot be parsed.
#[tracing::instrument(skip(client), err)]
pub async fn get_news(
    client: &YfClient,
    symbol: &str,
    count: Option<u32>,
) -> Result<Vec<NewsArticle>, YfError> {
    let count = count.filter(|n| *n > 0).unwrap_or(DEFAULT_COUNT);

    let req = ApiRequest::new("/v1/finance/search")
        .param("q", symbol)
        .param("quotesCount", "0")
        .param("newsCount", count.to_string());

    let env: NewsEnvelope = client.get_json(&req).await?;
    Ok(env.news.unwrap_or_default())
}
