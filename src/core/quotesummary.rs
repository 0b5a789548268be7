use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::wire::Envelope;
use crate::core::{ApiRequest, YfClient, YfError};

#[derive(Deserialize)]
struct V10Envelope<T> {
    #[serde(rename = "quoteSummary")]
    quote_summary: Option<Envelope<T>>,
}

/// Fetches `modules` from the v10 quoteSummary endpoint and returns the first
/// result node. Provider errors take precedence over an empty result list.
pub(crate) async fn fetch_modules<T>(
    client: &YfClient,
    symbol: &str,
    modules: &str,
) -> Result<T, YfError>
where
    T: DeserializeOwned,
{
    let req = ApiRequest::new("/v10/finance/quoteSummary")
        .segment(symbol)
        .param("modules", modules)
        .with_crumb();

    let env: V10Envelope<T> = client.get_json(&req).await?;

    env.quote_summary
        .unwrap_or_default()
        .into_first("data", symbol)
}
