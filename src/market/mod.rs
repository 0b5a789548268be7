//! Market-wide views: benchmark summaries and trading hours per region.
//!
//! Both endpoints live on the secondary host and are public (no crumb).

use serde::Deserialize;

use crate::core::wire::{Envelope, ProviderError, check_provider};
use crate::core::request::join_under;
use crate::core::{ApiRequest, YfClient, YfError};

/// Every market region key Yahoo recognizes.
pub const MARKET_KEYS: [&str; 8] = [
    "US",
    "GB",
    "ASIA",
    "EUROPE",
    "RATES",
    "COMMODITIES",
    "CURRENCIES",
    "CRYPTOCURRENCIES",
];

/// One benchmark (index, rate, commodity, ...) in a market summary.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummaryItem {
    #[serde(default)]
    pub symbol: String,
    pub short_name: Option<String>,
    pub exchange: Option<String>,
    pub market_state: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketTimezone {
    #[serde(rename = "gmtoffset")]
    pub gmt_offset: Option<String>,
    pub short: Option<String>,
}

/// Trading session status for one exchange group. Times are preformatted by Yahoo.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketTime {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub timezone: Vec<MarketTimezone>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketTimeGroup {
    #[serde(rename = "marketTime", default)]
    pub market_time: Vec<MarketTime>,
}

#[derive(Deserialize)]
struct SummaryEnvelope {
    #[serde(rename = "marketSummaryResponse")]
    market_summary_response: Option<Envelope<MarketSummaryItem>>,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    finance: Option<FinanceNode>,
}

#[derive(Deserialize)]
struct FinanceNode {
    #[serde(rename = "marketTimes")]
    market_times: Option<Vec<MarketTimeGroup>>,
    error: Option<ProviderError>,
}

fn check_market(market: &str) -> Result<(), YfError> {
    if MARKET_KEYS.contains(&market) {
        Ok(())
    } else {
        Err(YfError::Validation(format!(
            "unknown market {market:?} (valid: {})",
            MARKET_KEYS.join(", ")
        )))
    }
}

/// Fetches benchmark prices for a market region.
///
/// # Errors
///
/// `YfError::Validation` if `market` is not one of [`MARKET_KEYS`];
/// `YfError::Provider` for a provider error.
#[tracing::instrument(skip(client), err)]
pub async fn get_market_summary(
    client: &YfClient,
    market: &str,
) -> Result<Vec<MarketSummaryItem>, YfError> {
    check_market(market)?;

    let url = join_under(client.aux_base(), "/v6/finance/quote/marketSummary")?;
    let req = ApiRequest::absolute(url)
        .param(
            "fields",
            "shortName,regularMarketPrice,regularMarketChange,regularMarketChangePercent",
        )
        .param("formatted", "false")
        .param("lang", "en-US")
        .param("market", market);

    let env: SummaryEnvelope = client.get_json(&req).await?;
    env.market_summary_response.unwrap_or_default().into_results()
}

/// Fetches opening hours and current status for a market region.
///
/// # Errors
///
/// `YfError::Validation` if `market` is not one of [`MARKET_KEYS`];
/// `YfError::Provider` for a provider error.
#[tracing::instrument(skip(client), err)]
pub async fn get_market_status(
    client: &YfClient,
    market: &str,
) -> Result<Vec<MarketTimeGroup>, YfError> {
    check_market(market)?;

    let url = join_under(client.aux_base(), "/v6/finance/markettime")?;
    let req = ApiRequest::absolute(url)
        .param("formatted", "true")
        .param("key", "finance")
        .param("lang", "en-US")
        .param("market", market);

    let env: StatusEnvelope = client.get_json(&req).await?;
    let Some(finance) = env.finance else {
        return Ok(Vec::new());
    };
    check_provider(finance.error)?;
    Ok(finance.market_times.unwrap_or_default())
}
