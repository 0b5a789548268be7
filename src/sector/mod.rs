//! Sector and industry overviews from the `/v1/finance/{sectors,industries}` endpoints.

mod model;

pub use model::{
    GrowthCompany, Industry, IndustryListing, Overview, PerformingCompany, Sector, TopCompany,
    TopFund,
};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::request::join_under;
use crate::core::{ApiRequest, YfClient, YfError};

/// Every sector key Yahoo recognizes.
pub const SECTOR_KEYS: [&str; 11] = [
    "basic-materials",
    "communication-services",
    "consumer-cyclical",
    "consumer-defensive",
    "energy",
    "financial-services",
    "healthcare",
    "industrials",
    "real-estate",
    "technology",
    "utilities",
];

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<T>,
}

async fn fetch_data<T>(
    client: &YfClient,
    kind: &str,
    key: &str,
    what: &'static str,
) -> Result<T, YfError>
where
    T: DeserializeOwned,
{
    let url = join_under(client.aux_base(), &format!("/v1/finance/{kind}"))?;
    let req = ApiRequest::absolute(url)
        .segment(key)
        .param("formatted", "true")
        .param("withReturns", "true")
        .param("lang", "en-US")
        .param("region", "US")
        .with_crumb();

    let env: DataEnvelope<T> = client.get_json(&req).await?;
    env.data.ok_or_else(|| YfError::NoData {
        what,
        symbol: key.to_string(),
    })
}

/// Fetches a sector overview. `key` must be one of [`SECTOR_KEYS`].
///
/// # Errors
///
/// `YfError::Validation` for an unknown key (no request is made);
/// `YfError::NoData` if the response has no `data` object.
#[tracing::instrument(skip(client), err)]
pub async fn get_sector(client: &YfClient, key: &str) -> Result<Sector, YfError> {
    if !SECTOR_KEYS.contains(&key) {
        return Err(YfError::Validation(format!(
            "unknown sector key {key:?} (valid: {})",
            SECTOR_KEYS.join(", ")
        )));
    }
    fetch_data(client, "sectors", key, "sector data").await
}

/// Fetches an industry overview. Keys are lowercase and hyphenated
/// (`semiconductors`, `banks-regional`); the list for a sector comes from
/// [`Sector::industries`].
///
/// # Errors
///
/// `YfError::Validation` for an empty key; `YfError::NoData` if the response
/// has no `data` object.
#[tracing::instrument(skip(client), err)]
pub async fn get_industry(client: &YfClient, key: &str) -> Result<Industry, YfError> {
    if key.is_empty() {
        return Err(YfError::Validation("key is required".into()));
    }
    fetch_data(client, "industries", key, "industry data").await
}
