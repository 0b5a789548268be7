//! Company profile: sector, industry, contact details, business summary and officers.

mod model;
mod wire;

pub use model::{Address, AssetProfile, Officer, Profile, QuoteType};

use crate::core::quotesummary::fetch_modules;
use crate::core::wire::from_raw;
use crate::core::{YfClient, YfError};

/// Fetches the `assetProfile` and `quoteType` modules for `symbol`.
///
/// # Errors
///
/// `YfError::Provider` for a provider error, `YfError::NoData` when the
/// result list is empty.
#[tracing::instrument(skip(client), err)]
pub async fn get_profile(client: &YfClient, symbol: &str) -> Result<Profile, YfError> {
    let root: wire::V10Result = fetch_modules(client, symbol, "assetProfile,quoteType").await?;

    let asset = root.asset_profile.map(|a| AssetProfile {
        address: Address {
            street1: a.address1,
            street2: a.address2,
            city: a.city,
            state: a.state,
            zip: a.zip,
            country: a.country,
        },
        phone: a.phone,
        website: a.website,
        sector: a.sector,
        sector_key: a.sector_key,
        industry: a.industry,
        industry_key: a.industry_key,
        summary: a.long_business_summary,
        full_time_employees: a.full_time_employees,
        officers: a
            .company_officers
            .unwrap_or_default()
            .into_iter()
            .map(|o| Officer {
                name: o.name.unwrap_or_default(),
                title: o.title,
                age: o.age,
                year_born: o.year_born,
                total_pay: from_raw(o.total_pay),
            })
            .collect(),
    });

    let quote_type = root.quote_type.map(|q| QuoteType {
        symbol: q.symbol,
        short_name: q.short_name,
        long_name: q.long_name,
        quote_type: q.quote_type,
        exchange: q.exchange,
    });

    Ok(Profile { asset, quote_type })
}
