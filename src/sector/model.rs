use serde::Deserialize;

use crate::core::wire::de_raw;

/// Aggregate statistics for a sector or industry.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub description: Option<String>,
    pub companies_count: Option<u64>,
    pub industries_count: Option<u64>,
    #[serde(default, deserialize_with = "de_raw")]
    pub market_cap: Option<f64>,
    /// Share of the total market, as a fraction.
    #[serde(default, deserialize_with = "de_raw")]
    pub market_weight: Option<f64>,
    #[serde(default, deserialize_with = "de_raw")]
    pub employee_count: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCompany {
    #[serde(default)]
    pub symbol: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_raw")]
    pub market_weight: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TopFund {
    #[serde(default)]
    pub symbol: String,
    pub name: Option<String>,
}

/// An industry listed under a sector. `key` is what the industry endpoint accepts.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryListing {
    #[serde(default)]
    pub key: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_raw")]
    pub market_weight: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    #[serde(default)]
    pub name: String,
    pub symbol: Option<String>,
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub top_companies: Vec<TopCompany>,
    #[serde(rename = "topETFs", default)]
    pub top_etfs: Vec<TopFund>,
    #[serde(default)]
    pub top_mutual_funds: Vec<TopFund>,
    #[serde(default)]
    pub industries: Vec<IndustryListing>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformingCompany {
    #[serde(default)]
    pub symbol: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_raw")]
    pub ytd_return: Option<f64>,
    #[serde(default, deserialize_with = "de_raw")]
    pub last_price: Option<f64>,
    #[serde(default, deserialize_with = "de_raw")]
    pub target_price: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthCompany {
    #[serde(default)]
    pub symbol: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_raw")]
    pub ytd_return: Option<f64>,
    #[serde(default, deserialize_with = "de_raw")]
    pub growth_estimate: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    #[serde(default)]
    pub name: String,
    pub symbol: Option<String>,
    pub sector_key: Option<String>,
    pub sector_name: Option<String>,
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub top_companies: Vec<TopCompany>,
    #[serde(default)]
    pub top_performing_companies: Vec<PerformingCompany>,
    #[serde(default)]
    pub top_growth_companies: Vec<GrowthCompany>,
}
