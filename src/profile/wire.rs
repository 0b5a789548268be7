use serde::Deserialize;

use crate::core::wire::RawNum;

#[derive(Deserialize)]
pub(crate) struct V10Result {
    #[serde(rename = "assetProfile")]
    pub(crate) asset_profile: Option<AssetProfileNode>,
    #[serde(rename = "quoteType")]
    pub(crate) quote_type: Option<QuoteTypeNode>,
}

#[derive(Deserialize)]
pub(crate) struct AssetProfileNode {
    pub(crate) address1: Option<String>,
    pub(crate) address2: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) zip: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) sector: Option<String>,
    #[serde(rename = "sectorKey")]
    pub(crate) sector_key: Option<String>,
    pub(crate) industry: Option<String>,
    #[serde(rename = "industryKey")]
    pub(crate) industry_key: Option<String>,
    #[serde(rename = "longBusinessSummary")]
    pub(crate) long_business_summary: Option<String>,
    #[serde(rename = "fullTimeEmployees")]
    pub(crate) full_time_employees: Option<u64>,
    #[serde(rename = "companyOfficers")]
    pub(crate) company_officers: Option<Vec<OfficerNode>>,
}

#[derive(Deserialize)]
pub(crate) struct OfficerNode {
    pub(crate) name: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) age: Option<u32>,
    #[serde(rename = "yearBorn")]
    pub(crate) year_born: Option<u32>,
    #[serde(rename = "totalPay")]
    pub(crate) total_pay: Option<RawNum<i64>>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteTypeNode {
    pub(crate) symbol: Option<String>,
    #[serde(rename = "shortName")]
    pub(crate) short_name: Option<String>,
    #[serde(rename = "longName")]
    pub(crate) long_name: Option<String>,
    #[serde(rename = "quoteType")]
    pub(crate) quote_type: Option<String>,
    pub(crate) exchange: Option<String>,
}
