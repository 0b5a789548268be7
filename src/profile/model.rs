/// Postal address of a company's headquarters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// `street1, city, state, country`, skipping missing parts.
    pub fn one_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.street1, &self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Officer {
    pub name: String,
    pub title: Option<String>,
    pub age: Option<u32>,
    pub year_born: Option<u32>,
    pub total_pay: Option<i64>,
}

/// The `assetProfile` module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetProfile {
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub sector_key: Option<String>,
    pub industry: Option<String>,
    pub industry_key: Option<String>,
    pub summary: Option<String>,
    pub full_time_employees: Option<u64>,
    pub officers: Vec<Officer>,
}

/// The `quoteType` module: naming and listing information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteType {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<String>,
    pub exchange: Option<String>,
}

/// A company profile. Funds and indices often lack `asset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub asset: Option<AssetProfile>,
    pub quote_type: Option<QuoteType>,
}
