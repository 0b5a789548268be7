use serde::Deserialize;

/// Price block of a single-symbol quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Price {
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    /// `PRE`, `REGULAR`, `POST`, `CLOSED`, ...
    pub market_state: Option<String>,

    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_volume: Option<i64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub market_cap: Option<i64>,

    pub pre_market_price: Option<f64>,
    pub pre_market_change: Option<f64>,
    pub pre_market_change_percent: Option<f64>,
    pub post_market_price: Option<f64>,
    pub post_market_change: Option<f64>,
    pub post_market_change_percent: Option<f64>,
}

/// Valuation and range statistics that accompany a quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryDetail {
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    /// Fraction, e.g. `0.0045` for 0.45%.
    pub dividend_yield: Option<f64>,
    pub dividend_rate: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_day_average: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
    pub beta: Option<f64>,
    pub payout_ratio: Option<f64>,
}

/// A detailed quote. Either block may be missing for exotic instruments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSummary {
    pub price: Option<Price>,
    pub detail: Option<SummaryDetail>,
}

/// One row of the v7 batch quote endpoint.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkQuote {
    #[serde(default)]
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub full_exchange_name: Option<String>,
    pub quote_type: Option<String>,
    pub market_state: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_volume: Option<i64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub market_cap: Option<i64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_day_average: Option<f64>,
    pub two_hundred_day_average: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
}
