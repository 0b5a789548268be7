use serde::Deserialize;

use crate::core::wire::RawNum;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct V10Result {
    pub(crate) price: Option<PriceNode>,
    #[serde(rename = "summaryDetail")]
    pub(crate) summary_detail: Option<SummaryDetailNode>,
}

#[derive(Deserialize)]
pub(crate) struct PriceNode {
    pub(crate) symbol: Option<String>,
    #[serde(rename = "shortName")]
    pub(crate) short_name: Option<String>,
    #[serde(rename = "longName")]
    pub(crate) long_name: Option<String>,
    pub(crate) currency: Option<String>,
    #[serde(rename = "exchangeName")]
    pub(crate) exchange_name: Option<String>,
    #[serde(rename = "marketState")]
    pub(crate) market_state: Option<String>,

    #[serde(rename = "regularMarketPrice")]
    pub(crate) regular_market_price: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketChange")]
    pub(crate) regular_market_change: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketChangePercent")]
    pub(crate) regular_market_change_percent: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketVolume")]
    pub(crate) regular_market_volume: Option<RawNum<i64>>,
    #[serde(rename = "regularMarketOpen")]
    pub(crate) regular_market_open: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketDayHigh")]
    pub(crate) regular_market_day_high: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketDayLow")]
    pub(crate) regular_market_day_low: Option<RawNum<f64>>,
    #[serde(rename = "regularMarketPreviousClose")]
    pub(crate) regular_market_previous_close: Option<RawNum<f64>>,
    #[serde(rename = "marketCap")]
    pub(crate) market_cap: Option<RawNum<i64>>,

    #[serde(rename = "preMarketPrice")]
    pub(crate) pre_market_price: Option<RawNum<f64>>,
    #[serde(rename = "preMarketChange")]
    pub(crate) pre_market_change: Option<RawNum<f64>>,
    #[serde(rename = "preMarketChangePercent")]
    pub(crate) pre_market_change_percent: Option<RawNum<f64>>,
    #[serde(rename = "postMarketPrice")]
    pub(crate) post_market_price: Option<RawNum<f64>>,
    #[serde(rename = "postMarketChange")]
    pub(crate) post_market_change: Option<RawNum<f64>>,
    #[serde(rename = "postMarketChangePercent")]
    pub(crate) post_market_change_percent: Option<RawNum<f64>>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryDetailNode {
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum<f64>>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum<f64>>,
    #[serde(rename = "dividendYield")]
    pub(crate) dividend_yield: Option<RawNum<f64>>,
    #[serde(rename = "dividendRate")]
    pub(crate) dividend_rate: Option<RawNum<f64>>,
    #[serde(rename = "fiftyTwoWeekLow")]
    pub(crate) fifty_two_week_low: Option<RawNum<f64>>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    pub(crate) fifty_two_week_high: Option<RawNum<f64>>,
    #[serde(rename = "fiftyDayAverage")]
    pub(crate) fifty_day_average: Option<RawNum<f64>>,
    #[serde(rename = "twoHundredDayAverage")]
    pub(crate) two_hundred_day_average: Option<RawNum<f64>>,
    pub(crate) beta: Option<RawNum<f64>>,
    #[serde(rename = "payoutRatio")]
    pub(crate) payout_ratio: Option<RawNum<f64>>,
}

/* --- v7 batch quotes --- */

#[derive(Deserialize)]
pub(crate) struct V7Envelope {
    #[serde(rename = "quoteResponse")]
    pub(crate) quote_response: Option<crate::core::wire::Envelope<super::BulkQuote>>,
}
