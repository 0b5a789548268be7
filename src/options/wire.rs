use serde::Deserialize;

use crate::core::wire::Envelope;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct OptEnvelope {
    #[serde(rename = "optionChain")]
    pub(crate) option_chain: Option<Envelope<OptResultNode>>,
}

#[derive(Deserialize)]
pub(crate) struct OptResultNode {
    #[serde(rename = "underlyingSymbol")]
    pub(crate) underlying_symbol: Option<String>,
    #[serde(rename = "expirationDates")]
    pub(crate) expiration_dates: Option<Vec<i64>>,
    pub(crate) strikes: Option<Vec<f64>>,
    pub(crate) quote: Option<OptQuoteNode>,
    pub(crate) options: Option<Vec<OptByDateNode>>,
}

#[derive(Deserialize)]
pub(crate) struct OptQuoteNode {
    #[serde(rename = "regularMarketPrice")]
    pub(crate) regular_market_price: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct OptByDateNode {
    #[serde(rename = "expirationDate")]
    pub(crate) expiration_date: Option<i64>,
    pub(crate) calls: Option<Vec<OptContractNode>>,
    pub(crate) puts: Option<Vec<OptContractNode>>,
}

#[derive(Deserialize)]
pub(crate) struct OptContractNode {
    #[serde(rename = "contractSymbol")]
    pub(crate) contract_symbol: Option<String>,
    pub(crate) strike: Option<f64>,
    pub(crate) currency: Option<String>,
    #[serde(rename = "lastPrice")]
    pub(crate) last_price: Option<f64>,
    pub(crate) change: Option<f64>,
    #[serde(rename = "percentChange")]
    pub(crate) percent_change: Option<f64>,
    pub(crate) volume: Option<u64>,
    #[serde(rename = "openInterest")]
    pub(crate) open_interest: Option<u64>,
    pub(crate) bid: Option<f64>,
    pub(crate) ask: Option<f64>,
    #[serde(rename = "impliedVolatility")]
    pub(crate) implied_volatility: Option<f64>,
    #[serde(rename = "inTheMoney")]
    pub(crate) in_the_money: Option<bool>,
    pub(crate) expiration: Option<i64>,
}
