//! Option chains from `/v7/finance/options/{symbol}`.

mod wire;

use crate::core::{ApiRequest, YfClient, YfError};

/// A single call or put.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionContract {
    pub contract_symbol: String,
    pub strike: f64,
    pub currency: Option<String>,
    pub last_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    /// Fraction, e.g. `0.25` for 25%.
    pub implied_volatility: Option<f64>,
    pub in_the_money: bool,
    /// Unix seconds.
    pub expiration: i64,
}

/// Calls and puts for one expiration date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSlice {
    /// Unix seconds.
    pub expiration_date: i64,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

/// The option chain for an underlying.
///
/// `slices` holds the requested expiration only (the nearest one when none was
/// given); `expiration_dates` lists every expiration Yahoo offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionChain {
    pub underlying_symbol: String,
    pub underlying_price: Option<f64>,
    pub expiration_dates: Vec<i64>,
    pub strikes: Vec<f64>,
    pub slices: Vec<OptionSlice>,
}

/// Parses an expiration given as Unix seconds. Blank means "nearest".
fn parse_expiration(expiration: Option<&str>) -> Result<Option<i64>, YfError> {
    match expiration.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(|_| {
            YfError::Validation(format!(
                "invalid expiration {s:?}: expected a Unix timestamp in seconds"
            ))
        }),
    }
}

fn map_side(side: Option<Vec<wire::OptContractNode>>, fallback_exp: i64) -> Vec<OptionContract> {
    side.unwrap_or_default()
        .into_iter()
        .map(|c| OptionContract {
            contract_symbol: c.contract_symbol.unwrap_or_default(),
            strike: c.strike.unwrap_or(0.0),
            currency: c.currency,
            last_price: c.last_price,
            change: c.change,
            percent_change: c.percent_change,
            volume: c.volume,
            open_interest: c.open_interest,
            bid: c.bid,
            ask: c.ask,
            implied_volatility: c.implied_volatility,
            in_the_money: c.in_the_money.unwrap_or(false),
            expiration: c.expiration.unwrap_or(fallback_exp),
        })
        .collect()
}

/// Fetches the option chain for `symbol`, optionally for a specific expiration
/// (Unix seconds as text).
///
/// # Errors
///
/// `YfError::Validation` if `expiration` is not an integer, `YfError::Provider`
/// for a provider error, `YfError::NoData` when the result list is empty.
#[tracing::instrument(skip(client), err)]
pub async fn get_options(
    client: &YfClient,
    symbol: &str,
    expiration: Option<&str>,
) -> Result<OptionChain, YfError> {
    let date = parse_expiration(expiration)?;

    let mut req = ApiRequest::new("/v7/finance/options")
        .segment(symbol)
        .with_crumb();
    if let Some(d) = date {
        req = req.param("date", d.to_string());
    }

    let env: wire::OptEnvelope = client.get_json(&req).await?;
    let first = env
        .option_chain
        .unwrap_or_default()
        .into_first("options data", symbol)?;

    let slices = first
        .options
        .unwrap_or_default()
        .into_iter()
        .map(|od| {
            let exp = od.expiration_date.or(date).unwrap_or(0);
            OptionSlice {
                expiration_date: exp,
                calls: map_side(od.calls, exp),
                puts: map_side(od.puts, exp),
            }
        })
        .collect();

    Ok(OptionChain {
        underlying_symbol: first
            .underlying_symbol
            .unwrap_or_else(|| symbol.to_string()),
        underlying_price: first.quote.and_then(|q| q.regular_market_price),
        expiration_dates: first.expiration_dates.unwrap_or_default(),
        strikes: first.strikes.unwrap_or_default(),
        slices,
    })
}

