//! Price history: OHLCV charts (v8 chart) and close-only spark series for
//! batches of symbols (v8 spark). Neither endpoint needs a crumb.

mod model;
mod wire;

use std::collections::HashMap;

pub use model::{AdjCloseColumn, Chart, ChartMeta, Indicators, OhlcvColumns, SparkSeries};

use crate::core::{ApiRequest, YfClient, YfError};
use crate::quote::check_symbol_batch;

/// Range used when the caller passes none.
pub const DEFAULT_RANGE: &str = "1mo";
/// Interval used when the caller passes none.
pub const DEFAULT_INTERVAL: &str = "1d";

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim(),
        _ => default,
    }
}

/// Fetches OHLCV history for `symbol`.
///
/// `range` is one of `1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max` and
/// `interval` one of `1m .. 3mo`; Yahoo validates the combination.
///
/// # Errors
///
/// `YfError::Provider` when Yahoo rejects the symbol or the range/interval pair,
/// `YfError::NoData` when the result list is empty.
#[tracing::instrument(skip(client), err)]
pub async fn get_chart(
    client: &YfClient,
    symbol: &str,
    range: Option<&str>,
    interval: Option<&str>,
) -> Result<Chart, YfError> {
    let req = ApiRequest::new("/v8/finance/chart")
        .segment(symbol)
        .param("range", or_default(range, DEFAULT_RANGE))
        .param("interval", or_default(interval, DEFAULT_INTERVAL));

    let env: wire::ChartEnvelope = client.get_json(&req).await?;
    env.chart
        .unwrap_or_default()
        .into_first("chart data", symbol)
}

/// Fetches close-only series for up to 50 symbols, keyed by symbol.
///
/// Symbols Yahoo does not know are missing from the map.
///
/// # Errors
///
/// `YfError::Validation` for an empty or oversized batch; transport, status and
/// decode errors from the request.
#[tracing::instrument(skip(client, symbols), fields(count = symbols.len()), err)]
pub async fn get_bulk_spark(
    client: &YfClient,
    symbols: &[String],
    range: Option<&str>,
    interval: Option<&str>,
) -> Result<HashMap<String, SparkSeries>, YfError> {
    check_symbol_batch(symbols)?;

    let req = ApiRequest::new("/v8/finance/spark")
        .param("symbols", symbols.join(","))
        .param("range", or_default(range, DEFAULT_RANGE))
        .param("interval", or_default(interval, DEFAULT_INTERVAL));

    client.get_json(&req).await
}
