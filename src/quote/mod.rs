//! Real-time quotes: a detailed single-symbol quote (v10 quoteSummary) and
//! batch quotes for up to [`MAX_BULK_SYMBOLS`] symbols (v7).

mod model;
mod wire;

pub use model::{BulkQuote, Price, QuoteSummary, SummaryDetail};

use crate::core::quotesummary::fetch_modules;
use crate::core::wire::from_raw;
use crate::core::{ApiRequest, YfClient, YfError};

/// Upper bound on symbols per batch request (quotes and spark).
pub const MAX_BULK_SYMBOLS: usize = 50;

/// Rejects empty and oversized symbol batches before any request is made.
pub(crate) fn check_symbol_batch(symbols: &[String]) -> Result<(), YfError> {
    if symbols.is_empty() {
        return Err(YfError::Validation("at least one symbol is required".into()));
    }
    if symbols.len() > MAX_BULK_SYMBOLS {
        return Err(YfError::Validation(format!(
            "too many symbols: {} (max {MAX_BULK_SYMBOLS})",
            symbols.len()
        )));
    }
    Ok(())
}

/// Fetches price and summary detail for one symbol.
///
/// # Errors
///
/// Returns `YfError::Provider` if Yahoo reports an error for the symbol and
/// `YfError::NoData` if the result list is empty.
#[tracing::instrument(skip(client), err)]
pub async fn get_quote(client: &YfClient, symbol: &str) -> Result<QuoteSummary, YfError> {
    let root: wire::V10Result = fetch_modules(client, symbol, "price,summaryDetail").await?;

    let price = root.price.map(|p| Price {
        symbol: p.symbol.unwrap_or_else(|| symbol.to_string()),
        short_name: p.short_name,
        long_name: p.long_name,
        currency: p.currency,
        exchange_name: p.exchange_name,
        market_state: p.market_state,
        regular_market_price: from_raw(p.regular_market_price),
        regular_market_change: from_raw(p.regular_market_change),
        regular_market_change_percent: from_raw(p.regular_market_change_percent),
        regular_market_volume: from_raw(p.regular_market_volume),
        regular_market_open: from_raw(p.regular_market_open),
        regular_market_day_high: from_raw(p.regular_market_day_high),
        regular_market_day_low: from_raw(p.regular_market_day_low),
        regular_market_previous_close: from_raw(p.regular_market_previous_close),
        market_cap: from_raw(p.market_cap),
        pre_market_price: from_raw(p.pre_market_price),
        pre_market_change: from_raw(p.pre_market_change),
        pre_market_change_percent: from_raw(p.pre_market_change_percent),
        post_market_price: from_raw(p.post_market_price),
        post_market_change: from_raw(p.post_market_change),
        post_market_change_percent: from_raw(p.post_market_change_percent),
    });

    let detail = root.summary_detail.map(|d| SummaryDetail {
        trailing_pe: from_raw(d.trailing_pe),
        forward_pe: from_raw(d.forward_pe),
        dividend_yield: from_raw(d.dividend_yield),
        dividend_rate: from_raw(d.dividend_rate),
        fifty_two_week_low: from_raw(d.fifty_two_week_low),
        fifty_two_week_high: from_raw(d.fifty_two_week_high),
        fifty_day_average: from_raw(d.fifty_day_average),
        two_hundred_day_average: from_raw(d.two_hundred_day_average),
        beta: from_raw(d.beta),
        payout_ratio: from_raw(d.payout_ratio),
    });

    Ok(QuoteSummary { price, detail })
}

/// Fetches quotes for several symbols in one call. Symbols Yahoo does not
/// recognize are simply absent from the result.
///
/// # Errors
///
/// `YfError::Validation` for an empty batch or more than [`MAX_BULK_SYMBOLS`]
/// symbols; `YfError::Provider` if the envelope carries an error.
#[tracing::instrument(skip(client, symbols), fields(count = symbols.len()), err)]
pub async fn get_bulk_quotes(
    client: &YfClient,
    symbols: &[String],
) -> Result<Vec<BulkQuote>, YfError> {
    check_symbol_batch(symbols)?;

    let req = ApiRequest::new("/v7/finance/quote")
        .param("symbols", symbols.join(","))
        .with_crumb();

    let env: wire::V7Envelope = client.get_json(&req).await?;
    env.quote_response.unwrap_or_default().into_results()
}
