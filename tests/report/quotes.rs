use yfinance_mcp::quote::{BulkQuote, Price, QuoteSummary, SummaryDetail};
use yfinance_mcp::tools::report;

fn apple() -> QuoteSummary {
    QuoteSummary {
        price: Some(Price {
            symbol: "AAPL".into(),
            long_name: Some("Apple Inc.".into()),
            currency: Some("USD".into()),
            exchange_name: Some("NasdaqGS".into()),
            market_state: Some("PRE".into()),
            regular_market_price: Some(190.5),
            regular_market_change: Some(-1.25),
            regular_market_change_percent: Some(-0.65),
            regular_market_volume: Some(51_234_567),
            market_cap: Some(2_950_000_000_000),
            pre_market_price: Some(191.0),
            pre_market_change: Some(0.5),
            pre_market_change_percent: Some(0.26),
            ..Price::default()
        }),
        detail: Some(SummaryDetail {
            trailing_pe: Some(29.4),
            dividend_yield: Some(0.0055),
            ..SummaryDetail::default()
        }),
    }
}

#[test]
fn quote_report_lists_price_lines() {
    let out = report::quote(&apple());

    assert!(out.starts_with("=== AAPL (Apple Inc.) ===\n"));
    assert!(out.contains("Exchange: NasdaqGS | Currency: USD | Market: PRE"));
    assert!(out.contains("Price:           $190.50"));
    assert!(out.contains("Change:          -1.25 (-0.65%)"));
    assert!(out.contains("Volume:          51,234,567"));
    assert!(out.contains("Market Cap:      $2.95T"));
    assert!(out.contains("Open:            N/A"));
    assert!(out.contains("P/E Ratio:       29.40"));
    assert!(out.contains("Dividend Yield:  0.55%"));
    assert!(!out.contains("Beta:"));
    assert!(out.contains("--- Pre-Market ---\nPrice:  $191.00 (0.50, 0.26%)"));
}

#[test]
fn quote_without_price_block() {
    let out = report::quote(&QuoteSummary::default());
    assert_eq!(out, "No price data available");
}

#[test]
fn bulk_quotes_truncate_long_names() {
    let rows = vec![
        BulkQuote {
            symbol: "AAPL".into(),
            long_name: Some("Very Long Company Name Incorporated".into()),
            regular_market_price: Some(190.5),
            regular_market_change: Some(1.5),
            regular_market_change_percent: Some(0.79),
            regular_market_volume: Some(1_000_000),
            market_cap: Some(3_000_000_000),
            ..BulkQuote::default()
        },
        BulkQuote {
            symbol: "MSFT".into(),
            short_name: Some("Microsoft".into()),
            ..BulkQuote::default()
        },
    ];

    let out = report::bulk_quotes(&rows);
    assert!(out.starts_with("=== Bulk Quotes (2 symbols) ===\n"));
    assert!(out.contains("Very Long Company Name.."));
    assert!(!out.contains("Incorporated"));
    assert!(out.contains("1,000,000"));
    assert!(out.contains("$3.00B"));
    assert!(out.contains("Microsoft"));
    assert_eq!(report::bulk_quotes(&[]), "No quotes returned");
}
