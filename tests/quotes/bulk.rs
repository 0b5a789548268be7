use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::YfError;
use yfinance_mcp::quote::{MAX_BULK_SYMBOLS, get_bulk_quotes};

fn symbols(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("S{i}")).collect()
}

#[tokio::test]
async fn bulk_quotes_decode_rows() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "AAPL,MSFT")
            .query_param("crumb", "c");
        then.status(200).body(
            r#"{"quoteResponse":{"result":[
                {"symbol":"AAPL","longName":"Apple Inc.","regularMarketPrice":190.5,"trailingPE":29.4,"marketCap":2950000000000},
                {"symbol":"MSFT","shortName":"Microsoft","regularMarketPrice":410.2,"forwardPE":31.0}
            ],"error":null}}"#,
        );
    });

    let rows = get_bulk_quotes(&client, &["AAPL".into(), "MSFT".into()])
        .await
        .unwrap();
    api.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].trailing_pe, Some(29.4));
    assert_eq!(rows[0].market_cap, Some(2_950_000_000_000));
    assert_eq!(rows[1].short_name.as_deref(), Some("Microsoft"));
    assert_eq!(rows[1].forward_pe, Some(31.0));
}

#[tokio::test]
async fn bulk_provider_error_wins() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(200).body(
            r#"{"quoteResponse":{"result":[{"symbol":"AAPL"}],"error":{"code":"Bad Request","description":"No data found for symbols"}}}"#,
        );
    });

    let err = get_bulk_quotes(&client, &["AAPL".into()]).await.unwrap_err();
    assert!(
        matches!(err, YfError::Provider { ref description, .. } if description == "No data found for symbols"),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.to_string(), "yahoo error: No data found for symbols");
}

#[tokio::test]
async fn bulk_cap_is_enforced_before_any_request() {
    let server = common::setup_server();
    let client = common::client(&server);
    let (cookie_mock, _crumb) = common::mock_cookie_crumb(&server);
    let api = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(200).body(r#"{"quoteResponse":{"result":[]}}"#);
    });

    let err = get_bulk_quotes(&client, &symbols(MAX_BULK_SYMBOLS + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, YfError::Validation(_)));
    assert_eq!(err.to_string(), "too many symbols: 51 (max 50)");

    let err = get_bulk_quotes(&client, &[]).await.unwrap_err();
    assert!(matches!(err, YfError::Validation(_)));

    assert_eq!(api.hits(), 0);
    assert_eq!(cookie_mock.hits(), 0);
}

#[tokio::test]
async fn bulk_accepts_exactly_fifty() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    let api = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(200).body(r#"{"quoteResponse":{"result":[],"error":null}}"#);
    });

    let rows = get_bulk_quotes(&client, &symbols(MAX_BULK_SYMBOLS))
        .await
        .unwrap();
    assert!(rows.is_empty());
    api.assert();
}
