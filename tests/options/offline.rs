use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::YfError;
use yfinance_mcp::options::get_options;

const CHAIN: &str = r#"{"optionChain":{"result":[{
    "underlyingSymbol":"AAPL",
    "expirationDates":[1705622400,1706227200],
    "strikes":[180.0,185.0],
    "quote":{"regularMarketPrice":185.5},
    "options":[{
        "expirationDate":1705622400,
        "calls":[{"contractSymbol":"AAPL240119C00180000","strike":180.0,"lastPrice":6.1,"bid":6.0,"ask":6.2,"volume":1520,"openInterest":20411,"impliedVolatility":0.2451,"inTheMoney":true,"expiration":1705622400}],
        "puts":[{"contractSymbol":"AAPL240119P00185000","strike":185.0,"lastPrice":1.9,"inTheMoney":false}]
    }]
}],"error":null}}"#;

#[tokio::test]
async fn nearest_expiration_chain() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/options/AAPL")
            .query_param("crumb", "c");
        then.status(200).body(CHAIN);
    });

    let chain = get_options(&client, "AAPL", None).await.unwrap();
    api.assert();

    assert_eq!(chain.underlying_symbol, "AAPL");
    assert_eq!(chain.underlying_price, Some(185.5));
    assert_eq!(chain.expiration_dates.len(), 2);
    assert_eq!(chain.slices.len(), 1);

    let slice = &chain.slices[0];
    assert_eq!(slice.calls[0].open_interest, Some(20_411));
    assert!(slice.calls[0].in_the_money);
    assert!(!slice.puts[0].in_the_money);
    // missing per-contract expiration falls back to the slice's date
    assert_eq!(slice.puts[0].expiration, 1_705_622_400);
}

#[tokio::test]
async fn explicit_expiration_is_sent_as_date() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/options/AAPL")
            .query_param("date", "1706227200");
        then.status(200).body(CHAIN);
    });

    get_options(&client, "AAPL", Some(" 1706227200 ")).await.unwrap();
    api.assert();
}

#[tokio::test]
async fn non_numeric_expiration_is_rejected() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    let api = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/AAPL");
        then.status(200).body(CHAIN);
    });

    let err = get_options(&client, "AAPL", Some("2024-01-19"))
        .await
        .unwrap_err();

    assert!(matches!(err, YfError::Validation(_)));
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn empty_chain_is_no_data() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/XYZ");
        then.status(200)
            .body(r#"{"optionChain":{"result":[],"error":null}}"#);
    });

    let err = get_options(&client, "XYZ", None).await.unwrap_err();
    assert!(matches!(err, YfError::NoData { what: "options data", .. }));
}
