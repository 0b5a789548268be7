use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::YfError;
use yfinance_mcp::market::{MARKET_KEYS, get_market_status, get_market_summary};

#[tokio::test]
async fn market_summary_is_public() {
    let server = common::setup_server();
    let (cookie_mock, _crumb) = common::mock_cookie_crumb(&server);
    let client = common::client(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/quote/marketSummary")
            .query_param("market", "US")
            .query_param("formatted", "false")
            .query_param(
                "fields",
                "shortName,regularMarketPrice,regularMarketChange,regularMarketChangePercent",
            );
        then.status(200).body(
            r#"{"marketSummaryResponse":{"result":[
                {"symbol":"^GSPC","shortName":"S&P 500","regularMarketPrice":4783.83,"regularMarketChange":-26.33,"regularMarketChangePercent":-0.547},
                {"symbol":"^DJI","shortName":"Dow 30","regularMarketPrice":37715.04}
            ],"error":null}}"#,
        );
    });

    let items = get_market_summary(&client, "US").await.unwrap();
    api.assert();

    assert_eq!(cookie_mock.hits(), 0);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].short_name.as_deref(), Some("S&P 500"));
    assert_eq!(items[1].regular_market_change, None);
}

#[tokio::test]
async fn market_status_reads_market_times() {
    let server = common::setup_server();
    let client = common::client(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v6/finance/markettime")
            .query_param("key", "finance")
            .query_param("market", "GB");
        then.status(200).body(
            r#"{"finance":{"marketTimes":[{"marketTime":[{
                "id":"gb","name":"U.K.","status":"closed","message":"U.K. markets closed",
                "open":"2024-01-03T08:00:00Z","close":"2024-01-03T16:30:00Z",
                "timezone":[{"gmtoffset":"0","short":"GMT"}]
            }]}],"error":null}}"#,
        );
    });

    let groups = get_market_status(&client, "GB").await.unwrap();
    api.assert();

    let mt = &groups[0].market_time[0];
    assert_eq!(mt.id, "gb");
    assert_eq!(mt.status.as_deref(), Some("closed"));
    assert_eq!(mt.timezone[0].short.as_deref(), Some("GMT"));
}

#[tokio::test]
async fn market_status_provider_error() {
    let server = common::setup_server();
    let client = common::client(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v6/finance/markettime");
        then.status(200).body(
            r#"{"finance":{"result":null,"error":{"code":"Bad Request","description":"Invalid market"}}}"#,
        );
    });

    let err = get_market_status(&client, "US").await.unwrap_err();
    assert!(matches!(err, YfError::Provider { .. }));
}

#[tokio::test]
async fn unknown_market_is_rejected() {
    let server = common::setup_server();
    let client = common::client(&server);
    let api = server.mock(|when, then| {
        when.method(GET).path("/v6/finance/quote/marketSummary");
        then.status(200).body("{}");
    });

    let err = get_market_summary(&client, "us").await.unwrap_err();
    assert!(matches!(err, YfError::Validation(_)));
    let err = get_market_status(&client, "MARS").await.unwrap_err();
    assert!(err.to_string().contains("CRYPTOCURRENCIES"));

    assert_eq!(api.hits(), 0);
    assert_eq!(MARKET_KEYS.len(), 8);
}

#[tokio::test]
async fn market_status_keeps_aux_base_path_prefix() {
    let server = common::setup_server();
    let client = common::builder(&server)
        .aux_base(common::url(&server, "/aux/"))
        .build()
        .unwrap();

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/aux/v6/finance/markettime")
            .query_param("market", "GB");
        then.status(200)
            .body(r#"{"finance":{"marketTimes":[],"error":null}}"#);
    });

    get_market_status(&client, "GB").await.unwrap();
    api.assert();
}
