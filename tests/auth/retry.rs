use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::{ApiRequest, YfError};

const QUOTE_BODY: &str = r#"{"quoteSummary":{"result":[{"price":{"symbol":"AAPL","regularMarketPrice":{"raw":190.5,"fmt":"190.50"}}}],"error":null}}"#;

#[tokio::test]
async fn rejected_crumb_refreshes_and_retries_once() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "stale");

    let stale = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("crumb", "stale");
        then.status(401).body(r#"{"finance":{"error":{"code":"Unauthorized","description":"Invalid Crumb"}}}"#);
    });
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb_with(&server, "fresh");
    let fresh = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("modules", "price,summaryDetail")
            .query_param("crumb", "fresh");
        then.status(200).body(QUOTE_BODY);
    });

    let q = yfinance_mcp::quote::get_quote(&client, "AAPL").await.unwrap();

    assert_eq!(stale.hits(), 1);
    assert_eq!(fresh.hits(), 1);
    cookie_mock.assert();
    crumb_mock.assert();
    assert_eq!(q.price.unwrap().regular_market_price, Some(190.5));
    assert_eq!(client.session().crumb().await.as_deref(), Some("fresh"));
    assert_eq!(client.session().generation(), 2);
}

#[tokio::test]
async fn second_rejection_is_final() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "stale");
    let (_cookie, crumb_mock) = common::mock_cookie_crumb_with(&server, "fresh");

    let api = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/TSLA");
        then.status(403).body("Forbidden");
    });

    let err = yfinance_mcp::options::get_options(&client, "TSLA", None)
        .await
        .unwrap_err();

    match err {
        YfError::Status { status, url, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
            assert!(!url.contains("crumb"), "crumb leaked into error url: {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(api.hits(), 2);
    assert_eq!(crumb_mock.hits(), 1);
}

#[tokio::test]
async fn public_request_is_retried_after_refresh() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);

    let chart = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(401).body("Unauthorized");
    });

    let client = common::client(&server);
    let err = yfinance_mcp::history::get_chart(&client, "AAPL", None, None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(chart.hits(), 2);
    cookie_mock.assert();
    crumb_mock.assert();
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);

    let api = server.mock(|when, then| {
        when.method(GET).path("/v1/finance/search");
        then.status(500).body("boom");
    });

    let client = common::client(&server);
    let err = yfinance_mcp::search::search(&client, "apple", None)
        .await
        .unwrap_err();

    assert!(
        matches!(err, YfError::Status { status: 500, ref body, .. } if body == "boom"),
        "unexpected error: {err:?}"
    );
    assert_eq!(api.hits(), 1);
    assert_eq!(cookie_mock.hits(), 0);
    assert_eq!(crumb_mock.hits(), 0);
}

#[tokio::test]
async fn failed_reauth_drops_the_stale_crumb() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "stale");

    let api = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/AAPL");
        then.status(401);
    });
    server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(404);
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(500);
    });

    let err = yfinance_mcp::quote::get_quote(&client, "AAPL")
        .await
        .unwrap_err();

    match err {
        YfError::Reauth(inner) => assert!(matches!(*inner, YfError::Crumb { status: 500 })),
        other => panic!("expected Reauth, got {other:?}"),
    }
    assert_eq!(api.hits(), 1);
    assert_eq!(crumb_mock.hits(), 1);
    assert!(!client.session().is_authenticated().await);
}

#[tokio::test]
async fn descriptor_is_untouched_by_retry() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "stale");

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/data")
            .query_param("crumb", "stale");
        then.status(401);
    });
    common::mock_cookie_crumb_with(&server, "xyz");
    let fresh = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/data")
            .query_param("a", "1")
            .query_param("crumb", "xyz");
        then.status(200).body(r#"{"data":"ok"}"#);
    });

    let req = ApiRequest::new("/v1/data").param("a", "1").with_crumb();
    let body: serde_json::Value = client.get_json(&req).await.unwrap();

    fresh.assert();
    assert_eq!(body["data"], "ok");
    assert_eq!(req.params().len(), 1);
    assert!(!req.params().contains_key("crumb"));
}
