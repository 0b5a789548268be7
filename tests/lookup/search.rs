use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::search::search;

#[tokio::test]
async fn search_sends_fixed_query_shape() {
    let server = common::setup_server();
    let client = common::client(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", "apple inc")
            .query_param("quotesCount", "10")
            .query_param("newsCount", "0")
            .query_param("enableFuzzyQuery", "false")
            .query_param("quotesQueryId", "tss_match_phrase_query");
        then.status(200).body(
            r#"{"quotes":[
                {"symbol":"AAPL","shortname":"Apple Inc.","longname":"Apple Inc.","exchange":"NMS","quoteType":"EQUITY","sector":"Technology","industry":"Consumer Electronics","score":32017.0},
                {"symbol":"APLE","shortname":"Apple Hospitality REIT","exchange":"NYQ","quoteType":"EQUITY"}
            ],"news":[]}"#,
        );
    });

    let results = search(&client, "apple inc", None).await.unwrap();
    api.assert();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].symbol, "AAPL");
    assert_eq!(results[0].long_name.as_deref(), Some("Apple Inc."));
    assert_eq!(results[0].sector.as_deref(), Some("Technology"));
    assert_eq!(results[1].long_name, None);
}

#[tokio::test]
async fn search_honors_limit() {
    let server = common::setup_server();
    let client = common::client(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("quotesCount", "3");
        then.status(200).body(r#"{"quotes":[]}"#);
    });

    let results = search(&client, "bank", Some(3)).await.unwrap();
    api.assert();
    assert!(results.is_empty());
}
