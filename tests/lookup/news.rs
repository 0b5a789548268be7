use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::news::get_news;

#[tokio::test]
async fn news_defaults_to_five_articles() {
    let server = common::setup_server();
    let client = common::client(&server);

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("q", "TSLA")
            .query_param("quotesCount", "0")
            .query_param("newsCount", "5");
        then.status(200).body(
            r#"{"quotes":[],"news":[
                {"uuid":"a1","title":"Tesla deliveries beat","publisher":"Reuters","link":"https://example.com/a1","providerPublishTime":1704205800},
                {"uuid":"b2","title":"EV price war"}
            ]}"#,
        );
    });

    let articles = get_news(&client, "TSLA", None).await.unwrap();
    api.assert();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].publisher.as_deref(), Some("Reuters"));
    assert_eq!(articles[0].provider_publish_time, Some(1_704_205_800));
    assert_eq!(articles[1].link, None);
}

#[tokio::test]
async fn news_missing_list_is_empty() {
    let server = common::setup_server();
    let client = common::client(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("newsCount", "2");
        then.status(200).body(r#"{"quotes":[]}"#);
    });

    let articles = get_news(&client, "TSLA", Some(2)).await.unwrap();
    assert!(articles.is_empty());
}
