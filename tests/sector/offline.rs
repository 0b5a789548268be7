use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::YfError;
use yfinance_mcp::sector::{SECTOR_KEYS, get_industry, get_sector};

#[tokio::test]
async fn sector_overview_decodes_raw_values() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/sectors/technology")
            .query_param("formatted", "true")
            .query_param("withReturns", "true")
            .query_param("lang", "en-US")
            .query_param("region", "US")
            .query_param("crumb", "c");
        then.status(200).body(
            r#"{"data":{
                "name":"Technology","symbol":"^YH311",
                "overview":{"companiesCount":815,"industriesCount":12,
                    "marketCap":{"raw":2.1e13,"fmt":"21T"},"marketWeight":{"raw":0.2938,"fmt":"29.38%"},
                    "employeeCount":{"raw":5500000,"fmt":"5.5M"},"description":"Technology companies."},
                "topCompanies":[{"symbol":"AAPL","name":"Apple Inc.","marketWeight":{"raw":0.1587}}],
                "topETFs":[{"symbol":"XLK","name":"Technology Select Sector SPDR"}],
                "topMutualFunds":[{"symbol":"FSPTX","name":"Fidelity Select Technology"}],
                "industries":[{"key":"semiconductors","name":"Semiconductors","symbol":"^YH31130020","marketWeight":{"raw":0.2917}}]
            }}"#,
        );
    });

    let s = get_sector(&client, "technology").await.unwrap();
    api.assert();

    assert_eq!(s.name, "Technology");
    assert_eq!(s.overview.companies_count, Some(815));
    assert_eq!(s.overview.market_cap, Some(2.1e13));
    assert_eq!(s.overview.market_weight, Some(0.2938));
    assert_eq!(s.top_companies[0].market_weight, Some(0.1587));
    assert_eq!(s.top_etfs[0].symbol, "XLK");
    assert_eq!(s.top_mutual_funds.len(), 1);
    assert_eq!(s.industries[0].key, "semiconductors");
}

#[tokio::test]
async fn unknown_sector_key_is_rejected_without_request() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    let api = server.mock(|when, then| {
        when.method(GET).path_includes("/v1/finance/sectors/");
        then.status(200).body(r#"{"data":{}}"#);
    });

    let err = get_sector(&client, "tech").await.unwrap_err();
    assert!(matches!(err, YfError::Validation(_)));
    assert!(err.to_string().contains("basic-materials"));
    assert_eq!(api.hits(), 0);
    assert_eq!(SECTOR_KEYS.len(), 11);
}

#[tokio::test]
async fn industry_decodes_top_lists() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/industries/semiconductors")
            .query_param("withReturns", "true");
        then.status(200).body(
            r#"{"data":{
                "name":"Semiconductors","sectorKey":"technology","sectorName":"Technology",
                "overview":{"companiesCount":70,"marketCap":{"raw":6.0e12}},
                "topCompanies":[{"symbol":"NVDA","name":"NVIDIA Corporation","marketWeight":{"raw":0.45}}],
                "topPerformingCompanies":[{"symbol":"SMCI","name":"Super Micro Computer, Inc.","ytdReturn":{"raw":2.5},"lastPrice":{"raw":880.1},"targetPrice":{"raw":950.0}}],
                "topGrowthCompanies":[{"symbol":"NVDA","name":"NVIDIA Corporation","ytdReturn":{"raw":0.8},"growthEstimate":{"raw":1.12}}]
            }}"#,
        );
    });

    let ind = get_industry(&client, "semiconductors").await.unwrap();
    api.assert();

    assert_eq!(ind.sector_key.as_deref(), Some("technology"));
    assert_eq!(ind.overview.companies_count, Some(70));
    assert_eq!(ind.top_performing_companies[0].target_price, Some(950.0));
    assert_eq!(ind.top_growth_companies[0].growth_estimate, Some(1.12));
}

#[tokio::test]
async fn missing_data_object_is_no_data() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    server.mock(|when, then| {
        when.method(GET).path("/v1/finance/industries/made-up");
        then.status(200).body(r#"{"meta":{}}"#);
    });

    let err = get_industry(&client, "made-up").await.unwrap_err();
    assert!(matches!(err, YfError::NoData { what: "industry data", .. }));
}

#[tokio::test]
async fn empty_industry_key_is_rejected() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    let err = get_industry(&client, "").await.unwrap_err();
    assert_eq!(err.to_string(), "key is required");
}
