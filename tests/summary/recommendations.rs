use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::YfError;
use yfinance_mcp::analysis::{RecommendationRow, get_recommendations};

#[tokio::test]
async fn recommendation_trend_rows() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/NVDA")
            .query_param("modules", "recommendationTrend")
            .query_param("crumb", "c");
        then.status(200).body(
            r#"{"quoteSummary":{"result":[{"recommendationTrend":{"trend":[
                {"period":"0m","strongBuy":12,"buy":40,"hold":6,"sell":1,"strongSell":0},
                {"period":"-1m","strongBuy":11,"buy":39,"hold":7,"sell":-2}
            ]}}],"error":null}}"#,
        );
    });

    let rows = get_recommendations(&client, "NVDA").await.unwrap();
    api.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period, "0m");
    assert_eq!(rows[0].total(), 59);
    assert_eq!(rows[0].bullish(), 52);
    assert_eq!(rows[0].bearish(), 1);
    // negative and missing counts read as zero
    assert_eq!(rows[1].sell, 0);
    assert_eq!(rows[1].strong_sell, 0);
}

#[tokio::test]
async fn recommendations_empty_result_is_no_data() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");
    server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/NVDA");
        then.status(200)
            .body(r#"{"quoteSummary":{"result":[],"error":null}}"#);
    });

    let err = get_recommendations(&client, "NVDA").await.unwrap_err();
    assert!(matches!(err, YfError::NoData { what: "data", .. }));
}

#[test]
fn row_totals_saturate_instead_of_overflowing() {
    let row = RecommendationRow {
        period: "0m".into(),
        strong_buy: u32::MAX,
        buy: 5,
        hold: 1,
        sell: u32::MAX - 1,
        strong_sell: 3,
    };
    assert_eq!(row.bullish(), u32::MAX);
    assert_eq!(row.bearish(), u32::MAX);
    assert_eq!(row.total(), u32::MAX);

    let small = RecommendationRow {
        strong_buy: 2,
        buy: 3,
        hold: 4,
        sell: 1,
        ..RecommendationRow::default()
    };
    assert_eq!(small.total(), 10);
}
