use crate::common;
use httpmock::Method::GET;
use yfinance_mcp::profile::get_profile;

#[tokio::test]
async fn profile_maps_asset_profile_and_quote_type() {
    let server = common::setup_server();
    let client = common::preauth_client(&server, "c");

    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("modules", "assetProfile,quoteType");
        then.status(200).body(
            r#"{"quoteSummary":{"result":[{
                "assetProfile":{
                    "address1":"One Apple Park Way","city":"Cupertino","state":"CA","zip":"95014","country":"United States",
                    "phone":"408 996 1010","website":"https://www.apple.com",
                    "sector":"Technology","sectorKey":"technology","industry":"Consumer Electronics","industryKey":"consumer-electronics",
                    "longBusinessSummary":"Apple Inc. designs, manufactures, and markets smartphones.",
                    "fullTimeEmployees":161000,
                    "companyOfficers":[{"name":"Mr. Timothy D. Cook","title":"CEO & Director","age":62,"yearBorn":1961,"totalPay":{"raw":16239562,"fmt":"16.24M"}}]
                },
                "quoteType":{"symbol":"AAPL","shortName":"Apple Inc.","longName":"Apple Inc.","quoteType":"EQUITY","exchange":"NMS"}
            }],"error":null}}"#,
        );
    });

    let p = get_profile(&client, "AAPL").await.unwrap();
    api.assert();

    let asset = p.asset.unwrap();
    assert_eq!(asset.sector_key.as_deref(), Some("technology"));
    assert_eq!(asset.full_time_employees, Some(161_000));
    assert_eq!(asset.address.city.as_deref(), Some("Cupertino"));
    assert_eq!(asset.officers.len(), 1);
    assert_eq!(asset.officers[0].total_pay, Some(16_239_562));
    assert_eq!(p.quote_type.unwrap().long_name.as_deref(), Some("Apple Inc."));
}
