use std::collections::HashMap;

use serde::Deserialize;

use crate::core::wire::{Envelope, RawNum};

#[derive(Deserialize)]
pub(crate) struct TimeseriesEnvelope {
    pub(crate) timeseries: Option<Envelope<TimeseriesData>>,
}

/// One result node: `meta`, `timestamp` and a single key named after the
/// requested metric, e.g. `annualTotalRevenue`.
#[derive(Deserialize)]
pub(crate) struct TimeseriesData {
    #[serde(flatten)]
    pub(crate) values: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesValue {
    #[serde(rename = "asOfDate")]
    pub(crate) as_of_date: Option<String>,
    #[serde(rename = "reportedValue")]
    pub(crate) reported_value: Option<RawNum<f64>>,
    #[serde(rename = "currencyCode")]
    pub(crate) currency_code: Option<String>,
}
