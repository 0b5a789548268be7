use serde::Deserialize;

/// Metadata block of a chart response.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    /// Interval actually served, e.g. `1d`.
    pub data_granularity: Option<String>,
    pub range: Option<String>,
    #[serde(default)]
    pub valid_ranges: Vec<String>,
}

/// Column-oriented OHLCV values. Entries are `None` where Yahoo has a gap.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OhlcvColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AdjCloseColumn {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<OhlcvColumns>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseColumn>,
}

/// One symbol's chart: timestamps (Unix seconds) aligned with the indicator columns.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Chart {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(rename = "timestamp", default)]
    pub timestamps: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

/// Close-only series for one symbol from the spark endpoint.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SparkSeries {
    pub symbol: Option<String>,
    #[serde(rename = "timestamp", default)]
    pub timestamps: Vec<i64>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    pub chart_previous_close: Option<f64>,
    /// Seconds between points.
    pub data_granularity: Option<i64>,
}
