use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct V10Result {
    #[serde(rename = "recommendationTrend")]
    pub(crate) recommendation_trend: Option<RecommendationTrendNode>,
}

#[derive(Deserialize)]
pub(crate) struct RecommendationTrendNode {
    pub(crate) trend: Option<Vec<RecommendationNode>>,
}

#[derive(Deserialize)]
pub(crate) struct RecommendationNode {
    pub(crate) period: Option<String>,

    #[serde(rename = "strongBuy")]
    pub(crate) strong_buy: Option<i64>,
    pub(crate) buy: Option<i64>,
    pub(crate) hold: Option<i64>,
    pub(crate) sell: Option<i64>,

    #[serde(rename = "strongSell")]
    pub(crate) strong_sell: Option<i64>,
}
