//! Analyst recommendation trends.

mod wire;

use crate::core::quotesummary::fetch_modules;
use crate::core::{YfClient, YfError};

/// Analyst counts for one period; `0m` is the current month, `-1m` the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRow {
    pub period: String,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
}

impl RecommendationRow {
    /// Number of analysts counted in this period.
    pub const fn total(&self) -> u32 {
        self.bullish()
            .saturating_add(self.hold)
            .saturating_add(self.bearish())
    }

    /// Strong buy plus buy.
    pub const fn bullish(&self) -> u32 {
        self.strong_buy.saturating_add(self.buy)
    }

    /// Sell plus strong sell.
    pub const fn bearish(&self) -> u32 {
        self.sell.saturating_add(self.strong_sell)
    }
}

fn count(v: Option<i64>) -> u32 {
    u32::try_from(v.unwrap_or(0)).unwrap_or(0)
}

/// Fetches recommendation trends, most recent period first.
///
/// # Errors
///
/// `YfError::Provider` for a provider error, `YfError::NoData` when the
/// result list is empty.
#[tracing::instrument(skip(client), err)]
pub async fn get_recommendations(
    client: &YfClient,
    symbol: &str,
) -> Result<Vec<RecommendationRow>, YfError> {
    let root: wire::V10Result = fetch_modules(client, symbol, "recommendationTrend").await?;

    let trend = root
        .recommendation_trend
        .and_then(|x| x.trend)
        .unwrap_or_default();

    let rows = trend
        .into_iter()
        .map(|n| RecommendationRow {
            period: n.period.unwrap_or_default(),
            strong_buy: count(n.strong_buy),
            buy: count(n.buy),
            hold: count(n.hold),
            sell: count(n.sell),
            strong_sell: count(n.strong_sell),
        })
        .collect();

    Ok(rows)
}
