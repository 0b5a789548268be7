//! Financial statements from the fundamentals-timeseries endpoint.
//!
//! The endpoint answers with one result node per requested metric, each keyed
//! by the metric name itself. Rather than reflecting over whatever keys come
//! back, results are looked up against a fixed list of metrics per statement.

mod wire;

use std::fmt;
use std::str::FromStr;

use chrono::Utc;

use crate::core::wire::from_raw;
use crate::core::{ApiRequest, YfClient, YfError};

/// Start of the requested window (Aug 1985); Yahoo caps the answer at what it has.
const PERIOD_START: i64 = 493_590_046;

const INCOME_METRICS: &[&str] = &[
    "TotalRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "OperatingIncome",
    "NetIncome",
    "Ebitda",
    "BasicEPS",
    "DilutedEPS",
];

const BALANCE_METRICS: &[&str] = &[
    "TotalAssets",
    "TotalLiabilitiesNetMinorityInterest",
    "StockholdersEquity",
    "CashAndCashEquivalents",
    "CurrentAssets",
    "CurrentLiabilities",
    "TotalDebt",
    "NetDebt",
];

const CASHFLOW_METRICS: &[&str] = &[
    "OperatingCashFlow",
    "InvestingCashFlow",
    "FinancingCashFlow",
    "FreeCashFlow",
    "CapitalExpenditure",
];

/// Which financial statement to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Income,
    Balance,
    CashFlow,
}

impl Statement {
    fn metrics(self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_METRICS,
            Self::Balance => BALANCE_METRICS,
            Self::CashFlow => CASHFLOW_METRICS,
        }
    }

    /// Display title, e.g. `Income`.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Balance => "Balance",
            Self::CashFlow => "Cashflow",
        }
    }
}

impl FromStr for Statement {
    type Err = YfError;

    /// Case-insensitive; `cash_flow` is accepted as an alias of `cashflow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "balance" => Ok(Self::Balance),
            "cashflow" | "cash_flow" => Ok(Self::CashFlow),
            _ => Err(YfError::Validation(format!(
                "invalid statement type {s:?} (use income, balance, or cashflow)"
            ))),
        }
    }
}

/// Reporting frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Annual,
    Quarterly,
}

impl Period {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Annual => "Annual",
            Self::Quarterly => "Quarterly",
        })
    }
}

/// Full metric keys for a statement, in display order (e.g. `quarterlyNetIncome`).
pub fn metric_keys(statement: Statement, period: Period) -> Vec<String> {
    statement
        .metrics()
        .iter()
        .map(|m| format!("{}{m}", period.prefix()))
        .collect()
}

/// One reported value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialItem {
    /// `YYYY-MM-DD`.
    pub as_of_date: String,
    pub reported_value: Option<f64>,
    pub currency_code: Option<String>,
}

/// All reported values for one metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialSeries {
    /// Full key, e.g. `annualTotalRevenue`.
    pub metric: String,
    pub items: Vec<FinancialItem>,
}

impl FinancialSeries {
    /// The metric name without its `annual`/`quarterly` prefix.
    pub fn base_name(&self) -> &str {
        self.metric
            .strip_prefix("annual")
            .or_else(|| self.metric.strip_prefix("quarterly"))
            .unwrap_or(&self.metric)
    }
}

/// Fetches one financial statement for `symbol`.
///
/// Series come back in the statement's fixed metric order; metrics Yahoo has
/// no data for are omitted, so an empty vector is a valid answer.
///
/// # Errors
///
/// `YfError::Provider` when the envelope carries an error; transport, status and
/// decode errors from the request.
#[tracing::instrument(skip(client), err)]
pub async fn get_financials(
    client: &YfClient,
    symbol: &str,
    statement: Statement,
    period: Period,
) -> Result<Vec<FinancialSeries>, YfError> {
    let keys = metric_keys(statement, period);

    let req = ApiRequest::new("/ws/fundamentals-timeseries/v1/finance/timeseries")
        .segment(symbol)
        .param("symbol", symbol)
        .param("type", keys.join(","))
        .param("period1", PERIOD_START.to_string())
        .param("period2", Utc::now().timestamp().to_string())
        .with_crumb();

    let env: wire::TimeseriesEnvelope = client.get_json(&req).await?;
    let mut nodes = env.timeseries.unwrap_or_default().into_results()?;

    let mut out = Vec::new();
    for key in keys {
        let Some(values) = nodes.iter_mut().find_map(|n| n.values.remove(&key)) else {
            continue;
        };

        let points: Vec<Option<wire::TimeseriesValue>> = match serde_json::from_value(values) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(metric = %key, error = %e, "skipping malformed timeseries");
                continue;
            }
        };

        let items = points
            .into_iter()
            .flatten()
            .map(|p| FinancialItem {
                as_of_date: p.as_of_date.unwrap_or_default(),
                reported_value: from_raw(p.reported_value),
                currency_code: p.currency_code,
            })
            .collect();

        out.push(FinancialSeries { metric: key, items });
    }

    Ok(out)
}
