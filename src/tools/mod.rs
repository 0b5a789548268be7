//! MCP server exposing the adapters as tools.
//!
//! Each tool normalizes its arguments, calls one adapter, and renders the result
//! with [`report`]. Adapter failures come back as tool errors (`isError: true`),
//! never as protocol errors, so the model sees the message.

pub mod report;

use std::future::Future;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::schemars::JsonSchema;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, tool, tool_handler, tool_router};
use serde::Deserialize;

use crate::core::{YfClient, YfError};
use crate::fundamentals::{Period, Statement};
use crate::{analysis, fundamentals, history, market, news, options, profile, quote, search, sector};

pub const SERVER_NAME: &str = "yahoo-finance";

/* ---------------- parameters ---------------- */

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SymbolParams {
    /// Stock ticker symbol (e.g., AAPL, MSFT, GOOGL)
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChartParams {
    /// Stock ticker symbol (e.g., AAPL, MSFT, GOOGL)
    pub symbol: String,
    /// Time range: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max (default: 1mo)
    pub range: Option<String>,
    /// Data interval: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo (default: 1d)
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query (company name or ticker symbol)
    pub query: String,
    /// Maximum number of results to return (default: 10)
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FinancialsParams {
    /// Stock ticker symbol (e.g., AAPL, MSFT, GOOGL)
    pub symbol: String,
    /// Financial statement type: income, balance, or cashflow (default: income)
    pub statement: Option<String>,
    /// If true, return quarterly data instead of annual (default: false)
    pub quarterly: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OptionsParams {
    /// Stock ticker symbol (e.g., AAPL, MSFT, GOOGL)
    pub symbol: String,
    /// Expiration date as Unix timestamp (omit for nearest expiration)
    pub expiration: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NewsParams {
    /// Stock ticker symbol (e.g., AAPL, MSFT, GOOGL)
    pub symbol: String,
    /// Number of news articles to return (default: 5)
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkQuotesParams {
    /// Comma-separated stock ticker symbols, max 50 (e.g., "AAPL,MSFT,GOOGL,AMZN,TSLA")
    pub symbols: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkSparkParams {
    /// Comma-separated stock ticker symbols, max 50 (e.g., "AAPL,MSFT,GOOGL,AMZN,TSLA")
    pub symbols: String,
    /// Time range: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max (default: 1mo)
    pub range: Option<String>,
    /// Data interval: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo (default: 1d)
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SectorParams {
    /// Sector key: basic-materials, communication-services, consumer-cyclical,
    /// consumer-defensive, energy, financial-services, healthcare, industrials,
    /// real-estate, technology, utilities
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IndustryParams {
    /// Industry key in lowercase hyphenated format (e.g., consumer-electronics,
    /// semiconductors, software-application, biotechnology, banks-regional)
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MarketParams {
    /// Market region: US, GB, ASIA, EUROPE, RATES, COMMODITIES, CURRENCIES, CRYPTOCURRENCIES
    pub market: String,
}

/* ---------------- argument normalization ---------------- */

/// Trimmed and uppercased; `None` when blank.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let s = raw.trim();
    (!s.is_empty()).then(|| s.to_uppercase())
}

/// Splits a comma-separated list, dropping blank entries.
pub fn split_symbols(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_symbol).collect()
}

/// Trimmed and lowercased; `None` when blank.
pub fn normalize_key(raw: &str) -> Option<String> {
    let s = raw.trim();
    (!s.is_empty()).then(|| s.to_lowercase())
}

fn tool_error(msg: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(msg.into())])
}

/// Races `fut` against the request's cancellation token and turns the outcome
/// into a tool result. `failure` prefixes the error text.
async fn respond<T, F>(
    ctx: &RequestContext<RoleServer>,
    failure: String,
    fut: F,
    render: impl FnOnce(T) -> String,
) -> Result<CallToolResult, McpError>
where
    F: Future<Output = Result<T, YfError>>,
{
    let outcome = tokio::select! {
        () = ctx.ct.cancelled() => {
            tracing::debug!(%failure, "tool call cancelled");
            return Err(McpError::internal_error("request cancelled", None));
        }
        res = fut => res,
    };

    match outcome {
        Ok(value) => Ok(CallToolResult::success(vec![Content::text(render(value))])),
        Err(e) => {
            tracing::warn!(error = %e, "{failure}");
            Ok(tool_error(format!("{failure}: {e}")))
        }
    }
}

/* ---------------- server ---------------- */

/// Yahoo Finance tools over one shared [`YfClient`].
#[derive(Clone)]
pub struct YahooFinanceServer {
    client: YfClient,
    tool_router: ToolRouter<Self>,
}

impl YahooFinanceServer {
    pub fn new(client: YfClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub const fn client(&self) -> &YfClient {
        &self.client
    }
}

#[tool_router]
impl YahooFinanceServer {
    #[tool(
        description = "Get real-time stock quote including price, change, volume, market cap, P/E ratio, and 52-week range"
    )]
    pub async fn get_quote(
        &self,
        Parameters(p): Parameters<SymbolParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get quote for {symbol}"),
            quote::get_quote(&self.client, &symbol),
            |q| report::quote(&q),
        )
        .await
    }

    #[tool(
        description = "Get historical OHLCV (Open, High, Low, Close, Volume) chart data for a stock"
    )]
    pub async fn get_chart(
        &self,
        Parameters(p): Parameters<ChartParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get chart for {symbol}"),
            history::get_chart(
                &self.client,
                &symbol,
                p.range.as_deref(),
                p.interval.as_deref(),
            ),
            |c| report::chart(&c),
        )
        .await
    }

    #[tool(description = "Search for stock symbols and companies by name or ticker")]
    pub async fn search(
        &self,
        Parameters(p): Parameters<SearchParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let query = p.query.trim();
        if query.is_empty() {
            return Ok(tool_error("query is required"));
        }
        respond(
            &ctx,
            "Search failed".to_string(),
            search::search(&self.client, query, p.limit),
            |r| report::search(&r),
        )
        .await
    }

    #[tool(description = "Get financial statements: income statement, balance sheet, or cash flow")]
    pub async fn get_financials(
        &self,
        Parameters(p): Parameters<FinancialsParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        let failure = format!("Failed to get financials for {symbol}");
        let statement = match p.statement.as_deref().map(str::trim) {
            None | Some("") => Statement::Income,
            Some(s) => match s.parse::<Statement>() {
                Ok(st) => st,
                Err(e) => return Ok(tool_error(format!("{failure}: {e}"))),
            },
        };
        let period = if p.quarterly.unwrap_or(false) {
            Period::Quarterly
        } else {
            Period::Annual
        };

        respond(
            &ctx,
            failure,
            fundamentals::get_financials(&self.client, &symbol, statement, period),
            |series| report::financials(&symbol, statement, period, &series),
        )
        .await
    }

    #[tool(
        description = "Get options chain (calls and puts) with strike prices, volume, open interest, and implied volatility"
    )]
    pub async fn get_options(
        &self,
        Parameters(p): Parameters<OptionsParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get options for {symbol}"),
            options::get_options(&self.client, &symbol, p.expiration.as_deref()),
            |chain| report::options(&chain),
        )
        .await
    }

    #[tool(
        description = "Get analyst recommendation trends (strong buy, buy, hold, sell, strong sell)"
    )]
    pub async fn get_recommendations(
        &self,
        Parameters(p): Parameters<SymbolParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get recommendations for {symbol}"),
            analysis::get_recommendations(&self.client, &symbol),
            |rows| report::recommendations(&symbol, &rows),
        )
        .await
    }

    #[tool(description = "Get recent news articles for a stock symbol")]
    pub async fn get_news(
        &self,
        Parameters(p): Parameters<NewsParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get news for {symbol}"),
            news::get_news(&self.client, &symbol, p.count),
            |articles| report::news(&symbol, &articles),
        )
        .await
    }

    #[tool(
        description = "Get company profile: sector, industry, description, website, and key executives"
    )]
    pub async fn get_profile(
        &self,
        Parameters(p): Parameters<SymbolParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(symbol) = normalize_symbol(&p.symbol) else {
            return Ok(tool_error("symbol is required"));
        };
        respond(
            &ctx,
            format!("Failed to get profile for {symbol}"),
            profile::get_profile(&self.client, &symbol),
            |pr| report::profile(&symbol, &pr),
        )
        .await
    }

    #[tool(
        description = "Get real-time quotes for multiple stocks in a single request (max 50 symbols). More efficient than calling get_quote repeatedly."
    )]
    pub async fn get_bulk_quotes(
        &self,
        Parameters(p): Parameters<BulkQuotesParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let symbols = split_symbols(&p.symbols);
        if symbols.is_empty() {
            return Ok(tool_error("symbols is required"));
        }
        respond(
            &ctx,
            "Failed to get bulk quotes".to_string(),
            quote::get_bulk_quotes(&self.client, &symbols),
            |q| report::bulk_quotes(&q),
        )
        .await
    }

    #[tool(
        description = "Get simplified price history (close prices) for multiple stocks in a single request (max 50 symbols). Lighter than get_chart, ideal for comparing trends across symbols."
    )]
    pub async fn get_bulk_spark(
        &self,
        Parameters(p): Parameters<BulkSparkParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let symbols = split_symbols(&p.symbols);
        if symbols.is_empty() {
            return Ok(tool_error("symbols is required"));
        }
        respond(
            &ctx,
            "Failed to get bulk spark data".to_string(),
            history::get_bulk_spark(
                &self.client,
                &symbols,
                p.range.as_deref(),
                p.interval.as_deref(),
            ),
            |series| report::bulk_spark(&symbols, &series),
        )
        .await
    }

    #[tool(
        description = "Get sector overview: market cap, top companies, top ETFs, mutual funds, and list of industries (with keys). The industries list provides the keys needed for get_industry. Valid sector keys: basic-materials, communication-services, consumer-cyclical, consumer-defensive, energy, financial-services, healthcare, industrials, real-estate, technology, utilities."
    )]
    pub async fn get_sector(
        &self,
        Parameters(p): Parameters<SectorParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(key) = normalize_key(&p.key) else {
            return Ok(tool_error("key is required"));
        };
        respond(
            &ctx,
            format!("Failed to get sector {key:?}"),
            sector::get_sector(&self.client, &key),
            |s| report::sector(&s),
        )
        .await
    }

    #[tool(
        description = "Get industry overview: sector, market cap, top companies, top performing companies (with YTD returns and price targets), and top growth companies (with growth estimates). Industry keys can be discovered by calling get_sector first, which lists all industries and their keys for a given sector."
    )]
    pub async fn get_industry(
        &self,
        Parameters(p): Parameters<IndustryParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(key) = normalize_key(&p.key) else {
            return Ok(tool_error("key is required"));
        };
        respond(
            &ctx,
            format!("Failed to get industry {key:?}"),
            sector::get_industry(&self.client, &key),
            |i| report::industry(&i),
        )
        .await
    }

    #[tool(
        description = "Get market summary with index/benchmark prices, changes, and percent changes. Shows key indices like S&P 500, Dow Jones, NASDAQ, etc."
    )]
    pub async fn get_market_summary(
        &self,
        Parameters(p): Parameters<MarketParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mkt) = normalize_symbol(&p.market) else {
            return Ok(tool_error("market is required"));
        };
        respond(
            &ctx,
            format!("Failed to get market summary for {mkt}"),
            market::get_market_summary(&self.client, &mkt),
            |items| report::market_summary(&mkt, &items),
        )
        .await
    }

    #[tool(
        description = "Get market open/close times and timezone information. Useful to check if a market is currently open or when it opens/closes."
    )]
    pub async fn get_market_status(
        &self,
        Parameters(p): Parameters<MarketParams>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mkt) = normalize_symbol(&p.market) else {
            return Ok(tool_error("market is required"));
        };
        respond(
            &ctx,
            format!("Failed to get market status for {mkt}"),
            market::get_market_status(&self.client, &mkt),
            |groups| report::market_status(&mkt, &groups),
        )
        .await
    }
}

#[tool_handler]
impl ServerHandler for YahooFinanceServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Yahoo Finance".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Yahoo Finance market data: quotes, charts, search, financial statements, \
                 options, analyst recommendations, news, company profiles, sectors, \
                 industries, and market status. Use get_sector to discover industry keys."
                    .to_string(),
            ),
        }
    }
}
