//! yfinance-mcp: Yahoo Finance as a set of Model Context Protocol tools.
//!
//! The library half is a typed Yahoo Finance client: one [`YfClient`] owns the
//! cookie/crumb session, every endpoint adapter is an `async fn(&YfClient, ..)`,
//! and a 401/403 is answered with exactly one session refresh and one retry.
//! The [`tools`] module puts an MCP server on top and renders each answer as a
//! plain-text report.
//!
//! ```no_run
//! # async fn run() -> Result<(), yfinance_mcp::YfError> {
//! let client = yfinance_mcp::YfClient::builder().build()?;
//! let quote = yfinance_mcp::quote::get_quote(&client, "AAPL").await?;
//! println!("{:?}", quote.price.and_then(|p| p.regular_market_price));
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod analysis;
pub mod fundamentals;
pub mod history;
pub mod market;
pub mod news;
pub mod options;
pub mod profile;
pub mod quote;
pub mod search;
pub mod sector;
pub mod tools;

pub use core::{ApiRequest, Session, YfClient, YfClientBuilder, YfError};
pub use fundamentals::{Period, Statement};
pub use tools::YahooFinanceServer;
