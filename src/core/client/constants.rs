//! Centralized constants for default endpoints and the UA pool.

use rand::Rng;

/// Desktop browser UAs; one is picked per request to avoid trivial bot blocking.
pub const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

/// Main data host (query2). Paths such as `/v7/finance/quote` are joined onto it.
pub(crate) const DEFAULT_API_BASE: &str = "https://query2.finance.yahoo.com";

/// Secondary data host (query1), used by the sector, industry and market endpoints.
pub(crate) const DEFAULT_AUX_BASE: &str = "https://query1.finance.yahoo.com";

/// Bootstrap URL whose only purpose is to hand out session cookies (answers 404).
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";

/// URL to fetch a crumb (requires the cookies from `DEFAULT_COOKIE_URL`).
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query2.finance.yahoo.com/v1/test/getcrumb";

/// Picks one entry of [`USER_AGENTS`] at random.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS[rand::thread_rng().gen_range(0..USER_AGENTS.len())]
}
