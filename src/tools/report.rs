//! Plain-text renderings of adapter results, sized for a model's context window.
//!
//! Long series are sampled down to a fixed number of rows and top lists are
//! capped. Timestamps are shown in UTC.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use chrono::DateTime;

use crate::analysis::RecommendationRow;
use crate::fundamentals::{FinancialSeries, Period, Statement};
use crate::history::{Chart, SparkSeries};
use crate::market::{MarketSummaryItem, MarketTimeGroup};
use crate::news::NewsArticle;
use crate::options::{OptionChain, OptionContract};
use crate::profile::Profile;
use crate::quote::{BulkQuote, QuoteSummary};
use crate::search::SearchQuote;
use crate::sector::{Industry, Overview, Sector, TopCompany};

pub const MAX_CHART_ROWS: usize = 100;
pub const MAX_SPARK_ROWS: usize = 50;
pub const MAX_CONTRACTS_PER_SIDE: usize = 25;
pub const MAX_TOP_ENTRIES: usize = 10;
pub const MAX_EXECUTIVES: usize = 5;
const MAX_LISTED_EXPIRATIONS: usize = 6;

/* ---------------- helpers ---------------- */

fn render(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = f(&mut out);
    out
}

fn currency_symbol(currency: Option<&str>) -> &'static str {
    match currency {
        Some("EUR") => "\u{20ac}",
        Some("GBP" | "GBp") => "\u{a3}",
        Some("JPY") => "\u{a5}",
        Some("CHF") => "CHF ",
        Some("SEK") => "SEK ",
        Some("NOK") => "NOK ",
        Some("DKK") => "DKK ",
        Some("CAD") => "C$",
        Some("AUD") => "A$",
        _ => "$",
    }
}

/// `1234.5` in `EUR` renders as `€1234.50`; unknown currencies get `$`.
pub fn fmt_price(val: Option<f64>, currency: Option<&str>) -> String {
    val.map_or_else(
        || "N/A".to_string(),
        |v| format!("{}{v:.2}", currency_symbol(currency)),
    )
}

/// Thousands separators: `-1234567` renders as `-1,234,567`.
pub fn fmt_int(val: i64) -> String {
    let digits = val.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if val < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact dollar amounts: `2.5e12` renders as `$2.50T`, `-3.2e6` as `-$3.20M`.
pub fn fmt_large_number(val: f64) -> String {
    let (sign, abs) = if val < 0.0 { ("-", -val) } else { ("", val) };
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };
    format!("{sign}${scaled:.2}{suffix}")
}

/// Splits a CamelCase metric name into words, keeping acronyms together:
/// `TotalRevenue` renders as `Total Revenue`, `BasicEPS` as `Basic EPS`.
pub fn add_spaces(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if !prev.is_ascii_uppercase() || next_lower {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

fn sign(v: f64) -> &'static str {
    if v < 0.0 { "" } else { "+" }
}

fn utc(ts: i64, pattern: &str) -> String {
    DateTime::from_timestamp(ts, 0)
        .map_or_else(|| ts.to_string(), |dt| dt.format(pattern).to_string())
}

/// Cuts `s` to `max` characters, marking the cut with `..`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(2)).collect();
        out.push_str("..");
        out
    }
}

/// Row indices that keep at most `cap` evenly spaced rows out of `total`.
fn sample(total: usize, cap: usize) -> impl Iterator<Item = usize> {
    let step = total.div_ceil(cap).max(1);
    (0..total).step_by(step)
}

fn opt_num(vals: &[Option<f64>], i: usize) -> String {
    vals.get(i)
        .copied()
        .flatten()
        .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

fn granularity(secs: i64) -> String {
    if secs >= 86_400 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

fn weight(w: Option<f64>) -> String {
    w.filter(|v| *v > 0.0)
        .map(|v| format!(" ({:.2}%)", v * 100.0))
        .unwrap_or_default()
}

/* ---------------- quotes ---------------- */

pub fn quote(q: &QuoteSummary) -> String {
    let Some(price) = &q.price else {
        return "No price data available".to_string();
    };
    let cur = price.currency.as_deref();
    let opt = |s: &Option<String>| s.clone().unwrap_or_default();

    render(|b| {
        let name = price.long_name.as_ref().or(price.short_name.as_ref());
        writeln!(b, "=== {} ({}) ===", price.symbol, name.map_or("", String::as_str))?;
        writeln!(
            b,
            "Exchange: {} | Currency: {} | Market: {}\n",
            opt(&price.exchange_name),
            opt(&price.currency),
            opt(&price.market_state)
        )?;

        writeln!(b, "Price:           {}", fmt_price(price.regular_market_price, cur))?;
        let chg = price.regular_market_change.unwrap_or(0.0);
        let pct = price.regular_market_change_percent.unwrap_or(0.0);
        let s = sign(chg);
        writeln!(b, "Change:          {s}{chg:.2} ({s}{pct:.2}%)")?;
        writeln!(b, "Volume:          {}", fmt_int(price.regular_market_volume.unwrap_or(0)))?;
        if let Some(cap) = price.market_cap.filter(|c| *c > 0) {
            #[allow(clippy::cast_precision_loss)]
            let cap = cap as f64;
            writeln!(b, "Market Cap:      {}", fmt_large_number(cap))?;
        }
        writeln!(b, "Open:            {}", fmt_price(price.regular_market_open, cur))?;
        writeln!(b, "Day High:        {}", fmt_price(price.regular_market_day_high, cur))?;
        writeln!(b, "Day Low:         {}", fmt_price(price.regular_market_day_low, cur))?;
        writeln!(
            b,
            "Previous Close:  {}",
            fmt_price(price.regular_market_previous_close, cur)
        )?;

        if let Some(d) = &q.detail {
            let pos = |v: Option<f64>| v.filter(|x| *x > 0.0);
            if let Some(v) = pos(d.trailing_pe) {
                writeln!(b, "P/E Ratio:       {v:.2}")?;
            }
            if let Some(v) = pos(d.forward_pe) {
                writeln!(b, "Forward P/E:     {v:.2}")?;
            }
            if pos(d.fifty_two_week_low).is_some() || pos(d.fifty_two_week_high).is_some() {
                writeln!(
                    b,
                    "52-Week Range:   {} - {}",
                    fmt_price(d.fifty_two_week_low, cur),
                    fmt_price(d.fifty_two_week_high, cur)
                )?;
            }
            if let Some(v) = pos(d.dividend_yield) {
                writeln!(b, "Dividend Yield:  {:.2}%", v * 100.0)?;
            }
            if let Some(v) = pos(d.beta) {
                writeln!(b, "Beta:            {v:.2}")?;
            }
            if let Some(v) = pos(d.fifty_day_average) {
                writeln!(b, "50-Day Avg:      {}", fmt_price(Some(v), cur))?;
            }
            if let Some(v) = pos(d.two_hundred_day_average) {
                writeln!(b, "200-Day Avg:     {}", fmt_price(Some(v), cur))?;
            }
        }

        let extended = match price.market_state.as_deref() {
            Some("PRE") => Some((
                "Pre-Market",
                price.pre_market_price,
                price.pre_market_change,
                price.pre_market_change_percent,
            )),
            Some("POST") => Some((
                "Post-Market",
                price.post_market_price,
                price.post_market_change,
                price.post_market_change_percent,
            )),
            _ => None,
        };
        if let Some((label, Some(px), chg, pct)) = extended
            && px > 0.0
        {
            writeln!(b, "\n--- {label} ---")?;
            writeln!(
                b,
                "Price:  {} ({:.2}, {:.2}%)",
                fmt_price(Some(px), cur),
                chg.unwrap_or(0.0),
                pct.unwrap_or(0.0)
            )?;
        }
        Ok(())
    })
}

pub fn bulk_quotes(quotes: &[BulkQuote]) -> String {
    if quotes.is_empty() {
        return "No quotes returned".to_string();
    }

    render(|b| {
        writeln!(b, "=== Bulk Quotes ({} symbols) ===\n", quotes.len())?;
        writeln!(
            b,
            "{:<8} {:<25} {:>10} {:>10} {:>8} {:>14} {:>12}",
            "Symbol", "Name", "Price", "Change", "Chg%", "Volume", "Mkt Cap"
        )?;
        writeln!(b, "{}", "-".repeat(95))?;

        for q in quotes {
            let name = q.long_name.as_deref().or(q.short_name.as_deref()).unwrap_or("");
            let chg = q.regular_market_change.unwrap_or(0.0);
            let s = sign(chg);
            #[allow(clippy::cast_precision_loss)]
            let cap = q.market_cap.unwrap_or(0) as f64;
            writeln!(
                b,
                "{:<8} {:<25} {:>10.2} {s}{:>9.2} {s}{:>6.2}% {:>14} {:>12}",
                q.symbol,
                truncate(name, 24),
                q.regular_market_price.unwrap_or(0.0),
                chg,
                q.regular_market_change_percent.unwrap_or(0.0),
                fmt_int(q.regular_market_volume.unwrap_or(0)),
                fmt_large_number(cap),
            )?;
        }
        Ok(())
    })
}

/* ---------------- history ---------------- */

pub fn chart(c: &Chart) -> String {
    let opt = |s: &Option<String>| s.clone().unwrap_or_default();
    render(|b| {
        writeln!(b, "=== {} Chart Data ===", opt(&c.meta.symbol))?;
        writeln!(
            b,
            "Exchange: {} | Currency: {}",
            opt(&c.meta.exchange_name),
            opt(&c.meta.currency)
        )?;
        writeln!(
            b,
            "Range: {} | Interval: {}\n",
            opt(&c.meta.range),
            opt(&c.meta.data_granularity)
        )?;

        let Some(q) = c.indicators.quote.first() else {
            return writeln!(b, "No data points available");
        };
        if c.timestamps.is_empty() {
            return writeln!(b, "No data points available");
        }

        writeln!(
            b,
            "{:<20} {:>10} {:>10} {:>10} {:>10} {:>12}",
            "Date", "Open", "High", "Low", "Close", "Volume"
        )?;
        writeln!(b, "{}", "-".repeat(82))?;

        let total = c.timestamps.len();
        let mut shown = 0;
        for i in sample(total, MAX_CHART_ROWS) {
            let vol = q
                .volume
                .get(i)
                .copied()
                .flatten()
                .map_or_else(|| "N/A".to_string(), fmt_int);
            writeln!(
                b,
                "{:<20} {:>10} {:>10} {:>10} {:>10} {:>12}",
                utc(c.timestamps[i], "%Y-%m-%d %H:%M"),
                opt_num(&q.open, i),
                opt_num(&q.high, i),
                opt_num(&q.low, i),
                opt_num(&q.close, i),
                vol
            )?;
            shown += 1;
        }
        writeln!(b, "\nShowing {shown} of {total} data points")
    })
}

/// Renders spark series in the caller's symbol order; symbols missing from
/// the response are listed as such.
pub fn bulk_spark(order: &[String], series: &HashMap<String, SparkSeries>) -> String {
    if series.is_empty() {
        return "No spark data returned".to_string();
    }

    render(|b| {
        writeln!(b, "=== Bulk Price History ({} symbols) ===", series.len())?;

        for sym in order {
            let Some(s) = series.get(sym) else {
                writeln!(b, "\n--- {sym}: no data ---")?;
                continue;
            };

            let interval = s
                .data_granularity
                .map_or_else(|| "?".to_string(), granularity);
            writeln!(
                b,
                "\n--- {} (interval: {interval}) ---",
                s.symbol.as_deref().unwrap_or(sym)
            )?;
            let prev = s.chart_previous_close.filter(|p| *p > 0.0);
            if let Some(p) = prev {
                writeln!(b, "Previous Close: {p:.2}")?;
            }

            let total = s.timestamps.len();
            if total == 0 {
                writeln!(b, "No data points")?;
                continue;
            }

            writeln!(b, "{:<20} {:>10} {:>10}", "Date", "Close", "Change%")?;
            let mut shown = 0;
            for i in sample(total, MAX_SPARK_ROWS) {
                let date = utc(s.timestamps[i], "%Y-%m-%d %H:%M");
                match s.close.get(i).copied().flatten() {
                    Some(close) => {
                        let pct = prev.map_or(0.0, |p| (close - p) / p * 100.0);
                        writeln!(b, "{date:<20} {close:>10.2} {}{pct:>8.2}%", sign(pct))?;
                    }
                    None => writeln!(b, "{date:<20} {:>10} {:>10}", "N/A", "N/A")?,
                }
                shown += 1;
            }
            writeln!(b, "({shown} of {total} data points)")?;
        }
        Ok(())
    })
}

/* ---------------- search & news ---------------- */

pub fn search(results: &[SearchQuote]) -> String {
    if results.is_empty() {
        return "No results found".to_string();
    }

    render(|b| {
        writeln!(b, "=== Search Results ({}) ===\n", results.len())?;
        for (i, q) in results.iter().enumerate() {
            let name = q.long_name.as_deref().or(q.short_name.as_deref()).unwrap_or("");
            writeln!(b, "{}. {} - {name}", i + 1, q.symbol)?;
            writeln!(
                b,
                "   Exchange: {} | Type: {}",
                q.exchange.as_deref().unwrap_or(""),
                q.quote_type.as_deref().unwrap_or("")
            )?;
            if let Some(sector) = q.sector.as_deref().filter(|s| !s.is_empty()) {
                writeln!(
                    b,
                    "   Sector: {sector} | Industry: {}",
                    q.industry.as_deref().unwrap_or("")
                )?;
            }
            if i + 1 < results.len() {
                writeln!(b)?;
            }
        }
        Ok(())
    })
}

pub fn news(symbol: &str, articles: &[NewsArticle]) -> String {
    render(|b| {
        writeln!(b, "=== {symbol} Recent News ===\n")?;
        if articles.is_empty() {
            return writeln!(b, "No recent news found");
        }

        for (i, n) in articles.iter().enumerate() {
            writeln!(b, "{}. {}", i + 1, n.title)?;
            let when = n
                .provider_publish_time
                .map_or_else(|| "unknown time".to_string(), |t| utc(t, "%Y-%m-%d %H:%M UTC"));
            writeln!(
                b,
                "   Publisher: {} | {when}",
                n.publisher.as_deref().unwrap_or("")
            )?;
            if let Some(link) = n.link.as_deref().filter(|l| !l.is_empty()) {
                writeln!(b, "   Link: {link}")?;
            }
            if i + 1 < articles.len() {
                writeln!(b)?;
            }
        }
        Ok(())
    })
}

/* ---------------- fundamentals ---------------- */

pub fn financials(
    symbol: &str,
    statement: Statement,
    period: Period,
    series: &[FinancialSeries],
) -> String {
    render(|b| {
        writeln!(
            b,
            "=== {symbol} {period} Financial Data ({}) ===\n",
            statement.title()
        )?;
        if series.is_empty() {
            return writeln!(b, "No financial data available");
        }

        for s in series {
            writeln!(b, "{}:", add_spaces(s.base_name()))?;
            for item in &s.items {
                let value = item
                    .reported_value
                    .map_or_else(|| "N/A".to_string(), fmt_large_number);
                writeln!(
                    b,
                    "  {}: {value} {}",
                    item.as_of_date,
                    item.currency_code.as_deref().unwrap_or("")
                )?;
            }
            writeln!(b)?;
        }
        Ok(())
    })
}

/* ---------------- options ---------------- */

fn contract_side(b: &mut String, label: &str, exp: &str, side: &[OptionContract]) -> fmt::Result {
    writeln!(b, "\n--- {label} (Exp: {exp}) ---")?;
    writeln!(
        b,
        "{:<10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "Strike", "Last", "Bid", "Ask", "Volume", "OI", "IV"
    )?;
    writeln!(b, "{}", "-".repeat(78))?;

    for c in side.iter().take(MAX_CONTRACTS_PER_SIDE) {
        let strike = format!("{:.2}{}", c.strike, if c.in_the_money { "*" } else { "" });
        writeln!(
            b,
            "{strike:<10} {:>10.2} {:>10.2} {:>10.2} {:>10} {:>10} {:>7.1}%",
            c.last_price.unwrap_or(0.0),
            c.bid.unwrap_or(0.0),
            c.ask.unwrap_or(0.0),
            c.volume.unwrap_or(0),
            c.open_interest.unwrap_or(0),
            c.implied_volatility.unwrap_or(0.0) * 100.0
        )?;
    }
    if side.len() > MAX_CONTRACTS_PER_SIDE {
        writeln!(b, "... and {} more contracts", side.len() - MAX_CONTRACTS_PER_SIDE)?;
    }
    Ok(())
}

pub fn options(chain: &OptionChain) -> String {
    render(|b| {
        writeln!(b, "=== {} Options Chain ===", chain.underlying_symbol)?;
        writeln!(
            b,
            "Underlying Price: ${:.2}",
            chain.underlying_price.unwrap_or(0.0)
        )?;

        if !chain.expiration_dates.is_empty() {
            let listed: Vec<String> = chain
                .expiration_dates
                .iter()
                .take(MAX_LISTED_EXPIRATIONS)
                .map(|d| utc(*d, "%Y-%m-%d"))
                .collect();
            write!(b, "Available Expirations: {}", listed.join(", "))?;
            if chain.expiration_dates.len() > MAX_LISTED_EXPIRATIONS {
                write!(
                    b,
                    "... and {} more",
                    chain.expiration_dates.len() - MAX_LISTED_EXPIRATIONS
                )?;
            }
            writeln!(b)?;
        }

        let Some(slice) = chain.slices.first() else {
            return writeln!(b, "\nNo options data available");
        };

        let exp = utc(slice.expiration_date, "%Y-%m-%d");
        contract_side(b, "CALLS", &exp, &slice.calls)?;
        contract_side(b, "PUTS", &exp, &slice.puts)?;
        writeln!(b, "\n* = In the money")
    })
}

/* ---------------- analysis & profile ---------------- */

pub fn recommendations(symbol: &str, rows: &[RecommendationRow]) -> String {
    render(|b| {
        writeln!(b, "=== {symbol} Analyst Recommendations ===\n")?;
        if rows.is_empty() {
            return writeln!(b, "No recommendation data available");
        }

        writeln!(
            b,
            "{:<12} {:>10} {:>6} {:>6} {:>6} {:>11} {:>6}",
            "Period", "Strong Buy", "Buy", "Hold", "Sell", "Strong Sell", "Total"
        )?;
        writeln!(b, "{}", "-".repeat(63))?;
        for r in rows {
            writeln!(
                b,
                "{:<12} {:>10} {:>6} {:>6} {:>6} {:>11} {:>6}",
                r.period,
                r.strong_buy,
                r.buy,
                r.hold,
                r.sell,
                r.strong_sell,
                r.total()
            )?;
        }

        if let Some(cur) = rows.first().filter(|r| r.total() > 0) {
            writeln!(
                b,
                "\nCurrent consensus ({}): {} bullish, {} neutral, {} bearish out of {} analysts",
                cur.period,
                cur.bullish(),
                cur.hold,
                cur.bearish(),
                cur.total()
            )?;
        }
        Ok(())
    })
}

pub fn profile(symbol: &str, p: &Profile) -> String {
    let name = p
        .quote_type
        .as_ref()
        .and_then(|q| q.long_name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or(symbol);

    render(|b| {
        writeln!(b, "=== {name} ({symbol}) Company Profile ===\n")?;
        let Some(a) = &p.asset else {
            return writeln!(b, "No profile data available");
        };

        let fields = [
            ("Sector:     ", &a.sector),
            ("Industry:   ", &a.industry),
            ("Website:    ", &a.website),
            ("Phone:      ", &a.phone),
        ];
        for (label, value) in fields {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                writeln!(b, "{label}{v}")?;
            }
        }
        if let Some(n) = a.full_time_employees.filter(|n| *n > 0) {
            writeln!(b, "Employees:  {}", fmt_int(i64::try_from(n).unwrap_or(i64::MAX)))?;
        }
        if let Some(loc) = a.address.one_line() {
            writeln!(b, "Location:   {loc}")?;
        }

        if let Some(summary) = a.summary.as_deref().filter(|s| !s.is_empty()) {
            writeln!(b, "\n--- Business Summary ---\n{summary}")?;
        }

        if !a.officers.is_empty() {
            writeln!(b, "\n--- Key Executives ---")?;
            for o in a.officers.iter().take(MAX_EXECUTIVES) {
                writeln!(b, "- {}: {}", o.name, o.title.as_deref().unwrap_or(""))?;
            }
            if a.officers.len() > MAX_EXECUTIVES {
                writeln!(b, "  ... and {} more", a.officers.len() - MAX_EXECUTIVES)?;
            }
        }
        Ok(())
    })
}

/* ---------------- sectors & industries ---------------- */

fn overview(b: &mut String, ov: &Overview, with_industries: bool) -> fmt::Result {
    writeln!(b, "\n--- Overview ---")?;
    if let Some(d) = ov.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(b, "{d}\n")?;
    }
    writeln!(b, "Companies:    {}", ov.companies_count.unwrap_or(0))?;
    if with_industries {
        writeln!(b, "Industries:   {}", ov.industries_count.unwrap_or(0))?;
    }
    if let Some(cap) = ov.market_cap.filter(|v| *v > 0.0) {
        writeln!(b, "Market Cap:   {}", fmt_large_number(cap))?;
    }
    if let Some(w) = ov.market_weight.filter(|v| *v > 0.0) {
        writeln!(b, "Market Weight: {:.2}%", w * 100.0)?;
    }
    if let Some(e) = ov.employee_count.filter(|v| *v > 0.0) {
        #[allow(clippy::cast_possible_truncation)]
        let e = e as i64;
        writeln!(b, "Employees:    {}", fmt_int(e))?;
    }
    Ok(())
}

fn top_companies(b: &mut String, companies: &[TopCompany]) -> fmt::Result {
    if companies.is_empty() {
        return Ok(());
    }
    writeln!(b, "\n--- Top Companies ---")?;
    for c in companies.iter().take(MAX_TOP_ENTRIES) {
        writeln!(
            b,
            "  {:<8} {}{}",
            c.symbol,
            c.name.as_deref().unwrap_or(""),
            weight(c.market_weight)
        )?;
    }
    if companies.len() > MAX_TOP_ENTRIES {
        writeln!(b, "... and {} more", companies.len() - MAX_TOP_ENTRIES)?;
    }
    Ok(())
}

pub fn sector(s: &Sector) -> String {
    render(|b| {
        writeln!(b, "=== Sector: {} ===", s.name)?;
        if let Some(sym) = s.symbol.as_deref().filter(|v| !v.is_empty()) {
            writeln!(b, "Symbol: {sym}")?;
        }
        overview(b, &s.overview, true)?;
        top_companies(b, &s.top_companies)?;

        if !s.industries.is_empty() {
            writeln!(b, "\n--- Industries ---")?;
            for ind in &s.industries {
                writeln!(
                    b,
                    "  {:<35} key: {}{}",
                    ind.name.as_deref().unwrap_or(""),
                    ind.key,
                    weight(ind.market_weight)
                )?;
            }
        }

        for (title, funds) in [("Top ETFs", &s.top_etfs), ("Top Mutual Funds", &s.top_mutual_funds)] {
            if funds.is_empty() {
                continue;
            }
            writeln!(b, "\n--- {title} ---")?;
            for f in funds {
                writeln!(b, "  {:<8} {}", f.symbol, f.name.as_deref().unwrap_or(""))?;
            }
        }
        Ok(())
    })
}

pub fn industry(i: &Industry) -> String {
    render(|b| {
        writeln!(b, "=== Industry: {} ===", i.name)?;
        writeln!(
            b,
            "Sector: {} ({})",
            i.sector_name.as_deref().unwrap_or(""),
            i.sector_key.as_deref().unwrap_or("")
        )?;
        if let Some(sym) = i.symbol.as_deref().filter(|v| !v.is_empty()) {
            writeln!(b, "Symbol: {sym}")?;
        }
        overview(b, &i.overview, false)?;
        top_companies(b, &i.top_companies)?;

        if !i.top_performing_companies.is_empty() {
            writeln!(b, "\n--- Top Performing Companies ---")?;
            writeln!(
                b,
                "  {:<8} {:<25} {:>10} {:>10} {:>12}",
                "Symbol", "Name", "YTD Ret", "Last", "Target"
            )?;
            for c in i.top_performing_companies.iter().take(MAX_TOP_ENTRIES) {
                writeln!(
                    b,
                    "  {:<8} {:<25} {:>9.1}% {:>10.2} {:>12.2}",
                    c.symbol,
                    truncate(c.name.as_deref().unwrap_or(""), 24),
                    c.ytd_return.unwrap_or(0.0) * 100.0,
                    c.last_price.unwrap_or(0.0),
                    c.target_price.unwrap_or(0.0)
                )?;
            }
            if i.top_performing_companies.len() > MAX_TOP_ENTRIES {
                writeln!(
                    b,
                    "  ... and {} more",
                    i.top_performing_companies.len() - MAX_TOP_ENTRIES
                )?;
            }
        }

        if !i.top_growth_companies.is_empty() {
            writeln!(b, "\n--- Top Growth Companies ---")?;
            writeln!(
                b,
                "  {:<8} {:<25} {:>10} {:>12}",
                "Symbol", "Name", "YTD Ret", "Growth Est"
            )?;
            for c in i.top_growth_companies.iter().take(MAX_TOP_ENTRIES) {
                writeln!(
                    b,
                    "  {:<8} {:<25} {:>9.1}% {:>11.1}%",
                    c.symbol,
                    truncate(c.name.as_deref().unwrap_or(""), 24),
                    c.ytd_return.unwrap_or(0.0) * 100.0,
                    c.growth_estimate.unwrap_or(0.0) * 100.0
                )?;
            }
            if i.top_growth_companies.len() > MAX_TOP_ENTRIES {
                writeln!(
                    b,
                    "  ... and {} more",
                    i.top_growth_companies.len() - MAX_TOP_ENTRIES
                )?;
            }
        }
        Ok(())
    })
}

/* ---------------- markets ---------------- */

pub fn market_summary(market: &str, items: &[MarketSummaryItem]) -> String {
    render(|b| {
        writeln!(b, "=== {market} Market Summary ===\n")?;
        if items.is_empty() {
            return writeln!(b, "No market data available");
        }

        writeln!(
            b,
            "{:<12} {:<30} {:>12} {:>10} {:>8}",
            "Symbol", "Name", "Price", "Change", "Chg%"
        )?;
        writeln!(b, "{}", "-".repeat(78))?;
        for item in items {
            let chg = item.regular_market_change.unwrap_or(0.0);
            let s = sign(chg);
            writeln!(
                b,
                "{:<12} {:<30} {:>12.2} {s}{:>9.2} {s}{:>6.2}%",
                item.symbol,
                truncate(item.short_name.as_deref().unwrap_or(""), 29),
                item.regular_market_price.unwrap_or(0.0),
                chg,
                item.regular_market_change_percent.unwrap_or(0.0)
            )?;
        }
        Ok(())
    })
}

pub fn market_status(market: &str, groups: &[MarketTimeGroup]) -> String {
    render(|b| {
        writeln!(b, "=== {market} Market Status ===\n")?;
        if groups.is_empty() {
            return writeln!(b, "No market time data available");
        }

        for mt in groups.iter().flat_map(|g| &g.market_time) {
            let name = mt.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&mt.id);
            writeln!(b, "--- {name} ---")?;
            writeln!(b, "  Status:  {}", mt.status.as_deref().unwrap_or(""))?;
            if let Some(msg) = mt.message.as_deref().filter(|m| !m.is_empty()) {
                writeln!(b, "  Info:    {msg}")?;
            }
            writeln!(b, "  Open:    {}", mt.open.as_deref().unwrap_or(""))?;
            writeln!(b, "  Close:   {}", mt.close.as_deref().unwrap_or(""))?;
            if let Some(tz) = mt.timezone.first().and_then(|t| t.short.as_deref()) {
                writeln!(b, "  Timezone: {tz}")?;
            }
            writeln!(b)?;
        }
        Ok(())
    })
}
