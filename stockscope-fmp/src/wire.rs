//! FMP JSON payloads and their mapping onto the stockscope model.
//!
//! FMP is loose about types: numbers sometimes arrive as strings, percent
//! fields may carry `%` or parentheses, empty strings stand in for missing
//! text, and errors can come back as a 200 with an `"Error Message"` object.
//! Everything here decodes leniently and drops what it cannot read.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use stockscope_core::{CompanyProfile, Listing, PricePoint, ScopeError, SearchHit, Symbol};

use crate::CONNECTOR_NAME;

fn decimal_from_value(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(Decimal::from(i));
            }
            let s = n.to_string();
            Decimal::from_str(&s)
                .ok()
                .or_else(|| Decimal::from_scientific(&s).ok())
        }
        Value::String(s) => {
            let cleaned = s
                .trim()
                .trim_start_matches('(')
                .trim_end_matches(')')
                .trim_end_matches('%')
                .trim_start_matches('+')
                .replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            Decimal::from_str(&cleaned)
                .ok()
                .or_else(|| Decimal::from_scientific(&cleaned).ok())
        }
        _ => None,
    }
}

fn lenient_decimal<'de, D>(d: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(decimal_from_value))
}

fn non_empty_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpProfile {
    #[serde(default, deserialize_with = "non_empty_string")]
    symbol: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    changes: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    changes_percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    mkt_cap: Option<Decimal>,
    #[serde(default, deserialize_with = "non_empty_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    website: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    exchange_short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpSearchHit {
    #[serde(default, deserialize_with = "non_empty_string")]
    symbol: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    exchange_short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpListing {
    #[serde(default, deserialize_with = "non_empty_string")]
    symbol: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    exchange: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    exchange_short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct FmpHistoryPoint {
    #[serde(default, deserialize_with = "non_empty_string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    close: Option<Decimal>,
}

/// FMP reports some failures (bad key, plan limits) as a 200 with an error object.
fn check_error_message(v: &Value) -> Result<(), ScopeError> {
    if let Some(msg) = v
        .get("Error Message")
        .or_else(|| v.get("error"))
        .and_then(Value::as_str)
    {
        return Err(ScopeError::connector(CONNECTOR_NAME, msg.to_string()));
    }
    Ok(())
}

fn expect_array(v: Value, what: &str) -> Result<Vec<Value>, ScopeError> {
    check_error_message(&v)?;
    match v {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ScopeError::Data(format!(
            "expected array for {what}, got {}",
            kind_of(&other)
        ))),
    }
}

const fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pick the profile record out of a payload.
///
/// A non-empty array yields its first element and a non-empty object is used
/// as-is; anything else means there is no profile for `requested`.
///
/// # Errors
/// `NotFound` for empty payloads, `Connector` for FMP error objects, `Data` when
/// the record cannot be read.
pub fn decode_profile(payload: Value, requested: &Symbol) -> Result<CompanyProfile, ScopeError> {
    check_error_message(&payload)?;
    let record = match payload {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(map) if !map.is_empty() => Some(Value::Object(map)),
        _ => None,
    }
    .ok_or_else(|| ScopeError::not_found(format!("profile for {requested}")))?;

    if record.as_object().is_none_or(serde_json::Map::is_empty) {
        return Err(ScopeError::not_found(format!("profile for {requested}")));
    }

    let raw: FmpProfile = serde_json::from_value(record)
        .map_err(|e| ScopeError::Data(format!("profile for {requested}: {e}")))?;

    let symbol = raw
        .symbol
        .and_then(|s| Symbol::new(s).ok())
        .unwrap_or_else(|| requested.clone());

    Ok(CompanyProfile {
        symbol,
        company_name: raw.company_name,
        price: raw.price,
        changes: raw.changes,
        changes_percentage: raw.changes_percentage,
        mkt_cap: raw.mkt_cap,
        description: raw.description,
        image: raw.image,
        website: raw.website,
        exchange: raw.exchange_short_name,
    })
}

/// Decode a `/search` payload, skipping rows without a usable symbol.
///
/// # Errors
/// `Connector` for FMP error objects, `Data` for non-array payloads.
pub fn decode_search(payload: Value) -> Result<Vec<SearchHit>, ScopeError> {
    let rows = expect_array(payload, "search")?;
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value::<FmpSearchHit>(row).ok())
        .filter_map(|h| {
            let symbol = Symbol::new(h.symbol?).ok()?;
            Some(SearchHit {
                symbol,
                name: h.name,
                currency: h.currency,
                exchange_short_name: h.exchange_short_name,
            })
        })
        .collect())
}

/// Decode a `/stock/list` payload.
///
/// The listing's exchange is the short name (`"NASDAQ"`) when present and the
/// long name otherwise.
///
/// # Errors
/// `Connector` for FMP error objects, `Data` for non-array payloads.
pub fn decode_stock_list(payload: Value) -> Result<Vec<Listing>, ScopeError> {
    let rows = expect_array(payload, "stock list")?;
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value::<FmpListing>(row).ok())
        .filter_map(|l| {
            let symbol = Symbol::new(l.symbol?).ok()?;
            Some(Listing {
                symbol,
                name: l.name,
                exchange: l.exchange_short_name.or(l.exchange),
                price: l.price,
            })
        })
        .collect())
}

/// Decode a `/historical-price-full` payload.
///
/// A missing `historical` key is an empty series. Rows without a parseable
/// `YYYY-MM-DD` date or a close are dropped.
///
/// # Errors
/// `Connector` for FMP error objects, `Data` when `historical` is not an array.
pub fn decode_history(payload: Value, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError> {
    check_error_message(&payload)?;
    let Some(historical) = payload.get("historical").cloned() else {
        return Ok(Vec::new());
    };
    let rows = expect_array(historical, &format!("history for {symbol}"))?;
    let total = rows.len();
    let points: Vec<PricePoint> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value::<FmpHistoryPoint>(row).ok())
        .filter_map(|p| {
            let date = NaiveDate::parse_from_str(p.date?.get(..10)?, "%Y-%m-%d").ok()?;
            Some(PricePoint {
                date,
                close: p.close?,
            })
        })
        .collect();
    if points.len() < total {
        tracing::debug!(
            target: "stockscope_fmp",
            %symbol,
            dropped = total - points.len(),
            "dropped unreadable history rows"
        );
    }
    Ok(points)
}
