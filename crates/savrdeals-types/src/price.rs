//! Lenient numeric parsing for values that arrive from the persistence layer.

use serde_json::Value;

/// Parse a price that may be stored as a JSON number or a numeric string.
/// Returns `None` for anything that is not a finite number.
pub fn parse_price(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Floor a signed balance at zero.
#[inline]
pub fn normalize_coins(coins: i64) -> u64 {
    coins.max(0).unsigned_abs()
}

/// Integer text parses as-is, finite decimal text is floored, everything else is 0.
pub fn parse_coin_balance(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(coins) = raw.parse::<i64>() {
        return normalize_coins(coins);
    }
    match raw.parse::<f64>() {
        // `as` saturates, so huge values clamp to u64::MAX.
        Ok(coins) if coins.is_finite() && coins > 0.0 => coins.floor() as u64,
        _ => 0,
    }
}

/// Coin balance from a JSON body field: integers, decimals, or numeric text.
/// Missing, negative, or malformed values are 0.
pub fn coin_balance_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(normalize_coins))
            .or_else(|| n.as_f64().map(|f| parse_coin_balance(&f.to_string())))
            .unwrap_or(0),
        Value::String(s) => parse_coin_balance(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => 0,
    }
}
