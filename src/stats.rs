//! Statistics snapshot model and lenient payload extraction.
//!
//! The Pi-hole API response is treated as an untyped JSON object. Individual
//! fields are pulled out leniently: a missing key, a wrong type, or an
//! unparseable string all coerce to zero. The agent must keep rendering
//! through upstream oddities (older API versions omit keys; some builds
//! return counters as strings), so snapshot construction never fails.
//!
//! A snapshot is built fresh each poll cycle, rendered once, and dropped.

use serde_json::Value;

/// One fetched set of Pi-hole statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// DNS queries handled today (`dns_queries_today`).
    pub queries_today: u64,
    /// Queries blocked today (`ads_blocked_today`).
    pub blocked_today: u64,
    /// Percentage of queries blocked today (`ads_percentage_today`).
    /// Taken as-is from upstream; not clamped to 0..100.
    pub percent_blocked: f32,
    /// Domains on the blocklists (`domains_being_blocked`).
    pub domains_blocked: u64,
}

impl StatsSnapshot {
    /// Extract a snapshot from a raw API payload. Never fails; absent or
    /// malformed fields read as zero.
    pub fn from_value(payload: &Value) -> Self {
        Self {
            queries_today: count_field(payload, "dns_queries_today"),
            blocked_today: count_field(payload, "ads_blocked_today"),
            percent_blocked: percent_field(payload, "ads_percentage_today"),
            domains_blocked: count_field(payload, "domains_being_blocked"),
        }
    }
}

/// Read an unsigned counter, accepting JSON numbers or numeric strings.
/// Anything else (including negative numbers) coerces to 0.
fn count_field(payload: &Value, key: &str) -> u64 {
    match payload.get(key) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Read a percentage, accepting JSON numbers or numeric strings.
fn percent_field(payload: &Value, key: &str) -> f32 {
    match payload.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) as f32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
