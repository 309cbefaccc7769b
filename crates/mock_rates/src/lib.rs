//! Mock exchange-rate service speaking the Frankfurter wire format.
//!
//! Serves a fixed four-currency table so tests get deterministic
//! conversions. `router()` answers like the real API; `failing_router()`
//! answers 500 on every route for failure-path tests.

use std::collections::BTreeMap;

use axum::{Json, extract::Query, http::StatusCode, routing::get};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::Router;

/// Display name and value of one USD, per supported code.
fn rate_table() -> BTreeMap<&'static str, (&'static str, f64)> {
    BTreeMap::from([
        ("EUR", ("Euro", 0.92)),
        ("GBP", ("British Pound", 0.79)),
        ("INR", ("Indian Rupee", 85.321)),
        ("USD", ("United States Dollar", 1.0)),
    ])
}

/// Date stamped on every conversion response.
fn quote_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 12).unwrap_or_default()
}

pub fn router() -> Router {
    Router::new()
        .route("/currencies", get(currencies))
        .route("/latest", get(latest))
}

/// Router whose every route answers 500.
pub fn failing_router() -> Router {
    Router::new()
        .route("/currencies", get(unavailable))
        .route("/latest", get(unavailable))
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn currencies() -> Json<BTreeMap<String, String>> {
    let listing = rate_table()
        .into_iter()
        .map(|(code, (name, _))| (code.to_string(), name.to_string()))
        .collect();
    Json(listing)
}

#[derive(Debug, Deserialize)]
struct LatestQuery {
    amount: f64,
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct LatestResponse {
    amount: f64,
    base: String,
    date: NaiveDate,
    rates: BTreeMap<String, f64>,
}

async fn latest(Query(query): Query<LatestQuery>) -> Result<Json<LatestResponse>, StatusCode> {
    let table = rate_table();
    let (_, from_rate) = table.get(query.from.as_str()).ok_or(StatusCode::NOT_FOUND)?;
    let (_, to_rate) = table.get(query.to.as_str()).ok_or(StatusCode::NOT_FOUND)?;

    // The real service rounds converted values to two decimals.
    let converted = round2(query.amount * to_rate / from_rate);

    Ok(Json(LatestResponse {
        amount: query.amount,
        base: query.from,
        date: quote_date(),
        rates: BTreeMap::from([(query.to, converted)]),
    }))
}

async fn unavailable() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_truncates_float_noise() {
        assert_eq!(round2(8532.099_999_999_999), 8532.1);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn table_covers_the_test_universe() {
        let table = rate_table();
        for code in ["USD", "EUR", "INR", "GBP"] {
            assert!(table.contains_key(code), "missing {code}");
        }
    }
}
