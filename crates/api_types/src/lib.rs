//! Wire types shared by the rate-source client and the mock service.
//!
//! These mirror the JSON bodies of a Frankfurter-compatible exchange
//! rate API. Codes stay plain strings here; the engine wraps them in
//! its own currency type.

pub mod rates {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    /// Body of `GET /currencies`: a bare object mapping currency codes
    /// to display names, e.g. `{"EUR": "Euro", "USD": "United States Dollar"}`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CurrenciesResponse {
        pub currencies: BTreeMap<String, String>,
    }

    /// Body of `GET /latest?amount=&from=&to=`.
    ///
    /// `rates` is keyed by the target code and holds the already
    /// converted value, not a unit rate.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ConvertResponse {
        pub amount: f64,
        pub base: String,
        pub date: NaiveDate,
        pub rates: BTreeMap<String, f64>,
    }
}

#[cfg(test)]
mod tests {
    use super::rates::{ConvertResponse, CurrenciesResponse};

    #[test]
    fn currencies_decodes_bare_object() {
        let body = r#"{"EUR":"Euro","INR":"Indian Rupee","USD":"United States Dollar"}"#;
        let decoded: CurrenciesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.currencies.len(), 3);
        assert_eq!(decoded.currencies["EUR"], "Euro");
    }

    #[test]
    fn convert_decodes_rates_map() {
        let body = r#"{"amount":100.0,"base":"USD","date":"2024-01-12","rates":{"INR":8532.1}}"#;
        let decoded: ConvertResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.base, "USD");
        assert_eq!(decoded.rates["INR"], 8532.1);
    }
}
