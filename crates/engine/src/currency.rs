use serde::{Deserialize, Serialize};

/// Short opaque identifier for a currency (e.g. `"USD"`).
///
/// The rate source owns the universe of valid codes; the engine never
/// inspects a code's structure and compares them by equality only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}
