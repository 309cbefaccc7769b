//! The remote rate source: the trait the workflow consumes and its
//! HTTP implementation.

use api_types::rates::{ConvertResponse, CurrenciesResponse};
use reqwest::Url;
use thiserror::Error;

use crate::CurrencyCode;

/// Failures of the rate-source transport layer.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response missing rate for {0}")]
    MissingRate(CurrencyCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// The two read operations the remote rate service exposes.
pub trait RateSource {
    /// Lists the currency codes the service supports.
    fn currencies(&self) -> impl Future<Output = Result<Vec<CurrencyCode>, RateError>> + Send;

    /// Converts `amount` from `from` into `to`, returning the already
    /// computed value.
    fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> impl Future<Output = Result<f64, RateError>> + Send;
}

/// Rate source backed by a Frankfurter-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpRateSource {
    pub fn new(base_url: &str) -> Result<Self, RateError> {
        let base_url = Url::parse(base_url).map_err(|err| RateError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, RateError> {
        self.base_url
            .join(path)
            .map_err(|err| RateError::BaseUrl(err.to_string()))
    }
}

impl RateSource for HttpRateSource {
    async fn currencies(&self) -> Result<Vec<CurrencyCode>, RateError> {
        let endpoint = self.endpoint("currencies")?;
        let res = self.http.get(endpoint).send().await?;

        if !res.status().is_success() {
            return Err(RateError::Status(res.status().as_u16()));
        }

        let body = res.json::<CurrenciesResponse>().await?;
        Ok(body.currencies.into_keys().map(CurrencyCode::new).collect())
    }

    async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        let endpoint = self.endpoint("latest")?;
        let res = self
            .http
            .get(endpoint)
            .query(&[
                ("amount", amount.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(RateError::Status(res.status().as_u16()));
        }

        let body = res.json::<ConvertResponse>().await?;
        body.rates
            .get(to.as_str())
            .copied()
            .ok_or_else(|| RateError::MissingRate(to.clone()))
    }
}
