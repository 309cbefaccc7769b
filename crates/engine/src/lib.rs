//! Conversion workflow core for cambio.
//!
//! Everything with decision logic lives here, independent of any UI:
//! amount validation, the favorites set and its persistence, the
//! rate-source client, and the [`Workflow`] that owns all transient
//! state. The presentation layer drives the workflow through its
//! operations and reads state back each frame.

pub use amount::parse_amount;
pub use currency::CurrencyCode;
pub use error::{EngineError, StoreError};
pub use favorites::{Favorites, FavoritesStore, JsonFileStore};
pub use rates::{HttpRateSource, RateError, RateSource};
pub use workflow::{
    ConversionTicket, MSG_CONVERSION_FAILED, MSG_CURRENCIES_FAILED, MSG_INVALID_AMOUNT, Workflow,
    WorkflowState,
};

mod amount;
mod currency;
mod error;
mod favorites;
mod rates;
mod workflow;

type ResultEngine<T> = Result<T, EngineError>;
