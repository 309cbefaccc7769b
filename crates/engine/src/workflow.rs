//! The conversion workflow: owns every piece of transient state and
//! mediates between UI intents and the two external services.

use crate::{
    CurrencyCode, EngineError, Favorites, FavoritesStore, RateSource, ResultEngine,
    amount::parse_amount, rates::RateError,
};

/// Fixed user-facing messages, one per failure kind.
pub const MSG_INVALID_AMOUNT: &str = "Please enter a valid positive number for the amount.";
pub const MSG_CURRENCIES_FAILED: &str = "Failed to load currencies. Please try again later.";
pub const MSG_CONVERSION_FAILED: &str = "Failed to convert currencies. Please try again.";

/// Observable workflow state.
///
/// Mutated only through [`Workflow`] operations; the presentation
/// layer reads it via [`Workflow::state`] on every frame.
#[derive(Debug)]
pub struct WorkflowState {
    /// Codes offered by the rate source; empty until the startup fetch
    /// resolves, and stays empty when it fails.
    pub currencies: Vec<CurrencyCode>,
    /// Raw amount input; validated only on submit.
    pub amount: String,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Last successful conversion, formatted as `"<value> <CODE>"`.
    /// Survives later failures so the previous result stays visible
    /// next to the error banner.
    pub result: Option<String>,
    /// At most one active failure message; cleared when the next
    /// conversion attempt starts.
    pub error: Option<String>,
    /// True while a conversion request is outstanding.
    pub converting: bool,
    pub favorites: Favorites,
}

/// Handle for one in-flight conversion request.
///
/// Minted by [`Workflow::begin_convert`]. A ticket older than the most
/// recently minted one is stale: its outcome is discarded wholesale.
#[derive(Debug)]
pub struct ConversionTicket {
    seq: u64,
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
}

impl ConversionTicket {
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn from(&self) -> &CurrencyCode {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &CurrencyCode {
        &self.to
    }
}

pub struct Workflow<S, F> {
    source: S,
    store: F,
    state: WorkflowState,
    seq: u64,
}

impl<S: RateSource, F: FavoritesStore> Workflow<S, F> {
    /// Builds a workflow with the persisted favorites loaded.
    pub fn new(
        source: S,
        store: F,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: impl Into<String>,
    ) -> ResultEngine<Self> {
        let favorites = store.load()?;
        Ok(Self {
            source,
            store,
            state: WorkflowState {
                currencies: Vec::new(),
                amount: amount.into(),
                from,
                to,
                result: None,
                error: None,
                converting: false,
                favorites,
            },
            seq: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Fetches the supported currency list. Called once at startup; on
    /// failure the list stays empty and selectors fall back to the
    /// favorites alone.
    pub async fn load_currencies(&mut self) {
        match self.source.currencies().await {
            Ok(currencies) => {
                self.state.currencies = dedup(currencies);
            }
            Err(err) => {
                let err = EngineError::CurrencyList(err);
                tracing::debug!("{err}");
                self.state.error = Some(MSG_CURRENCIES_FAILED.to_string());
            }
        }
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.state.amount = amount.into();
    }

    pub fn select_from(&mut self, code: CurrencyCode) {
        self.state.from = code;
    }

    pub fn select_to(&mut self, code: CurrencyCode) {
        self.state.to = code;
    }

    /// Exchanges the source and target selections; its own inverse.
    /// Both sides change against the same snapshot, so no intermediate
    /// state is observable.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.state.from, &mut self.state.to);
    }

    /// Toggles `code` in the favorites and persists the new set
    /// immediately. Returns whether the code is now starred.
    ///
    /// Persistence failures are reported to the caller instead of
    /// entering the error banner; the in-memory set keeps the toggle
    /// either way. No check that `code` is a known currency.
    pub fn toggle_favorite(&mut self, code: &CurrencyCode) -> ResultEngine<bool> {
        let starred = self.state.favorites.toggle(code);
        self.store.save(&self.state.favorites)?;
        Ok(starred)
    }

    /// Validates the amount input and marks a conversion as in flight.
    ///
    /// Returns `None` with the validation message set when the input
    /// does not parse as a strictly positive number; no request may be
    /// issued in that case. Otherwise clears the error, raises the
    /// converting flag, and mints a ticket that supersedes any older
    /// outstanding one.
    pub fn begin_convert(&mut self) -> Option<ConversionTicket> {
        let Ok(amount) = parse_amount(&self.state.amount) else {
            self.state.error = Some(MSG_INVALID_AMOUNT.to_string());
            return None;
        };

        self.state.error = None;
        self.state.converting = true;
        self.seq += 1;
        Some(ConversionTicket {
            seq: self.seq,
            amount,
            from: self.state.from.clone(),
            to: self.state.to.clone(),
        })
    }

    /// Applies the outcome of a conversion request.
    ///
    /// A stale ticket is discarded without touching any state: the
    /// converting flag belongs to the newer request. For the latest
    /// ticket the flag is always lowered, success or failure; a
    /// failure keeps the previous result visible.
    pub fn complete_convert(&mut self, ticket: ConversionTicket, outcome: Result<f64, RateError>) {
        if ticket.seq != self.seq {
            tracing::debug!(seq = ticket.seq, "discarding superseded conversion response");
            return;
        }

        self.state.converting = false;
        match outcome {
            Ok(value) => {
                self.state.result = Some(format!("{value} {}", ticket.to));
            }
            Err(err) => {
                let err = EngineError::Conversion(err);
                tracing::debug!("{err}");
                self.state.error = Some(MSG_CONVERSION_FAILED.to_string());
            }
        }
    }

    /// Validates, issues, and applies one conversion request.
    pub async fn convert(&mut self) {
        let Some(ticket) = self.begin_convert() else {
            return;
        };

        let outcome = self
            .source
            .convert(ticket.amount, &ticket.from, &ticket.to)
            .await;
        self.complete_convert(ticket, outcome);
    }
}

/// Drops duplicate codes, keeping the first occurrence's position.
fn dedup(codes: Vec<CurrencyCode>) -> Vec<CurrencyCode> {
    let mut unique: Vec<CurrencyCode> = Vec::with_capacity(codes.len());
    for code in codes {
        if !unique.contains(&code) {
            unique.push(code);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    use super::*;
    use crate::error::StoreError;

    /// Rate source answering from fields instead of the network.
    #[derive(Debug)]
    struct StubSource {
        value: f64,
        fail: AtomicBool,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn returning(value: f64) -> Self {
            Self {
                value,
                fail: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl RateSource for StubSource {
        async fn currencies(&self) -> Result<Vec<CurrencyCode>, RateError> {
            Ok(["USD", "EUR", "INR", "GBP"].map(CurrencyCode::from).to_vec())
        }

        async fn convert(
            &self,
            _amount: f64,
            _from: &CurrencyCode,
            _to: &CurrencyCode,
        ) -> Result<f64, RateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                Err(RateError::Status(500))
            } else {
                Ok(self.value)
            }
        }
    }

    #[derive(Debug, Default)]
    struct MemoryStore {
        saved: Mutex<Option<Favorites>>,
    }

    impl FavoritesStore for MemoryStore {
        fn load(&self) -> Result<Favorites, StoreError> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        fn save(&self, favorites: &Favorites) -> Result<(), StoreError> {
            *self.saved.lock().unwrap() = Some(favorites.clone());
            Ok(())
        }
    }

    fn workflow(value: f64, amount: &str) -> Workflow<StubSource, MemoryStore> {
        Workflow::new(
            StubSource::returning(value),
            MemoryStore::default(),
            CurrencyCode::from("USD"),
            CurrencyCode::from("INR"),
            amount,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn convert_formats_value_and_target_code() {
        let mut wf = workflow(8532.10, "100");
        wf.convert().await;

        let state = wf.state();
        assert_eq!(state.result.as_deref(), Some("8532.1 INR"));
        assert_eq!(state.error, None);
        assert!(!state.converting);
    }

    #[tokio::test]
    async fn invalid_amount_blocks_the_network_call() {
        for bad in ["-5", "0", "abc", "", "inf"] {
            let mut wf = workflow(1.0, bad);
            wf.convert().await;

            let calls = wf.source.calls.load(Ordering::SeqCst);
            assert_eq!(calls, 0, "issued a request for amount {bad:?}");
            assert_eq!(wf.state().error.as_deref(), Some(MSG_INVALID_AMOUNT));
            assert!(!wf.state().converting);
        }
    }

    #[tokio::test]
    async fn error_clears_when_the_next_attempt_starts() {
        let mut wf = workflow(50.0, "-5");
        wf.convert().await;
        assert!(wf.state().error.is_some());

        wf.set_amount("10");
        wf.convert().await;
        assert_eq!(wf.state().error, None);
        assert_eq!(wf.state().result.as_deref(), Some("50 INR"));
    }

    #[tokio::test]
    async fn failure_keeps_the_previous_result() {
        let mut wf = workflow(50.0, "10");
        wf.convert().await;
        assert_eq!(wf.state().result.as_deref(), Some("50 INR"));

        wf.source.fail.store(true, Ordering::SeqCst);
        wf.convert().await;

        let state = wf.state();
        assert_eq!(state.error.as_deref(), Some(MSG_CONVERSION_FAILED));
        assert_eq!(state.result.as_deref(), Some("50 INR"));
        assert!(!state.converting);
    }

    #[tokio::test]
    async fn load_currencies_replaces_the_list_once() {
        let mut wf = workflow(1.0, "1");
        assert!(wf.state().currencies.is_empty());

        wf.load_currencies().await;
        let codes: Vec<_> = wf.state().currencies.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["USD", "EUR", "INR", "GBP"]);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let mut wf = workflow(1.0, "1");
        wf.swap();
        assert_eq!(wf.state().from.as_str(), "INR");
        assert_eq!(wf.state().to.as_str(), "USD");

        wf.swap();
        assert_eq!(wf.state().from.as_str(), "USD");
        assert_eq!(wf.state().to.as_str(), "INR");
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut wf = workflow(1.0, "10");

        let stale = wf.begin_convert().unwrap();
        let fresh = wf.begin_convert().unwrap();

        wf.complete_convert(stale, Ok(111.0));
        assert_eq!(wf.state().result, None, "stale success applied");
        assert!(wf.state().converting, "stale completion lowered the flag");

        wf.complete_convert(fresh, Ok(222.0));
        assert_eq!(wf.state().result.as_deref(), Some("222 INR"));
        assert!(!wf.state().converting);
    }

    #[test]
    fn superseded_failure_does_not_raise_an_error() {
        let mut wf = workflow(1.0, "10");

        let stale = wf.begin_convert().unwrap();
        let fresh = wf.begin_convert().unwrap();

        wf.complete_convert(stale, Err(RateError::Status(500)));
        assert_eq!(wf.state().error, None);

        wf.complete_convert(fresh, Ok(5.0));
        assert_eq!(wf.state().result.as_deref(), Some("5 INR"));
    }

    #[test]
    fn toggle_favorite_persists_synchronously() {
        let mut wf = workflow(1.0, "1");

        assert!(wf.toggle_favorite(&CurrencyCode::from("GBP")).unwrap());
        let saved = wf.store.saved.lock().unwrap().clone().unwrap();
        let codes: Vec<_> = saved.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["INR", "EUR", "GBP"]);

        assert!(!wf.toggle_favorite(&CurrencyCode::from("GBP")).unwrap());
        let saved = wf.store.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved, Favorites::default());
    }
}
