//! # Address-bound panels
//!
//! Shared machinery for the Balance and History panels: both show data for one
//! bound address, own their loading/error state and expose `refresh()`.
//!
//! ## Concurrency
//!
//! - `load()`/`refresh()` are re-entrant and never deduplicated. Overlapping
//!   fetches race and the one that resolves last is what stays on screen.
//! - Every bind bumps a generation counter. A fetch applies its result only if
//!   the generation it started under is still current, so a slow response for
//!   a previous address never lands on the new one.
//! - `loading` stays true while any fetch of the current generation is in flight.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::observable::{Observable, SubscriptionId};

/// Where a panel gets its data from.
#[async_trait(?Send)]
pub trait PanelSource: Send + Sync + 'static {
    type Data: Clone + Send + Sync + 'static;

    /// Name used in log events.
    const NAME: &'static str;

    /// Value shown before the first successful load.
    fn placeholder(&self) -> Self::Data;

    async fn fetch(&self, address: &str) -> Result<Self::Data>;
}

/// Snapshot of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<T> {
    /// Bound address; `None` when no wallet is connected
    pub address: Option<String>,
    pub data: T,
    pub loading: bool,
    /// Message of the last failed fetch, cleared by the next success
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct FetchGuard {
    address: Option<String>,
    generation: u64,
    in_flight: usize,
}

/// A panel bound to at most one address at a time.
pub struct AddressBoundPanel<S: PanelSource> {
    source: S,
    state: Observable<PanelState<S::Data>>,
    guard: Mutex<FetchGuard>,
}

impl<S: PanelSource> AddressBoundPanel<S> {
    pub fn with_source(source: S) -> Self {
        let state = Observable::new(PanelState {
            address: None,
            data: source.placeholder(),
            loading: false,
            error: None,
        });
        Self {
            source,
            state,
            guard: Mutex::new(FetchGuard::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> PanelState<S::Data> {
        self.state.get()
    }

    pub fn address(&self) -> Option<String> {
        self.guard.lock().address.clone()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&PanelState<S::Data>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    /// Bind to `address`. Returns whether a load is due.
    ///
    /// Binding the address already bound is a no-op. Any other change starts a
    /// new generation and resets the panel to its placeholder.
    pub fn bind(&self, address: Option<&str>) -> bool {
        {
            let mut guard = self.guard.lock();
            if guard.address.as_deref() == address {
                return false;
            }
            guard.address = address.map(str::to_string);
            guard.generation += 1;
            guard.in_flight = 0;
        }

        let placeholder = self.source.placeholder();
        self.state.set(PanelState {
            address: address.map(str::to_string),
            data: placeholder,
            loading: false,
            error: None,
        });
        address.is_some()
    }

    /// Bind and, when the address changed to a non-empty one, load.
    pub async fn rebind(&self, address: Option<&str>) {
        if self.bind(address) {
            self.load().await;
        }
    }

    pub fn unbind(&self) {
        self.bind(None);
    }

    /// Fetch for the bound address and apply the result if still current.
    pub async fn load(&self) {
        let (address, generation) = {
            let mut guard = self.guard.lock();
            let Some(address) = guard.address.clone() else {
                return;
            };
            guard.in_flight += 1;
            (address, guard.generation)
        };
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.source.fetch(&address).await;

        let still_loading = {
            let mut guard = self.guard.lock();
            if guard.generation != generation {
                debug!(panel = S::NAME, %address, "discarding result for stale binding");
                return;
            }
            guard.in_flight = guard.in_flight.saturating_sub(1);
            guard.in_flight > 0
        };

        self.state.update(|s| {
            s.loading = still_loading;
            match result {
                Ok(data) => {
                    s.data = data;
                    s.error = None;
                }
                Err(err) => {
                    warn!(panel = S::NAME, %address, "fetch failed: {}", err);
                    s.error = Some(err.message().to_string());
                }
            }
        });
    }

    /// Entry point for external callers.
    pub async fn refresh(&self) {
        self.load().await
    }
}
