use std::sync::Arc;

use tokio::sync::Mutex;

use enquiry_core::wizard::{WizardStage, WizardState};

/// Shared wizard context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes `dispatch` calls so one transition plus
///   its action execution runs atomically.
/// - `state`: used for both reading (`get_state`) and writing.
#[derive(Clone)]
pub struct WizardContext {
    /// Current wizard state.
    state: Arc<Mutex<WizardState>>,
    /// Serializes dispatch calls to prevent concurrent state/action races.
    /// Only acquired during `dispatch`, NOT during `get_state`.
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a context at the first stage.
    pub fn at_start() -> Self {
        Self::new(WizardState::Stage(WizardStage::Personal))
    }

    /// Lightweight read that does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the state. Only called while holding `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
