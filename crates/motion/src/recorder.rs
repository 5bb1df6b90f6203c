//! In-process motion host that records registrations as a serializable plan.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::MotionError;
use crate::host::{MotionHost, ObserverSpec, RegistrationId, TickerSpec};

/// Animations a page hands to the browser runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MotionPlan {
    pub observers: Vec<ObserverSpec>,
    pub tickers: Vec<TickerSpec>,
}

impl MotionPlan {
    pub fn len(&self) -> usize {
        self.observers.len() + self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// JSON safe to inline in a `<script type="application/json">` element.
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(self.to_json()?.replace("</", "<\\/"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Registration {
    Observer,
    Ticker,
}

impl Registration {
    fn as_str(&self) -> &'static str {
        match self {
            Registration::Observer => "observer",
            Registration::Ticker => "ticker",
        }
    }
}

#[derive(Debug, Default)]
struct RecorderState {
    next_id: u64,
    live: BTreeMap<RegistrationId, Registration>,
}

impl RecorderState {
    fn insert(&mut self, registration: Registration) -> RegistrationId {
        self.next_id += 1;
        let id = RegistrationId::new(self.next_id);
        self.live.insert(id, registration);
        id
    }
}

/// Shared host for all renders in the process.
///
/// - No IO
/// - Live registrations are kept until released
/// - Ids are never reused
#[derive(Debug, Default)]
pub struct PlanRecorder {
    state: Mutex<RecorderState>,
}

impl PlanRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, registration: Registration) -> Result<RegistrationId, MotionError> {
        let mut state = self.state.lock().map_err(|_| MotionError::HostUnavailable)?;
        let id = state.insert(registration);
        tracing::debug!(
            registration = %id,
            kind = registration.as_str(),
            live = state.live.len(),
            "motion registered"
        );
        Ok(id)
    }

}

impl MotionHost for PlanRecorder {
    fn observe(&self, spec: ObserverSpec) -> Result<RegistrationId, MotionError> {
        tracing::trace!(trigger = %spec.trigger, "observer requested");
        self.register(Registration::Observer)
    }

    fn add_ticker(&self, spec: TickerSpec) -> Result<RegistrationId, MotionError> {
        tracing::trace!(name = %spec.name, "ticker requested");
        self.register(Registration::Ticker)
    }

    fn release(&self, id: RegistrationId) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        match state.live.remove(&id) {
            Some(registration) => {
                tracing::debug!(
                    registration = %id,
                    kind = registration.as_str(),
                    live = state.live.len(),
                    "motion released"
                );
                true
            }
            None => {
                tracing::warn!(registration = %id, "release of unknown motion registration");
                false
            }
        }
    }

    fn live_count(&self) -> usize {
        self.state.lock().map(|state| state.live.len()).unwrap_or(0)
    }
}
