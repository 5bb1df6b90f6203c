//! Per-view ownership of animation registrations.

use crate::error::MotionError;
use crate::host::{MotionHost, ObserverSpec, RegistrationId, TickerSpec};
use crate::recorder::MotionPlan;

/// Owns every registration one view makes and releases them together.
///
/// Dropping the scope releases whatever is still registered, so early
/// returns and unwinding leave the host exactly as it was before the view.
///
/// ```ignore
/// let mut scope = ViewScope::new(state.motion.clone());
/// scope.observe(spec)?;
/// let plan_json = scope.plan().to_script_json()?;
/// // scope dropped here: registrations released
/// ```
#[derive(Debug)]
pub struct ViewScope<H: MotionHost> {
    host: H,
    registrations: Vec<RegistrationId>,
    plan: MotionPlan,
    closed: bool,
}

impl<H: MotionHost> ViewScope<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            registrations: Vec::new(),
            plan: MotionPlan::default(),
            closed: false,
        }
    }

    pub fn observe(&mut self, spec: ObserverSpec) -> Result<RegistrationId, MotionError> {
        if self.closed {
            return Err(MotionError::ScopeClosed);
        }
        let id = self.host.observe(spec.clone())?;
        self.registrations.push(id);
        self.plan.observers.push(spec);
        Ok(id)
    }

    pub fn add_ticker(&mut self, spec: TickerSpec) -> Result<RegistrationId, MotionError> {
        if self.closed {
            return Err(MotionError::ScopeClosed);
        }
        let id = self.host.add_ticker(spec.clone())?;
        self.registrations.push(id);
        self.plan.tickers.push(spec);
        Ok(id)
    }

    /// Everything this view registered, in registration order.
    pub fn plan(&self) -> &MotionPlan {
        &self.plan
    }

    /// Registrations this scope still holds on the host.
    pub fn live(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release every registration now. Further calls do nothing.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        for id in self.registrations.drain(..) {
            self.host.release(id);
        }
    }
}

impl<H: MotionHost> Drop for ViewScope<H> {
    fn drop(&mut self) {
        self.close();
    }
}
