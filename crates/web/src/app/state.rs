use std::sync::Arc;

use greenwave_catalog::resolve::DetailResolver;
use greenwave_catalog::{Catalog, FallbackPolicy};
use greenwave_motion::{PlanRecorder, ViewScope};

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct SiteState {
    pub catalog: Catalog,
    pub resolver: DetailResolver,
    pub motion: Arc<PlanRecorder>,
}

impl SiteState {
    pub fn new(catalog: Catalog, fallback: FallbackPolicy) -> Self {
        Self {
            catalog,
            resolver: DetailResolver::new(catalog, fallback),
            motion: Arc::new(PlanRecorder::new()),
        }
    }

    /// Fresh registration scope for one page render.
    pub fn motion_scope(&self) -> ViewScope<Arc<PlanRecorder>> {
        ViewScope::new(self.motion.clone())
    }
}
