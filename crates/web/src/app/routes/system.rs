use std::sync::Arc;

use axum::{Json, extract::Extension};

use greenwave_motion::MotionHost;

use crate::app::dto::HealthResponse;
use crate::app::state::SiteState;

pub async fn health(Extension(state): Extension<Arc<SiteState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.catalog.len(),
        live_registrations: state.motion.live_count(),
    })
}
