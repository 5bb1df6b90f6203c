//! Greenwave Packaging website: server-rendered pages, JSON read API and
//! static assets over one axum router.
//!
//! Every page embeds its animation plan as `<script id="motion-plan">` and
//! loads `/assets/js/motion.js` to play it. That runtime is deployed with the
//! static assets (`GREENWAVE_ASSET_DIR`) and is not built by this workspace.

pub mod app;
pub mod config;
pub mod middleware;
