//! Registration abstraction between views and the animation runtime.

use core::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::MotionError;
use crate::timeline::Timeline;
use crate::trigger::{ScrollPosition, ToggleActions};
use crate::tween::Tween;

/// Handle for one live registration on a [`MotionHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RegistrationId(u64);

impl RegistrationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reg-{}", self.0)
    }
}

/// What a registration animates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    Tween(Tween),
    Timeline(Timeline),
}

impl From<Tween> for Animation {
    fn from(tween: Tween) -> Self {
        Animation::Tween(tween)
    }
}

impl From<Timeline> for Animation {
    fn from(timeline: Timeline) -> Self {
        Animation::Timeline(timeline)
    }
}

/// Scroll-driven animation: `animation` is controlled by `toggle_actions`
/// as `trigger` crosses the `start`/`end` positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObserverSpec {
    /// CSS selector of the element whose position drives the trigger.
    pub trigger: String,
    pub start: ScrollPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<ScrollPosition>,
    pub toggle_actions: ToggleActions,
    pub animation: Animation,
}

impl ObserverSpec {
    pub fn new(
        trigger: impl Into<String>,
        start: ScrollPosition,
        animation: impl Into<Animation>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            end: None,
            toggle_actions: ToggleActions::default(),
            animation: animation.into(),
        }
    }

    pub fn end(mut self, end: ScrollPosition) -> Self {
        self.end = Some(end);
        self
    }

    pub fn toggle_actions(mut self, actions: ToggleActions) -> Self {
        self.toggle_actions = actions;
        self
    }
}

/// Animation driven by the frame ticker from page load, independent of scroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerSpec {
    pub name: String,
    pub animation: Animation,
}

impl TickerSpec {
    pub fn new(name: impl Into<String>, animation: impl Into<Animation>) -> Self {
        Self {
            name: name.into(),
            animation: animation.into(),
        }
    }
}

/// Accepts animation registrations and tracks which are still live.
///
/// Every id returned by `observe`/`add_ticker` must eventually be passed to
/// `release`; [`crate::ViewScope`] does this for views.
pub trait MotionHost: Send + Sync {
    fn observe(&self, spec: ObserverSpec) -> Result<RegistrationId, MotionError>;

    fn add_ticker(&self, spec: TickerSpec) -> Result<RegistrationId, MotionError>;

    /// Returns `false` when `id` was not live.
    fn release(&self, id: RegistrationId) -> bool;

    fn live_count(&self) -> usize;
}

impl<H> MotionHost for Arc<H>
where
    H: MotionHost + ?Sized,
{
    fn observe(&self, spec: ObserverSpec) -> Result<RegistrationId, MotionError> {
        (**self).observe(spec)
    }

    fn add_ticker(&self, spec: TickerSpec) -> Result<RegistrationId, MotionError> {
        (**self).add_ticker(spec)
    }

    fn release(&self, id: RegistrationId) -> bool {
        (**self).release(id)
    }

    fn live_count(&self) -> usize {
        (**self).live_count()
    }
}
