//! Scroll and entrance animation plans for rendered pages.
//!
//! Views describe their animations as registrations against a [`MotionHost`].
//! Every registration made for a view is owned by that view's [`ViewScope`]
//! and released when the scope is dropped, so a page never leaks observers
//! into the next one. The browser-side runtime receives the resulting
//! [`MotionPlan`] as JSON.

pub mod error;
pub mod host;
pub mod recorder;
pub mod scope;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use error::MotionError;
pub use host::{Animation, MotionHost, ObserverSpec, RegistrationId, TickerSpec};
pub use recorder::{MotionPlan, PlanRecorder};
pub use scope::ViewScope;
pub use timeline::{Position, Timeline};
pub use trigger::{Edge, ScrollPosition, ToggleAction, ToggleActions};
pub use tween::{Ease, Tween, TweenVars, cards_per_row, row_of, stagger};
