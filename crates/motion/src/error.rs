use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("invalid toggle actions: {0}")]
    InvalidToggleActions(String),

    #[error("invalid scroll position: {0}")]
    InvalidScrollPosition(String),

    #[error("invalid timeline position: {0}")]
    InvalidTimelinePosition(String),

    #[error("view scope already closed")]
    ScopeClosed,

    /// Host bookkeeping is unavailable (lock poisoned).
    #[error("motion host unavailable")]
    HostUnavailable,
}

impl MotionError {
    pub fn toggle_actions(msg: impl Into<String>) -> Self {
        Self::InvalidToggleActions(msg.into())
    }

    pub fn scroll_position(msg: impl Into<String>) -> Self {
        Self::InvalidScrollPosition(msg.into())
    }

    pub fn timeline_position(msg: impl Into<String>) -> Self {
        Self::InvalidTimelinePosition(msg.into())
    }
}
