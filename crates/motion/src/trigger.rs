//! Scroll-trigger settings: start/end positions and toggle actions.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::MotionError;

/// What a trigger does to its animation when a scroll edge is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleAction {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(MotionError::toggle_actions(format!("unknown action {other:?}"))),
        })
    }
}

/// The four actions of a trigger, written `"<enter> <leave> <enter-back> <leave-back>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Play on entry from either side, rewind on exit to either side.
    pub const PLAY_REVERSE: Self = Self::new(
        ToggleAction::Play,
        ToggleAction::Reverse,
        ToggleAction::Play,
        ToggleAction::Reverse,
    );

    /// Play once on first entry and never react again.
    pub const PLAY_ONCE: Self = Self::new(
        ToggleAction::Play,
        ToggleAction::None,
        ToggleAction::None,
        ToggleAction::None,
    );

    pub const fn new(
        on_enter: ToggleAction,
        on_leave: ToggleAction,
        on_enter_back: ToggleAction,
        on_leave_back: ToggleAction,
    ) -> Self {
        Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = parts.as_slice() else {
            return Err(MotionError::toggle_actions(format!(
                "expected 4 actions, got {} in {s:?}",
                parts.len()
            )));
        };
        Ok(Self::new(
            enter.parse()?,
            leave.parse()?,
            enter_back.parse()?,
            leave_back.parse()?,
        ))
    }
}

impl Serialize for ToggleActions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One side of a trigger position: a named edge or a percentage of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f32),
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => f.write_str("top"),
            Edge::Center => f.write_str("center"),
            Edge::Bottom => f.write_str("bottom"),
            Edge::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            other => other
                .strip_suffix('%')
                .and_then(|n| n.parse::<f32>().ok())
                .filter(|n| n.is_finite())
                .map(Edge::Percent)
                .ok_or_else(|| MotionError::scroll_position(format!("unknown edge {other:?}"))),
        }
    }
}

/// `"<element edge> <viewport edge>"`: the trigger fires when the element's
/// edge meets the viewport's edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollPosition {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl FromStr for ScrollPosition {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => {
                Ok(Self::new(element.parse()?, viewport.parse()?))
            }
            _ => Err(MotionError::scroll_position(format!(
                "expected \"<element> <viewport>\", got {s:?}"
            ))),
        }
    }
}

impl Serialize for ScrollPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_reverse() {
        let actions: ToggleActions = "play reverse play reverse".parse().unwrap();
        assert_eq!(actions, ToggleActions::PLAY_REVERSE);
        assert_eq!(actions.to_string(), "play reverse play reverse");
        assert_eq!(actions.on_leave_back, ToggleAction::Reverse);
    }

    #[test]
    fn parses_every_action_name() {
        let actions: ToggleActions = "restart reset complete none".parse().unwrap();
        assert_eq!(actions.on_enter, ToggleAction::Restart);
        assert_eq!(actions.on_leave, ToggleAction::Reset);
        assert_eq!(actions.on_enter_back, ToggleAction::Complete);
        assert_eq!(actions.on_leave_back, ToggleAction::None);
        let actions: ToggleActions = "  pause\tresume play  play ".parse().unwrap();
        assert_eq!(actions.on_leave, ToggleAction::Resume);
    }

    #[test]
    fn rejects_wrong_arity_and_unknown_actions() {
        assert!("play reverse".parse::<ToggleActions>().is_err());
        assert!("play reverse play reverse play".parse::<ToggleActions>().is_err());
        assert!(matches!(
            "play rewind play reverse".parse::<ToggleActions>(),
            Err(MotionError::InvalidToggleActions(_))
        ));
    }

    #[test]
    fn scroll_positions_parse_and_display() {
        let start: ScrollPosition = "top 85%".parse().unwrap();
        assert_eq!(start, ScrollPosition::new(Edge::Top, Edge::Percent(85.0)));
        assert_eq!(start.to_string(), "top 85%");

        let end: ScrollPosition = "bottom top".parse().unwrap();
        assert_eq!(end.to_string(), "bottom top");
        assert_eq!("center center".parse::<ScrollPosition>().unwrap().element, Edge::Center);

        assert!("top".parse::<ScrollPosition>().is_err());
        assert!("top 85% extra".parse::<ScrollPosition>().is_err());
        assert!("middle top".parse::<ScrollPosition>().is_err());
        assert!("top abc%".parse::<ScrollPosition>().is_err());
    }
}
