//! Sequenced tweens with position parameters resolved to absolute start times.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::MotionError;
use crate::tween::Tween;

/// Where a tween is placed on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// After everything added so far.
    #[default]
    End,
    /// Offset from the end of the timeline: `"+=0.2"`, `"-=0.8"`.
    Relative(f32),
    /// Seconds from the start of the timeline: `"0"`, `"1.5"`.
    Absolute(f32),
    /// Offset from the start of the previous tween: `"<"`, `"<0.2"`.
    WithPrevious(f32),
    /// Offset from the end of the previous tween: `">"`, `">-0.5"`.
    AfterPrevious(f32),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::End => f.write_str("+=0"),
            Position::Relative(d) if *d < 0.0 => write!(f, "-={}", -d),
            Position::Relative(d) => write!(f, "+={d}"),
            Position::Absolute(t) => write!(f, "{t}"),
            Position::WithPrevious(d) if *d == 0.0 => f.write_str("<"),
            Position::WithPrevious(d) => write!(f, "<{d}"),
            Position::AfterPrevious(d) if *d == 0.0 => f.write_str(">"),
            Position::AfterPrevious(d) => write!(f, ">{d}"),
        }
    }
}

fn seconds(s: &str, whole: &str) -> Result<f32, MotionError> {
    s.trim()
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| MotionError::timeline_position(format!("{whole:?} is not a position")))
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Position::End);
        }
        if let Some(rest) = trimmed.strip_prefix("+=") {
            return seconds(rest, s).map(Position::Relative);
        }
        if let Some(rest) = trimmed.strip_prefix("-=") {
            return seconds(rest, s).map(|d| Position::Relative(-d));
        }
        if let Some(rest) = trimmed.strip_prefix('<') {
            if rest.is_empty() {
                return Ok(Position::WithPrevious(0.0));
            }
            return seconds(rest, s).map(Position::WithPrevious);
        }
        if let Some(rest) = trimmed.strip_prefix('>') {
            if rest.is_empty() {
                return Ok(Position::AfterPrevious(0.0));
            }
            return seconds(rest, s).map(Position::AfterPrevious);
        }
        let t = seconds(trimmed, s)?;
        if t < 0.0 {
            return Err(MotionError::timeline_position(format!("{s:?} is before the start")));
        }
        Ok(Position::Absolute(t))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub tween: Tween,
    /// Absolute start in seconds, including the tween's own delay.
    pub start: f32,
}

impl TimelineEntry {
    pub fn end(&self) -> f32 {
        self.start + self.tween.duration
    }
}

/// Ordered tweens with resolved start times.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `tween` at `position`. Negative results clamp to zero.
    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let end = self.duration();
        let anchor = match position {
            Position::End => end,
            Position::Relative(d) => end + d,
            Position::Absolute(t) => t,
            Position::WithPrevious(d) => self.entries.last().map_or(0.0, |e| e.start) + d,
            Position::AfterPrevious(d) => self.entries.last().map_or(0.0, TimelineEntry::end) + d,
        };
        let start = (anchor + tween.delay).max(0.0);
        self.entries.push(TimelineEntry { tween, start });
        self
    }

    /// [`Timeline::add`] with a textual position such as `"-=0.8"`.
    pub fn add_at(self, tween: Tween, position: &str) -> Result<Self, MotionError> {
        Ok(self.add(tween, position.parse()?))
    }

    /// Append after everything added so far.
    pub fn then(self, tween: Tween) -> Self {
        self.add(tween, Position::End)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest end time of any entry.
    pub fn duration(&self) -> f32 {
        self.entries.iter().map(TimelineEntry::end).fold(0.0, f32::max)
    }
}
