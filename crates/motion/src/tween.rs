//! Single property animations and stagger helpers.

use core::fmt;

use serde::{Serialize, Serializer};

/// Easing curve, serialized by its runtime name (`power3.out`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1Out,
    #[default]
    Power2Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
            Ease::Power3Out => "power3.out",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Animated properties. Unset properties are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl TweenVars {
    /// Fully visible at the natural position.
    pub fn settled() -> Self {
        Self::default().opacity(1.0).y(0.0)
    }

    /// Transparent and shifted down by `y` pixels.
    pub fn hidden_below(y: f32) -> Self {
        Self::default().opacity(0.0).y(y)
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One animation of the elements matched by `target` (a CSS selector).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tween {
    pub target: String,
    #[serde(skip_serializing_if = "TweenVars::is_empty")]
    pub from: TweenVars,
    #[serde(skip_serializing_if = "TweenVars::is_empty")]
    pub to: TweenVars,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    /// Per-element offset when `target` matches several elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f32>,
}

impl Tween {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            from: TweenVars::default(),
            to: TweenVars::default(),
            duration: 0.5,
            delay: 0.0,
            ease: Ease::default(),
            stagger: None,
        }
    }

    /// Animate from `vars` to the element's natural state.
    pub fn starting(mut self, vars: TweenVars) -> Self {
        self.from = vars;
        self
    }

    /// Animate from the current state to `vars`.
    pub fn ending(mut self, vars: TweenVars) -> Self {
        self.to = vars;
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, each: f32) -> Self {
        self.stagger = Some(each);
        self
    }

    /// Time until the last of `count` matched elements finishes.
    pub fn total_duration(&self, count: usize) -> f32 {
        let spread = match (self.stagger, count) {
            (Some(each), n) if n > 1 => each * (n - 1) as f32,
            _ => 0.0,
        };
        self.delay + spread + self.duration
    }
}

/// Start offsets for `count` elements spaced `each` seconds apart.
pub fn stagger(count: usize, each: f32) -> Vec<f32> {
    (0..count).map(|i| i as f32 * each).collect()
}

/// Grid columns for a viewport width in CSS pixels.
pub fn cards_per_row(viewport_width: u32) -> usize {
    if viewport_width >= 1024 {
        3
    } else if viewport_width >= 768 {
        2
    } else {
        1
    }
}

/// Row of the card at `index` in a grid of `per_row` columns.
pub fn row_of(index: usize, per_row: usize) -> usize {
    index / per_row.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ease_uses_runtime_names() {
        assert_eq!(Ease::Power3Out.to_string(), "power3.out");
        assert_eq!(serde_json::to_string(&Ease::Power2InOut).unwrap(), "\"power2.inOut\"");
        assert_eq!(Ease::default(), Ease::Power2Out);
    }

    #[test]
    fn tween_json_omits_unset_properties() {
        let tween = Tween::new(".animate-detail-content")
            .starting(TweenVars::hidden_below(40.0).scale(0.96))
            .duration(0.9)
            .ease(Ease::Power3Out);
        let json = serde_json::to_value(&tween).unwrap();
        assert_eq!(json["target"], ".animate-detail-content");
        assert_eq!(json["from"]["y"], 40.0);
        assert!(json["from"].get("x").is_none());
        assert!(json.get("to").is_none());
        assert!(json.get("stagger").is_none());
        assert_eq!(json["ease"], "power3.out");
    }

    #[test]
    fn total_duration_accounts_for_stagger_and_delay() {
        let tween = Tween::new(".animate-contact-block")
            .duration(0.8)
            .stagger(0.2)
            .delay(0.3);
        assert!((tween.total_duration(3) - 1.5).abs() < 1e-5);
        assert!((tween.total_duration(1) - 1.1).abs() < 1e-5);
        assert!((tween.total_duration(0) - 1.1).abs() < 1e-5);
    }

    #[test]
    fn stagger_offsets() {
        assert_eq!(stagger(0, 0.1), Vec::<f32>::new());
        let offsets = stagger(4, 0.5);
        assert_eq!(offsets, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn breakpoints() {
        assert_eq!(cards_per_row(1440), 3);
        assert_eq!(cards_per_row(1024), 3);
        assert_eq!(cards_per_row(1023), 2);
        assert_eq!(cards_per_row(768), 2);
        assert_eq!(cards_per_row(767), 1);
        assert_eq!(cards_per_row(0), 1);
    }

    #[test]
    fn rows_fill_left_to_right() {
        let rows: Vec<_> = (0..6).map(|i| row_of(i, 3)).collect();
        assert_eq!(rows, vec![0, 0, 0, 1, 1, 1]);
        assert_eq!(row_of(5, 0), 5);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        /// Property: every row holds at most `per_row` cards and rows never go backwards.
        #[test]
        fn rows_are_monotonic(count in 0usize..60, width in 0u32..2000) {
            let per_row = cards_per_row(width);
            let rows: Vec<_> = (0..count).map(|i| row_of(i, per_row)).collect();
            for pair in rows.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            for row in 0..rows.last().map_or(0, |r| r + 1) {
                prop_assert!(rows.iter().filter(|r| **r == row).count() <= per_row);
            }
        }
    }
}
