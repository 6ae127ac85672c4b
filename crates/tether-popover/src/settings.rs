//! Popover configuration.
//!
//! One immutable `Settings` value is built by the owner and shared (`Rc`)
//! from the popover root to every part; parts never look settings up from
//! ambient state.
//!
//! ```rust
//! use tether_core::Placement;
//! use tether_popover::{Settings, TriggerMode};
//!
//! let settings = Settings::default()
//!     .with_placement(Placement::TOP_START)
//!     .with_gap(4.0)
//!     .with_arrow(true)
//!     .with_trigger(TriggerMode::Hover);
//! assert_eq!(settings.position_options().gap, 4.0);
//! ```

use tether_core::Placement;

use crate::resolve::{DEFAULT_ARROW_SIZE, DEFAULT_GAP, Offsets, PositionOptions};

/// What opens the popover from its trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TriggerMode {
    #[default]
    Click,
    Hover,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub placement: Placement,
    /// Perpendicular distance between trigger and panel.
    pub gap: f32,
    pub offsets: Offsets,
    pub with_arrow: bool,
    pub arrow_size: f32,
    pub trigger: TriggerMode,
    pub close_on_outside_click: bool,
    pub close_on_escape: bool,
    pub disabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placement: Placement::BOTTOM,
            gap: DEFAULT_GAP,
            offsets: Offsets::default(),
            with_arrow: false,
            arrow_size: DEFAULT_ARROW_SIZE,
            trigger: TriggerMode::Click,
            close_on_outside_click: true,
            close_on_escape: true,
            disabled: false,
        }
    }
}

impl Settings {
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_offsets(mut self, offsets: Offsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn with_arrow(mut self, on: bool) -> Self {
        self.with_arrow = on;
        self
    }

    pub fn with_arrow_size(mut self, size: f32) -> Self {
        self.arrow_size = size;
        self
    }

    pub fn with_trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn close_on_outside_click(mut self, on: bool) -> Self {
        self.close_on_outside_click = on;
        self
    }

    pub fn close_on_escape(mut self, on: bool) -> Self {
        self.close_on_escape = on;
        self
    }

    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            has_arrow: self.with_arrow,
            arrow_size: self.arrow_size,
            gap: self.gap,
            offsets: self.offsets,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn loads_partial_json() {
        let s: Settings = serde_json::from_str(
            r#"{ "placement": "right-end", "with_arrow": true, "offsets": { "right": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(s.placement, Placement::RIGHT_END);
        assert!(s.with_arrow);
        assert_eq!(s.offsets.right, 2.0);
        assert_eq!(s.gap, DEFAULT_GAP);
        assert_eq!(s.trigger, TriggerMode::Click);
    }

    #[test]
    fn rejects_unknown_placement() {
        let err = serde_json::from_str::<Settings>(r#"{ "placement": "middle" }"#).unwrap_err();
        assert!(err.to_string().contains("unknown placement"));
    }

    #[test]
    fn serializes_placement_by_name() {
        let json = serde_json::to_value(Settings::default().with_trigger(TriggerMode::Hover))
            .unwrap();
        assert_eq!(json["placement"], "bottom");
        assert_eq!(json["trigger"], "hover");
    }
}
