//! # Placement resolution
//!
//! `resolve` turns two measured rectangles and a requested [`Placement`] into
//! fixed screen coordinates for the floating panel:
//!
//! 1. the panel is put `gap` pixels off the requested side of the trigger and
//!    aligned on the cross axis (centred, `-start` or `-end`);
//! 2. `auto` picks the side with the most viewport room (ties go to bottom);
//! 3. if the panel then crosses the viewport edge on its own side, the side is
//!    mirrored once (`top`↔`bottom`, `left`↔`right`) and the base recomputed.
//!    There is no second attempt and no clamping;
//! 4. offsets nudge the panel towards the side they name;
//! 5. with an arrow, a patch positions it on the panel edge facing the trigger.
//!
//! ```rust
//! use tether_core::*;
//! use tether_popover::resolve::{PositionOptions, resolve};
//!
//! let trigger = Rect::new(100.0, 100.0, 50.0, 20.0);
//! let content = Rect::from_size(Size::new(80.0, 40.0));
//! let viewport = Size::new(1024.0, 768.0);
//!
//! let r = resolve(trigger, content, viewport, Placement::BOTTOM, &PositionOptions::default());
//! assert_eq!((r.top, r.left), (128.0, 85.0));
//! ```
//!
//! The function is pure: no DOM access, no clock, no hidden state.

use tether_core::*;

/// Space between trigger and panel when none is configured.
pub const DEFAULT_GAP: f32 = 8.0;
/// Edge length of the arrow square.
pub const DEFAULT_ARROW_SIZE: f32 = 8.0;
/// Distance below the trigger used when positioning had to fall back.
pub const FALLBACK_GAP: f32 = 8.0;

/// Per-side pixel nudges. Each one moves the panel towards the side it names.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Offsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Offsets {
    fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionOptions {
    pub has_arrow: bool,
    pub arrow_size: f32,
    pub gap: f32,
    pub offsets: Offsets,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            has_arrow: false,
            arrow_size: DEFAULT_ARROW_SIZE,
            gap: DEFAULT_GAP,
            offsets: Offsets::default(),
        }
    }
}

/// Vertical half of the arrow patch, relative to the panel box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalEdge {
    Top(f32),
    Bottom(f32),
}

/// Horizontal half of the arrow patch, relative to the panel box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalEdge {
    Left(f32),
    Right(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowPosition {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

impl ArrowPosition {
    /// `(property, px)` pairs for an absolutely positioned arrow element.
    pub fn style(&self) -> [(&'static str, f32); 2] {
        let v = match self.vertical {
            VerticalEdge::Top(px) => ("top", px),
            VerticalEdge::Bottom(px) => ("bottom", px),
        };
        let h = match self.horizontal {
            HorizontalEdge::Left(px) => ("left", px),
            HorizontalEdge::Right(px) => ("right", px),
        };
        [v, h]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositioningResult {
    pub top: f32,
    pub left: f32,
    /// Placement actually used; differs from the request after a flip or for `auto`.
    pub actual: Placement,
    pub arrow: Option<ArrowPosition>,
}

impl PositioningResult {
    /// Deterministic stand-in used when resolution was rejected: directly
    /// below the trigger, left edges aligned, no arrow.
    pub fn fallback(trigger: Rect) -> Self {
        Self {
            top: trigger.bottom() + FALLBACK_GAP,
            left: trigger.left,
            actual: Placement::BOTTOM_START,
            arrow: None,
        }
    }

    pub fn panel_rect(&self, content: Size) -> Rect {
        Rect::new(self.left, self.top, content.width, content.height)
    }

    /// Viewport edges the placed panel still crosses. Resolution never
    /// clamps; callers that want scroll-into-view corrections start here.
    pub fn overflow(&self, content: Size, viewport: Size) -> Overflow {
        self.panel_rect(content).overflow_in(viewport)
    }
}

/// Resolves the panel position. Infallible; garbage in, garbage out.
pub fn resolve(
    trigger: Rect,
    content: Rect,
    viewport: Size,
    placement: Placement,
    options: &PositionOptions,
) -> PositioningResult {
    let content = content.size();

    let (side, align) = match placement {
        Placement::Auto => (roomiest_side(trigger, viewport), Align::Center),
        Placement::Anchored(side, align) => {
            let (top, left) = base(trigger, content, side, align, options.gap);
            if overflows(side, top, left, content, viewport) {
                (side.mirrored(), align)
            } else {
                (side, align)
            }
        }
    };

    let (mut top, mut left) = base(trigger, content, side, align, options.gap);
    apply_offsets(&mut top, &mut left, side, align, &options.offsets);

    let arrow = options
        .has_arrow
        .then(|| arrow_for(trigger, top, left, side, options.arrow_size));

    PositioningResult {
        top,
        left,
        actual: Placement::Anchored(side, align),
        arrow,
    }
}

/// `resolve` behind input validation: every number must be finite and no
/// rectangle may have a negative size.
pub fn try_resolve(
    trigger: Rect,
    content: Rect,
    viewport: Size,
    placement: Placement,
    options: &PositionOptions,
) -> Result<PositioningResult, PlacementError> {
    check_rect("trigger", trigger)?;
    check_rect("content", content)?;
    check_rect("viewport", Rect::from_size(viewport))?;
    if !options.gap.is_finite() {
        return Err(PlacementError::NonFinite { what: "gap" });
    }
    if !options.arrow_size.is_finite() {
        return Err(PlacementError::NonFinite { what: "arrow size" });
    }
    if !options.offsets.is_finite() {
        return Err(PlacementError::NonFinite { what: "offsets" });
    }
    Ok(resolve(trigger, content, viewport, placement, options))
}

fn check_rect(what: &'static str, r: Rect) -> Result<(), PlacementError> {
    if !r.is_finite() {
        return Err(PlacementError::NonFinite { what });
    }
    if r.width < 0.0 || r.height < 0.0 {
        return Err(PlacementError::NegativeSize {
            what,
            width: r.width,
            height: r.height,
        });
    }
    Ok(())
}

fn base(trigger: Rect, content: Size, side: Side, align: Align, gap: f32) -> (f32, f32) {
    let cross_x = match align {
        Align::Center => trigger.left + trigger.width / 2.0 - content.width / 2.0,
        Align::Start => trigger.left,
        Align::End => trigger.right() - content.width,
    };
    let cross_y = match align {
        Align::Center => trigger.top + trigger.height / 2.0 - content.height / 2.0,
        Align::Start => trigger.top,
        Align::End => trigger.bottom() - content.height,
    };
    match side {
        Side::Top => (trigger.top - content.height - gap, cross_x),
        Side::Bottom => (trigger.bottom() + gap, cross_x),
        Side::Left => (cross_y, trigger.left - content.width - gap),
        Side::Right => (cross_y, trigger.right() + gap),
    }
}

// Only the edge on the panel's own side counts.
fn overflows(side: Side, top: f32, left: f32, content: Size, viewport: Size) -> bool {
    match side {
        Side::Top => top < 0.0,
        Side::Bottom => top + content.height > viewport.height,
        Side::Left => left < 0.0,
        Side::Right => left + content.width > viewport.width,
    }
}

fn roomiest_side(trigger: Rect, viewport: Size) -> Side {
    let candidates = [
        (Side::Bottom, viewport.height - trigger.bottom()),
        (Side::Top, trigger.top),
        (Side::Right, viewport.width - trigger.right()),
        (Side::Left, trigger.left),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.1 > best.1 {
            best = *c;
        }
    }
    best.0
}

fn apply_offsets(top: &mut f32, left: &mut f32, side: Side, align: Align, o: &Offsets) {
    match side {
        Side::Top => *top -= o.top,
        Side::Bottom => *top += o.bottom,
        Side::Left => *left -= o.left,
        Side::Right => *left += o.right,
    }
    match (side.is_vertical(), align) {
        (_, Align::Center) => {}
        (true, Align::Start) => *left -= o.left,
        (true, Align::End) => *left += o.right,
        (false, Align::Start) => *top -= o.top,
        (false, Align::End) => *top += o.bottom,
    }
}

fn arrow_for(trigger: Rect, top: f32, left: f32, side: Side, size: f32) -> ArrowPosition {
    let half = size / 2.0;
    let mid = trigger.center();
    let along_x = HorizontalEdge::Left(mid.x - left - half);
    let along_y = VerticalEdge::Top(mid.y - top - half);
    match side {
        Side::Bottom => ArrowPosition {
            vertical: VerticalEdge::Top(-half),
            horizontal: along_x,
        },
        Side::Top => ArrowPosition {
            vertical: VerticalEdge::Bottom(-half),
            horizontal: along_x,
        },
        Side::Right => ArrowPosition {
            vertical: along_y,
            horizontal: HorizontalEdge::Left(-half),
        },
        Side::Left => ArrowPosition {
            vertical: along_y,
            horizontal: HorizontalEdge::Right(-half),
        },
    }
}
