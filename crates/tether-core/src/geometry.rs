use bitflags::bitflags;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Screen-space bounding box of an element, in CSS pixels.
///
/// Mirrors what a bounding-client-rect query returns at one instant; it goes
/// stale after any scroll, resize or layout change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Rect of the given size placed at the origin. Handy for content boxes
    /// where only the dimensions matter.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    pub fn with_origin(self, left: f32, top: f32) -> Self {
        Self { top, left, ..self }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            ..self
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Which viewport edges this rect crosses. A rect exactly touching an
    /// edge does not overflow it.
    pub fn overflow_in(&self, viewport: Size) -> Overflow {
        let mut out = Overflow::empty();
        if self.top < 0.0 {
            out |= Overflow::TOP;
        }
        if self.bottom() > viewport.height {
            out |= Overflow::BOTTOM;
        }
        if self.left < 0.0 {
            out |= Overflow::LEFT;
        }
        if self.right() > viewport.width {
            out |= Overflow::RIGHT;
        }
        out
    }
}

bitflags! {
    /// Viewport edges crossed by a rect.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Overflow: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_derived() {
        let r = Rect::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(r.right(), 150.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center(), Vec2 { x: 125.0, y: 110.0 });
    }

    #[test]
    fn overflow_reports_each_crossed_edge() {
        let viewport = Size::new(200.0, 100.0);
        assert!(Rect::new(0.0, 0.0, 200.0, 100.0).overflow_in(viewport).is_empty());

        let r = Rect::new(-5.0, 90.0, 50.0, 20.0);
        assert_eq!(r.overflow_in(viewport), Overflow::LEFT | Overflow::BOTTOM);

        let huge = Rect::new(-1.0, -1.0, 500.0, 500.0);
        assert_eq!(huge.overflow_in(viewport), Overflow::all());
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    }
}
