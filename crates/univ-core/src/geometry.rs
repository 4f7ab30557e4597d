//! Points, rectangles, anchors and the pixel grid
//!
//! The layout engine works in pixels, the mesh lives in local units.
//! Everything that translates between the two, or decides where a text
//! block hangs inside its rectangle, sits here.

// this_file: crates/univ-core/src/geometry.rs

use std::ops::{Add, Mul, Sub};

/// A 2D point or size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in local units, y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width, height)
    }

    pub fn x_min(&self) -> f32 {
        self.x
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_min(&self) -> f32 {
        self.y
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Where a text block hangs inside its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAnchor {
    UpperLeft,
    UpperCenter,
    UpperRight,
    #[default]
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// The horizontal half of an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl TextAnchor {
    /// Normalized pivot: x is 0 (left) .. 1 (right), y is 0 (lower) .. 1 (upper)
    pub fn pivot(self) -> Vec2 {
        let x = match self.horizontal() {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => 0.5,
            HorizontalAlign::Right => 1.0,
        };
        let y = match self {
            Self::UpperLeft | Self::UpperCenter | Self::UpperRight => 1.0,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => 0.5,
            Self::LowerLeft | Self::LowerCenter | Self::LowerRight => 0.0,
        };
        Vec2::new(x, y)
    }

    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::UpperLeft | Self::MiddleLeft | Self::LowerLeft => HorizontalAlign::Left,
            Self::UpperCenter | Self::MiddleCenter | Self::LowerCenter => HorizontalAlign::Center,
            Self::UpperRight | Self::MiddleRight | Self::LowerRight => HorizontalAlign::Right,
        }
    }
}

/// The rectangle corner the pixel grid is measured from for this anchor
///
/// Right-pivoted anchors measure from `x_max`, everything else from `x_min`.
/// Lower anchors measure from `y_min`, everything else from `y_max`.
pub fn reference_point(rect: &Rect, anchor: TextAnchor) -> Vec2 {
    let pivot = anchor.pivot();
    let x = if pivot.x == 1.0 {
        rect.x_max()
    } else {
        rect.x_min()
    };
    let y = if pivot.y == 0.0 {
        rect.y_min()
    } else {
        rect.y_max()
    };
    Vec2::new(x, y)
}

/// Snap a point onto the device pixel grid
///
/// Identity unless `pixel_perfect` is set and the scale is usable.
pub fn pixel_adjust_point(point: Vec2, scale_factor: f32, pixel_perfect: bool) -> Vec2 {
    if !pixel_perfect || !scale_factor.is_finite() || scale_factor <= 0.0 {
        return point;
    }
    Vec2::new(
        (point.x * scale_factor).round() / scale_factor,
        (point.y * scale_factor).round() / scale_factor,
    )
}

/// Sub-pixel distance between the anchor's reference point and the grid
pub fn rounding_offset(
    rect: &Rect,
    anchor: TextAnchor,
    scale_factor: f32,
    pixel_perfect: bool,
) -> Vec2 {
    let reference = reference_point(rect, anchor);
    pixel_adjust_point(reference, scale_factor, pixel_perfect) - reference
}
