// File: crates/labchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel and point math.

/// Integer pixel rectangle, half-open on right/bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, then clip to `bounds`.
    pub fn outset_within(&self, pad: i32, bounds: &RectI32) -> Self {
        Self {
            left: clamp(self.left - pad, bounds.left, bounds.right),
            top: clamp(self.top - pad, bounds.top, bounds.bottom),
            right: clamp(self.right + pad, bounds.left, bounds.right),
            bottom: clamp(self.bottom + pad, bounds.top, bounds.bottom),
        }
    }
}

/// Float rectangle in point space (left/top/right/bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
