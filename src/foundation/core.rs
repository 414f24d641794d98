use std::fmt;

/// Screen-space point in canvas units. `x` grows right, `y` grows down.
pub type ScreenPoint = kurbo::Point;

/// Logical scene coordinate: `gx`/`gy` span the ground plane in tiles, `gz` is height in
/// canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPoint {
    pub gx: f64,
    pub gy: f64,
    pub gz: f64,
}

impl GridPoint {
    pub const fn new(gx: f64, gy: f64, gz: f64) -> Self {
        Self { gx, gy, gz }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Opaque sRGB color, written into markup as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill colors for the three visible faces of a block.
///
/// `None` on a face suppresses that polygon entirely. By convention `top` is the brightest
/// and `left` the darkest, which is all the shading the scene gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceColorSet {
    pub top: Option<Rgb8>,
    pub right: Option<Rgb8>,
    pub left: Option<Rgb8>,
}

impl FaceColorSet {
    pub const fn solid(top: Rgb8, right: Rgb8, left: Rgb8) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            left: Some(left),
        }
    }

    /// Flat mark: only the top face is drawn.
    pub const fn top_only(top: Rgb8) -> Self {
        Self {
            top: Some(top),
            right: None,
            left: None,
        }
    }

    pub fn has_sides(&self) -> bool {
        self.right.is_some() || self.left.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
