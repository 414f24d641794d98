use crate::foundation::{
    core::{Canvas, GridPoint, ScreenPoint},
    error::{CityError, CityResult},
};

/// Output canvas in design units.
pub const CANVAS: Canvas = Canvas {
    width: 900,
    height: 500,
};

/// Fixed isometric projection from grid space onto the canvas.
///
/// ```text
/// x = origin_x + (gx - gy) * tile_width
/// y = origin_y + (gx + gy) * tile_height - gz
/// ```
///
/// Growing `gx` moves down-right on screen, growing `gy` moves down-left, so a larger
/// `gx + gy` is nearer to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoProjection {
    pub origin_x: f64,
    pub origin_y: f64,
    pub tile_width: f64,
    pub tile_height: f64,
}

impl IsoProjection {
    pub const DESIGN: Self = Self {
        origin_x: 450.0,
        origin_y: 120.0,
        tile_width: 36.0,
        tile_height: 18.0,
    };

    pub fn project(&self, gx: f64, gy: f64, gz: f64) -> ScreenPoint {
        ScreenPoint::new(
            self.origin_x + (gx - gy) * self.tile_width,
            self.origin_y + (gx + gy) * self.tile_height - gz,
        )
    }

    pub fn project_point(&self, p: GridPoint) -> ScreenPoint {
        self.project(p.gx, p.gy, p.gz)
    }

    /// Project and reject non-finite results instead of letting NaN reach the document.
    pub fn project_checked(&self, p: GridPoint) -> CityResult<ScreenPoint> {
        let s = self.project_point(p);
        if !s.x.is_finite() || !s.y.is_finite() {
            return Err(CityError::invariant(format!(
                "projection of ({}, {}, {}) is not finite",
                p.gx, p.gy, p.gz
            )));
        }
        Ok(s)
    }
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::DESIGN
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/projection.rs"]
mod tests;
