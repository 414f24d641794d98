use crate::{
    foundation::{
        core::{FaceColorSet, GridPoint, Rgb8, ScreenPoint},
        error::{CityError, CityResult},
    },
    render::projection::IsoProjection,
};

/// Axis-aligned rectangular prism in grid space.
///
/// `origin` is the back-bottom corner (smallest `gx`, `gy`, `gz`). `width` extends along
/// `gx`, `depth` along `gy`, both in tiles; `height` extends along `gz` in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub origin: GridPoint,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub colors: FaceColorSet,
    /// Optional CSS class stamped on every emitted polygon.
    pub class: Option<&'static str>,
}

impl Block {
    pub fn new(
        gx: f64,
        gy: f64,
        gz: f64,
        width: f64,
        depth: f64,
        height: f64,
        colors: FaceColorSet,
    ) -> Self {
        Self {
            origin: GridPoint::new(gx, gy, gz),
            width,
            depth,
            height,
            colors,
            class: None,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    fn validate(&self) -> CityResult<()> {
        let o = self.origin;
        for (name, v) in [
            ("gx", o.gx),
            ("gy", o.gy),
            ("gz", o.gz),
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ] {
            if !v.is_finite() {
                return Err(CityError::invariant(format!("block {name} is not finite")));
            }
        }
        if self.width <= 0.0 || self.depth <= 0.0 {
            return Err(CityError::invariant(format!(
                "block footprint must be positive, got {}x{}",
                self.width, self.depth
            )));
        }
        if self.height < 0.0 {
            return Err(CityError::invariant(format!(
                "block height must be >= 0, got {}",
                self.height
            )));
        }
        // A flat block only makes sense as a top-only mark.
        if self.height == 0.0 && self.colors.has_sides() {
            return Err(CityError::invariant(
                "zero-height block must suppress its side faces",
            ));
        }
        Ok(())
    }
}

/// Append the markup for `block` to `out`: top, right and left faces in that order.
///
/// Only the seven corners that can be seen are projected; the back-bottom corner is always
/// hidden behind the other faces.
pub fn draw_block(proj: &IsoProjection, block: &Block, out: &mut String) -> CityResult<()> {
    block.validate()?;

    let GridPoint { gx, gy, gz } = block.origin;
    let x1 = gx + block.width;
    let y1 = gy + block.depth;
    let top = gz + block.height;

    let p = |x: f64, y: f64, z: f64| proj.project_checked(GridPoint::new(x, y, z));
    let t0 = p(gx, gy, top)?;
    let t1 = p(x1, gy, top)?;
    let t2 = p(x1, y1, top)?;
    let t3 = p(gx, y1, top)?;
    let b1 = p(x1, gy, gz)?;
    let b2 = p(x1, y1, gz)?;
    let b3 = p(gx, y1, gz)?;

    let c = block.colors;
    if let Some(fill) = c.top {
        push_polygon(out, &[t0, t1, t2, t3], fill, block.class);
    }
    if let Some(fill) = c.right {
        push_polygon(out, &[t1, t2, b2, b1], fill, block.class);
    }
    if let Some(fill) = c.left {
        push_polygon(out, &[t3, t2, b2, b3], fill, block.class);
    }
    Ok(())
}

/// Convenience wrapper returning the fragment as a fresh string.
pub fn block_markup(proj: &IsoProjection, block: &Block) -> CityResult<String> {
    let mut out = String::new();
    draw_block(proj, block, &mut out)?;
    Ok(out)
}

pub(crate) fn push_polygon(
    out: &mut String,
    points: &[ScreenPoint],
    fill: Rgb8,
    class: Option<&str>,
) {
    out.push_str("<polygon ");
    if let Some(class) = class {
        out.push_str(&format!("class=\"{class}\" "));
    }
    out.push_str("points=\"");
    for (i, pt) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{},{}", fmt_coord(pt.x), fmt_coord(pt.y)));
    }
    out.push_str(&format!("\" fill=\"{fill}\"/>"));
}

/// Fixed two-decimal formatting, with negative zero folded into zero.
pub(crate) fn fmt_coord(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_string() } else { s }
}

#[cfg(test)]
#[path = "../../tests/unit/render/block.rs"]
mod tests;
