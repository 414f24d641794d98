use crate::{
    foundation::error::{CityError, CityResult},
    scene::compose::Drawable,
};

/// Order drawables back to front (ascending depth) for the painter's algorithm.
///
/// The sort is stable, so equal depths keep composition order. This ordering is the only
/// occlusion mechanism the renderer has.
pub fn depth_sorted(mut drawables: Vec<Drawable>) -> CityResult<Vec<Drawable>> {
    if let Some(bad) = drawables.iter().find(|d| !d.depth.is_finite()) {
        return Err(CityError::invariant(format!(
            "{} has non-finite depth {}",
            bad.kind.class(),
            bad.depth
        )));
    }
    drawables.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    Ok(drawables)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/depth.rs"]
mod tests;
