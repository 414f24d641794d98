//! Persisting rendered documents.

use std::path::Path;

use anyhow::Context as _;
use tracing::info;

use crate::foundation::error::{CityError, CityResult};

/// Create `path`'s parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> CityResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write the SVG document to `path`, creating the parent directory when needed.
pub fn write_svg(path: &Path, svg: &str) -> CityResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
    info!(path = %path.display(), bytes = svg.len(), "wrote svg");
    Ok(())
}

/// A straight-alpha RGBA8 raster of a document.
#[derive(Clone, Debug)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> CityResult<Raster> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opts).context("parse rendered svg")?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| CityError::invariant("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba8);
    Ok(Raster {
        width: size.width(),
        height: size.height(),
        rgba8,
    })
}

/// Rasterize the document and save it as a PNG preview.
pub fn write_png(path: &Path, svg: &str) -> CityResult<()> {
    let raster = rasterize_svg(svg)?;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &raster.rgba8,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    info!(path = %path.display(), width = raster.width, height = raster.height, "wrote png");
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
