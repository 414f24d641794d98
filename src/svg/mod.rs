//! SVG document assembly.

pub(crate) mod document;
