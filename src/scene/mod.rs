//! Scene composition: from a week of contributions to depth-ordered drawables.

pub(crate) mod compose;
pub(crate) mod depth;
pub(crate) mod model;
