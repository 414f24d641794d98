//! Contribution City renders a week of GitHub contributions as an isometric night-time city.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: a [`ContributionSource`] yields a [`ContributionCalendar`]
//! 2. **Validate**: the last seven days become a [`ContributionWindow`]
//! 3. **Compose**: [`SceneComposer`] places a lamp or a building per day, plus road, grass,
//!    car and sky, as depth-keyed [`Drawable`]s
//! 4. **Serialize**: drawables are painted back to front into one self-contained SVG
//!
//! Rendering is pure and single-threaded. Window lit state and star placement are the only
//! random elements and are drawn from an injected [`RandomSource`], so a fixed seed gives a
//! byte-identical document.
#![forbid(unsafe_code)]

mod foundation;
mod pipeline;
mod scene;
mod source;
mod svg;

/// Output helpers: SVG files and PNG previews.
pub mod output;
/// Projection and drawing primitives.
pub mod render;

pub use foundation::core::{Canvas, FaceColorSet, GridPoint, Rgb8, ScreenPoint};
pub use foundation::error::{CityError, CityResult};
pub use foundation::math::{Fnv1a64, RandomSource, Rng64, seed_from_date};
pub use pipeline::{
    RenderOptions, render_calendar, render_city, render_from_source, render_with_rng,
};
pub use render::block::{Block, block_markup, draw_block};
pub use render::font::draw_voxel_text;
pub use render::projection::{CANVAS, IsoProjection};
pub use scene::compose::{
    BuildingPlan, DayStructure, Drawable, Scene, SceneComposer, Star, StructureKind,
    building_height, day_depth, day_origin, plan_day, window_rows,
};
pub use scene::depth::depth_sorted;
pub use scene::model::{
    ContributionCalendar, ContributionDay, ContributionWeek, ContributionWindow, DayRecord,
    WINDOW_DAYS, Weekday,
};
pub use source::ContributionSource;
pub use source::fixture::{FixtureSource, parse_calendar_json};
pub use source::github::{DEFAULT_ENDPOINT, GithubSource, GraphQlResponse};
pub use svg::document::serialize_scene;
