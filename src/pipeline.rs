use tracing::info;

use crate::{
    foundation::{
        error::CityResult,
        math::{RandomSource, Rng64, seed_from_date},
    },
    render::projection::IsoProjection,
    scene::{
        compose::SceneComposer,
        model::{ContributionCalendar, ContributionWindow},
    },
    source::ContributionSource,
    svg::document::serialize_scene,
};

/// Knobs for one render.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Seed for window lit state and star placement. `None` derives one from today's date,
    /// so repeated runs on the same day produce the same picture.
    pub seed: Option<u64>,
    /// Title override.
    pub title: Option<String>,
    pub projection: IsoProjection,
}

impl RenderOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn resolve_seed(&self, window: &ContributionWindow) -> u64 {
        self.seed.unwrap_or_else(|| seed_from_date(&window.today().date))
    }

    fn composer(&self) -> SceneComposer {
        let composer = SceneComposer::new(self.projection);
        match &self.title {
            Some(t) => composer.with_title(t.clone()),
            None => composer,
        }
    }
}

/// Compose and serialize with an explicit random source.
pub fn render_with_rng<R: RandomSource + ?Sized>(
    window: &ContributionWindow,
    opts: &RenderOptions,
    rng: &mut R,
) -> CityResult<String> {
    let scene = opts.composer().compose(window, rng)?;
    serialize_scene(scene)
}

/// Render a validated window to an SVG document.
pub fn render_city(window: &ContributionWindow, opts: &RenderOptions) -> CityResult<String> {
    let seed = opts.resolve_seed(window);
    info!(seed, today = %window.today().date, "rendering city");
    render_with_rng(window, opts, &mut Rng64::new(seed))
}

/// Validate the last seven days of `calendar` and render them.
pub fn render_calendar(
    calendar: &ContributionCalendar,
    opts: &RenderOptions,
) -> CityResult<String> {
    let window = ContributionWindow::from_calendar(calendar)?;
    render_city(&window, opts)
}

/// Fetch from `source`, then render.
pub fn render_from_source(
    source: &dyn ContributionSource,
    opts: &RenderOptions,
) -> CityResult<String> {
    let calendar = source.fetch_calendar()?;
    let window = ContributionWindow::from_calendar(&calendar)?;
    let summary = window
        .days()
        .iter()
        .map(|d| format!("{}: {}", d.date, d.contribution_count))
        .collect::<Vec<_>>()
        .join(", ");
    info!(total = window.total(), days = %summary, "last 7 days");
    render_city(&window, opts)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
