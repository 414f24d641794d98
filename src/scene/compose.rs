use std::fmt;

use tracing::{debug, info};

use crate::{
    foundation::{
        core::{Canvas, FaceColorSet, GridPoint, Rgb8},
        error::CityResult,
        math::RandomSource,
    },
    render::{
        block::{Block, draw_block, fmt_coord},
        font::{CELL_HEIGHT, GLYPH_ROWS, centered_start_gy, draw_voxel_text},
        projection::{CANVAS, IsoProjection},
    },
    scene::model::{ContributionWindow, DayRecord},
};

/// `gx` of the lane every day's structure stands in.
pub const LANE_GX: f64 = 5.0;
/// Distance between consecutive days along `gy`.
pub const DAY_SPACING: f64 = 1.6;
/// Footprint of a building, in tiles, along both ground axes.
pub const BUILDING_FOOTPRINT: f64 = 1.0;
/// Height of the grass slab that structures stand on.
pub const GROUND_HEIGHT: f64 = 4.0;
/// Height of the road slab.
pub const ROAD_HEIGHT: f64 = 3.0;

pub const BASE_BUILDING_HEIGHT: f64 = 30.0;
pub const HEIGHT_PER_CONTRIBUTION: f64 = 12.0;
pub const MAX_BUILDING_HEIGHT: f64 = 140.0;
/// Vertical pitch of window rows.
pub const WINDOW_ROW_HEIGHT: f64 = 12.0;
pub const LIT_PROBABILITY: f64 = 0.6;

pub const STAR_COUNT: usize = 60;
/// Stars are scattered over `y` in `[0, STAR_REGION_HEIGHT)`.
pub const STAR_REGION_HEIGHT: f64 = 150.0;

pub const GRASS_DEPTH: f64 = -1000.0;
pub const ROAD_DEPTH: f64 = -900.0;
/// Car sits above the ground layers and below every per-day structure.
pub const CAR_DEPTH: f64 = -100.0;

pub const LAMP_GLOW_RADIUS: f64 = 22.0;
pub const LAMP_GLOW_OPACITY: f64 = 0.25;

pub const DEFAULT_TITLE: &str = "Contribution City";

const GRASS: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x2a4a2a), Rgb8::hex(0x1f3a1f), Rgb8::hex(0x15301a));
const ROAD: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x2a2a2a), Rgb8::hex(0x1f1f1f), Rgb8::hex(0x181818));
const LANE_DASH: FaceColorSet = FaceColorSet::top_only(Rgb8::hex(0xffff66));
const BUILDING: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x6a6a5a), Rgb8::hex(0x5a5a4a), Rgb8::hex(0x3a3a2a));
const WINDOW_LIT: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0xfff1b8), Rgb8::hex(0xffd866), Rgb8::hex(0xe6b547));
const WINDOW_DARK: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x3b4656), Rgb8::hex(0x2c3646), Rgb8::hex(0x1f2733));
const LAMP_POLE: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x4a4a4a), Rgb8::hex(0x3a3a3a), Rgb8::hex(0x2a2a2a));
const LAMP_HEAD: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x2f2f2f), Rgb8::hex(0x262626), Rgb8::hex(0x1c1c1c));
const LAMP_GLASS: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0xfff2b3), Rgb8::hex(0xffe07a), Rgb8::hex(0xf5c84c));
const CAR_BODY: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x3d4a66), Rgb8::hex(0x2e3850), Rgb8::hex(0x1f263a));
const CAR_CABIN: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0x56637f), Rgb8::hex(0x434e66), Rgb8::hex(0x2f374a));
const HEADLIGHT: FaceColorSet =
    FaceColorSet::solid(Rgb8::hex(0xffff99), Rgb8::hex(0xffee77), Rgb8::hex(0xeedd55));
const GLOW: Rgb8 = Rgb8::hex(0xffdd66);
const LABEL_DAY: Rgb8 = Rgb8::hex(0x8899aa);
const LABEL_COUNT: Rgb8 = Rgb8::hex(0xffdd66);

/// Structural object categories, also used as the SVG group class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureKind {
    Grass,
    Road,
    Car,
    Lamp,
    Building,
}

impl StructureKind {
    pub fn class(self) -> &'static str {
        match self {
            StructureKind::Grass => "grass",
            StructureKind::Road => "road",
            StructureKind::Car => "car",
            StructureKind::Lamp => "lamp",
            StructureKind::Building => "building",
        }
    }
}

/// A structure waiting to be painted: a depth key plus a one-shot markup producer.
pub struct Drawable {
    pub depth: f64,
    pub kind: StructureKind,
    draw: Box<dyn FnOnce() -> CityResult<String>>,
}

impl Drawable {
    pub fn new(
        depth: f64,
        kind: StructureKind,
        draw: impl FnOnce() -> CityResult<String> + 'static,
    ) -> Self {
        Self {
            depth,
            kind,
            draw: Box::new(draw),
        }
    }

    /// Produce the markup fragment. Consumes the drawable.
    pub fn draw(self) -> CityResult<String> {
        (self.draw)()
    }
}

impl fmt::Debug for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawable")
            .field("depth", &self.depth)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Derived dimensions of one day's building.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingPlan {
    pub height: f64,
    pub window_rows: u32,
    /// Lit state of rows `1..window_rows`; the ground row has no windows.
    pub lit_rows: Vec<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DayStructure {
    Lamp,
    Building(BuildingPlan),
}

impl DayStructure {
    pub fn kind(&self) -> StructureKind {
        match self {
            DayStructure::Lamp => StructureKind::Lamp,
            DayStructure::Building(_) => StructureKind::Building,
        }
    }
}

/// A single-pixel star in the sky.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Twinkle animation delay in seconds.
    pub delay_s: f64,
}

/// Everything one render needs, ready for serialization.
#[derive(Debug)]
pub struct Scene {
    pub canvas: Canvas,
    pub title: String,
    pub total: u64,
    pub today: u32,
    pub stars: Vec<Star>,
    /// Structural objects in composition order; see [`crate::depth_sorted`].
    pub structures: Vec<Drawable>,
}

/// `min(30 + 12 * count, 140)`.
pub fn building_height(count: u32) -> f64 {
    (BASE_BUILDING_HEIGHT + f64::from(count) * HEIGHT_PER_CONTRIBUTION).min(MAX_BUILDING_HEIGHT)
}

/// `floor(height / 12)`.
pub fn window_rows(height: f64) -> u32 {
    (height / WINDOW_ROW_HEIGHT).floor().max(0.0) as u32
}

/// Back-bottom corner of day `index`'s plot.
pub fn day_origin(index: usize) -> GridPoint {
    GridPoint::new(LANE_GX, index as f64 * DAY_SPACING, GROUND_HEIGHT)
}

/// Painter's depth of day `index`: its ground-plane position sum.
pub fn day_depth(index: usize) -> f64 {
    let o = day_origin(index);
    o.gx + o.gy
}

/// Decide what stands on `day`'s plot. Draws one sample per window row above the ground.
pub fn plan_day<R: RandomSource + ?Sized>(day: &DayRecord, rng: &mut R) -> DayStructure {
    if day.contribution_count == 0 {
        return DayStructure::Lamp;
    }
    let height = building_height(day.contribution_count);
    let rows = window_rows(height);
    let lit_rows = (1..rows).map(|_| rng.chance(LIT_PROBABILITY)).collect();
    DayStructure::Building(BuildingPlan {
        height,
        window_rows: rows,
        lit_rows,
    })
}

/// Turns a contribution window into a [`Scene`].
#[derive(Clone, Debug)]
pub struct SceneComposer {
    projection: IsoProjection,
    title: String,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(IsoProjection::DESIGN)
    }
}

impl SceneComposer {
    pub fn new(projection: IsoProjection) -> Self {
        Self {
            projection,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Compose the scene. Window lit state is drawn first, day by day, then star positions.
    #[tracing::instrument(skip_all, fields(total = window.total()))]
    pub fn compose<R: RandomSource + ?Sized>(
        &self,
        window: &ContributionWindow,
        rng: &mut R,
    ) -> CityResult<Scene> {
        let proj = self.projection;
        let mut structures = vec![
            Drawable::new(GRASS_DEPTH, StructureKind::Grass, move || grass_markup(&proj)),
            Drawable::new(ROAD_DEPTH, StructureKind::Road, move || road_markup(&proj)),
            Drawable::new(CAR_DEPTH, StructureKind::Car, move || car_markup(&proj)),
        ];

        for (index, day) in window.days().iter().enumerate() {
            let plan = plan_day(day, rng);
            let origin = day_origin(index);
            let depth = day_depth(index);
            let label = day.weekday.abbrev();
            let count = day.contribution_count;
            debug!(
                date = %day.date,
                count,
                kind = plan.kind().class(),
                depth,
                "placed day"
            );
            let drawable = match plan {
                DayStructure::Lamp => Drawable::new(depth, StructureKind::Lamp, move || {
                    lamp_markup(&proj, origin, label)
                }),
                DayStructure::Building(plan) => {
                    Drawable::new(depth, StructureKind::Building, move || {
                        building_markup(&proj, origin, &plan, label, count)
                    })
                }
            };
            structures.push(drawable);
        }

        let stars = (0..STAR_COUNT)
            .map(|i| Star {
                x: rng.range_f64(0.0, f64::from(CANVAS.width)),
                y: rng.range_f64(0.0, STAR_REGION_HEIGHT),
                delay_s: (i % 10) as f64 * 0.3,
            })
            .collect();

        info!(
            structures = structures.len(),
            today = window.today().contribution_count,
            "composed scene"
        );

        Ok(Scene {
            canvas: CANVAS,
            title: self.title.clone(),
            total: window.total(),
            today: window.today().contribution_count,
            stars,
            structures,
        })
    }
}

fn open_group(out: &mut String, kind: StructureKind) {
    out.push_str(&format!("<g class=\"{}\">", kind.class()));
}

fn grass_markup(proj: &IsoProjection) -> CityResult<String> {
    let mut out = String::new();
    open_group(&mut out, StructureKind::Grass);
    draw_block(
        proj,
        &Block::new(3.8, -1.0, 0.0, 2.8, 12.0, GROUND_HEIGHT, GRASS),
        &mut out,
    )?;
    out.push_str("</g>");
    Ok(out)
}

fn road_markup(proj: &IsoProjection) -> CityResult<String> {
    let mut out = String::new();
    open_group(&mut out, StructureKind::Road);
    draw_block(
        proj,
        &Block::new(6.6, -1.0, 0.0, 1.2, 12.0, ROAD_HEIGHT, ROAD),
        &mut out,
    )?;
    for i in 0..12 {
        let gy = -0.8 + f64::from(i);
        draw_block(
            proj,
            &Block::new(7.15, gy, ROAD_HEIGHT, 0.1, 0.45, 0.0, LANE_DASH),
            &mut out,
        )?;
    }
    out.push_str("</g>");
    Ok(out)
}

fn car_markup(proj: &IsoProjection) -> CityResult<String> {
    let mut out = String::new();
    open_group(&mut out, StructureKind::Car);
    draw_block(
        proj,
        &Block::new(6.95, 2.6, ROAD_HEIGHT, 0.65, 1.3, 9.0, CAR_BODY),
        &mut out,
    )?;
    draw_block(
        proj,
        &Block::new(7.03, 2.9, ROAD_HEIGHT + 9.0, 0.49, 0.6, 7.0, CAR_CABIN),
        &mut out,
    )?;
    for gx in [7.0, 7.43] {
        draw_block(
            proj,
            &Block::new(gx, 3.9, ROAD_HEIGHT + 3.0, 0.12, 0.04, 3.0, HEADLIGHT),
            &mut out,
        )?;
    }
    out.push_str("</g>");
    Ok(out)
}

fn label_height() -> f64 {
    GLYPH_ROWS as f64 * CELL_HEIGHT
}

fn lamp_markup(proj: &IsoProjection, origin: GridPoint, label: &str) -> CityResult<String> {
    let cx = origin.gx + BUILDING_FOOTPRINT / 2.0;
    let cy = origin.gy + BUILDING_FOOTPRINT / 2.0;
    let base = origin.gz;

    let mut out = String::new();
    open_group(&mut out, StructureKind::Lamp);

    let glow = proj.project_checked(GridPoint::new(cx, cy, base))?;
    out.push_str(&format!(
        "<circle class=\"lamp-glow\" cx=\"{}\" cy=\"{}\" r=\"{LAMP_GLOW_RADIUS}\" fill=\"{GLOW}\" opacity=\"{LAMP_GLOW_OPACITY}\"/>",
        fmt_coord(glow.x),
        fmt_coord(glow.y),
    ));

    // (half-width, bottom, height, colors) stacked around the lamp's centre line.
    let parts = [
        (0.05, 0.0, 48.0, LAMP_POLE),
        (0.16, 48.0, 3.0, LAMP_HEAD),
        (0.12, 51.0, 7.0, LAMP_GLASS),
        (0.18, 58.0, 2.0, LAMP_POLE),
    ];
    for (half, bottom, height, colors) in parts {
        draw_block(
            proj,
            &Block::new(
                cx - half,
                cy - half,
                base + bottom,
                half * 2.0,
                half * 2.0,
                height,
                colors,
            ),
            &mut out,
        )?;
    }

    let label_start = GridPoint::new(cx, centered_start_gy(cy, label), base + 66.0);
    draw_voxel_text(proj, label, label_start, LABEL_DAY, &mut out)?;

    out.push_str("</g>");
    Ok(out)
}

/// Window blocks of a building, tagged with their row. Row 0 is the ground row and has none.
fn window_blocks(origin: GridPoint, plan: &BuildingPlan) -> Vec<(usize, Block)> {
    let GridPoint { gx, gy, gz } = origin;
    let mut windows = Vec::with_capacity(plan.lit_rows.len() * 2);
    for (i, &lit) in plan.lit_rows.iter().enumerate() {
        let row = i + 1;
        let wz = gz + row as f64 * WINDOW_ROW_HEIGHT + 2.0;
        let colors = if lit { WINDOW_LIT } else { WINDOW_DARK };
        for offset in [0.18, 0.58] {
            // Even rows on the right face, odd rows on the left face.
            let mut window = if row % 2 == 0 {
                Block::new(gx + BUILDING_FOOTPRINT, gy + offset, wz, 0.04, 0.24, 7.0, colors)
            } else {
                Block::new(gx + offset, gy + BUILDING_FOOTPRINT, wz, 0.24, 0.04, 7.0, colors)
            };
            if lit {
                window = window.with_class("window");
            }
            windows.push((row, window));
        }
    }
    windows
}

fn building_markup(
    proj: &IsoProjection,
    origin: GridPoint,
    plan: &BuildingPlan,
    label: &str,
    count: u32,
) -> CityResult<String> {
    let GridPoint { gx, gy, gz } = origin;
    let mut out = String::new();
    open_group(&mut out, StructureKind::Building);

    draw_block(
        proj,
        &Block::new(
            gx,
            gy,
            gz,
            BUILDING_FOOTPRINT,
            BUILDING_FOOTPRINT,
            plan.height,
            BUILDING,
        ),
        &mut out,
    )?;

    for (_, window) in window_blocks(origin, plan) {
        draw_block(proj, &window, &mut out)?;
    }

    let cx = gx + BUILDING_FOOTPRINT / 2.0;
    let cy = gy + BUILDING_FOOTPRINT / 2.0;
    let count_text = count.to_string();
    let count_z = gz + plan.height + 5.0;
    draw_voxel_text(
        proj,
        &count_text,
        GridPoint::new(cx, centered_start_gy(cy, &count_text), count_z),
        LABEL_COUNT,
        &mut out,
    )?;
    let day_z = count_z + label_height() + 5.0;
    draw_voxel_text(
        proj,
        label,
        GridPoint::new(cx, centered_start_gy(cy, label), day_z),
        LABEL_DAY,
        &mut out,
    )?;

    out.push_str("</g>");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
