use crate::{
    foundation::{
        core::{FaceColorSet, GridPoint, Rgb8},
        error::CityResult,
    },
    render::{
        block::{Block, draw_block},
        projection::IsoProjection,
    },
};

/// Glyph rows, top to bottom.
pub const GLYPH_ROWS: usize = 7;

/// Voxel size along `gx` and `gy`, in tiles.
pub const CELL_TILES: f64 = 0.09;
/// Voxel size along `gz`, in canvas units.
pub const CELL_HEIGHT: f64 = 3.0;

const TEXT_RIGHT: Rgb8 = Rgb8::hex(0x1b1e26);
const TEXT_LEFT: Rgb8 = Rgb8::hex(0x101217);

/// A bitmap glyph. `#` marks a filled cell; every row has the same width.
#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    pub rows: [&'static str; GLYPH_ROWS],
}

impl Glyph {
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.rows[row].as_bytes().get(col) == Some(&b'#')
    }
}

const BLANK: Glyph = Glyph {
    rows: ["...", "...", "...", "...", "...", "...", "..."],
};

/// Look up the glyph for an upper-case character.
pub fn glyph(ch: char) -> Option<Glyph> {
    let rows = match ch {
        '0' => [".##.", "#..#", "#..#", "#..#", "#..#", "#..#", ".##."],
        '1' => ["..#.", ".##.", "..#.", "..#.", "..#.", "..#.", ".###"],
        '2' => [".##.", "#..#", "...#", "..#.", ".#..", "#...", "####"],
        '3' => ["###.", "...#", "...#", ".##.", "...#", "...#", "###."],
        '4' => ["#..#", "#..#", "#..#", "####", "...#", "...#", "...#"],
        '5' => ["####", "#...", "#...", "###.", "...#", "...#", "###."],
        '6' => [".##.", "#...", "#...", "###.", "#..#", "#..#", ".##."],
        '7' => ["####", "...#", "...#", "..#.", ".#..", ".#..", ".#.."],
        '8' => [".##.", "#..#", "#..#", ".##.", "#..#", "#..#", ".##."],
        '9' => [".##.", "#..#", "#..#", ".###", "...#", "...#", ".##."],
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => ["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        ' ' => return Some(BLANK),
        _ => return None,
    };
    Some(Glyph { rows })
}

fn glyph_or_blank(ch: char) -> Glyph {
    glyph(ch.to_ascii_uppercase()).unwrap_or(BLANK)
}

/// Width of `text` in cells, including the one-cell gap between characters.
pub fn text_width_cells(text: &str) -> usize {
    let total: usize = text.chars().map(|c| glyph_or_blank(c).width() + 1).sum();
    total.saturating_sub(1)
}

/// `gy` at which to start `text` so that it is centred on `center_gy`.
pub fn centered_start_gy(center_gy: f64, text: &str) -> f64 {
    center_gy + text_width_cells(text) as f64 * CELL_TILES / 2.0
}

/// Render `text` as voxel blocks standing in the plane `gx = start.gx`.
///
/// Characters advance along `-gy`, which reads left to right on screen. `start.gz` is the
/// bottom of the glyph box. Cells are emitted bottom-up and far-to-near so stacked voxels
/// overlap correctly.
pub fn draw_voxel_text(
    proj: &IsoProjection,
    text: &str,
    start: GridPoint,
    color: Rgb8,
    out: &mut String,
) -> CityResult<()> {
    let mut cells: Vec<(f64, f64)> = Vec::new();
    let mut advance = 0usize;
    for ch in text.chars() {
        let g = glyph_or_blank(ch);
        for row in 0..GLYPH_ROWS {
            for col in 0..g.width() {
                if !g.is_on(row, col) {
                    continue;
                }
                let gy = start.gy - (advance + col + 1) as f64 * CELL_TILES;
                let gz = start.gz + (GLYPH_ROWS - 1 - row) as f64 * CELL_HEIGHT;
                cells.push((gy, gz));
            }
        }
        advance += g.width() + 1;
    }

    cells.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.total_cmp(&b.0)));

    let colors = FaceColorSet::solid(color, TEXT_RIGHT, TEXT_LEFT);
    for (gy, gz) in cells {
        let cell = Block::new(start.gx, gy, gz, CELL_TILES, CELL_TILES, CELL_HEIGHT, colors);
        draw_block(proj, &cell, out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
