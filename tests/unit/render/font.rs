use super::*;

fn voxel_count(text: &str) -> usize {
    text.chars()
        .map(|c| {
            let g = glyph_or_blank(c);
            g.rows
                .iter()
                .map(|r| r.bytes().filter(|&b| b == b'#').count())
                .sum::<usize>()
        })
        .sum()
}

#[test]
fn table_covers_digits_weekdays_and_labels() {
    for ch in "0123456789".chars() {
        assert!(glyph(ch).is_some(), "missing digit {ch}");
    }
    for word in ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT", "TOTAL", "TODAY"] {
        for ch in word.chars() {
            assert!(glyph(ch).is_some(), "missing letter {ch} in {word}");
        }
    }
    assert!(glyph(' ').is_some());
    assert!(glyph('?').is_none());
}

#[test]
fn glyphs_are_rectangular_and_within_bounds() {
    for ch in "0123456789ADEFHILMNORSTUWY ".chars() {
        let g = glyph(ch).unwrap();
        let w = g.width();
        assert!((3..=5).contains(&w), "{ch} has width {w}");
        assert!(g.rows.iter().all(|r| r.len() == w), "{ch} is ragged");
    }
}

#[test]
fn width_counts_gaps_between_characters() {
    assert_eq!(text_width_cells(""), 0);
    assert_eq!(text_width_cells("1"), 4);
    assert_eq!(text_width_cells("20"), 9);
    assert_eq!(text_width_cells("SUN"), 17);
    assert_eq!(text_width_cells("sun"), 17);
}

#[test]
fn one_block_per_lit_cell() {
    let mut out = String::new();
    draw_voxel_text(
        &IsoProjection::DESIGN,
        "1",
        GridPoint::new(5.0, 2.0, 10.0),
        Rgb8::hex(0xffdd66),
        &mut out,
    )
    .unwrap();

    let cells = voxel_count("1");
    assert_eq!(cells, 10);
    assert_eq!(out.matches("<polygon").count(), cells * 3);
    assert_eq!(out.matches("#ffdd66").count(), cells);
}

#[test]
fn unknown_characters_render_blank_but_advance() {
    let mut unknown = String::new();
    draw_voxel_text(
        &IsoProjection::DESIGN,
        "?",
        GridPoint::new(0.0, 0.0, 0.0),
        Rgb8::hex(0xffffff),
        &mut unknown,
    )
    .unwrap();
    assert!(unknown.is_empty());
    assert_eq!(text_width_cells("?"), text_width_cells(" "));
}

#[test]
fn lowercase_matches_uppercase() {
    let proj = IsoProjection::DESIGN;
    let start = GridPoint::new(5.0, 3.0, 40.0);
    let mut lower = String::new();
    let mut upper = String::new();
    draw_voxel_text(&proj, "wed", start, Rgb8::hex(0x8899aa), &mut lower).unwrap();
    draw_voxel_text(&proj, "WED", start, Rgb8::hex(0x8899aa), &mut upper).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn centered_text_straddles_center() {
    let start = centered_start_gy(4.0, "SUN");
    let width = text_width_cells("SUN") as f64 * CELL_TILES;
    assert!((start - width / 2.0 - 4.0).abs() < 1e-12);
}
