use super::*;
use crate::{
    foundation::math::Rng64,
    scene::{
        compose::{SceneComposer, StructureKind},
        model::{ContributionWindow, DayRecord},
    },
};

fn window(counts: [i64; 7]) -> ContributionWindow {
    let days = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| DayRecord::new(i as i64, format!("2026-10-{:02}", 11 + i), c).unwrap())
        .collect();
    ContributionWindow::new(1234, days).unwrap()
}

fn render(counts: [i64; 7], seed: u64) -> String {
    let scene = SceneComposer::default()
        .compose(&window(counts), &mut Rng64::new(seed))
        .unwrap();
    serialize_scene(scene).unwrap()
}

#[test]
fn document_is_framed_and_self_contained() {
    let svg = render([0, 3, 0, 12, 5, 0, 20], 1);
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"900\" height=\"500\""
    ));
    assert!(svg.ends_with("</svg>"));
    assert!(!svg.contains("href"));
    assert!(!svg.contains("NaN"));
}

#[test]
fn layers_appear_back_to_front() {
    let svg = render([1; 7], 2);
    let sky = svg.find("url(#sky)").unwrap();
    let stars = svg.find("<g class=\"stars\">").unwrap();
    let moon = svg.find("<g class=\"moon\">").unwrap();
    let city = svg.find("<g class=\"city\">").unwrap();
    let title = svg.find("Contribution City").unwrap();
    let stats = svg.find("TOTAL:").unwrap();
    assert!(sky < stars && stars < moon && moon < city && city < title && title < stats);
}

#[test]
fn structures_are_painted_in_depth_order() {
    let svg = render([0, 3, 0, 12, 5, 0, 20], 3);
    let pos = |kind: StructureKind| svg.find(&format!("<g class=\"{}\">", kind.class())).unwrap();
    assert!(pos(StructureKind::Grass) < pos(StructureKind::Road));
    assert!(pos(StructureKind::Road) < pos(StructureKind::Car));
    assert!(pos(StructureKind::Car) < pos(StructureKind::Lamp));
    assert!(pos(StructureKind::Lamp) < pos(StructureKind::Building));
}

#[test]
fn stats_show_total_and_today() {
    let svg = render([0, 3, 0, 12, 5, 0, 20], 4);
    assert!(svg.contains("TOTAL: <tspan fill=\"#ffdd66\">1234</tspan>"));
    assert!(svg.contains("TODAY: <tspan fill=\"#ffdd66\">20</tspan>"));
}

#[test]
fn title_is_escaped() {
    let scene = SceneComposer::default()
        .with_title("a<b> & \"c\"")
        .compose(&window([1; 7]), &mut Rng64::new(5))
        .unwrap();
    let svg = serialize_scene(scene).unwrap();
    assert!(svg.contains("a&lt;b&gt; &amp; &quot;c&quot;"));
}

#[test]
fn moon_is_static() {
    let a = render([1; 7], 10);
    let b = render([1; 7], 11);
    let moon = |s: &str| {
        let start = s.find("<g class=\"moon\">").unwrap();
        let end = start + s[start..].find("</g>").unwrap();
        s[start..end].to_string()
    };
    assert_eq!(moon(&a), moon(&b));
}
