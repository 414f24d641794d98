use super::*;
use crate::scene::compose::StructureKind;

fn tagged(depth: f64, kind: StructureKind, tag: &'static str) -> Drawable {
    Drawable::new(depth, kind, move || Ok(tag.to_string()))
}

#[test]
fn sorts_ascending_by_depth() {
    let sorted = depth_sorted(vec![
        tagged(6.6, StructureKind::Building, "b"),
        tagged(-1000.0, StructureKind::Grass, "g"),
        tagged(-100.0, StructureKind::Car, "c"),
        tagged(-900.0, StructureKind::Road, "r"),
        tagged(5.0, StructureKind::Lamp, "l"),
    ])
    .unwrap();

    let order: Vec<String> = sorted.into_iter().map(|d| d.draw().unwrap()).collect();
    assert_eq!(order, vec!["g", "r", "c", "l", "b"]);
}

#[test]
fn equal_depths_keep_insertion_order() {
    let sorted = depth_sorted(vec![
        tagged(1.0, StructureKind::Lamp, "first"),
        tagged(0.0, StructureKind::Road, "zero"),
        tagged(1.0, StructureKind::Building, "second"),
    ])
    .unwrap();
    let order: Vec<String> = sorted.into_iter().map(|d| d.draw().unwrap()).collect();
    assert_eq!(order, vec!["zero", "first", "second"]);
}

#[test]
fn non_finite_depth_is_an_invariant_violation() {
    let err = depth_sorted(vec![tagged(f64::NAN, StructureKind::Car, "x")]).unwrap_err();
    assert!(matches!(err, CityError::RenderInvariant(_)));
}
