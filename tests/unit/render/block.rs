use super::*;

fn colors() -> FaceColorSet {
    FaceColorSet::solid(Rgb8::hex(0xcccccc), Rgb8::hex(0x888888), Rgb8::hex(0x444444))
}

#[test]
fn solid_block_emits_three_faces_in_order() {
    let block = Block::new(0.0, 0.0, 0.0, 1.0, 1.0, 10.0, colors());
    let svg = block_markup(&IsoProjection::DESIGN, &block).unwrap();

    assert_eq!(svg.matches("<polygon").count(), 3);
    let top = svg.find("#cccccc").unwrap();
    let right = svg.find("#888888").unwrap();
    let left = svg.find("#444444").unwrap();
    assert!(top < right && right < left);
}

#[test]
fn unit_cube_top_face_coordinates() {
    let white = FaceColorSet::top_only(Rgb8::hex(0xffffff));
    let block = Block::new(0.0, 0.0, 0.0, 1.0, 1.0, 10.0, white);
    let svg = block_markup(&IsoProjection::DESIGN, &block).unwrap();
    assert_eq!(
        svg,
        "<polygon points=\"450.00,110.00 486.00,128.00 450.00,146.00 414.00,128.00\" fill=\"#ffffff\"/>"
    );
}

#[test]
fn none_faces_are_suppressed() {
    let dash = FaceColorSet::top_only(Rgb8::hex(0xffff66));
    let flat = Block::new(1.0, 2.0, 3.0, 0.1, 0.5, 0.0, dash);
    let svg = block_markup(&IsoProjection::DESIGN, &flat).unwrap();
    assert_eq!(svg.matches("<polygon").count(), 1);

    let sides = FaceColorSet {
        top: None,
        right: Some(Rgb8::hex(0x111111)),
        left: None,
    };
    let block = Block::new(0.0, 0.0, 0.0, 1.0, 1.0, 5.0, sides);
    let svg = block_markup(&IsoProjection::DESIGN, &block).unwrap();
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains("#111111"));
}

#[test]
fn class_is_stamped_on_each_face() {
    let block = Block::new(0.0, 0.0, 0.0, 1.0, 1.0, 4.0, colors()).with_class("window");
    let svg = block_markup(&IsoProjection::DESIGN, &block).unwrap();
    assert_eq!(svg.matches("class=\"window\"").count(), 3);
}

#[test]
fn degenerate_blocks_are_rejected() {
    let proj = IsoProjection::DESIGN;
    for block in [
        Block::new(0.0, 0.0, 0.0, 0.0, 1.0, 1.0, colors()),
        Block::new(0.0, 0.0, 0.0, 1.0, -1.0, 1.0, colors()),
        Block::new(0.0, 0.0, 0.0, 1.0, 1.0, -2.0, colors()),
        Block::new(0.0, 0.0, 0.0, 1.0, 1.0, 0.0, colors()),
        Block::new(f64::NAN, 0.0, 0.0, 1.0, 1.0, 1.0, colors()),
    ] {
        let err = block_markup(&proj, &block).unwrap_err();
        assert!(matches!(err, CityError::RenderInvariant(_)), "{block:?}");
    }
}

#[test]
fn negative_zero_is_normalized() {
    assert_eq!(fmt_coord(-0.0), "0.00");
    assert_eq!(fmt_coord(-0.001), "0.00");
    assert_eq!(fmt_coord(-1.5), "-1.50");
}
