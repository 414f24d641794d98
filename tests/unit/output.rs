use super::*;

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target").join("unit_output").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn write_svg_creates_missing_directories() {
    let dir = scratch("svg");
    let path = dir.join("nested").join("city.svg");
    write_svg(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\"/>"
    );
}

#[test]
fn bare_file_name_needs_no_directory() {
    ensure_parent_dir(Path::new("city.svg")).unwrap();
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = vec![64, 32, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[0, 0, 0, 0]);
}

#[test]
fn rasterizes_simple_document() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2"><rect width="4" height="2" fill="#ff0000"/></svg>"##;
    let raster = rasterize_svg(svg).unwrap();
    assert_eq!((raster.width, raster.height), (4, 2));
    assert_eq!(raster.rgba8.len(), 4 * 2 * 4);
    assert_eq!(&raster.rgba8[0..4], &[255, 0, 0, 255]);
}

#[test]
fn garbage_is_not_rasterized() {
    assert!(rasterize_svg("not svg").is_err());
}
