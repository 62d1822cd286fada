// this_file: crates/glyphbridge/tests/bridge.rs

//! The bridge from font bytes to shaped text, through the public API only

use glyphbridge::{
    create_face, create_font, shape, BridgeError, ByteSource, FontLoadError, PlacementType,
    PointI,
};
use glyphbridge_core::testing::{TestFontBuilder, MONO_ADVANCE};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mono_font(size: f32) -> glyphbridge::FontInstance {
    let face = create_face(TestFontBuilder::monospace().build(), 0).unwrap();
    create_font(&face, size).unwrap()
}

fn assert_load_error(result: glyphbridge::Result<glyphbridge::FontFace>) {
    match result {
        Err(BridgeError::FontLoad(_)) => {}
        Err(other) => panic!("expected a load error, got {other}"),
        Ok(face) => panic!("expected a load error, got {face:?}"),
    }
}

#[test]
fn test_font_glyph_count_matches_face() {
    init_logging();
    let face = create_face(TestFontBuilder::monospace().build(), 0).unwrap();
    let font = create_font(&face, 12.0).unwrap();
    assert_eq!(font.glyph_count(), face.glyph_count());
    assert_eq!(font.face().glyph_count(), 4);
}

#[test]
fn test_empty_string() {
    let shaped = shape("", &mono_font(12.0));
    assert!(shaped.is_empty());
    assert_eq!(shaped.glyph_run().len(), 0);
    assert!(shaped.bounding_box().is_empty());
}

#[test]
fn test_two_letters_at_ten_points() {
    init_logging();
    let font = mono_font(10.0);
    let shaped = shape("AB", &font);

    let run = shaped.glyph_run();
    assert_eq!(run.len(), 2);
    assert_eq!(run.placement_type, PlacementType::AdvanceOffset);
    for placement in run.placements {
        assert_eq!(placement.advance, PointI::new(i32::from(MONO_ADVANCE), 0));
    }

    let rect = shaped.bounding_rect();
    assert!(rect.width > 0.0 && rect.width <= 12.0);
    assert!(rect.height > 0.0);
}

#[test]
fn test_single_space() {
    let font = mono_font(10.0);
    let shaped = shape(" ", &font);
    assert_eq!(shaped.len(), 1);
    assert!(shaped.bounding_box().is_empty());

    let space = TestFontBuilder::monospace().glyph_id(' ').unwrap();
    assert_eq!(shaped.glyphs(), &[space]);
    let (advance, _) = shaped.total_advance();
    assert!((font.advance_width(space) - advance as f32 * 10.0 / 1000.0).abs() < 1e-4);
}

#[test]
fn test_shaped_glyphs_agree_with_renderer_cmap() {
    let builder = TestFontBuilder::monospace();
    let face = create_face(builder.build(), 0).unwrap();
    let font = create_font(&face, 16.0).unwrap();
    let shaped = shape("BA", &font);

    let expected: Vec<_> = "BA"
        .chars()
        .map(|ch| face.render_face().glyph_for_char(ch).unwrap())
        .collect();
    assert_eq!(shaped.glyphs(), expected.as_slice());
}

#[test]
fn test_corrupt_and_truncated_bytes() {
    init_logging();
    let bytes = TestFontBuilder::monospace().build();

    assert_load_error(create_face(Vec::<u8>::new(), 0));
    assert_load_error(create_face(vec![0xFF; 256], 0));
    assert_load_error(create_face(&bytes[..12], 0));
    assert_load_error(create_face(&bytes[..bytes.len() / 2], 0));
}

#[test]
fn test_face_index_out_of_range() {
    let single = TestFontBuilder::monospace().build();
    assert!(matches!(
        create_face(single, 3),
        Err(BridgeError::FontLoad(FontLoadError::FaceIndexOutOfRange { index: 3, count: 1 }))
    ));

    let collection = TestFontBuilder::monospace().build_collection(2);
    assert!(create_face(collection.clone(), 1).is_ok());
    assert!(matches!(
        create_face(collection, 2),
        Err(BridgeError::FontLoad(FontLoadError::FaceIndexOutOfRange { index: 2, count: 2 }))
    ));
}

#[test]
fn test_face_from_file() {
    let path = std::env::temp_dir().join(format!("glyphbridge-mono-{}.ttf", std::process::id()));
    std::fs::write(&path, TestFontBuilder::monospace().build()).unwrap();

    let face = glyphbridge::create_face_from_file(&path, 0).unwrap();
    let shaped = shape("A", &create_font(&face, 10.0).unwrap());
    assert_eq!(shaped.len(), 1);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_faces_share_one_buffer() {
    let data = ByteSource::from(TestFontBuilder::monospace().build());
    let first = create_face(data.clone(), 0).unwrap();
    let second = create_face(data.clone(), 0).unwrap();
    assert!(first.data().same_buffer(second.data()));
}

#[test]
fn test_positioned_glyphs_follow_the_pen() {
    let font = mono_font(10.0);
    let shaped = shape("ABA", &font);
    let positioned = font.positioned_glyphs(&shaped);
    assert_eq!(positioned.len(), 3);
    for (glyph, expected_x) in positioned.iter().zip([0.0, 6.0, 12.0]) {
        assert!((glyph.x - expected_x).abs() < 1e-5);
        assert!((glyph.advance - 6.0).abs() < 1e-5);
        assert_eq!(glyph.y, 0.0);
    }
}

#[test]
fn test_font_shared_across_threads() {
    let font = mono_font(24.0);
    let expected = shape("ABBA BAAB", &font);

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| shape("ABBA BAAB", &font)))
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), expected);
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn test_shaped_text_serializes() {
    let shaped = shape("AB", &mono_font(10.0));
    let json = serde_json::to_value(&shaped).unwrap();
    assert_eq!(json["glyphs"].as_array().unwrap().len(), 2);
}

proptest! {
    #[test]
    fn codepoints_and_placements_match(text in "\\PC{0,32}") {
        let shaped = shape(&text, &mono_font(12.0));
        prop_assert_eq!(shaped.glyphs().len(), shaped.placements().len());
    }

    #[test]
    fn shaping_twice_is_identical(text in "[AB ]{0,32}", size in 1.0f32..144.0) {
        let font = mono_font(size);
        prop_assert_eq!(shape(&text, &font), shape(&text, &font));
    }

    #[test]
    fn visible_text_has_ordered_box(text in "[AB][AB ]{0,16}", size in 1.0f32..144.0) {
        let bounds = shape(&text, &mono_font(size)).bounding_box();
        prop_assert!(bounds.x0 <= bounds.x1);
        prop_assert!(bounds.y0 <= bounds.y1);
        prop_assert!(!bounds.is_empty());
    }
}
