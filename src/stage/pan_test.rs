use super::*;

#[test]
fn offset_is_origin_plus_pointer_delta() {
    let gesture = PanGesture::begin(1, 100.0, 50.0, StagePosition::new(10.0, -20.0));
    assert_eq!(gesture.offset_at(130.0, 40.0), StagePosition::new(40.0, -30.0));
}

#[test]
fn offset_at_start_point_is_origin() {
    let origin = StagePosition::new(7.0, 8.0);
    let gesture = PanGesture::begin(3, 55.0, 66.0, origin);
    assert_eq!(gesture.offset_at(55.0, 66.0), origin);
    assert_eq!(gesture.origin(), origin);
}

#[test]
fn gesture_tracks_only_its_pointer() {
    let gesture = PanGesture::begin(4, 0.0, 0.0, StagePosition::default());
    assert!(gesture.tracks(4));
    assert!(!gesture.tracks(5));
}

#[test]
fn centered_position_centres_small_content() {
    let stage = StageSize::new(800.0, 600.0);
    assert_eq!(centered_position(stage, 200.0, 100.0), StagePosition::new(300.0, 250.0));
}

#[test]
fn centered_position_pins_oversized_content() {
    let stage = StageSize::new(400.0, 300.0);
    assert_eq!(centered_position(stage, 1000.0, 100.0), StagePosition::new(0.0, 100.0));
}
