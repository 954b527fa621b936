use super::*;

#[test]
fn pointer_maps_to_box_percentages() {
    assert_eq!(spotlight_position(150.0, 75.0, 100.0, 50.0, 200.0, 100.0), (25.0, 25.0));
}

#[test]
fn pointer_outside_box_is_clamped() {
    assert_eq!(spotlight_position(-10.0, 900.0, 0.0, 0.0, 100.0, 100.0), (0.0, 100.0));
}

#[test]
fn empty_box_centres_spotlight() {
    assert_eq!(spotlight_position(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), (50.0, 50.0));
}

#[test]
fn style_sets_both_custom_properties() {
    assert_eq!(spotlight_style(12.345, 50.0), "--spot-x: 12.3%; --spot-y: 50.0%;");
}
