use super::*;
use snapsheet_ui_graphics::Vector;

fn release(committed: f32, translation_y: f32, screen_height: f32) -> (f32, SnapState) {
    PositionResolver::on_ended(&DragSample::vertical(translation_y), committed, screen_height)
}

#[test]
fn live_offset_is_clamped_at_zero() {
    for committed in [0.0, 250.0, 500.0, 1000.0] {
        for translation in [-2000.0, -500.0, -1.0, 0.0, 1.0, 300.0] {
            let live = PositionResolver::on_changed(&DragSample::vertical(translation), committed);
            assert_eq!(live, (committed + translation).max(0.0));
        }
    }
}

#[test]
fn live_offset_ignores_horizontal_motion_and_velocity() {
    let sample = DragSample::new(
        snapsheet_ui_graphics::Point::new(10.0, 10.0),
        Vector::new(300.0, 40.0),
        Vector::new(-900.0, 5000.0),
    );
    assert_eq!(PositionResolver::on_changed(&sample, 100.0), 140.0);
}

#[test]
fn half_is_stable_without_translation() {
    for height in [100.0, 800.0, 1000.0, 2400.0] {
        assert_eq!(
            release(height / 2.0, 0.0, height),
            (height / 2.0, SnapState::Half)
        );
    }
}

#[test]
fn thresholds_with_screen_height_800() {
    // quarter = 200, three quarters = 600
    assert_eq!(release(0.0, 200.0, 800.0), (0.0, SnapState::Open));
    assert_eq!(release(0.0, 600.0, 800.0), (800.0, SnapState::Closed));
    assert_eq!(release(0.0, 0.0, 800.0), (0.0, SnapState::Open));
    assert_eq!(release(0.0, 800.0, 800.0), (800.0, SnapState::Closed));
    assert_eq!(release(0.0, 200.5, 800.0), (400.0, SnapState::Half));
    assert_eq!(release(0.0, 599.5, 800.0), (400.0, SnapState::Half));
}

#[test]
fn release_combines_committed_and_translation() {
    assert_eq!(release(500.0, -450.0, 1000.0), (0.0, SnapState::Open));
    assert_eq!(release(0.0, 900.0, 1000.0), (1000.0, SnapState::Closed));
    // Dragged above the open anchor still resolves to open.
    assert_eq!(release(0.0, -300.0, 1000.0), (0.0, SnapState::Open));
}

#[test]
fn velocity_does_not_change_the_default_decision() {
    let flick = DragSample::vertical(-100.0).with_velocity(Vector::new(0.0, 8000.0));
    assert_eq!(
        PositionResolver::on_ended(&flick, 500.0, 1000.0),
        (500.0, SnapState::Half)
    );
}

#[test]
fn degenerate_screen_heights_collapse_to_zero() {
    assert_eq!(release(0.0, 10.0, 0.0), (0.0, SnapState::Closed));
    assert_eq!(release(0.0, -10.0, 0.0), (0.0, SnapState::Open));
    assert_eq!(release(0.0, 10.0, -500.0), (0.0, SnapState::Closed));
    assert_eq!(release(0.0, 10.0, f32::NAN), (0.0, SnapState::Closed));
}

#[test]
fn non_finite_translation_counts_as_no_movement() {
    assert_eq!(release(500.0, f32::NAN, 1000.0), (500.0, SnapState::Half));
    assert_eq!(
        PositionResolver::on_changed(&DragSample::vertical(f32::INFINITY), 250.0),
        250.0
    );
}

#[test]
fn snap_state_offsets() {
    assert_eq!(SnapState::Open.offset(900.0), 0.0);
    assert_eq!(SnapState::Half.offset(900.0), 450.0);
    assert_eq!(SnapState::Closed.offset(900.0), 900.0);
    assert_eq!(SnapState::default(), SnapState::Half);
}
