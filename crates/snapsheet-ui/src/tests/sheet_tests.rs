use super::*;
use crate::snap_policy::FlingSnapPolicy;
use snapsheet_animation::Easing;
use snapsheet_ui_graphics::Vector;

const FRAME_NANOS: u64 = 16_666_667;

#[derive(Debug, Default)]
struct RecordingSurface {
    content: Option<&'static str>,
    offsets: Vec<f32>,
    animations: Vec<f32>,
}

impl SheetSurface for RecordingSurface {
    type Content = &'static str;

    fn set_content(&mut self, content: &'static str) {
        self.content = Some(content);
    }

    fn set_offset(&mut self, offset: f32) {
        self.offsets.push(offset);
    }

    fn animate_to(&mut self, target: f32) {
        self.animations.push(target);
    }
}

fn sheet(height: f32) -> BottomSheet<RecordingSurface> {
    sheet_with(height, SheetConfig::default())
}

fn sheet_with(height: f32, config: SheetConfig) -> BottomSheet<RecordingSurface> {
    let mut sheet = BottomSheet::new(RecordingSurface::default(), ScrollState::new(0.0), config);
    sheet.on_layout(height);
    sheet
}

fn drag(sheet: &mut BottomSheet<RecordingSurface>, translation_y: f32) {
    let direction = translation_y.signum();
    let velocity = Vector::new(0.0, direction * 600.0);
    let began = DragSample::vertical(direction * 10.0).with_velocity(velocity);
    assert!(sheet.on_drag(GestureState::Began, began), "drag should be admitted");
    sheet.on_drag(
        GestureState::Changed,
        DragSample::vertical(translation_y).with_velocity(velocity),
    );
    sheet.on_drag(
        GestureState::Ended,
        DragSample::vertical(translation_y).with_velocity(velocity),
    );
}

fn settle(sheet: &mut BottomSheet<RecordingSurface>, mut frame_time: u64) -> u64 {
    for _ in 0..600 {
        if !sheet.advance_frame(frame_time) {
            break;
        }
        frame_time += FRAME_NANOS;
    }
    assert!(!sheet.is_animating(), "animation should settle");
    frame_time
}

#[test]
fn first_layout_seeds_half() {
    let sheet = sheet(1000.0);
    assert_eq!(
        sheet.position(),
        SheetPosition {
            current_offset: 500.0,
            snap_state: SnapState::Half,
        }
    );
    assert_eq!(sheet.surface().offsets.last(), Some(&500.0));
}

#[test]
fn initial_state_is_configurable() {
    let mut sheet = BottomSheet::new(
        RecordingSurface::default(),
        ScrollState::new(0.0),
        SheetConfig::default().with_initial_state(SnapState::Closed),
    );
    sheet.on_layout(700.0);
    assert_eq!(sheet.current_offset(), 700.0);
    assert_eq!(sheet.snap_state(), SnapState::Closed);
}

#[test]
fn live_drag_updates_surface() {
    let mut sheet = sheet(1000.0);
    let velocity = Vector::new(0.0, 500.0);
    sheet.on_drag(
        GestureState::Began,
        DragSample::vertical(10.0).with_velocity(velocity),
    );
    sheet.on_drag(
        GestureState::Changed,
        DragSample::vertical(120.0).with_velocity(velocity),
    );
    assert_eq!(sheet.current_offset(), 620.0);
    assert_eq!(sheet.committed_offset(), 500.0);
    assert_eq!(sheet.surface().offsets.last(), Some(&620.0));
}

#[test]
fn open_then_close_end_to_end() {
    let mut sheet = sheet(1000.0);

    drag(&mut sheet, -450.0);
    assert_eq!(sheet.snap_state(), SnapState::Open);
    assert_eq!(sheet.committed_offset(), 0.0);
    assert_eq!(sheet.surface().animations, vec![0.0]);
    let frame_time = settle(&mut sheet, 0);
    assert_eq!(sheet.current_offset(), 0.0);

    drag(&mut sheet, 900.0);
    assert_eq!(sheet.snap_state(), SnapState::Closed);
    assert_eq!(sheet.committed_offset(), 1000.0);
    settle(&mut sheet, frame_time);
    assert_eq!(sheet.current_offset(), 1000.0);
    assert_eq!(sheet.surface().offsets.last(), Some(&1000.0));
}

#[test]
fn animation_passes_through_intermediate_offsets() {
    let mut sheet = sheet(1000.0);
    drag(&mut sheet, -450.0);
    let released_at = sheet.current_offset();
    assert_eq!(released_at, 50.0);

    sheet.surface_mut().offsets.clear();
    settle(&mut sheet, 0);
    let offsets = &sheet.surface().offsets;
    assert!(offsets.iter().any(|o| *o > 0.0 && *o < released_at));
    assert_eq!(offsets.last(), Some(&0.0));
}

#[test]
fn tween_snap_finishes_on_time() {
    let config = SheetConfig::default().with_tween(AnimationSpec::linear(100));
    let mut sheet = sheet_with(1000.0, config);
    drag(&mut sheet, -450.0);
    assert_eq!(sheet.current_offset(), 50.0);

    assert!(sheet.advance_frame(0));
    assert_eq!(sheet.current_offset(), 50.0);
    assert!(sheet.advance_frame(50_000_000));
    assert_eq!(sheet.current_offset(), 25.0);
    assert!(!sheet.advance_frame(100_000_000));
    assert_eq!(sheet.current_offset(), 0.0);
    assert_eq!(sheet.surface().offsets.last(), Some(&0.0));
}

#[test]
fn eased_tween_front_loads_the_motion() {
    let config = SheetConfig::default()
        .with_tween(AnimationSpec::tween(100, Easing::FastOutSlowInEasing));
    let mut sheet = sheet_with(1000.0, config);
    drag(&mut sheet, -450.0);

    sheet.advance_frame(0);
    sheet.advance_frame(50_000_000);
    let halfway = sheet.current_offset();
    assert!(halfway > 0.0 && halfway < 25.0, "{halfway}");
    settle(&mut sheet, 66_666_667);
    assert_eq!(sheet.current_offset(), 0.0);
}

#[test]
fn new_drag_interrupts_animation_from_instantaneous_value() {
    let mut sheet = sheet(1000.0);
    drag(&mut sheet, -450.0);

    // A few frames into the snap toward 0.
    sheet.advance_frame(0);
    sheet.advance_frame(FRAME_NANOS);
    sheet.advance_frame(2 * FRAME_NANOS);
    assert!(sheet.is_animating());
    let mid_flight = sheet.current_offset();
    assert!(mid_flight > 0.0 && mid_flight < 50.0, "{mid_flight}");

    let velocity = Vector::new(0.0, 400.0);
    assert!(sheet.on_drag(
        GestureState::Began,
        DragSample::vertical(10.0).with_velocity(velocity)
    ));
    assert!(!sheet.is_animating());
    assert_eq!(sheet.committed_offset(), mid_flight);

    sheet.on_drag(
        GestureState::Changed,
        DragSample::vertical(100.0).with_velocity(velocity),
    );
    assert_eq!(sheet.current_offset(), mid_flight + 100.0);
}

#[test]
fn cancelled_drag_still_snaps() {
    let mut sheet = sheet(800.0);
    let velocity = Vector::new(0.0, 300.0);
    sheet.on_drag(GestureState::Began, DragSample::vertical(10.0).with_velocity(velocity));
    sheet.on_drag(GestureState::Changed, DragSample::vertical(250.0));
    sheet.on_drag(GestureState::Cancelled, DragSample::vertical(250.0));
    // 400 + 250 = 650 >= 600
    assert_eq!(sheet.snap_state(), SnapState::Closed);
    assert!(sheet.is_animating());
}

#[test]
fn upward_drag_on_open_sheet_is_left_to_content() {
    let mut sheet = sheet(1000.0);
    sheet.scroll_state().set_max_value(2000.0);
    sheet.snap_to(SnapState::Open);
    settle(&mut sheet, 0);

    let up = DragSample::vertical(-30.0).with_velocity(Vector::new(0.0, -900.0));
    assert!(!sheet.on_drag(GestureState::Began, up));
    assert_eq!(sheet.drag_owner(), DragOwner::Scroll);
    sheet.on_drag(GestureState::Changed, DragSample::vertical(-200.0));
    assert_eq!(sheet.scroll_state().value(), 200.0);
    assert_eq!(sheet.current_offset(), 0.0);
}

#[test]
fn snap_to_is_ignored_mid_drag() {
    let mut sheet = sheet(1000.0);
    sheet.on_drag(
        GestureState::Began,
        DragSample::vertical(10.0).with_velocity(Vector::new(0.0, 100.0)),
    );
    sheet.snap_to(SnapState::Open);
    assert_eq!(sheet.snap_state(), SnapState::Half);
    assert!(!sheet.is_animating());
}

#[test]
fn relayout_keeps_snap_state() {
    let mut sheet = sheet(1000.0);
    sheet.on_layout(1200.0);
    assert_eq!(sheet.current_offset(), 600.0);
    assert_eq!(sheet.snap_state(), SnapState::Half);
}

#[test]
fn fling_policy_can_skip_half() {
    let mut sheet = BottomSheet::new(
        RecordingSurface::default(),
        ScrollState::new(0.0),
        SheetConfig::default().with_snap_policy(FlingSnapPolicy::default()),
    );
    sheet.on_layout(1000.0);
    sheet.snap_to(SnapState::Open);
    settle(&mut sheet, 0);

    let fling = Vector::new(0.0, 5000.0);
    sheet.on_drag(GestureState::Began, DragSample::vertical(10.0).with_velocity(fling));
    sheet.on_drag(
        GestureState::Ended,
        DragSample::vertical(300.0).with_velocity(fling),
    );
    assert_eq!(sheet.snap_state(), SnapState::Closed);
}

#[test]
fn content_is_handed_to_surface() {
    let mut sheet = sheet(1000.0);
    sheet.set_content("list");
    assert_eq!(sheet.surface().content, Some("list"));
}
