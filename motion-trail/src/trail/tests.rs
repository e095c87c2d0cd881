//! Lifecycle and end-to-end tests for the trail component.
//!
//! These drive `Trail` through `update`/`clear_trail`/`destroy` against a
//! recording surface and check both the recorded history and the issued
//! draw commands.

use super::*;
use crate::config::Color;
use crate::surface::{DrawCommand, RecordingSurface};

fn trail_with(max_points: usize, min_interval: f64) -> Trail<RecordingSurface> {
    let config = TrailConfig::default()
        .with_max_points(max_points)
        .with_min_time_between_points(min_interval);
    Trail::new(RecordingSurface::new(), config)
}

fn recorded(trail: &Trail<RecordingSurface>) -> Vec<(f64, f64, f64)> {
    trail.points().map(|p| (p.x, p.y, p.timestamp)).collect()
}

fn styles(surface: &RecordingSurface) -> Vec<(f64, f64)> {
    surface
        .styled_segments()
        .into_iter()
        .filter_map(|(style, _)| match style {
            DrawCommand::LineStyle { width, alpha, .. } => Some((width, alpha)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_new_registers_with_surface() {
    let trail = trail_with(10, 50.0);
    assert_eq!(trail.surface().register_count(), 1);
    assert_eq!(trail.state(), TrailState::Empty);
    assert_eq!(trail.next_creation_time(), 0.0);
}

#[test]
fn test_scenario_throttled_sampling() {
    let mut trail = trail_with(3, 10.0);

    assert!(trail.update(0.0, 0.0, 0.0).unwrap());
    assert!(!trail.update(1.0, 0.0, 5.0).unwrap());
    assert!(trail.update(2.0, 0.0, 10.0).unwrap());
    assert!(trail.update(3.0, 0.0, 20.0).unwrap());

    assert_eq!(
        recorded(&trail),
        vec![(0.0, 0.0, 0.0), (2.0, 0.0, 10.0), (3.0, 0.0, 20.0)]
    );
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.segments_drawn(), 2);
    assert_eq!(trail.surface().segment_count(), 2);
}

#[test]
fn test_capacity_evicts_oldest_first() {
    let mut trail = trail_with(3, 0.0);
    for i in 0..6 {
        trail.update(i as f64, 0.0, i as f64).unwrap();
    }

    let xs: Vec<f64> = trail.points().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0]);
}

#[test]
fn test_state_transitions() {
    let mut trail = trail_with(5, 0.0);
    assert_eq!(trail.state(), TrailState::Empty);

    trail.update(0.0, 0.0, 0.0).unwrap();
    assert_eq!(trail.state(), TrailState::Partial);
    assert_eq!(trail.surface().segment_count(), 0);

    trail.update(1.0, 0.0, 1.0).unwrap();
    assert_eq!(trail.state(), TrailState::Active);
    assert_eq!(trail.surface().segment_count(), 1);

    trail.clear_trail();
    assert_eq!(trail.state(), TrailState::Empty);
}

#[test]
fn test_tapering_endpoints_with_three_points() {
    let mut trail = trail_with(10, 0.0);
    trail.update(0.0, 0.0, 0.0).unwrap();
    trail.update(1.0, 0.0, 1.0).unwrap();
    trail.update(2.0, 0.0, 2.0).unwrap();

    assert_eq!(styles(trail.surface()), vec![(0.5, 0.0), (2.25, 0.5)]);
}

#[test]
fn test_redraws_even_without_new_sample() {
    let mut trail = trail_with(10, 100.0);
    trail.update(0.0, 0.0, 0.0).unwrap();
    trail.update(1.0, 0.0, 100.0).unwrap();
    let clears_before = trail.surface().clear_count();

    assert!(!trail.update(2.0, 0.0, 150.0).unwrap());

    assert_eq!(trail.surface().clear_count(), clears_before + 1);
    assert_eq!(trail.surface().segment_count(), 1);
}

#[test]
fn test_capacity_below_two_never_draws() {
    for max_points in [0, 1] {
        let mut trail = trail_with(max_points, 0.0);
        for i in 0..5 {
            trail.update(i as f64, 0.0, i as f64).unwrap();
        }
        assert!(trail.len() <= max_points);
        assert_eq!(trail.segments_drawn(), 0);
        assert_eq!(trail.surface().segment_count(), 0);
    }
}

#[test]
fn test_clear_resets_schedule() {
    let mut trail = trail_with(10, 50.0);
    trail.update(0.0, 0.0, 1000.0).unwrap();
    trail.update(1.0, 0.0, 1050.0).unwrap();
    assert_eq!(trail.next_creation_time(), 1100.0);

    trail.clear_trail();

    assert!(trail.is_empty());
    assert_eq!(trail.next_creation_time(), 0.0);
    assert_eq!(trail.surface().commands(), &[DrawCommand::Clear]);
    assert!(trail.update(5.0, 5.0, 0.0).unwrap());
}

#[test]
fn test_clear_is_idempotent() {
    let mut trail = trail_with(10, 0.0);
    trail.update(0.0, 0.0, 0.0).unwrap();

    trail.clear_trail();
    trail.clear_trail();

    assert!(trail.is_empty());
    assert_eq!(trail.surface().commands(), &[DrawCommand::Clear]);
}

#[test]
fn test_destroy_clears_and_releases() {
    let mut trail = trail_with(10, 0.0);
    trail.update(0.0, 0.0, 0.0).unwrap();
    trail.update(1.0, 1.0, 1.0).unwrap();

    trail.destroy();

    assert_eq!(trail.state(), TrailState::Destroyed);
    assert!(trail.is_empty());
    assert_eq!(
        trail.surface().commands(),
        &[DrawCommand::Clear, DrawCommand::Release]
    );
    assert_eq!(trail.surface().release_count(), 1);
}

#[test]
fn test_destroy_twice_has_no_extra_effect() {
    let mut trail = trail_with(10, 0.0);
    trail.update(0.0, 0.0, 0.0).unwrap();
    trail.destroy();

    let commands = trail.surface().commands().to_vec();
    let clears = trail.surface().clear_count();

    trail.destroy();
    trail.clear_trail();

    assert_eq!(trail.surface().commands(), commands.as_slice());
    assert_eq!(trail.surface().clear_count(), clears);
    assert_eq!(trail.surface().release_count(), 1);
}

#[test]
fn test_update_after_destroy_fails_without_side_effects() {
    let mut trail = trail_with(10, 0.0);
    trail.destroy();
    let commands = trail.surface().commands().to_vec();

    let result = trail.update(1.0, 1.0, 1.0);

    assert!(matches!(result, Err(TrailError::Destroyed)));
    assert!(trail.is_empty());
    assert_eq!(trail.surface().commands(), commands.as_slice());
}

#[test]
fn test_with_overrides() {
    let overrides = TrailOverrides {
        max_points: Some(2.0),
        color: Some(Color::from_packed(0x00FF00)),
        ..Default::default()
    };
    let mut trail = Trail::with_overrides(RecordingSurface::new(), &overrides);
    for i in 0..4 {
        trail.update(i as f64, 0.0, i as f64 * 100.0).unwrap();
    }

    assert_eq!(trail.len(), 2);
    assert_eq!(trail.config().min_time_between_points(), 50.0);
    assert!(trail.surface().commands().iter().any(|c| matches!(
        c,
        DrawCommand::LineStyle { color, .. } if *color == Color::from_packed(0x00FF00)
    )));
}

#[test]
fn test_render_to_replays_current_frame() {
    let mut trail = trail_with(10, 0.0);
    for i in 0..4 {
        trail.update(i as f64, 0.0, i as f64).unwrap();
    }

    let mut replay = RecordingSurface::new();
    let drawn = trail.render_to(&mut replay);

    assert_eq!(drawn, 3);
    assert_eq!(replay.commands(), trail.surface().commands());
}

#[test]
fn test_borrowed_surface() {
    let mut surface = RecordingSurface::new();
    {
        let mut trail = Trail::new(&mut surface, TrailConfig::default());
        trail.update(0.0, 0.0, 0.0).unwrap();
        trail.update(1.0, 0.0, 50.0).unwrap();
        trail.destroy();
    }
    assert_eq!(surface.register_count(), 1);
    assert_eq!(surface.release_count(), 1);
}

#[test]
fn test_head_is_newest_sample() {
    let mut trail = trail_with(10, 0.0);
    trail.update(1.0, 2.0, 0.0).unwrap();
    trail.update(3.0, 4.0, 1.0).unwrap();

    assert_eq!(trail.head(), Some(&TrailPoint::new(3.0, 4.0, 1.0)));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_segments_follow_history_length(
            max_points in 0usize..12,
            steps in proptest::collection::vec((0.0..500.0_f64, 0.0..500.0_f64, 0.0..40.0_f64), 0..60)
        ) {
            let mut trail = trail_with(max_points, 16.0);
            let mut t = 0.0;

            for (x, y, dt) in steps {
                t += dt;
                trail.update(x, y, t).unwrap();

                prop_assert!(trail.len() <= max_points);
                prop_assert_eq!(trail.segments_drawn(), trail.len().saturating_sub(1));
                prop_assert_eq!(trail.surface().segment_count(), trail.segments_drawn());
            }
        }
    }
}
