//! Per-frame update phases for the bubble field.
//!
//! A frame update looks like:
//! 1. [`drift_phase`] — each marker advances by its velocity and
//!    reflects off the container edges, independently per axis.
//! 2. [`repulsion_phase`] — markers whose center is too close to the
//!    pointer are redirected away from it and pushed an extra two
//!    velocity steps in the same frame.
//!
//! Container bounds are a parameter of every call: callers re-measure
//! the container each frame so layout changes are picked up without a
//! resize listener.

use crate::{config::FieldConfig, marker::MarkerSet, pointer::PointerState};
use glam::Vec2;

/// Advances every marker by its velocity and reflects it off the
/// container edges.
///
/// Boundary handling is independent per axis: a coordinate below zero is
/// clamped to zero, a coordinate above `bounds - size` is clamped to
/// that maximum, and in both cases the velocity sign on that axis flips.
/// Speed magnitude is preserved; only direction changes.
///
/// A container smaller than a marker collapses the legal span to zero,
/// pinning the marker at the origin until real bounds arrive.
///
/// ### Parameters
/// - `markers` - The field's markers; positions and velocities are
///   updated in place.
/// - `bounds` - Current container width and height in pixels, measured
///   this frame.
pub fn drift_phase(markers: &mut MarkerSet, bounds: Vec2) {
    for m in &mut markers.markers {
        m.pos += m.vel;

        let max = (bounds - m.size).max(Vec2::ZERO);
        if m.pos.x < 0.0 {
            m.pos.x = 0.0;
            m.vel.x = -m.vel.x;
        }
        if m.pos.y < 0.0 {
            m.pos.y = 0.0;
            m.vel.y = -m.vel.y;
        }
        if m.pos.x > max.x {
            m.pos.x = max.x;
            m.vel.x = -m.vel.x;
        }
        if m.pos.y > max.y {
            m.pos.y = max.y;
            m.vel.y = -m.vel.y;
        }
    }
}

/// Pushes markers away from the pointer when it comes too close.
///
/// For each marker whose center is within `radius + repulsion_margin`
/// of the pointer, the velocity is recomputed as the unit vector from
/// the pointer to the center scaled by the marker's fixed `speed`, and
/// the position advances by `vel * impulse_steps` in the same frame.
/// The redirected speed is always `speed`, never accumulated across
/// repulsions. The position is clamped back into bounds afterwards
/// without flipping the velocity.
///
/// While the pointer is at [`PointerState::SENTINEL`] no marker can be
/// within range, so the phase leaves the field untouched.
///
/// ### Parameters
/// - `markers` - The field's markers; only markers in range change.
/// - `pointer` - Container-relative pointer state for this frame.
/// - `cfg` - Repulsion margin and impulse step count.
/// - `bounds` - Current container width and height in pixels.
pub fn repulsion_phase(
    markers: &mut MarkerSet,
    pointer: &PointerState,
    cfg: &FieldConfig,
    bounds: Vec2,
) {
    for m in &mut markers.markers {
        let center = m.center();
        let offset = center - pointer.pos;
        let dist = offset.length();

        if dist < m.radius() + cfg.repulsion_margin {
            // Pointer exactly on the center: push along +x.
            let dir = if dist > 0.0 { offset / dist } else { Vec2::X };
            m.vel = dir * m.speed;
            m.pos += m.vel * cfg.impulse_steps;

            let max = (bounds - m.size).max(Vec2::ZERO);
            m.pos = m.pos.clamp(Vec2::ZERO, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;

    const BOUNDS: Vec2 = Vec2::new(400.0, 300.0);

    fn marker_at(pos: Vec2, vel: Vec2) -> Marker {
        let speed = vel.length();
        Marker {
            pos,
            vel,
            size: Vec2::new(20.0, 20.0),
            speed,
        }
    }

    #[test]
    fn drift_advances_position_by_velocity() {
        let mut set = MarkerSet::from_markers(vec![marker_at(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.5, -0.5),
        )]);

        drift_phase(&mut set, BOUNDS);

        assert_eq!(set.markers[0].pos, Vec2::new(101.5, 99.5));
        assert_eq!(set.markers[0].vel, Vec2::new(1.5, -0.5));
    }

    #[test]
    fn drift_reflects_at_the_low_edge() {
        // Starting exactly on the edge and moving outwards.
        let mut set =
            MarkerSet::from_markers(vec![marker_at(Vec2::new(0.0, 50.0), Vec2::new(-0.8, 0.0))]);

        drift_phase(&mut set, BOUNDS);

        let m = &set.markers[0];
        assert_eq!(m.pos.x, 0.0);
        assert_eq!(m.vel.x, 0.8);
    }

    #[test]
    fn drift_reflects_at_the_high_edge() {
        let max_x = BOUNDS.x - 20.0;
        let mut set =
            MarkerSet::from_markers(vec![marker_at(Vec2::new(max_x, 50.0), Vec2::new(1.0, 0.0))]);

        drift_phase(&mut set, BOUNDS);

        let m = &set.markers[0];
        assert_eq!(m.pos.x, max_x);
        assert_eq!(m.vel.x, -1.0);
    }

    #[test]
    fn drift_preserves_speed_across_reflections() {
        let vel = Vec2::new(-3.0, 4.0);
        let mut set = MarkerSet::from_markers(vec![marker_at(Vec2::new(1.0, 1.0), vel)]);

        drift_phase(&mut set, BOUNDS);

        assert!((set.markers[0].vel.length() - vel.length()).abs() < 1e-6);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let mut set = MarkerSet::from_markers(vec![
            marker_at(Vec2::new(5.0, 5.0), Vec2::new(7.3, -11.1)),
            marker_at(Vec2::new(390.0, 280.0), Vec2::new(-2.9, 13.7)),
            marker_at(Vec2::new(200.0, 150.0), Vec2::new(17.0, 17.0)),
        ]);
        let pointer = PointerState::absent();
        let cfg = FieldConfig::default();

        for _ in 0..100 {
            drift_phase(&mut set, BOUNDS);
            repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

            for m in &set.markers {
                assert!(m.pos.x >= 0.0 && m.pos.x <= BOUNDS.x - m.size.x);
                assert!(m.pos.y >= 0.0 && m.pos.y <= BOUNDS.y - m.size.y);
            }
        }
    }

    #[test]
    fn zero_size_container_pins_markers_at_the_origin() {
        let mut set = MarkerSet::from_markers(vec![marker_at(
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 3.0),
        )]);

        drift_phase(&mut set, Vec2::ZERO);

        assert_eq!(set.markers[0].pos, Vec2::ZERO);
    }

    #[test]
    fn repulsion_pushes_away_from_the_pointer() {
        let mut set = MarkerSet::from_markers(vec![marker_at(
            Vec2::new(100.0, 100.0),
            Vec2::new(0.6, 0.0),
        )]);
        let center_before = set.markers[0].center();

        // Pointer just left of the center, well within radius + margin.
        let mut pointer = PointerState::absent();
        pointer.move_to(center_before - Vec2::new(15.0, 0.0));

        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        let m = &set.markers[0];
        let away = center_before - pointer.pos;
        assert!(m.vel.dot(away) > 0.0, "velocity must point away from the pointer");
    }

    #[test]
    fn repulsion_resets_speed_to_the_assigned_magnitude() {
        let mut m = marker_at(Vec2::new(100.0, 100.0), Vec2::new(0.9, 0.0));
        m.speed = 0.9;
        let center = m.center();
        let mut set = MarkerSet::from_markers(vec![m]);

        let mut pointer = PointerState::absent();
        pointer.move_to(center + Vec2::new(0.0, 10.0));

        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        assert!((set.markers[0].vel.length() - 0.9).abs() < 1e-5);
    }

    #[test]
    fn repulsion_applies_the_double_step_exactly() {
        let mut m = marker_at(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        m.speed = 1.0;
        let pos_before = m.pos;
        let center = m.center();
        let mut set = MarkerSet::from_markers(vec![m]);

        // Pointer directly below the center: the push is straight up.
        let mut pointer = PointerState::absent();
        pointer.move_to(center + Vec2::new(0.0, 12.0));

        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        let m = &set.markers[0];
        assert_eq!(m.vel, Vec2::new(0.0, -1.0));
        let expected = pos_before + Vec2::new(0.0, -1.0) * cfg.impulse_steps;
        assert!((m.pos - expected).length() < 1e-5);
    }

    #[test]
    fn repulsion_does_not_fire_outside_the_margin() {
        let m = marker_at(Vec2::new(100.0, 100.0), Vec2::new(0.7, 0.3));
        let vel_before = m.vel;
        let center = m.center();
        let radius = m.radius();
        let mut set = MarkerSet::from_markers(vec![m]);

        let cfg = FieldConfig::default();
        let mut pointer = PointerState::absent();
        pointer.move_to(center + Vec2::new(radius + cfg.repulsion_margin + 1.0, 0.0));

        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        assert_eq!(set.markers[0].vel, vel_before);
        assert_eq!(set.markers[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn absent_pointer_never_triggers_repulsion() {
        let mut set = MarkerSet::from_markers(vec![
            marker_at(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5)),
            marker_at(Vec2::new(200.0, 140.0), Vec2::new(-0.5, 0.7)),
        ]);
        let vels: Vec<Vec2> = set.markers.iter().map(|m| m.vel).collect();

        let pointer = PointerState::absent();
        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        for (m, vel) in set.markers.iter().zip(vels) {
            assert_eq!(m.vel, vel);
        }
    }

    #[test]
    fn repulsion_clamps_the_pushed_position_into_bounds() {
        // Marker in the corner, pointer inside the container pushing it
        // further out.
        let mut m = marker_at(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0));
        m.speed = 5.0;
        let center = m.center();
        let mut set = MarkerSet::from_markers(vec![m]);

        let mut pointer = PointerState::absent();
        pointer.move_to(center + Vec2::new(8.0, 8.0));

        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        let m = &set.markers[0];
        assert_eq!(m.pos, Vec2::ZERO);
        // The redirect itself still happened.
        assert!(m.vel.x < 0.0 && m.vel.y < 0.0);
    }

    #[test]
    fn pointer_on_the_exact_center_pushes_along_x() {
        let m = marker_at(Vec2::new(100.0, 100.0), Vec2::new(0.0, 1.0));
        let center = m.center();
        let mut set = MarkerSet::from_markers(vec![m]);

        let mut pointer = PointerState::absent();
        pointer.move_to(center);

        let cfg = FieldConfig::default();
        repulsion_phase(&mut set, &pointer, &cfg, BOUNDS);

        assert_eq!(set.markers[0].vel, Vec2::new(1.0, 0.0));
    }
}
