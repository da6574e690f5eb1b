use crate::components::{BoundingVolume, Collider, Corners};

/// How far two colliders got through the collision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPhase {
    /// World boxes are disjoint.
    Separated,
    /// World boxes overlap but the oriented corners are separated.
    BroadOnly,
    /// Both phases report overlap.
    Intersecting,
}

impl CollisionPhase {
    pub fn is_hit(self) -> bool {
        self == CollisionPhase::Intersecting
    }
}

/// Cheap axis-aligned test on refit world boxes.
pub fn broad_phase(a: &BoundingVolume, b: &BoundingVolume) -> bool {
    a.overlaps_aabb(b)
}

/// Separating-axis test on oriented world corners.
pub fn narrow_phase(a: &Corners, b: &Corners) -> bool {
    BoundingVolume::overlaps_sat(a, b)
}

/// Runs the narrow phase only when the broad phase passes.
pub fn test_colliders(a: &Collider, b: &Collider) -> CollisionPhase {
    if !broad_phase(&a.volume, &b.volume) {
        CollisionPhase::Separated
    } else if narrow_phase(&a.corners, &b.corners) {
        CollisionPhase::Intersecting
    } else {
        CollisionPhase::BroadOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::FRAC_PI_4;

    fn cube(min: f64, max: f64) -> Collider {
        Collider::axis_aligned(BoundingVolume::new(Vector3::repeat(min), Vector3::repeat(max)))
    }

    #[test]
    fn test_overlapping_cubes_intersect() {
        assert_eq!(test_colliders(&cube(0.0, 1.0), &cube(0.5, 1.5)), CollisionPhase::Intersecting);
    }

    #[test]
    fn test_disjoint_cubes_are_separated() {
        assert_eq!(test_colliders(&cube(0.0, 1.0), &cube(2.0, 3.0)), CollisionPhase::Separated);
    }

    #[test]
    fn test_phases_are_symmetric() {
        let pairs = [
            (cube(0.0, 1.0), cube(0.5, 1.5)),
            (cube(0.0, 1.0), cube(2.0, 3.0)),
            (cube(0.0, 1.0), cube(1.0, 2.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(test_colliders(&a, &b), test_colliders(&b, &a));
        }
    }

    #[test]
    fn test_rotated_slab_stops_at_broad_phase() {
        let slab = BoundingVolume::new(Vector3::new(-5.0, -0.1, -0.1), Vector3::new(5.0, 0.1, 0.1));
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4).to_homogeneous();
        let slab = Collider::from_local(&slab, &rotation);
        let probe = Collider::axis_aligned(BoundingVolume::new(
            Vector3::new(2.0, -3.0, -0.5),
            Vector3::new(3.0, -2.0, 0.5),
        ));

        let phase = test_colliders(&slab, &probe);
        assert_eq!(phase, CollisionPhase::BroadOnly);
        assert!(!phase.is_hit());
    }

    #[test]
    fn test_degenerate_collider_never_hits() {
        let point = Collider::axis_aligned(BoundingVolume::default());
        assert_eq!(test_colliders(&point, &cube(-1.0, 1.0)), CollisionPhase::Separated);
    }
}
