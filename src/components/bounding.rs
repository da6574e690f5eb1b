use std::fmt;

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Eight box corners, in the order produced by [`BoundingVolume::corners`].
pub type Corners = [Vector3<f64>; 8];

/// Candidate axes shorter than this are parallel-edge artefacts and are skipped.
const AXIS_EPSILON: f64 = 1e-6;

/// Axis-aligned box, either in a body's local (model) space or in world space.
///
/// `min <= max` holds componentwise for every value of this type: constructors
/// order their input and the mutating operations preserve the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingVolume {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Default for BoundingVolume {
    /// A zero-extent box at the origin: the state of a volume that has never
    /// been computed or refit. It collides with nothing.
    fn default() -> Self {
        Self {
            min: Vector3::zeros(),
            max: Vector3::zeros(),
        }
    }
}

impl BoundingVolume {
    /// Creates a box spanning two arbitrary opposite corners.
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Computes the componentwise extents of `points`.
    ///
    /// An empty slice has no extents, so `None` is returned rather than a
    /// degenerate box.
    pub fn from_vertices(points: &[Vector3<f64>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// True for a box with no extent on any axis, i.e. one that was never
    /// computed from geometry. Overlap queries treat it as non-colliding.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// The 8 corners of the box in its own space.
    pub fn corners(&self) -> Corners {
        let (min, max) = (self.min, self.max);
        [
            min,
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, min.z),
            max,
        ]
    }

    /// Maps every corner through an affine `transform`, giving the oriented
    /// corner set used by the narrow phase.
    pub fn transformed_corners(&self, transform: &Matrix4<f64>) -> Corners {
        self.corners()
            .map(|corner| transform.transform_point(&Point3::from(corner)).coords)
    }

    /// Refits the box into the space `transform` maps to.
    ///
    /// The result is axis-aligned in the target space and grows under rotation
    /// rather than staying tight.
    pub fn refit(&self, transform: &Matrix4<f64>) -> Self {
        Self::enclosing(&self.transformed_corners(transform))
    }

    /// Axis-aligned box around a corner set.
    pub fn enclosing(corners: &Corners) -> Self {
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), c| {
                (min.inf(c), max.sup(c))
            });
        Self { min, max }
    }

    /// Broad-phase test: the boxes overlap on all three world axes at once.
    pub fn overlaps_aabb(&self, other: &BoundingVolume) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }

        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
            && (self.min.z <= other.max.z && self.max.z >= other.min.z)
    }

    /// Narrow-phase separating-axis test between two oriented corner sets.
    ///
    /// Returns true when no candidate axis separates the projections.
    pub fn overlaps_sat(corners_a: &Corners, corners_b: &Corners) -> bool {
        if is_collapsed(corners_a) || is_collapsed(corners_b) {
            return false;
        }

        separating_axes(corners_a, corners_b)
            .into_iter()
            .all(|axis| overlap_on_axis(corners_a, corners_b, &axis))
    }

    /// Overlap region of two boxes, or `None` when the broad phase misses.
    pub fn intersection(&self, other: &BoundingVolume) -> Option<BoundingVolume> {
        self.overlaps_aabb(other).then(|| BoundingVolume {
            min: self.min.sup(&other.min),
            max: self.max.inf(&other.max),
        })
    }

    pub fn contains_point(&self, point: &Vector3<f64>) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    pub fn translate(&mut self, offset: &Vector3<f64>) {
        self.min += offset;
        self.max += offset;
    }

    /// Scales the box about its centre. Factors are taken by magnitude.
    pub fn scale(&mut self, factors: &Vector3<f64>) {
        let center = self.center();
        let half_size = (self.size() * 0.5).component_mul(&factors.abs());
        self.min = center - half_size;
        self.max = center + half_size;
    }
}

impl fmt::Display for BoundingVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min ({:.3}, {:.3}, {:.3}) max ({:.3}, {:.3}, {:.3})",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

fn is_collapsed(corners: &Corners) -> bool {
    corners.iter().all(|c| *c == corners[0])
}

/// Edge directions of a corner set laid out as in [`BoundingVolume::corners`].
fn edge_directions(corners: &Corners) -> [Vector3<f64>; 3] {
    [
        corners[4] - corners[0],
        corners[2] - corners[0],
        corners[1] - corners[0],
    ]
}

/// World axes, the box edges and their cross products, and the corner-pair
/// cross products. Near-zero axes are dropped before normalising.
fn separating_axes(corners_a: &Corners, corners_b: &Corners) -> Vec<Vector3<f64>> {
    let edges_a = edge_directions(corners_a);
    let edges_b = edge_directions(corners_b);

    let mut candidates = vec![Vector3::x(), Vector3::y(), Vector3::z()];
    candidates.extend(edges_a);
    candidates.extend(edges_b);
    for a in &edges_a {
        candidates.extend(edges_b.iter().map(|b| a.cross(b)));
    }
    for a in corners_a {
        candidates.extend(corners_b.iter().map(|b| a.cross(b)));
    }

    candidates
        .into_iter()
        .filter_map(|axis| axis.try_normalize(AXIS_EPSILON))
        .collect()
}

fn project(corners: &Corners, axis: &Vector3<f64>) -> (f64, f64) {
    corners
        .iter()
        .map(|c| c.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}

fn overlap_on_axis(corners_a: &Corners, corners_b: &Corners, axis: &Vector3<f64>) -> bool {
    let (a_min, a_max) = project(corners_a, axis);
    let (b_min, b_max) = project(corners_b, axis);
    !(a_max < b_min || b_max < a_min)
}
