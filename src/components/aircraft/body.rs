use bevy::prelude::*;
use nalgebra::{Matrix4, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{BoundingVolume, Collider, Corners, ModelFrame};

/// Cross products shorter than this leave the previous `right` axis in place.
const BASIS_EPSILON: f64 = 1e-6;

/// A single controllable rigid body flying over the ground plane.
///
/// Body frame: +X forward, +Y up, +Z right. `yaw`, `pitch` and `roll` are in
/// degrees; `attitude` is rebuilt from them as one rotation, and both the
/// direction basis and the render transform are derived from it.
///
/// State is only mutated by the dynamics step and the direct `move_*`
/// translations, each of which ends by refitting the world volume.
#[derive(Component, Debug, Clone)]
pub struct FlightBody {
    pub(crate) position: Vector3<f64>,
    pub(crate) velocity: Vector3<f64>,
    /// Signed speed along `forward`.
    pub(crate) speed: f64,
    pub(crate) yaw: f64,
    pub(crate) pitch: f64,
    pub(crate) roll: f64,
    pub(crate) grounded: bool,
    forward: Vector3<f64>,
    right: Vector3<f64>,
    up: Vector3<f64>,
    attitude: UnitQuaternion<f64>,
    model: ModelFrame,
    transform: Matrix4<f64>,
    local_volume: BoundingVolume,
    world_volume: BoundingVolume,
    world_corners: Corners,
}

impl FlightBody {
    /// Creates a level body at rest and refits its world volume.
    pub fn new(position: Vector3<f64>, local_volume: BoundingVolume, model: ModelFrame) -> Self {
        let mut body = Self {
            position,
            velocity: Vector3::zeros(),
            speed: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            grounded: false,
            forward: Vector3::x(),
            right: Vector3::z(),
            up: Vector3::y(),
            attitude: UnitQuaternion::identity(),
            model,
            transform: Matrix4::identity(),
            local_volume,
            world_volume: BoundingVolume::default(),
            world_corners: BoundingVolume::default().corners(),
        };
        body.update_orientation();
        body.refit();
        body
    }

    /// Starts the body with the given orientation in degrees. Limits are
    /// applied by the first dynamics step.
    pub fn with_orientation(mut self, yaw: f64, pitch: f64, roll: f64) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self.roll = roll;
        self.update_orientation();
        self.refit();
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.forward
    }

    pub fn right(&self) -> Vector3<f64> {
        self.right
    }

    pub fn up(&self) -> Vector3<f64> {
        self.up
    }

    pub fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    /// World transform of the body's mesh.
    pub fn transform(&self) -> &Matrix4<f64> {
        &self.transform
    }

    pub fn local_volume(&self) -> &BoundingVolume {
        &self.local_volume
    }

    pub fn world_volume(&self) -> &BoundingVolume {
        &self.world_volume
    }

    /// Local corners mapped through the current transform, before flattening.
    pub fn world_corners(&self) -> &Corners {
        &self.world_corners
    }

    pub fn collider(&self) -> Collider {
        Collider::new(self.world_volume, self.world_corners)
    }

    /// Whether the last step ended resting on the ground.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Rebuilds `attitude` and the `forward`/`right`/`up` basis from the
    /// current angles.
    ///
    /// `forward` is `(cos p cos y, sin p, cos p sin y)`, `right` is
    /// `forward x worldUp` and `up` is `right x forward`. Roll tilts the
    /// attitude but not this basis.
    pub(crate) fn update_orientation(&mut self) {
        let heading = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -self.yaw.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.pitch.to_radians());
        let bank = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.roll.to_radians());
        self.attitude = heading * bank;

        self.forward = (heading * Vector3::x()).normalize();
        match self.forward.cross(&Vector3::y()).try_normalize(BASIS_EPSILON) {
            Some(right) => self.right = right,
            None => debug!("Forward axis parallel to world up, keeping previous right axis"),
        }
        self.up = self.right.cross(&self.forward).normalize();
    }

    /// Recomposes the world transform and refits the world volume from the
    /// local one.
    pub(crate) fn refit(&mut self) {
        self.transform = Translation3::from(self.position).to_homogeneous()
            * self.model.scale_matrix()
            * self.attitude.to_homogeneous()
            * self.model.base_rotation().to_homogeneous();
        self.world_corners = self.local_volume.transformed_corners(&self.transform);
        self.world_volume = BoundingVolume::enclosing(&self.world_corners);
    }

    pub fn move_forward(&mut self, speed: f64, dt: f64) {
        self.position += self.forward * speed * dt;
        self.refit();
    }

    pub fn move_backward(&mut self, speed: f64, dt: f64) {
        self.position -= self.forward * speed * dt;
        self.refit();
    }

    pub fn move_right(&mut self, speed: f64, dt: f64) {
        self.position += self.right * speed * dt;
        self.refit();
    }

    pub fn move_left(&mut self, speed: f64, dt: f64) {
        self.position -= self.right * speed * dt;
        self.refit();
    }

    /// Bevy transform for the renderer, narrowed to `f32`.
    pub fn render_transform(&self) -> Transform {
        let rotation = (self.attitude * self.model.base_rotation())
            .quaternion()
            .coords
            .cast::<f32>();
        Transform {
            translation: Vec3::new(
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ),
            rotation: Quat::from_xyzw(rotation.x, rotation.y, rotation.z, rotation.w),
            scale: Vec3::splat(self.model.scale as f32),
        }
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            position: self.position,
            velocity: self.velocity,
            speed: self.speed,
            yaw: self.yaw,
            pitch: self.pitch,
            roll: self.roll,
            forward: self.forward,
            up: self.up,
            world_volume: self.world_volume,
            grounded: self.grounded,
        }
    }
}

/// Read-only copy of the state a renderer or camera consumes after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub speed: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    pub forward: Vector3<f64>,
    pub up: Vector3<f64>,
    pub world_volume: BoundingVolume,
    pub grounded: bool,
}
