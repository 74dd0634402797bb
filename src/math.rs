//! Planar Math Helpers
//!
//! Small free functions over `glam::Vec3` shared by the movement, steering,
//! and spawn code. The ground plane is XZ; Y is height. Yaw 0 faces -Z,
//! matching the camera convention of the presentation layer.

use glam::Vec3;
use rand::Rng;

/// Forward and right basis vectors on the ground plane for a given yaw.
#[inline]
pub fn yaw_basis(yaw: f32) -> (Vec3, Vec3) {
    let forward = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, yaw.sin());
    (forward, right)
}

/// Full 3D look direction for a yaw/pitch pair (positive pitch looks up).
#[inline]
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (cp, sp) = (pitch.cos(), pitch.sin());
    Vec3::new(yaw.sin() * cp, sp, -yaw.cos() * cp)
}

/// Displacement from `from` to `to` projected onto the ground plane.
#[inline]
pub fn planar_delta(from: Vec3, to: Vec3) -> Vec3 {
    Vec3::new(to.x - from.x, 0.0, to.z - from.z)
}

/// Uniformly random point on a ground-plane circle of the given radius.
pub fn random_point_on_circle<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Clamp both horizontal axes to ±`limit`, leaving height untouched.
#[inline]
pub fn clamp_planar(p: Vec3, limit: f32) -> Vec3 {
    Vec3::new(p.x.clamp(-limit, limit), p.y, p.z.clamp(-limit, limit))
}
