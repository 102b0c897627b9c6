//! Exponential smoothing shared by every animated value in the scene.
//!
//! Each call moves `current` a fixed fraction of the remaining distance toward
//! `target`. Called once per frame this produces the familiar "ease out"
//! approach without tracking time.

use glam::Vec3;

/// `current + (target - current) * factor`.
#[inline]
pub fn lerp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Componentwise [`lerp`].
#[inline]
pub fn lerp_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current.lerp(target, factor)
}

/// Smooth `value` in place toward `target`.
#[inline]
pub fn approach(value: &mut f32, target: f32, factor: f32) {
    *value = lerp(*value, target, factor);
}
