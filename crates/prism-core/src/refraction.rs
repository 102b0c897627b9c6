//! Snell's law in the scene plane.
//!
//! Angles are measured counter-clockwise from +X in the XY plane. The beam is
//! assumed to travel toward the scene origin, which is where the prism
//! "focuses" it, so the incoming direction is derived from the hit position
//! rather than from the actual ray direction.

use crate::config::BeamConfig;
use glam::Vec3;

/// Refraction angle for light crossing from air into glass.
///
/// Returns 0 when Snell's law has no real solution (total internal
/// reflection) instead of propagating NaN.
pub fn refraction_angle(incident: f32, air_ior: f32, glass_ior: f32) -> f32 {
    let s = air_ior * incident.sin() / glass_ior;
    if (-1.0..=1.0).contains(&s) {
        s.asin()
    } else {
        0.0
    }
}

/// Angles derived from a single beam/prism contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGeometry {
    /// Angle from the hit point toward the scene origin.
    pub angle_to_center: f32,
    /// Angle of the surface normal at the hit point.
    pub normal_angle: f32,
    pub incident_angle: f32,
    pub refraction_angle: f32,
    /// Direction the rainbow leaves the prism in.
    pub final_angle: f32,
}

impl BeamGeometry {
    pub fn from_hit(position: Vec3, normal: Vec3, config: &BeamConfig) -> Self {
        // `0.0 - v` instead of `-v`: a -0.0 numerator would flip atan2 to -π.
        let angle_to_center = (0.0 - position.y).atan2(0.0 - position.x);
        let normal_angle = normal.y.atan2(normal.x);
        let incident_angle = angle_to_center - normal_angle;
        let refraction = refraction_angle(incident_angle, config.air_ior, config.glass_ior);
        Self {
            angle_to_center,
            normal_angle,
            incident_angle,
            refraction_angle: refraction,
            final_angle: angle_to_center + config.refraction_gain * refraction,
        }
    }

    /// Unit vector along [`Self::final_angle`] in the scene plane.
    pub fn final_direction(&self) -> Vec3 {
        Vec3::new(self.final_angle.cos(), self.final_angle.sin(), 0.0)
    }
}
