//! Scene nodes mutated by the beam controller.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! controller owns a [`VisualState`] for the lifetime of the scene and is the
//! only writer; the renderer reads it once per frame.

use crate::config::BeamConfig;
use crate::constants::SPOT_POSITION;
use glam::Vec3;

/// Whether the beam currently touches the prism.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitState {
    #[default]
    Idle,
    Hit,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmbientLight {
    pub intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    pub intensity: f32,
    pub position: Vec3,
    /// World-space point the spotlight aims at.
    pub target: Vec3,
    /// Set whenever `target` moves; cleared by whoever rebuilds the
    /// spotlight transform.
    pub target_dirty: bool,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            position: SPOT_POSITION,
            target: Vec3::ZERO,
            target_dirty: false,
        }
    }
}

/// Rainbow fan emitted from the prism.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rainbow {
    pub emissive_intensity: f32,
    pub speed: f32,
    pub position: Vec3,
    pub rotation_z: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flare {
    pub position: Vec3,
    pub rotation_z: f32,
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
    pub hit: HitState,
    pub ambient: AmbientLight,
    pub spot: SpotLight,
    pub rainbow: Rainbow,
    pub flare: Flare,
}

impl VisualState {
    /// State at scene mount: dark rainbow, ambient flash at full strength.
    pub fn new(config: &BeamConfig) -> Self {
        Self {
            ambient: AmbientLight {
                intensity: config.initial_ambient,
            },
            ..Self::default()
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit == HitState::Hit
    }

    /// Normalized direction from the origin toward the spotlight target, or
    /// zero while the target still sits at the origin.
    pub fn spot_target_direction(&self) -> Vec3 {
        self.spot.target.normalize_or_zero()
    }
}
