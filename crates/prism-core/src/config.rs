//! Tunable parameters of the beam interaction.
//!
//! The defaults reproduce the look of the live page. Every field can be
//! overridden from JSON (missing fields keep their default), which is how the
//! web frontend picks up per-page tweaks.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Refractive index of the prism material.
    pub glass_ior: f32,
    /// Refractive index of the surrounding air.
    pub air_ior: f32,
    /// Multiplier applied to the physical refraction angle. Purely artistic:
    /// a real prism bends far less than what reads well on screen.
    pub refraction_gain: f32,
    /// Smoothing factor for the rainbow emissive intensity.
    pub emissive_decay_speed: f32,
    /// Smoothing factor for the ambient flash fade-out.
    pub ambient_decay_speed: f32,
    /// Emissive intensity the rainbow settles at while the beam hits the prism.
    pub hit_emissive_target: f32,
    /// Smoothing factor for steering the spotlight target.
    pub spot_steer_speed: f32,
    /// Emissive intensity set on first contact.
    pub flash_emissive: f32,
    /// Rainbow animation speed set on first contact.
    pub flash_speed: f32,
    /// Z of the flare and rainbow quads, slightly behind the text.
    pub flare_depth: f32,
    /// Ambient intensity when the scene mounts.
    pub initial_ambient: f32,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            glass_ior: 2.5,
            air_ior: 1.000293,
            refraction_gain: 6.0,
            emissive_decay_speed: 0.1,
            ambient_decay_speed: 0.025,
            hit_emissive_target: 2.5,
            spot_steer_speed: 0.05,
            flash_emissive: MAX_EMISSIVE,
            flash_speed: 1.0,
            flare_depth: -0.5,
            initial_ambient: 1.0,
        }
    }
}

/// Upper bound for any emissive intensity the controller may produce.
pub const MAX_EMISSIVE: f32 = 20.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite, positive index of refraction (got {value})")]
    InvalidIor { field: &'static str, value: f32 },
    #[error("{field} must be a smoothing factor in (0, 1] (got {value})")]
    InvalidFactor { field: &'static str, value: f32 },
    #[error("{field} must lie in [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

impl BeamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ior("glass_ior", self.glass_ior)?;
        check_ior("air_ior", self.air_ior)?;
        check_factor("emissive_decay_speed", self.emissive_decay_speed)?;
        check_factor("ambient_decay_speed", self.ambient_decay_speed)?;
        check_factor("spot_steer_speed", self.spot_steer_speed)?;
        check_range("hit_emissive_target", self.hit_emissive_target, 0.0, MAX_EMISSIVE)?;
        check_range("flash_emissive", self.flash_emissive, 0.0, MAX_EMISSIVE)?;
        check_range("initial_ambient", self.initial_ambient, 0.0, 1.0)?;
        check_range("refraction_gain", self.refraction_gain, f32::MIN, f32::MAX)?;
        check_range("flash_speed", self.flash_speed, f32::MIN, f32::MAX)?;
        check_range("flare_depth", self.flare_depth, f32::MIN, f32::MAX)?;
        Ok(())
    }
}

fn check_ior(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidIor { field, value })
    }
}

fn check_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFactor { field, value })
    }
}

// NaN fails both comparisons, so it is rejected here too.
fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
