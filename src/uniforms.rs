use crate::constants::{BEAM_WIDTH_PX, MAX_BEAM_POINTS};
use glam::Vec3;
use prism_core::{Aabb, VisualState};

/// Everything the scene shader needs for one frame. Layout mirrors
/// `SceneUniforms` in `shaders/scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) pixels_per_unit: f32,
    pub(crate) time: f32,

    pub(crate) ambient: f32,
    pub(crate) spot_intensity: f32,
    pub(crate) rainbow_emissive: f32,
    pub(crate) rainbow_rotation: f32,

    pub(crate) rainbow_pos: [f32; 2],
    pub(crate) flare_pos: [f32; 2],

    pub(crate) spot_dir: [f32; 2],
    pub(crate) flare_rotation: f32,
    pub(crate) flare_visible: f32,

    pub(crate) prism_min: [f32; 2],
    pub(crate) prism_max: [f32; 2],

    pub(crate) beam_count: u32,
    pub(crate) rainbow_speed: f32,
    pub(crate) beam_width_px: f32,
    pub(crate) _pad: f32,

    pub(crate) beam: [[f32; 4]; MAX_BEAM_POINTS],
}

/// Per-frame inputs that do not come from the controller.
pub(crate) struct FrameView {
    pub(crate) resolution: [f32; 2],
    pub(crate) pixels_per_unit: f32,
    pub(crate) time: f32,
}

impl SceneUniforms {
    /// `spot_dir` is passed separately: it is only recomputed when the
    /// controller flags the spotlight target as dirty.
    pub(crate) fn pack(
        view: &FrameView,
        state: &VisualState,
        spot_dir: Vec3,
        beam_path: &[Vec3],
        prism: Aabb,
    ) -> Self {
        let mut beam = [[0.0; 4]; MAX_BEAM_POINTS];
        let count = beam_path.len().min(MAX_BEAM_POINTS);
        for (slot, p) in beam.iter_mut().zip(beam_path) {
            *slot = [p.x, p.y, p.z, 1.0];
        }
        let xy = |v: Vec3| v.truncate().to_array();
        Self {
            resolution: view.resolution,
            pixels_per_unit: view.pixels_per_unit,
            time: view.time,
            ambient: state.ambient.intensity,
            spot_intensity: state.spot.intensity,
            rainbow_emissive: state.rainbow.emissive_intensity,
            rainbow_rotation: state.rainbow.rotation_z,
            rainbow_pos: xy(state.rainbow.position),
            flare_pos: xy(state.flare.position),
            spot_dir: spot_dir.truncate().to_array(),
            flare_rotation: state.flare.rotation_z,
            flare_visible: if state.flare.visible { 1.0 } else { 0.0 },
            prism_min: prism.min.to_array(),
            prism_max: prism.max.to_array(),
            beam_count: count as u32,
            rainbow_speed: state.rainbow.speed,
            beam_width_px: BEAM_WIDTH_PX,
            _pad: 0.0,
            beam,
        }
    }
}
