// Host-side tests for shader uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod uniforms {
    include!("../src/uniforms.rs");
}

use constants::MAX_BEAM_POINTS;
use glam::{Vec2, Vec3};
use prism_core::{Aabb, BeamController, RayHit, VisualState};
use uniforms::*;

fn view() -> FrameView {
    FrameView {
        resolution: [1280.0, 720.0],
        pixels_per_unit: 70.0,
        time: 1.5,
    }
}

fn prism() -> Aabb {
    Aabb::new(Vec2::new(-3.0, 0.0), Vec2::new(1.0, 0.36))
}

#[test]
fn layout_matches_wgsl_struct() {
    // 6 rows of 16 bytes of scalars, then the beam array.
    assert_eq!(
        std::mem::size_of::<SceneUniforms>(),
        96 + 16 * MAX_BEAM_POINTS
    );
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn packs_visual_state() {
    let mut c = BeamController::default();
    let hit = RayHit {
        position: Vec3::new(1.0, 0.0, 0.0),
        normal: Some(Vec3::new(-1.0, 0.0, 0.0)),
        direction: Vec3::new(-1.0, 0.0, 0.0),
    };
    c.on_ray_enter(&hit);
    c.on_ray_move(&hit);

    let path = [Vec3::new(5.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO];
    let u = SceneUniforms::pack(&view(), c.state(), Vec3::X, &path, prism());

    assert_eq!(u.rainbow_emissive, 20.0);
    assert_eq!(u.ambient, 1.0);
    assert_eq!(u.flare_pos, [1.0, 0.0]);
    assert_eq!(u.spot_dir, [1.0, 0.0]);
    assert_eq!(u.prism_min, [-3.0, 0.0]);
    assert_eq!(u.prism_max, [1.0, 0.36]);
    assert_eq!(u.beam_count, 3);
    assert_eq!(u.beam[0], [5.0, 1.0, 0.0, 1.0]);
    assert_eq!(u.beam[3], [0.0; 4]);
    // Flare is only shown once a tick has observed the hit.
    assert_eq!(u.flare_visible, 0.0);
}

#[test]
fn long_beam_paths_are_truncated() {
    let path: Vec<Vec3> = (0..40).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
    let u = SceneUniforms::pack(&view(), &VisualState::default(), Vec3::ZERO, &path, prism());
    assert_eq!(u.beam_count as usize, MAX_BEAM_POINTS);
    let last = u.beam[MAX_BEAM_POINTS - 1];
    assert_eq!(last[0], (MAX_BEAM_POINTS - 1) as f32);
}

#[test]
fn bytes_are_plain_old_data() {
    let u = SceneUniforms::pack(&view(), &VisualState::default(), Vec3::ZERO, &[], prism());
    let bytes = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), std::mem::size_of::<SceneUniforms>());
    assert_eq!(u.beam_count, 0);
    assert_eq!(u.resolution, [1280.0, 720.0]);
}
