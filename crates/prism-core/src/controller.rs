use crate::beam::{BeamCaster, RayEvent, RayHit};
use crate::config::BeamConfig;
use crate::constants::BEAM_TARGET;
use crate::interp::{approach, lerp_vec3};
use crate::refraction::BeamGeometry;
use crate::scene::{HitState, VisualState};
use glam::{Vec2, Vec3};

/// Drives the beam/prism visuals from ray events and the render loop.
///
/// Ray events switch between [`HitState::Idle`] and [`HitState::Hit`];
/// [`BeamController::on_tick`] runs once per frame regardless of state and
/// does all the smoothing.
#[derive(Clone, Debug)]
pub struct BeamController {
    config: BeamConfig,
    state: VisualState,
}

impl Default for BeamController {
    fn default() -> Self {
        Self::new(BeamConfig::default())
    }
}

impl BeamController {
    pub fn new(config: BeamConfig) -> Self {
        let state = VisualState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    pub fn state(&self) -> &VisualState {
        &self.state
    }

    /// Clear and return the spotlight's dirty flag.
    pub fn take_spot_target_dirty(&mut self) -> bool {
        std::mem::take(&mut self.state.spot.target_dirty)
    }

    pub fn dispatch(&mut self, event: RayEvent) {
        match event {
            RayEvent::Enter(hit) => self.on_ray_enter(&hit),
            RayEvent::Move(hit) => self.on_ray_move(&hit),
            RayEvent::Exit => self.on_ray_exit(),
        }
    }

    /// First contact: flash the rainbow. Smoothing takes it back down on
    /// the following ticks.
    pub fn on_ray_enter(&mut self, _hit: &RayHit) {
        if self.state.hit == HitState::Idle {
            log::debug!("[beam] enter prism");
        }
        self.state.hit = HitState::Hit;
        self.state.rainbow.speed = self.config.flash_speed;
        self.state.rainbow.emissive_intensity = self.config.flash_emissive;
    }

    pub fn on_ray_exit(&mut self) {
        if self.state.hit == HitState::Hit {
            log::debug!("[beam] exit prism");
        }
        self.state.hit = HitState::Idle;
    }

    pub fn on_ray_move(&mut self, hit: &RayHit) {
        let Some(normal) = hit.normal else {
            return;
        };
        if self.state.hit == HitState::Idle {
            log::trace!("[beam] move ignored while idle");
            return;
        }

        let geometry = BeamGeometry::from_hit(hit.position, normal, &self.config);
        let anchor = Vec3::new(hit.position.x, hit.position.y, self.config.flare_depth);

        let flare = &mut self.state.flare;
        flare.position = anchor;
        flare.rotation_z = -hit.direction.y.atan2(hit.direction.x);

        let rainbow = &mut self.state.rainbow;
        rainbow.position = anchor;
        rainbow.rotation_z = geometry.final_angle;

        let spot = &mut self.state.spot;
        spot.target = lerp_vec3(
            spot.target,
            geometry.final_direction(),
            self.config.spot_steer_speed,
        );
        spot.target_dirty = true;
    }

    /// Per-frame update. `pointer` is in normalized device coordinates and
    /// `viewport` is the visible area in world units.
    pub fn on_tick(&mut self, pointer: Vec2, viewport: Vec2, beam: &mut impl BeamCaster) {
        let origin = (pointer * viewport / 2.0).extend(0.0);
        beam.set_ray(origin, BEAM_TARGET);

        let emissive_target = if self.state.is_hit() {
            self.config.hit_emissive_target
        } else {
            0.0
        };
        let rainbow = &mut self.state.rainbow;
        approach(
            &mut rainbow.emissive_intensity,
            emissive_target,
            self.config.emissive_decay_speed,
        );
        self.state.spot.intensity = rainbow.emissive_intensity;

        approach(
            &mut self.state.ambient.intensity,
            0.0,
            self.config.ambient_decay_speed,
        );
        self.state.flare.visible = self.state.is_hit();
    }
}
