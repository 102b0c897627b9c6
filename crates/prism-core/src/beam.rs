//! Beam casting against the scene's colliders.
//!
//! The beam starts at the pointer, is aimed at the scene origin, reflects off
//! mirror blocks and stops on the prism. All geometry lives in the XY plane;
//! the camera looks straight down -Z so depth never affects a hit.

use crate::constants::{
    BEAM_BOUNCES, BEAM_FAR, BEAM_SURFACE_EPSILON, BEAM_TARGET, CAP_HEIGHT_EM, DESCENDER_EM,
    DISPLAY_NAME, GLYPH_ADVANCE_EM, PRISM_POSITION, TEXT_SIZE_BREAKPOINT_PX, TEXT_SIZE_LARGE, TEXT_SIZE_SMALL,
};
use glam::{Vec2, Vec3};

/// Receives the ray the beam should be cast along on the next frame.
pub trait BeamCaster {
    fn set_ray(&mut self, origin: Vec3, target: Vec3);
}

/// A beam contact with the prism.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub position: Vec3,
    /// Surface normal at `position`; `None` when the contact has no usable
    /// surface information.
    pub normal: Option<Vec3>,
    /// Unit direction the beam was travelling in.
    pub direction: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayEvent {
    Enter(RayHit),
    Move(RayHit),
    Exit,
}

/// Axis-aligned box in the scene plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Slab test. Returns the distance along `dir` to the entry point and the
    /// outward normal of the face that was entered. Rays starting inside the
    /// box do not hit it.
    pub fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<(f32, Vec3)> {
        let o = origin.truncate();
        let d = dir.truncate();
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;
        for axis in 0..2 {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d[axis].abs() < 1e-8 {
                if o[axis] < lo || o[axis] > hi {
                    return None;
                }
                continue;
            }
            let (near, far, face) = if d[axis] > 0.0 {
                ((lo - o[axis]) / d[axis], (hi - o[axis]) / d[axis], -1.0)
            } else {
                ((hi - o[axis]) / d[axis], (lo - o[axis]) / d[axis], 1.0)
            };
            if near > t_enter {
                t_enter = near;
                normal = Vec3::ZERO;
                normal[axis] = face;
            }
            t_exit = t_exit.min(far);
        }
        (t_enter <= t_exit && t_enter > 0.0).then_some((t_enter, normal))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    /// Mirror: the beam bounces off.
    Reflect,
    /// Prism: the beam stops, is drawn on to `focus`, and ray events fire.
    Absorb { focus: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    pub bounds: Aabb,
    pub response: Response,
}

impl Collider {
    pub fn mirror(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            bounds: Aabb::from_center(center, half_extents),
            response: Response::Reflect,
        }
    }

    pub fn prism(bounds: Aabb, focus: Vec3) -> Self {
        Self {
            bounds,
            response: Response::Absorb { focus },
        }
    }
}

/// Text size used for the name at a given viewport width in CSS pixels.
pub fn text_size_for_viewport(viewport_width_px: f32) -> f32 {
    if viewport_width_px < TEXT_SIZE_BREAKPOINT_PX {
        TEXT_SIZE_SMALL
    } else {
        TEXT_SIZE_LARGE
    }
}

/// Bounding box of the name slab set at `text_size`, from descender to cap
/// height. The beam target lies strictly inside it, so every contact is on a
/// face away from the target.
pub fn prism_bounds(text_size: f32) -> Aabb {
    let glyphs = DISPLAY_NAME.chars().count() as f32;
    let baseline = PRISM_POSITION.truncate();
    Aabb::new(
        baseline - Vec2::new(0.0, DESCENDER_EM) * text_size,
        baseline + Vec2::new(glyphs * GLYPH_ADVANCE_EM, CAP_HEIGHT_EM) * text_size,
    )
}

/// Colliders of the portfolio scene for the given viewport width.
pub fn scene_colliders(viewport_width_px: f32) -> Vec<Collider> {
    vec![Collider::prism(
        prism_bounds(text_size_for_viewport(viewport_width_px)),
        BEAM_TARGET,
    )]
}

fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir - 2.0 * dir.dot(normal) * normal
}

/// Casts the beam once per frame and reports how it touches the prism.
#[derive(Clone, Debug)]
pub struct BeamTracer {
    bounces: usize,
    far: f32,
    origin: Vec3,
    target: Vec3,
    path: Vec<Vec3>,
    hit_collider: Option<usize>,
}

impl Default for BeamTracer {
    fn default() -> Self {
        Self::new(BEAM_BOUNCES, BEAM_FAR)
    }
}

impl BeamCaster for BeamTracer {
    fn set_ray(&mut self, origin: Vec3, target: Vec3) {
        self.origin = origin;
        self.target = target;
    }
}

impl BeamTracer {
    pub fn new(bounces: usize, far: f32) -> Self {
        Self {
            bounces,
            far,
            origin: Vec3::ZERO,
            target: BEAM_TARGET,
            path: Vec::with_capacity(bounces + 3),
            hit_collider: None,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Polyline of the last cast, starting at the ray origin.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    pub fn is_hitting(&self) -> bool {
        self.hit_collider.is_some()
    }

    /// Trace the current ray and return the events for this frame, in the
    /// order they must be dispatched: `Exit`, then `Enter`, then `Move`.
    pub fn cast(&mut self, colliders: &[Collider]) -> Vec<RayEvent> {
        self.path.clear();
        let hit = self.trace(colliders);

        let mut events = Vec::new();
        let now = hit.map(|(i, _)| i);
        if self.hit_collider.is_some() && self.hit_collider != now {
            events.push(RayEvent::Exit);
        }
        if let Some((i, h)) = hit {
            if self.hit_collider != Some(i) {
                events.push(RayEvent::Enter(h));
            }
            events.push(RayEvent::Move(h));
        }
        self.hit_collider = now;
        events
    }

    fn trace(&mut self, colliders: &[Collider]) -> Option<(usize, RayHit)> {
        let delta = (self.target - self.origin).truncate();
        if delta.length_squared() <= f32::EPSILON {
            return None;
        }
        let mut origin = self.origin;
        let mut dir = delta.normalize().extend(0.0);
        let mut reflections = 0;
        self.path.push(origin);

        loop {
            let nearest = colliders
                .iter()
                .enumerate()
                .filter_map(|(i, c)| c.bounds.intersect(origin, dir).map(|(t, n)| (i, t, n)))
                .filter(|&(_, t, _)| t <= self.far)
                .min_by(|a, b| a.1.total_cmp(&b.1));

            let Some((i, t, normal)) = nearest else {
                self.path.push(origin + dir * self.far);
                return None;
            };
            let point = origin + dir * t;
            self.path.push(point);

            match colliders[i].response {
                Response::Absorb { focus } => {
                    self.path.push(focus);
                    return Some((
                        i,
                        RayHit {
                            position: point,
                            normal: Some(normal),
                            direction: dir,
                        },
                    ));
                }
                Response::Reflect if reflections < self.bounces => {
                    reflections += 1;
                    dir = reflect(dir, normal);
                    origin = point + dir * BEAM_SURFACE_EPSILON;
                }
                Response::Reflect => return None,
            }
        }
    }
}
