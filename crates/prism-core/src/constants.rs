use glam::Vec3;

// Scene layout and beam limits shared by the core and the web frontend.

// Name slab (the prism)
pub const DISPLAY_NAME: &str = "Laurenz Honauer";
pub const PRISM_POSITION: Vec3 = Vec3::new(-3.0, 0.0, 0.0); // left edge of the text baseline
pub const GLYPH_ADVANCE_EM: f32 = 0.55; // average Roboto advance per glyph
pub const CAP_HEIGHT_EM: f32 = 0.72;
pub const DESCENDER_EM: f32 = 0.25; // depth below the baseline; keeps the beam target inside the slab

// Responsive text size
pub const TEXT_SIZE_SMALL: f32 = 0.5;
pub const TEXT_SIZE_LARGE: f32 = 1.0;
pub const TEXT_SIZE_BREAKPOINT_PX: f32 = 1500.0; // viewports narrower than this use the small size

// Beam
pub const BEAM_BOUNCES: usize = 10; // max reflections per cast
pub const BEAM_FAR: f32 = 20.0; // max length of a single segment
pub const BEAM_SURFACE_EPSILON: f32 = 1e-4; // offset applied after a bounce to leave the surface
pub const BEAM_TARGET: Vec3 = Vec3::ZERO; // the beam is always aimed at the scene origin

// Lights
pub const SPOT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.0);
