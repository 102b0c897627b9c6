/// Camera, canvas and drawing constants for the web frontend.
///
/// Scene layout and beam limits live in `prism_core::constants`; these only
/// concern how the scene is put on screen.
// Orthographic camera: CSS pixels per world unit
pub const CAMERA_ZOOM: f32 = 70.0;

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const CONFIG_ATTRIBUTE: &str = "data-beam-config"; // optional JSON overrides for BeamConfig

// Beam polyline capacity in the uniform buffer (origin + bounces + contact + focus fits)
pub const MAX_BEAM_POINTS: usize = 16;

// Drawing
pub const BEAM_WIDTH_PX: f32 = 2.0;
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
