use glam::Vec2;
use web_sys as web;

/// Last known pointer position in CSS pixels relative to the canvas.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub seen: bool,
}

#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Pointer in normalized device coordinates: x right, y up, both in [-1, 1].
///
/// Until the first pointer event the pointer rests at the center, which
/// leaves the beam degenerate (origin == target) and therefore invisible.
#[inline]
pub fn pointer_ndc(mouse: &MouseState, css_width: f32, css_height: f32) -> Vec2 {
    if !mouse.seen || css_width <= 0.0 || css_height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = (mouse.x / css_width).clamp(0.0, 1.0);
    let v = (mouse.y / css_height).clamp(0.0, 1.0);
    Vec2::new(2.0 * u - 1.0, 1.0 - 2.0 * v)
}

/// Visible area in world units for an orthographic camera with `zoom` CSS
/// pixels per unit.
#[inline]
pub fn viewport_world(css_width: f32, css_height: f32, zoom: f32) -> Vec2 {
    Vec2::new(css_width, css_height) / zoom.max(f32::EPSILON)
}
