use crate::constants::CONFIG_ATTRIBUTE;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Size of the canvas in CSS pixels.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = device_pixel_ratio() as f64;
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

pub fn beam_config_attribute(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(CONFIG_ATTRIBUTE)
}
