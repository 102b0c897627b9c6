#![cfg(target_arch = "wasm32")]
use prism_core::BeamController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod settings;
mod uniforms;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("prism-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config_json = dom::beam_config_attribute(&canvas);
    let config = settings::beam_config_from_json(config_json.as_deref());
    let controller = BeamController::new(config);

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        mouse_state: mouse_state.clone(),
    });

    // Without WebGPU the controller still runs; there is just nothing drawn.
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        controller,
        canvas,
        mouse_state,
        gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
