use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
}

// Listens on the window so the beam keeps following the pointer over page
// chrome drawn on top of the canvas. When the pointer leaves the page the
// last position is kept and the beam stays where it was.
fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let mut ms = w.mouse_state.borrow_mut();
        if !ms.seen {
            log::info!("[pointer] first move at ({:.0}, {:.0})", pos.x, pos.y);
        }
        ms.x = pos.x;
        ms.y = pos.y;
        ms.seen = true;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
