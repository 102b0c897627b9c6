use crate::constants::CAMERA_ZOOM;
use crate::dom;
use crate::input;
use crate::render;
use crate::uniforms::{FrameView, SceneUniforms};
use glam::Vec3;
use instant::Instant;
use prism_core::{prism_bounds, scene_colliders, text_size_for_viewport};
use prism_core::{Aabb, BeamController, BeamTracer, Collider};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: BeamController,
    pub tracer: BeamTracer,

    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub gpu: Option<render::GpuState<'a>>,

    pub colliders: Vec<Collider>,
    pub prism: Aabb,
    pub text_size: f32,
    pub spot_dir: Vec3,

    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        controller: BeamController,
        canvas: web::HtmlCanvasElement,
        mouse: Rc<RefCell<input::MouseState>>,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let (css_w, _) = dom::canvas_css_size(&canvas);
        let text_size = text_size_for_viewport(css_w);
        Self {
            controller,
            tracer: BeamTracer::default(),
            canvas,
            mouse,
            gpu,
            colliders: scene_colliders(css_w),
            prism: prism_bounds(text_size),
            text_size,
            spot_dir: Vec3::ZERO,
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let (css_w, css_h) = dom::canvas_css_size(&self.canvas);
        self.update_layout(css_w);

        let pointer = input::pointer_ndc(&self.mouse.borrow(), css_w, css_h);
        let viewport = input::viewport_world(css_w, css_h, CAMERA_ZOOM);
        self.controller.on_tick(pointer, viewport, &mut self.tracer);
        for ev in self.tracer.cast(&self.colliders) {
            self.controller.dispatch(ev);
        }
        if self.controller.take_spot_target_dirty() {
            self.spot_dir = self.controller.state().spot_target_direction();
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (w, h) = g.size();
            let view = FrameView {
                resolution: [w as f32, h as f32],
                pixels_per_unit: CAMERA_ZOOM * dom::device_pixel_ratio(),
                time: self.started.elapsed().as_secs_f32(),
            };
            let uniforms = SceneUniforms::pack(
                &view,
                self.controller.state(),
                self.spot_dir,
                self.tracer.path(),
                self.prism,
            );
            if let Err(e) = g.render(&uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    // The name switches size at the responsive breakpoint; colliders follow.
    fn update_layout(&mut self, css_width: f32) {
        let text_size = text_size_for_viewport(css_width);
        if text_size != self.text_size {
            log::info!("[layout] text size {} -> {}", self.text_size, text_size);
            self.text_size = text_size;
            self.colliders = scene_colliders(css_width);
            self.prism = prism_bounds(text_size);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
