use std::cell::RefCell;
use std::rc::Rc;

use portal_core::{Camera, Portal, StartClock, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay::DomSurface;

pub struct FrameContext {
    pub portal: Portal<StartClock, DomSurface>,
    pub camera: Camera,
    pub viewport: Viewport,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Err(e) = self.portal.update(&self.camera, &self.viewport) {
            log::error!("frame update error: {e}");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
