#![cfg(target_arch = "wasm32")]
//! Browser front-end: resolves the overlay DOM nodes, wires the resize
//! listener, and drives the portal scene from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use portal_core::{
    anchor_specs, resolve_anchors, AxisBounds, Camera, ParticleField, Portal, StartClock,
    FIREFLY_COUNT, FIREFLY_X_RANGE, FIREFLY_Y_RANGE, FIREFLY_Z_RANGE,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod frame;
mod overlay;

use frame::FrameContext;

// Fixed framing over the diorama; user orbit control stays on the JS side.
const CAMERA_EYE: Vec3 = Vec3::new(4.0, 2.0, 4.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    let viewport = dom::capture_viewport(&window, &canvas)?;

    // Overlay markers are resolved exactly once. A missing node costs one
    // marker, not the frame loop.
    let (anchors, missing) = resolve_anchors(&anchor_specs(), |label| {
        document
            .query_selector(&format!(".{label}"))
            .ok()
            .flatten()
            .and_then(overlay::DomSurface::new)
    });
    for err in &missing {
        log::error!("overlay setup: {err}");
    }

    let mut rng = rand::thread_rng();
    let fireflies = ParticleField::generate(
        FIREFLY_COUNT,
        AxisBounds::new(FIREFLY_X_RANGE[0], FIREFLY_X_RANGE[1])?,
        AxisBounds::new(FIREFLY_Y_RANGE[0], FIREFLY_Y_RANGE[1])?,
        AxisBounds::new(FIREFLY_Z_RANGE[0], FIREFLY_Z_RANGE[1])?,
        &mut rng,
    )?;
    log::info!(
        "scene ready: {} fireflies, {} markers",
        fireflies.len(),
        anchors.len()
    );

    let portal = Portal::new(StartClock::new(), viewport.pixel_ratio(), fireflies, anchors)?;
    let camera = Camera {
        eye: CAMERA_EYE,
        target: CAMERA_TARGET,
        up: Vec3::Y,
        aspect: viewport.aspect(),
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 100.0,
    };

    let ctx = Rc::new(RefCell::new(FrameContext {
        portal,
        camera,
        viewport,
    }));

    wire_resize(&window, &canvas, ctx.clone());
    frame::start_loop(ctx);
    Ok(())
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let Some(w) = web::window() else {
            return;
        };
        match dom::capture_viewport(&w, &canvas) {
            Ok(viewport) => {
                let mut ctx = ctx.borrow_mut();
                ctx.camera.aspect = viewport.aspect();
                if let Err(e) = ctx.portal.on_resize(viewport.pixel_ratio()) {
                    log::error!("resize: {e}");
                }
                ctx.viewport = viewport;
            }
            Err(e) => log::error!("resize: {e:?}"),
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
