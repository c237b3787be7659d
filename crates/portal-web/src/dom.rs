use portal_core::{Viewport, MAX_PIXEL_RATIO};
use web_sys as web;

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

/// Keep the canvas backing store at CSS size times device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = device_pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Snapshot the current CSS-pixel viewport and (clamped) pixel ratio.
pub fn capture_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Viewport> {
    let dpr = device_pixel_ratio(window);
    let rect = canvas.get_bounding_client_rect();
    Ok(Viewport::new(
        rect.width() as f32,
        rect.height() as f32,
        dpr as f32,
    )?)
}
