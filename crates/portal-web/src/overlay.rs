use glam::Vec2;
use portal_core::OverlaySurface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Overlay marker backed by a DOM element. The element belongs to the
/// document; this is a non-owning handle that only writes its transform.
pub struct DomSurface {
    element: web::HtmlElement,
}

impl DomSurface {
    pub fn new(element: web::Element) -> Option<Self> {
        element
            .dyn_into::<web::HtmlElement>()
            .ok()
            .map(|element| Self { element })
    }
}

impl OverlaySurface for DomSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(
            self.element.client_width() as f32,
            self.element.client_height() as f32,
        )
    }

    fn set_translation(&mut self, offset: Vec2) {
        let _ = self.element.style().set_property(
            "transform",
            &format!("translate({}px, {}px)", offset.x, offset.y),
        );
    }
}
