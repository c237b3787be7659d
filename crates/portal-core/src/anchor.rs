//! Screen-space overlay markers anchored to fixed world positions.
//!
//! Each anchor pairs one world-space point with one overlay element. Every
//! frame the point is projected through the active camera and the element is
//! repositioned to sit over it. Elements are resolved exactly once at setup;
//! anchors whose element cannot be found are dropped there, so the frame
//! loop never touches a missing element.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::constants::ANCHOR_POINTS;
use crate::error::PortalError;
use crate::viewport::Viewport;

/// A configured marker: world position plus the label used to locate its
/// overlay element.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSpec {
    pub label: &'static str,
    pub position: Vec3,
}

/// The marker table for the reference scene.
pub fn anchor_specs() -> Vec<AnchorSpec> {
    ANCHOR_POINTS
        .iter()
        .map(|&(label, p)| AnchorSpec {
            label,
            position: Vec3::from_array(p),
        })
        .collect()
}

/// Write side of one overlay element. Implemented over DOM nodes on the web
/// and over plain recording structs in tests. Non-owning: the element itself
/// belongs to the surrounding document.
pub trait OverlaySurface {
    /// Current element size in CSS pixels.
    fn size(&self) -> Vec2;
    /// Reposition the element by a screen-space translation.
    fn set_translation(&mut self, offset: Vec2);
}

/// An anchor whose overlay element was found at setup.
#[derive(Clone, Debug)]
pub struct Anchor<S> {
    label: String,
    position: Vec3,
    surface: S,
}

impl<S> Anchor<S> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The stored world position. Immutable after setup.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Resolve the marker table against the host's element lookup.
///
/// Anchors whose element is missing are excluded from the returned set and
/// reported, so a broken document degrades to fewer markers instead of a
/// fault in the frame loop.
pub fn resolve_anchors<S>(
    specs: &[AnchorSpec],
    mut lookup: impl FnMut(&str) -> Option<S>,
) -> (Vec<Anchor<S>>, Vec<PortalError>) {
    let mut anchors = Vec::with_capacity(specs.len());
    let mut errors = Vec::new();
    for spec in specs {
        match lookup(spec.label) {
            Some(surface) => anchors.push(Anchor {
                label: spec.label.to_string(),
                position: spec.position,
                surface,
            }),
            None => errors.push(PortalError::MissingOverlayElement {
                label: spec.label.to_string(),
            }),
        }
    }
    (anchors, errors)
}

/// Screen-space translation that centers an element of the given size over
/// a projected point.
///
/// NDC Y grows upward while pixel Y grows downward, hence the sign flip on
/// the vertical axis.
pub fn marker_translation(ndc: Vec2, viewport: &Viewport, element_size: Vec2) -> Vec2 {
    Vec2::new(
        ndc.x * viewport.width() * 0.5 - element_size.x * 0.5,
        -ndc.y * viewport.height() * 0.5 - element_size.y * 0.5,
    )
}

/// Reposition every anchor's overlay element for the current camera.
///
/// Each element is written exactly once per call and stored positions are
/// never mutated. Off-screen anchors still receive offsets outside the
/// viewport; hiding them is left to the host.
pub fn project_anchors<S: OverlaySurface>(
    anchors: &mut [Anchor<S>],
    camera: &Camera,
    viewport: &Viewport,
) {
    for anchor in anchors.iter_mut() {
        let ndc = camera.project_to_ndc(anchor.position);
        let offset = marker_translation(ndc, viewport, anchor.surface.size());
        anchor.surface.set_translation(offset);
    }
}
