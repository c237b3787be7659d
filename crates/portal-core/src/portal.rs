//! Per-frame orchestration: time-driven uniforms plus marker projection.

use crate::anchor::{project_anchors, Anchor, OverlaySurface};
use crate::camera::Camera;
use crate::clock::Clock;
use crate::constants::{U_PIXEL_RATIO, U_TIME};
use crate::error::{PortalError, Result};
use crate::particles::ParticleField;
use crate::uniforms::{fireflies_uniforms, portal_light_uniforms, UniformSet};
use crate::viewport::Viewport;

/// The assembled portal scene: the two animated materials, the firefly
/// field, and the resolved overlay anchors.
///
/// Clock, camera, and viewport are injected by the host; nothing in here
/// reaches for globals.
pub struct Portal<C, S> {
    clock: C,
    fireflies: UniformSet,
    portal_light: UniformSet,
    particles: ParticleField,
    anchors: Vec<Anchor<S>>,
}

impl<C: Clock, S: OverlaySurface> Portal<C, S> {
    pub fn new(
        clock: C,
        pixel_ratio: f32,
        particles: ParticleField,
        anchors: Vec<Anchor<S>>,
    ) -> Result<Self> {
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(PortalError::InvalidParameter(format!(
                "pixel ratio must be positive, got {pixel_ratio}"
            )));
        }
        Ok(Self {
            clock,
            fireflies: fireflies_uniforms(pixel_ratio),
            portal_light: portal_light_uniforms(),
            particles,
            anchors,
        })
    }

    /// Push the current elapsed time into every time-driven material.
    pub fn tick(&mut self) -> Result<()> {
        let elapsed_seconds = (self.clock.elapsed_millis() * 0.001) as f32;
        self.fireflies.set_scalar(U_TIME, elapsed_seconds)?;
        self.portal_light.set_scalar(U_TIME, elapsed_seconds)?;
        Ok(())
    }

    /// Track a device-pixel-ratio change. Calling again with an unchanged
    /// value has no further effect.
    pub fn on_resize(&mut self, pixel_ratio: f32) -> Result<()> {
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(PortalError::InvalidParameter(format!(
                "pixel ratio must be positive, got {pixel_ratio}"
            )));
        }
        self.fireflies.set_scalar(U_PIXEL_RATIO, pixel_ratio)
    }

    /// One frame: advance the uniforms, then reproject the overlay markers.
    /// Uniform writes happen before projection so the renderer and the
    /// document see the same time slice.
    pub fn update(&mut self, camera: &Camera, viewport: &Viewport) -> Result<()> {
        self.tick()?;
        project_anchors(&mut self.anchors, camera, viewport);
        Ok(())
    }

    pub fn fireflies(&self) -> &UniformSet {
        &self.fireflies
    }

    pub fn portal_light(&self) -> &UniformSet {
        &self.portal_light
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn anchors(&self) -> &[Anchor<S>] {
        &self.anchors
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
