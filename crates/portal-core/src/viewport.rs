use crate::error::{PortalError, Result};

/// Current drawable size in CSS pixels plus the device pixel ratio.
///
/// Fields are private so a viewport can only exist with positive, finite
/// dimensions; everything downstream (marker projection in particular) can
/// rely on that without re-checking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    pixel_ratio: f32,
}

impl Viewport {
    /// Build a viewport, rejecting degenerate dimensions rather than
    /// clamping them.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(PortalError::InvalidParameter(format!(
                "viewport dimensions must be positive, got {width}x{height}"
            )));
        }
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(PortalError::InvalidParameter(format!(
                "pixel ratio must be positive, got {pixel_ratio}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}
