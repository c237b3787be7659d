//! Uniform state for the two shader-backed materials that animate.
//!
//! The renderer owns the shader programs themselves; this side only tracks
//! the named values it must push before each draw. Only `uTime` and
//! `uPixelRatio` ever change after construction.

use fnv::FnvHashMap;

use crate::constants::{FIREFLY_BASE_SIZE, U_PIXEL_RATIO, U_SIZE, U_TIME};
use crate::error::{PortalError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Scalar(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
}

/// Named uniform values owned by a single material.
#[derive(Clone, Debug, Default)]
pub struct UniformSet {
    values: FnvHashMap<&'static str, UniformValue>,
}

impl UniformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a uniform at construction time.
    pub fn declare(&mut self, name: &'static str, value: UniformValue) {
        self.values.insert(name, value);
    }

    /// Overwrite an already-declared scalar uniform.
    ///
    /// Non-finite values are rejected outright; `uTime` and `uPixelRatio`
    /// additionally reject negatives since both are semantically
    /// non-negative.
    pub fn set_scalar(&mut self, name: &'static str, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(PortalError::InvalidParameter(format!(
                "uniform `{name}` must be finite, got {value}"
            )));
        }
        if value < 0.0 && (name == U_TIME || name == U_PIXEL_RATIO) {
            return Err(PortalError::InvalidParameter(format!(
                "uniform `{name}` must be non-negative, got {value}"
            )));
        }
        match self.values.get_mut(name) {
            Some(UniformValue::Scalar(slot)) => {
                *slot = value;
                Ok(())
            }
            Some(_) => Err(PortalError::InvalidParameter(format!(
                "uniform `{name}` is not a scalar"
            ))),
            None => Err(PortalError::InvalidParameter(format!(
                "uniform `{name}` was never declared"
            ))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Convenience accessor for scalar uniforms.
    pub fn scalar(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

/// Fireflies point material: animated by time, sized by the device pixel
/// ratio so points cover the same physical area on dense displays.
pub fn fireflies_uniforms(pixel_ratio: f32) -> UniformSet {
    let mut set = UniformSet::new();
    set.declare(U_TIME, UniformValue::Scalar(0.0));
    set.declare(U_PIXEL_RATIO, UniformValue::Scalar(pixel_ratio));
    set.declare(U_SIZE, UniformValue::Scalar(FIREFLY_BASE_SIZE));
    set
}

/// Portal surface material: animated by time only.
pub fn portal_light_uniforms() -> UniformSet {
    let mut set = UniformSet::new();
    set.declare(U_TIME, UniformValue::Scalar(0.0));
    set
}
