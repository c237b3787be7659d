//! One-shot randomized firefly placement.
//!
//! Positions and scales are generated once at setup and uploaded by the
//! renderer as vertex attributes; nothing here changes per frame. The caller
//! supplies the random source, so tests can seed a `StdRng` and get
//! reproducible fields.

use glam::Vec3;
use rand::Rng;

use crate::error::{PortalError, Result};

/// Sampling range for one position axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    min: f32,
    max: f32,
}

impl AxisBounds {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(PortalError::InvalidParameter(format!(
                "axis bounds must be finite with min <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..self.max)
        }
    }
}

/// A fixed-size field of particle positions and per-particle scales.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    scales: Vec<f32>,
}

impl ParticleField {
    /// Sample `count` positions uniformly per axis within the given bounds,
    /// plus `count` scales uniform in [0, 1).
    pub fn generate(
        count: usize,
        x: AxisBounds,
        y: AxisBounds,
        z: AxisBounds,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        if count == 0 {
            return Err(PortalError::InvalidParameter(
                "particle count must be positive".into(),
            ));
        }
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(x.sample(rng), y.sample(rng), z.sample(rng)));
        }
        let mut scales = Vec::with_capacity(count);
        for _ in 0..count {
            scales.push(rng.gen::<f32>());
        }
        Ok(Self { positions, scales })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Flattened xyz triples, ready for upload as a vec3 vertex attribute.
    pub fn position_attribute(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }
}
