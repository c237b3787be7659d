//! Scene logic for the portal diorama: animated material uniforms, firefly
//! placement, and 3D-to-2D marker projection.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The web frontend supplies
//! the clock, viewport, and DOM wiring and consumes the uniform values from
//! its renderer.

pub mod anchor;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod error;
pub mod particles;
pub mod portal;
pub mod scene;
pub mod uniforms;
pub mod viewport;

pub use anchor::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use particles::*;
pub use portal::*;
pub use scene::*;
pub use uniforms::*;
pub use viewport::*;
