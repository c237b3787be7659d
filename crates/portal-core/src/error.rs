use thiserror::Error;

use crate::scene::SceneRole;

/// Setup-time and call-boundary failures. None are retryable; none are
/// expected once the scene is running.
#[derive(Debug, Error)]
pub enum PortalError {
    /// An overlay element referenced by an anchor was absent at setup.
    #[error("no overlay element found for marker `{label}`")]
    MissingOverlayElement { label: String },
    /// The loaded model is missing a node the scene requires.
    #[error("scene model has no node for role {role:?}")]
    MissingSceneNode { role: SceneRole },
    /// A caller passed a value outside the accepted domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
