//! Typed bindings from model nodes to portal roles.
//!
//! The exported model names its meshes by convention: `baked*` for surfaces
//! carrying the baked-lighting texture, `poleLight*` for the lamp emitters,
//! `portalLight*` for the animated portal surface. Names are classified once
//! when the model finishes loading; after that the renderer works with node
//! ids only, never with strings.

use crate::error::{PortalError, Result};

pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneRole {
    BakedSurface,
    PoleLight,
    PortalLight,
}

impl SceneRole {
    /// Map an exported node name to its role, if it has one. Unmatched nodes
    /// keep whatever material the export gave them.
    pub fn classify(node_name: &str) -> Option<SceneRole> {
        if node_name.starts_with("baked") {
            Some(SceneRole::BakedSurface)
        } else if node_name.starts_with("poleLight") {
            Some(SceneRole::PoleLight)
        } else if node_name.starts_with("portalLight") {
            Some(SceneRole::PortalLight)
        } else {
            None
        }
    }
}

/// Node ids grouped by role, resolved once at model-load time.
#[derive(Clone, Debug)]
pub struct SceneBindings {
    baked: Vec<NodeId>,
    pole_lights: Vec<NodeId>,
    portal_light: NodeId,
}

impl SceneBindings {
    /// Walk `(node id, exported name)` pairs and group them by role.
    ///
    /// A model without any baked surface or without a portal light cannot be
    /// displayed, so both are setup-time errors here rather than per-frame
    /// faults later.
    pub fn resolve<'a>(nodes: impl IntoIterator<Item = (NodeId, &'a str)>) -> Result<Self> {
        let mut baked = Vec::new();
        let mut pole_lights = Vec::new();
        let mut portal_light = None;
        for (id, name) in nodes {
            match SceneRole::classify(name) {
                Some(SceneRole::BakedSurface) => baked.push(id),
                Some(SceneRole::PoleLight) => {
                    log::debug!("pole light bound to node {id} (`{name}`)");
                    pole_lights.push(id);
                }
                Some(SceneRole::PortalLight) => portal_light = Some(id),
                None => {}
            }
        }
        if baked.is_empty() {
            return Err(PortalError::MissingSceneNode {
                role: SceneRole::BakedSurface,
            });
        }
        let portal_light = portal_light.ok_or(PortalError::MissingSceneNode {
            role: SceneRole::PortalLight,
        })?;
        Ok(Self {
            baked,
            pole_lights,
            portal_light,
        })
    }

    pub fn baked(&self) -> &[NodeId] {
        &self.baked
    }

    pub fn pole_lights(&self) -> &[NodeId] {
        &self.pole_lights
    }

    pub fn portal_light(&self) -> NodeId {
        self.portal_light
    }
}
