//! Tunables for a scene.

use crate::animations::{orb::ORB_COUNT, particle::PARTICLE_COUNT};

/// Entity counts for a [`Scene`](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSettings {
    pub particles: usize,
    pub orbs: usize,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            particles: PARTICLE_COUNT,
            orbs: ORB_COUNT,
        }
    }
}
