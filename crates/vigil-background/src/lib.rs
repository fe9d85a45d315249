//! Animated "security console" background for vigil.
//!
//! Layers, back to front: a fading trail overlay, pulsing glow orbs, a
//! sweeping scan line, drifting particles, proximity lines between them and
//! occasional expanding threat pulses. [`Scene`] owns one mounted instance
//! of the animation; [`Mount`] ties it to a [`Host`] that supplies the
//! surface, the frame signal and resize notifications.

pub mod animations;
mod lifecycle;
mod scene;
mod settings;

pub use lifecycle::{FrameRequest, Host, Mount, MountState};
pub use scene::Scene;
pub use settings::SceneSettings;
