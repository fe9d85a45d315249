//! Proximity lines between nearby particles.

use vigil_core::{Rgba, Surface};

use super::particle::Particle;

/// Particles closer than this are connected.
pub const CONNECTION_DISTANCE: f64 = 150.0;

/// Line opacity for two coincident particles.
pub const MAX_ALPHA: f64 = 0.3;

/// Line opacity for a pair at `distance`, or `None` when too far apart.
///
/// Falls linearly from [`MAX_ALPHA`] at zero distance to zero at
/// [`CONNECTION_DISTANCE`].
pub fn connection_alpha(distance: f64) -> Option<f64> {
    (distance < CONNECTION_DISTANCE).then(|| MAX_ALPHA * (1.0 - distance / CONNECTION_DISTANCE))
}

/// Draw a line for every close pair and return how many were drawn.
///
/// Checks all unordered pairs, which is fine for the small fixed particle
/// counts this scene uses.
pub fn draw<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S) -> usize {
    let mut drawn = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(alpha) = connection_alpha(a.position.distance(b.position)) {
                surface.stroke_line(a.position, b.position, 1.0, Rgba::hsla(200.0, 1.0, 0.5, alpha));
                drawn += 1;
            }
        }
    }
    drawn
}
