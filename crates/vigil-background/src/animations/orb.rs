//! Slow-pulsing radial glows.

use std::f64::consts::TAU;

use rand::Rng;
use vigil_core::{ColorStop, Paint, Point, Rgba, Size, Surface};

/// Number of orbs in a default scene.
pub const ORB_COUNT: usize = 4;

/// Phase advance per frame, in radians.
pub const PHASE_STEP: f64 = 0.005;

const HUE: f64 = 200.0;

/// State for a single glowing orb. Only the phase changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub position: Point,
    pub radius: f64,
    /// Peak opacity of the core.
    pub opacity: f64,
    pub phase: f64,
}

impl Orb {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        Self {
            position: Point::new(
                rng.random::<f64>() * bounds.width,
                rng.random::<f64>() * bounds.height,
            ),
            radius: rng.random::<f64>() * 40.0 + 20.0,
            opacity: rng.random::<f64>() * 0.15 + 0.05,
            phase: rng.random::<f64>() * TAU,
        }
    }

    /// Core alpha for the current phase.
    pub fn core_alpha(&self) -> f64 {
        self.opacity * (0.5 + self.phase.sin() * 0.5)
    }

    /// Gradient stops from the bright core out to the transparent rim.
    pub fn stops(&self) -> [ColorStop; 3] {
        [
            ColorStop::new(0.0, Rgba::hsla(HUE, 1.0, 0.5, self.core_alpha())),
            ColorStop::new(0.5, Rgba::hsla(HUE, 1.0, 0.4, self.opacity * 0.2)),
            ColorStop::new(1.0, Rgba::hsla(HUE, 1.0, 0.3, 0.0)),
        ]
    }
}

pub fn init_orbs<R: Rng + ?Sized>(rng: &mut R, bounds: Size, count: usize) -> Vec<Orb> {
    (0..count).map(|_| Orb::random(rng, bounds)).collect()
}

/// Advance each orb's phase and draw it.
pub fn update_and_draw<S: Surface + ?Sized>(orbs: &mut [Orb], surface: &mut S) {
    for orb in orbs {
        orb.phase += PHASE_STEP;
        let stops = orb.stops();
        surface.fill_circle(
            orb.position,
            orb.radius,
            &Paint::Radial {
                center: orb.position,
                radius: orb.radius,
                stops: &stops,
            },
        );
    }
}
