//! Per-mount animation context.

use rand::{Rng, rngs::StdRng};
use vigil_core::{Size, Surface};

use crate::animations::{
    backdrop, connection,
    orb::{self, Orb},
    particle::{self, Particle},
    scan::ScanLine,
    threat::{self, ThreatPulse, ThreatSpawner},
};
use crate::settings::SceneSettings;

/// Everything one mounted background owns: entity pools, scan and threat
/// state, the random source and the current bounds.
#[derive(Debug, Clone)]
pub struct Scene<R = StdRng> {
    particles: Vec<Particle>,
    orbs: Vec<Orb>,
    pulses: Vec<ThreatPulse>,
    scan: ScanLine,
    spawner: ThreatSpawner,
    bounds: Size,
    frame: u64,
    /// Connections drawn during the last frame.
    last_connections: usize,
    rng: R,
}

impl<R: Rng> Scene<R> {
    /// Create the entity pools for a surface of the given size.
    pub fn new(bounds: Size, settings: &SceneSettings, mut rng: R) -> Self {
        let orbs = orb::init_orbs(&mut rng, bounds, settings.orbs);
        let particles = particle::init_particles(&mut rng, bounds, settings.particles);
        Self {
            particles,
            orbs,
            pulses: Vec::new(),
            scan: ScanLine::default(),
            spawner: ThreatSpawner::default(),
            bounds,
            frame: 0,
            last_connections: 0,
            rng,
        }
    }

    /// Update and draw one frame.
    ///
    /// Layers are painted in a fixed order; each one draws over the ones
    /// before it.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        backdrop::draw(surface);
        surface.set_global_alpha(1.0);

        orb::update_and_draw(&mut self.orbs, surface);

        self.scan.draw(surface);
        self.scan.advance(self.bounds.height);

        particle::update(&mut self.particles, self.bounds);
        particle::draw(&self.particles, surface);

        // Connections and pulses inherit the last particle's alpha.
        self.last_connections = connection::draw(&self.particles, surface);

        threat::update_and_draw(&mut self.pulses, surface);
        threat::maybe_spawn(
            &mut self.spawner,
            &mut self.pulses,
            &mut self.rng,
            self.bounds,
        );

        surface.set_global_alpha(1.0);
        self.frame += 1;
    }

    /// Adopt new bounds. Entities are not moved; anything now outside the
    /// bounds wraps back in on its own next update.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn pulses(&self) -> &[ThreatPulse] {
        &self.pulses
    }

    pub fn scan_y(&self) -> f64 {
        self.scan.y
    }

    pub fn spawner(&self) -> &ThreatSpawner {
        &self.spawner
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_connections(&self) -> usize {
        self.last_connections
    }
}
