//! Expanding alert rings spawned at random intervals.

use rand::Rng;
use tracing::trace;
use vigil_core::{Point, Rgba, Size, Surface};

/// A pulse stops being drawn once its ring reaches this radius.
pub const MAX_RADIUS: f64 = 150.0;
pub const START_RADIUS: f64 = 5.0;
pub const START_OPACITY: f64 = 0.8;
/// Radius growth per frame.
pub const EXPAND_SPEED: f64 = 3.0;
/// Opacity loss per frame.
pub const FADE_RATE: f64 = 0.015;

/// Frames that must pass before a spawn is attempted.
pub const SPAWN_AFTER_FRAMES: u32 = 180;
/// Chance per eligible frame that a pulse spawns.
pub const SPAWN_PROBABILITY: f64 = 0.3;

const LINE_WIDTH: f64 = 2.0;

/// A single expanding ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatPulse {
    pub origin: Point,
    pub radius: f64,
    pub opacity: f64,
    pub expand_speed: f64,
    pub fade_rate: f64,
}

impl ThreatPulse {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            radius: START_RADIUS,
            opacity: START_OPACITY,
            expand_speed: EXPAND_SPEED,
            fade_rate: FADE_RATE,
        }
    }

    /// Create a pulse at a random point inside `bounds`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        Self::new(Point::new(
            rng.random::<f64>() * bounds.width,
            rng.random::<f64>() * bounds.height,
        ))
    }

    /// Still visible and still growing.
    pub fn is_active(&self) -> bool {
        self.opacity > 0.0 && self.radius < MAX_RADIUS
    }

    pub fn update(&mut self) {
        self.radius += self.expand_speed;
        self.opacity = (self.opacity - self.fade_rate).max(0.0);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_circle(
            self.origin,
            self.radius,
            LINE_WIDTH,
            Rgba::hsla(0.0, 1.0, 0.5, self.opacity),
        );
    }
}

/// Frame counter deciding when a new pulse appears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatSpawner {
    counter: u32,
    spawned: u64,
}

impl ThreatSpawner {
    /// Frames counted since the last spawn.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Number of pulses spawned, i.e. how many times the counter was reset.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Count one frame and decide whether a pulse spawns on it.
    ///
    /// The random draw only happens once the counter is past
    /// [`SPAWN_AFTER_FRAMES`], so the cadence is counted in frames rather
    /// than wall-clock time.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.counter = self.counter.saturating_add(1);
        if self.counter > SPAWN_AFTER_FRAMES && rng.random::<f64>() < SPAWN_PROBABILITY {
            self.counter = 0;
            self.spawned += 1;
            true
        } else {
            false
        }
    }
}

/// Drop finished pulses, then grow and draw the rest.
pub fn update_and_draw<S: Surface + ?Sized>(pulses: &mut Vec<ThreatPulse>, surface: &mut S) {
    pulses.retain(ThreatPulse::is_active);
    for pulse in pulses.iter_mut() {
        pulse.update();
        pulse.draw(surface);
    }
}

/// Advance the spawner and add a pulse if it fires.
pub fn maybe_spawn<R: Rng + ?Sized>(
    spawner: &mut ThreatSpawner,
    pulses: &mut Vec<ThreatPulse>,
    rng: &mut R,
    bounds: Size,
) {
    if spawner.tick(rng) {
        let pulse = ThreatPulse::random(rng, bounds);
        trace!(x = pulse.origin.x, y = pulse.origin.y, "threat pulse spawned");
        pulses.push(pulse);
    }
}
