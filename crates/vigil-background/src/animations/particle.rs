//! Drifting, pulsing particles.

use std::f64::consts::TAU;

use rand::Rng;
use vigil_core::{Paint, Point, Rgba, Size, Surface};

/// Number of particles in a default scene.
pub const PARTICLE_COUNT: usize = 80;

/// Maximum absolute velocity per axis, in units per frame.
pub const MAX_SPEED: f64 = 0.25;

/// Pulse phase advance per frame, in radians.
pub const PULSE_STEP: f64 = 0.02;

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position, kept inside the surface bounds.
    pub position: Point,
    /// Per-frame displacement, fixed at creation.
    pub velocity: Point,
    /// Base radius before pulsing.
    pub radius: f64,
    pub color: Rgba,
    /// Base opacity before pulsing.
    pub opacity: f64,
    /// Ever-increasing angle driving the size and opacity pulse.
    pub pulse_phase: f64,
}

impl Particle {
    /// Create a particle with random attributes somewhere inside `bounds`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let hue = rng.random::<f64>() * 60.0 + 180.0;
        let lightness = rng.random::<f64>() * 0.3 + 0.4;
        Self {
            position: Point::new(
                rng.random::<f64>() * bounds.width,
                rng.random::<f64>() * bounds.height,
            ),
            velocity: Point::new(
                (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
                (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            ),
            radius: rng.random::<f64>() * 1.5 + 0.5,
            color: Rgba::hsla(hue, 0.8, lightness, 1.0),
            opacity: rng.random::<f64>() * 0.5 + 0.3,
            pulse_phase: rng.random::<f64>() * TAU,
        }
    }

    /// Radius after applying the pulse.
    pub fn pulse_radius(&self) -> f64 {
        self.radius * (1.0 + self.pulse_phase.sin() * 0.3)
    }

    /// Opacity after applying the pulse.
    pub fn pulse_alpha(&self) -> f64 {
        self.opacity * (0.7 + self.pulse_phase.sin() * 0.3)
    }
}

/// Create `count` particles spread across `bounds`.
pub fn init_particles<R: Rng + ?Sized>(rng: &mut R, bounds: Size, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng, bounds)).collect()
}

/// Move every particle and advance its pulse.
pub fn update(particles: &mut [Particle], bounds: Size) {
    for p in particles {
        p.position.x = wrap(p.position.x + p.velocity.x, bounds.width);
        p.position.y = wrap(p.position.y + p.velocity.y, bounds.height);
        p.pulse_phase += PULSE_STEP;
    }
}

/// Draw every particle as a filled dot.
///
/// Leaves the surface's global alpha at the last particle's pulse alpha.
pub fn draw<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S) {
    for p in particles {
        surface.set_global_alpha(p.pulse_alpha());
        surface.fill_circle(p.position, p.pulse_radius(), &Paint::Solid(p.color));
    }
}

/// Wrap a coordinate that left `0..extent` around to the opposite edge.
///
/// The result is always in `0..extent`, or `0.0` for an empty extent.
pub fn wrap(value: f64, extent: f64) -> f64 {
    let value = if value < 0.0 { value + extent } else { value };
    if value >= extent || value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};
    use vigil_core::{DrawCommand, RecordingSurface};

    #[test]
    fn test_random_attribute_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Size::new(800.0, 600.0);
        for p in init_particles(&mut rng, bounds, 500) {
            assert!((0.0..800.0).contains(&p.position.x));
            assert!((0.0..600.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= MAX_SPEED);
            assert!(p.velocity.y.abs() <= MAX_SPEED);
            assert!((0.5..=2.0).contains(&p.radius));
            assert!((0.3..=0.8).contains(&p.opacity));
            assert!((0.0..TAU).contains(&p.pulse_phase));
            // Cyan to blue hues never carry more red than blue.
            assert!(p.color.r <= p.color.b);
        }
    }

    #[test]
    fn test_wrap_to_opposite_edge() {
        assert!((wrap(-0.1, 800.0) - 799.9).abs() < 1e-9);
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(801.0, 800.0), 0.0);
        assert_eq!(wrap(400.0, 800.0), 400.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_pulse_phase_advances_on_update_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Size::new(100.0, 100.0);
        let mut particles = init_particles(&mut rng, bounds, 3);
        let before: Vec<f64> = particles.iter().map(|p| p.pulse_phase).collect();

        let mut surface = RecordingSurface::new(bounds);
        draw(&particles, &mut surface);
        update(&mut particles, bounds);
        draw(&particles, &mut surface);

        for (p, phase) in particles.iter().zip(before) {
            assert!((p.pulse_phase - (phase + PULSE_STEP)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_draw_sets_pulse_alpha() {
        let particle = Particle {
            position: Point::new(10.0, 10.0),
            velocity: Point::default(),
            radius: 2.0,
            color: Rgba::rgb(0, 200, 255),
            opacity: 0.5,
            pulse_phase: std::f64::consts::FRAC_PI_2,
        };
        let mut surface = RecordingSurface::new(Size::new(20.0, 20.0));
        draw(std::slice::from_ref(&particle), &mut surface);

        match &surface.commands()[0] {
            DrawCommand::FillCircle { radius, alpha, .. } => {
                assert!((radius - 2.6).abs() < 1e-9);
                assert!((alpha - 0.5).abs() < 1e-9);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!((surface.global_alpha() - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_bounds(
            seed in any::<u64>(),
            width in 1.0f64..2000.0,
            height in 1.0f64..2000.0,
            steps in 1usize..600,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let bounds = Size::new(width, height);
            let mut particles = init_particles(&mut rng, bounds, 8);
            for _ in 0..steps {
                update(&mut particles, bounds);
                for p in &particles {
                    prop_assert!(p.position.x >= 0.0 && p.position.x < width);
                    prop_assert!(p.position.y >= 0.0 && p.position.y < height);
                }
            }
        }
    }
}
