use rand::{SeedableRng, rngs::StdRng};
use vigil_background::{FrameRequest, Host, Mount, MountState, Scene, SceneSettings};
use vigil_core::{DrawCommand, RecordingSurface, Size, Surface};

const FRAMES: usize = 400;

#[test]
fn test_four_hundred_frames() {
    let bounds = Size::new(800.0, 600.0);
    let mut scene = Scene::new(bounds, &SceneSettings::default(), StdRng::seed_from_u64(2024));
    let mut surface = RecordingSurface::new(bounds);

    for _ in 0..FRAMES {
        surface.drain();
        scene.tick(&mut surface);
        for p in scene.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        }
    }

    assert_eq!(scene.particles().len(), 80);
    assert_eq!(scene.scan_y(), (FRAMES as f64 * 0.5) % 600.0);
    assert!(scene.spawner().spawned() >= 2);
    assert!((scene.spawner().counter() as usize) < FRAMES);
    assert_eq!(scene.frame(), FRAMES as u64);
}

#[test]
fn test_same_seed_same_animation() {
    let bounds = Size::new(800.0, 600.0);
    let run = || {
        let mut scene =
            Scene::new(bounds, &SceneSettings::default(), StdRng::seed_from_u64(99));
        let mut surface = RecordingSurface::new(bounds);
        for _ in 0..250 {
            scene.tick(&mut surface);
        }
        (scene.particles().to_vec(), scene.pulses().to_vec())
    };
    assert_eq!(run(), run());
}

#[test]
fn test_threat_pulses_drawn_in_red() {
    let bounds = Size::new(800.0, 600.0);
    let mut scene = Scene::new(bounds, &SceneSettings::default(), StdRng::seed_from_u64(5));
    let mut surface = RecordingSurface::new(bounds);

    while scene.pulses().is_empty() {
        scene.tick(&mut surface);
    }
    surface.drain();
    scene.tick(&mut surface);

    let rings: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeCircle { color, radius, .. } => Some((*color, *radius)),
            _ => None,
        })
        .collect();
    assert_eq!(rings.len(), 1);
    let (color, radius) = rings[0];
    assert_eq!((color.r, color.g, color.b), (255, 0, 0));
    assert_eq!(radius, 8.0);
}

/// Host that drives frames from a queue, like a display refresh would.
#[derive(Debug, Default)]
struct QueueHost {
    viewport: Size,
    queued: Vec<FrameRequest>,
    next_id: u64,
    listening: bool,
}

impl Host for QueueHost {
    type Surface = RecordingSurface;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn acquire_surface(&mut self) -> Option<RecordingSurface> {
        Some(RecordingSurface::new(Size::default()))
    }

    fn resize_surface(&mut self, surface: &mut RecordingSurface, size: Size) {
        surface.resize(size);
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        self.next_id += 1;
        self.queued.push(FrameRequest(self.next_id));
        Some(FrameRequest(self.next_id))
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.queued.retain(|queued| *queued != request);
    }

    fn listen_resize(&mut self) {
        self.listening = true;
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }
}

#[test]
fn test_mount_runs_until_disposed() {
    let host = QueueHost {
        viewport: Size::new(800.0, 600.0),
        ..Default::default()
    };
    let mut mount = Mount::activate(host, &SceneSettings::default(), 7).expect("surface");
    mount.start();

    for _ in 1..FRAMES {
        let due = std::mem::take(&mut mount.host_mut().queued);
        assert_eq!(due.len(), 1);
        assert!(mount.on_frame());
    }
    assert_eq!(mount.scene().frame(), FRAMES as u64);
    assert_eq!(mount.scene().scan_y(), 200.0);

    mount.dispose();
    assert_eq!(mount.state(), MountState::Disposed);
    assert!(mount.host().queued.is_empty());
    assert!(!mount.host().listening);
    assert!(!mount.on_frame());
    mount.dispose();
}

#[test]
fn test_resize_mid_run_keeps_wrapping() {
    let host = QueueHost {
        viewport: Size::new(800.0, 600.0),
        ..Default::default()
    };
    let mut mount = Mount::activate(host, &SceneSettings::default(), 8).expect("surface");
    mount.start();

    mount.host_mut().viewport = Size::new(200.0, 150.0);
    mount.on_resize();
    assert_eq!(mount.surface().size(), Size::new(200.0, 150.0));

    for _ in 0..10 {
        mount.host_mut().queued.clear();
        mount.on_frame();
    }
    for p in mount.scene().particles() {
        assert!(p.position.x < 200.0 && p.position.y < 150.0);
    }
}
