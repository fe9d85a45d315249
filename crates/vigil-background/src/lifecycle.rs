//! Mounting a scene onto a host surface and tearing it down again.

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, warn};
use vigil_core::{Size, Surface};

use crate::scene::Scene;
use crate::settings::SceneSettings;

/// Host-issued handle for a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// The platform side of a mounted background: it owns the drawable
/// surface, the refresh signal and viewport notifications.
///
/// Every call happens on the single context that also delivers frame and
/// resize callbacks, so implementations need no synchronisation.
pub trait Host {
    type Surface: Surface;

    /// Current viewport dimensions.
    fn viewport(&self) -> Size;

    /// Obtain the drawable surface, or `None` when the platform cannot
    /// provide one.
    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    /// Size the surface to match the viewport. Resizing clears it.
    fn resize_surface(&mut self, surface: &mut Self::Surface, size: Size);

    /// Ask for [`Mount::on_frame`] to be called at the next refresh.
    fn request_frame(&mut self) -> Option<FrameRequest>;

    fn cancel_frame(&mut self, request: FrameRequest);

    /// Start forwarding viewport changes to [`Mount::on_resize`].
    fn listen_resize(&mut self);

    fn unlisten_resize(&mut self);
}

/// Where a [`Mount`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    /// Surface acquired and scene built, nothing scheduled yet.
    Ready,
    Running,
    /// Live but not scheduling frames.
    Paused,
    Disposed,
}

/// A scene attached to a host.
pub struct Mount<H: Host> {
    host: H,
    surface: H::Surface,
    scene: Scene,
    pending: Option<FrameRequest>,
    listening: bool,
    state: MountState,
}

impl<H: Host> Mount<H> {
    /// Acquire the host's surface, size it to the viewport and build the
    /// scene.
    ///
    /// Returns `None` without touching anything else when no surface is
    /// available: no listener is registered and no frame is scheduled.
    pub fn activate(mut host: H, settings: &SceneSettings, seed: u64) -> Option<Self> {
        let Some(mut surface) = host.acquire_surface() else {
            warn!("drawing surface unavailable, background disabled");
            return None;
        };

        let viewport = host.viewport();
        host.resize_surface(&mut surface, viewport);
        let scene = Scene::new(viewport, settings, StdRng::seed_from_u64(seed));
        debug!(
            width = viewport.width,
            height = viewport.height,
            particles = settings.particles,
            orbs = settings.orbs,
            "background activated"
        );

        Some(Self {
            host,
            surface,
            scene,
            pending: None,
            listening: false,
            state: MountState::Ready,
        })
    }

    /// Register for resizes, draw the first frame right away and schedule
    /// the next one. Only has an effect on a freshly activated mount.
    pub fn start(&mut self) {
        if self.state != MountState::Ready {
            return;
        }
        self.host.listen_resize();
        self.listening = true;
        self.state = MountState::Running;
        debug!("background started");
        self.run_frame();
    }

    /// Frame callback from the host.
    ///
    /// Returns whether a frame was drawn. Callbacks that arrive with no
    /// frame pending, or after pause or disposal, are ignored.
    pub fn on_frame(&mut self) -> bool {
        if self.state != MountState::Running || self.pending.take().is_none() {
            return false;
        }
        self.run_frame();
        true
    }

    fn run_frame(&mut self) {
        self.scene.tick(&mut self.surface);
        self.pending = self.host.request_frame();
    }

    /// Viewport change callback from the host. Applied immediately.
    pub fn on_resize(&mut self) {
        if self.state == MountState::Disposed {
            return;
        }
        let viewport = self.host.viewport();
        self.host.resize_surface(&mut self.surface, viewport);
        self.scene.resize(viewport);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "background resized"
        );
    }

    /// Stop scheduling frames while keeping the scene alive.
    pub fn pause(&mut self) {
        if self.state != MountState::Running {
            return;
        }
        self.cancel_pending();
        self.state = MountState::Paused;
    }

    pub fn resume(&mut self) {
        if self.state != MountState::Paused {
            return;
        }
        self.state = MountState::Running;
        self.pending = self.host.request_frame();
    }

    /// Cancel any scheduled frame and unregister the resize listener.
    ///
    /// Safe to call any number of times, including before the first frame.
    pub fn dispose(&mut self) {
        if self.state == MountState::Disposed {
            return;
        }
        self.cancel_pending();
        if self.listening {
            self.host.unlisten_resize();
            self.listening = false;
        }
        self.state = MountState::Disposed;
        debug!(frames = self.scene.frame(), "background disposed");
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            self.host.cancel_frame(request);
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn is_frame_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &H::Surface {
        &self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> std::fmt::Debug for Mount<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("listening", &self.listening)
            .field("frame", &self.scene.frame())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Drop for Mount<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
