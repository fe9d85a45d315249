//! Terminal implementation of the background host.

use vigil_background::{FrameRequest, Host};
use vigil_core::Size;

use crate::raster::Raster;

/// Hosts a background in the terminal.
///
/// Frame requests are recorded and handed back to the event loop through
/// [`TermHost::take_due`]; resize forwarding is gated on the listener flag.
#[derive(Debug)]
pub struct TermHost {
    cols: u16,
    rows: u16,
    pixel_size: f64,
    next_request: u64,
    due: Option<FrameRequest>,
    listening: bool,
}

impl TermHost {
    pub fn new(cols: u16, rows: u16, pixel_size: f64) -> Self {
        Self {
            cols,
            rows,
            pixel_size,
            next_request: 0,
            due: None,
            listening: false,
        }
    }

    /// Record a new terminal size in cells.
    pub fn set_terminal_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Take the frame request due at this refresh, if any.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.due.take()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    fn pixel_rows(&self) -> u16 {
        self.rows.saturating_mul(2)
    }
}

impl Host for TermHost {
    type Surface = Raster;

    fn viewport(&self) -> Size {
        Size::new(
            self.cols as f64 * self.pixel_size,
            self.pixel_rows() as f64 * self.pixel_size,
        )
    }

    /// A terminal with no cells has nothing to draw on.
    fn acquire_surface(&mut self) -> Option<Raster> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        Some(Raster::new(self.cols, self.pixel_rows(), self.pixel_size))
    }

    fn resize_surface(&mut self, surface: &mut Raster, _size: Size) {
        surface.resize(self.cols, self.pixel_rows());
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        self.next_request += 1;
        let request = FrameRequest(self.next_request);
        self.due = Some(request);
        Some(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.due == Some(request) {
            self.due = None;
        }
    }

    fn listen_resize(&mut self) {
        self.listening = true;
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }
}
