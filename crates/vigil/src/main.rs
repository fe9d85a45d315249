mod host;
mod logging;
mod raster;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::Stylize,
    text::Line,
};
use tracing::info;
use vigil_background::{Mount, MountState};
use vigil_config::Config;

use crate::host::TermHost;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    logging::init(&config.log)?;

    let (cols, rows) = crossterm::terminal::size().wrap_err("failed to query terminal size")?;
    let terminal = ratatui::init();
    let result = App::new(&config, cols, rows).run(terminal);
    ratatui::restore();
    result
}

/// Seed derived from the current time, for runs without a configured seed.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Show the key help line.
    show_help: bool,
    /// Time between frames.
    frame_interval: Duration,
    /// The mounted background; `None` when the terminal had no room to draw.
    mount: Option<Mount<TermHost>>,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of the given size.
    pub fn new(config: &Config, cols: u16, rows: u16) -> Self {
        let seed = config.scene.seed.unwrap_or_else(time_seed);
        let host = TermHost::new(cols, rows, config.terminal.pixel_size);
        let mount = Mount::activate(host, &config.scene_settings(), seed);
        info!(seed, cols, rows, mounted = mount.is_some(), "vigil starting");

        Self {
            running: false,
            show_help: true,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(config.terminal.fps)),
            mount,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        if let Some(mount) = self.mount.as_mut() {
            mount.start();
        }

        let mut next_frame = Instant::now();
        let mut dirty = true;
        while self.running {
            if Instant::now() >= next_frame {
                next_frame = Instant::now() + self.frame_interval;
                dirty |= self.advance_frame();
            }
            if dirty {
                terminal.draw(|frame| self.render(frame))?;
                dirty = false;
            }
            let timeout = next_frame.saturating_duration_since(Instant::now());
            dirty |= self.handle_crossterm_events(timeout)?;
        }

        if let Some(mount) = self.mount.as_mut() {
            mount.dispose();
        }
        Ok(())
    }

    /// Run the scheduled frame, if one is due. Returns whether anything was drawn.
    fn advance_frame(&mut self) -> bool {
        let Some(mount) = self.mount.as_mut() else {
            return false;
        };
        if mount.host_mut().take_due().is_some() {
            mount.on_frame()
        } else {
            false
        }
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(mount) = &self.mount {
            frame.render_widget(mount.surface(), area);
        }

        if self.show_help && area.height > 0 {
            let paused = self
                .mount
                .as_ref()
                .is_some_and(|m| m.state() == MountState::Paused);
            let help = Line::from(vec![
                "q".bold().cyan(),
                " quit  ".dark_gray(),
                "p".bold().cyan(),
                (if paused { " resume  " } else { " pause  " }).dark_gray(),
                "h".bold().cyan(),
                " hide help".dark_gray(),
            ])
            .centered();
            let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            frame.render_widget(help, row);
        }
    }

    /// Waits up to `timeout` for a crossterm event and updates the state of
    /// [`App`]. Returns whether the screen needs redrawing.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<bool> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.on_key_event(key);
                    return Ok(true);
                }
                Event::Resize(cols, rows) => {
                    self.on_resize(cols, rows);
                    return Ok(true);
                }
                _ => {}
            }
        }
        Ok(false)
    }

    /// Forward a terminal resize to the background while it listens for them.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let Some(mount) = self.mount.as_mut() else {
            return;
        };
        mount.host_mut().set_terminal_size(cols, rows);
        if mount.host().is_listening() {
            mount.on_resize();
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.toggle_pause(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Pause or resume the animation.
    fn toggle_pause(&mut self) {
        let Some(mount) = self.mount.as_mut() else {
            return;
        };
        match mount.state() {
            MountState::Running => mount.pause(),
            MountState::Paused => mount.resume(),
            MountState::Ready | MountState::Disposed => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
