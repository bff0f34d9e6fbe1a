//! Terminal host that drives the effect.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use shapeshift_config::Config;
use shapeshift_core::DEFAULT_LABELS;
use shapeshift_flock::{Effect, EffectOptions, LabelSequence, Mode};
use tracing::warn;

use crate::surface::TerminalSurface;

/// Rows reserved for the status line.
const STATUS_ROWS: u16 = 1;

/// Longest the event poll may block while the animation is paused.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The particle effect drawn on the terminal.
    effect: Effect<TerminalSurface>,
    /// Origin of the millisecond clock handed to the effect.
    started: Instant,
    /// Whether the screen needs a redraw outside the frame cadence.
    dirty: bool,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `cols` x `rows`.
    pub fn new(config: &Config, mode: Mode, cols: u16, rows: u16) -> Self {
        let surface = TerminalSurface::new(
            cols,
            rows.saturating_sub(STATUS_ROWS),
            config.cell_width_px,
            config.cell_height_px,
            config.theme,
        );
        let labels = config
            .label_sequence()
            .unwrap_or_else(|| DEFAULT_LABELS.to_string());
        let options = EffectOptions {
            labels: LabelSequence::from(labels),
            mode,
            seed: config.seed,
            frame_interval_ms: config.frame_interval_ms,
        };

        Self {
            running: false,
            effect: Effect::new(surface, options),
            started: Instant::now(),
            dirty: true,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.effect.init(self.now_ms())?;

        while self.running {
            let now = self.now_ms();
            if self.effect.tick(now) || self.dirty {
                self.dirty = false;
                // A failed frame must not stop the animation.
                if let Err(err) = terminal.draw(|frame| self.render(frame)) {
                    warn!(%err, "frame draw failed");
                }
            }
            self.handle_crossterm_events()?;
        }

        self.effect.reset();
        Ok(())
    }

    /// Milliseconds since the app started.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),             // Particles
            Constraint::Length(STATUS_ROWS), // Help text
        ])
        .split(frame.area());

        let surface = self.effect.surface();
        surface.render(frame, chunks[0]);

        let color = surface.theme().accent();
        let pause = if self.effect.is_animating() {
            " pause  "
        } else {
            " resume  "
        };
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "space".bold().fg(color),
            pause.dark_gray(),
            "n".bold().fg(color),
            " next  ".dark_gray(),
            "r".bold().fg(color),
            " restart  ".dark_gray(),
            "t".bold().fg(color),
            " theme  ".dark_gray(),
            format!(
                "{} dots, {} in shape",
                self.effect.pool_len(),
                self.effect.active_count()
            )
            .dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Blocks at most until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .effect
            .until_next_frame(self.now_ms())
            .map(Duration::from_millis)
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.effect.toggle_frames(self.now_ms()),
            (_, KeyCode::Char('n')) => self.effect.next_now(self.now_ms()),
            (_, KeyCode::Char('r')) => self.restart(),
            (_, KeyCode::Char('t')) => self.effect.surface_mut().toggle_theme(),
            _ => {}
        }
        self.dirty = true;
    }

    /// Forward a terminal resize to the effect.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = self
            .effect
            .surface()
            .viewport_for(cols, rows.saturating_sub(STATUS_ROWS));
        self.effect.on_resize(viewport, self.now_ms());
        self.dirty = true;
    }

    /// Tear the effect down and start it again.
    fn restart(&mut self) {
        self.effect.reset();
        if let Err(err) = self.effect.init(self.now_ms()) {
            warn!(%err, "could not restart effect");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
