use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use smoke_core::SmokeConfig;
use smoke_emitter::{Emitter, SmokeOptions, StopHandle, Surface};
use smoke_term::TerminalSurface;
use tracing::debug;

/// The terminal application: one emitter drawn full screen.
#[derive(Debug)]
pub struct App {
    emitter: Emitter<TerminalSurface>,
    /// Stops the emitter and ends the main loop.
    stop: StopHandle,
}

impl App {
    /// Build the app on a surface covering the whole terminal.
    pub fn new(config: SmokeConfig) -> color_eyre::Result<Self> {
        let parent = config.backdrop.and_then(|backdrop| {
            TerminalSurface::document_root().map(|surface| surface.with_backdrop(backdrop.rgb))
        });
        Self::with_options(SmokeOptions {
            parent,
            config,
            drift: None,
        })
    }

    pub fn with_options(options: SmokeOptions<TerminalSurface>) -> color_eyre::Result<Self> {
        let emitter = Emitter::new(options)?;
        let stop = emitter.stop_handle();
        Ok(Self { emitter, stop })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        while !self.stop.is_stopped() {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.emitter.poll(Instant::now());
        }
        let surface = self.emitter.dispose();
        debug!(remaining = surface.element_count(), "emitter disposed");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self.emitter.surface(), frame.area());
    }

    /// Wait for input until the next tick is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .emitter
            .time_until_next_tick(Instant::now())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.emitter.surface_mut().resize(columns, rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.stop.stop();
    }
}
