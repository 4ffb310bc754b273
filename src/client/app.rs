use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

use super::event::{Event, EventHandler};
use super::tui::Tui;
use super::view::DeckView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Running,
    Quitting
}

/// The terminal application
pub struct App {
    pub view: DeckView,

    /// First deck line shown
    pub scroll: u16,

    /// The state of the application.
    mode: Mode,
}

impl App {
    /// Constructs a new instance of [`App`]
    pub fn new(view: DeckView) -> Self {
        Self {
            view,
            scroll: 0,
            mode: Mode::Running,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("client: initializing terminal");
        let mut tui = Tui::new(EventHandler::new())?;
        tui.enter()?;

        info!("client: entering main loop");
        while self.running() {
            tui.draw(self)?;
            if let Some(event) = tui.events.next(Duration::from_millis(250))? {
                self.update(event);
            }
        }

        info!("client: tearing down user interface");
        tui.exit()?;
        Ok(())
    }

    pub fn running(&self) -> bool {
        self.mode != Mode::Quitting
    }

    pub fn quit(&mut self) {
        self.mode = Mode::Quitting;
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Resize(_, _) => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            _ => {}
        }
    }

    fn scroll_down(&mut self) {
        let last = self.view.deck_lines().len().saturating_sub(1);
        if (self.scroll as usize) < last {
            self.scroll += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
