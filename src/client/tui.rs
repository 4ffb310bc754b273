use std::{io, panic};

use color_eyre::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

pub type CrosstermTerminal =
    ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stderr>>;

use crate::client::{app::App, event::EventHandler, ui};

/// Owns the terminal for the lifetime of the viewer: raw mode and the
/// alternate screen go on in [`Tui::enter`] and come off in [`Tui::exit`],
/// or in the panic hook if something blows up in between.
pub struct Tui {
    terminal: CrosstermTerminal,
    pub events: EventHandler,
}

impl Tui {
    pub fn new(events: EventHandler) -> Result<Self> {
        let backend = ratatui::backend::CrosstermBackend::new(io::stderr());
        let terminal = ratatui::Terminal::new(backend)?;
        Ok(Self { terminal, events })
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stderr(), EnterAlternateScreen)?;

        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if let Err(e) = Self::reset() {
                eprintln!("failed to reset the terminal: {e}");
            }
            panic_hook(panic_info);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        Self::reset()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Also called from the panic hook.
    pub fn reset() -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// [`Draw`] one frame of the viewer.
    ///
    /// [`Draw`]: ratatui::Terminal::draw
    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal.draw(|frame| ui::render(app, frame))?;
        Ok(())
    }
}
