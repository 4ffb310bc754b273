use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};
use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use log::warn;

/// Terminal client events.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Terminal event handler
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::Receiver<Event>,
    /// Thread polls crossterm for user input and sends them along the channel
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let timeout = Duration::from_secs_f64(1.0 / 50.0);
        let (sender, receiver) = mpsc::channel();

        let handler = thread::spawn(move || loop {
            match event::poll(timeout) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!("client: unable to poll for terminal events: {e}");
                    break;
                }
            }

            let event = match event::read() {
                // ignore key release
                Ok(CrosstermEvent::Key(e)) if e.kind == event::KeyEventKind::Press => Event::Key(e),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    warn!("client: unable to read terminal event: {e}");
                    break;
                }
            };

            // the app hung up
            if sender.send(event).is_err() {
                break;
            }
        });

        Self {
            receiver,
            handler,
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<Option<Event>> {
        let result = self.receiver.recv_timeout(timeout);
        match result {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into())
        }
    }
}
