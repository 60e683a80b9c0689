//! Terminal event pump for embedding applications.
//!
//! Reads crossterm events on a separate thread and forwards them over a
//! channel. The thread never touches the widget; all mutation stays on the
//! receiving side.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};

/// Events delivered to the embedding application.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Mouse input (clicks, wheel).
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Blocking event pump backed by a reader thread.
pub struct EventPump {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventPump {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let Ok(evt) = event::read() else {
                    break;
                };
                let event = match evt {
                    CrosstermEvent::Key(key) => Event::Key(key),
                    CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                    CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                    _ => continue,
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}

impl Default for EventPump {
    fn default() -> Self {
        Self::new()
    }
}
