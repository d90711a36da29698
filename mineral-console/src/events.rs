//! Event types for the console event loop.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum ConsoleEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
}
