use crate::app::view::Ticket;
use crate::lookup::{LookupError, LookupResult};

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Paste(String),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    /// A lookup finished, one way or another.
    LookupSettled {
        ticket: Ticket,
        outcome: Result<LookupResult, LookupError>,
    },
    LinkOpened,
    LinkFailed(String),
}
