use crate::protocol::command::Command;
use crate::protocol::event::Event;
use serde::{Deserialize, Serialize};

/// Any `{type, message}` envelope that can cross the worker boundary.
///
/// Commands and events share one tag namespace, so the wire text alone
/// selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Command(Command),
    Event(Event),
}

impl Message {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Command(command) => command.kind(),
            Self::Event(event) => event.kind(),
        }
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}
