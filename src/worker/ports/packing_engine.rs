use crate::core::data::PositionUpdates;
use crate::protocol::Command;

/// The packing computation that lives behind the worker boundary.
///
/// The engine owns all circle state. It receives every command in send
/// order; whatever mapping it returns is posted back as a `move` event.
/// Engines normally answer `Command::Update` and return `None` for the rest.
pub trait PackingEngine: Send + 'static {
    fn apply(&mut self, command: Command) -> Option<PositionUpdates>;
}

impl<F> PackingEngine for F
where
    F: FnMut(Command) -> Option<PositionUpdates> + Send + 'static,
{
    #[inline]
    fn apply(&mut self, command: Command) -> Option<PositionUpdates> {
        self(command)
    }
}
