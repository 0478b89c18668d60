use crate::core::data::PositionUpdates;
use crate::protocol::Event;
use std::fmt;

type LifecycleHandler = Box<dyn FnMut()>;
type MoveHandler = Box<dyn FnMut(&PositionUpdates)>;

/// Host callbacks, at most one per event kind. A missing handler is a no-op.
#[derive(Default)]
pub struct Listeners {
    on_move_start: Option<LifecycleHandler>,
    on_move: Option<MoveHandler>,
    on_move_end: Option<LifecycleHandler>,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_move_start(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_move_start = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_move(mut self, handler: impl FnMut(&PositionUpdates) + 'static) -> Self {
        self.on_move = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_move_end(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_move_end = Some(Box::new(handler));
        self
    }

    pub fn dispatch(&mut self, event: &Event) {
        match event {
            Event::MoveStart => {
                if let Some(handler) = self.on_move_start.as_mut() {
                    handler();
                }
            }
            Event::Move(updates) => {
                if let Some(handler) = self.on_move.as_mut() {
                    handler(updates);
                }
            }
            Event::MoveEnd => {
                if let Some(handler) = self.on_move_end.as_mut() {
                    handler();
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.on_move_start = None;
        self.on_move = None;
        self.on_move_end = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_move_start.is_none() && self.on_move.is_none() && self.on_move_end.is_none()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("on_move_start", &self.on_move_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_move_end", &self.on_move_end.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{CircleId, Point, PositionUpdate};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_events_reach_their_own_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (start_log, move_log, end_log) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));

        let mut listeners = Listeners::new()
            .on_move_start(move || start_log.borrow_mut().push("start".to_owned()))
            .on_move(move |updates| move_log.borrow_mut().push(format!("move:{}", updates.len())))
            .on_move_end(move || end_log.borrow_mut().push("end".to_owned()));

        let mut updates = PositionUpdates::new();
        updates.insert(CircleId::new("a"), PositionUpdate::stationary(Point::default()));

        listeners.dispatch(&Event::MoveStart);
        listeners.dispatch(&Event::Move(updates));
        listeners.dispatch(&Event::MoveEnd);

        assert_eq!(*log.borrow(), vec!["start", "move:1", "end"]);
    }

    #[test]
    fn test_missing_handlers_are_no_ops() {
        let mut listeners = Listeners::new();

        listeners.dispatch(&Event::MoveStart);
        listeners.dispatch(&Event::Move(PositionUpdates::new()));
        listeners.dispatch(&Event::MoveEnd);

        assert!(listeners.is_empty());
    }

    #[test]
    fn test_clear_drops_every_handler() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut listeners = Listeners::new().on_move_end(move || *counter.borrow_mut() += 1);

        listeners.clear();
        listeners.dispatch(&Event::MoveEnd);

        assert!(listeners.is_empty());
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(
            format!("{listeners:?}"),
            "Listeners { on_move_start: false, on_move: false, on_move_end: false }"
        );
    }
}
