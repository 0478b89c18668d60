//! Shared fixtures for controller tests.

use crate::controllers::packer::controller::CirclePacker;
use crate::controllers::packer::listeners::Listeners;
use crate::controllers::packer::scheduling::ManualFrameScheduler;
use crate::core::data::{CircleId, Point, PositionUpdate, PositionUpdates};
use crate::protocol::Command;
use crate::worker::WorkerTransport;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub type CommandLog = Arc<Mutex<Vec<Command>>>;
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn command_kinds(log: &CommandLog) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(Command::kind).collect()
}

pub fn count_commands(log: &CommandLog, kind: &str) -> usize {
    command_kinds(log).into_iter().filter(|k| *k == kind).count()
}

pub fn count_events(log: &EventLog, kind: &str) -> usize {
    log.borrow().iter().filter(|event| event.as_str() == kind).count()
}

/// Records every command and answers each `update` with one delta per known
/// circle. Deltas come from the script (applied to both axes), then zero.
pub struct ScriptedEngine {
    log: CommandLog,
    circles: BTreeMap<CircleId, Point>,
    script: VecDeque<f64>,
}

impl ScriptedEngine {
    pub fn new(script: impl IntoIterator<Item = f64>) -> (Self, CommandLog) {
        let log = CommandLog::default();
        let engine = Self {
            log: Arc::clone(&log),
            circles: BTreeMap::new(),
            script: script.into_iter().collect(),
        };
        (engine, log)
    }

    fn apply(&mut self, command: Command) -> Option<PositionUpdates> {
        self.log.lock().unwrap().push(command.clone());

        match command {
            Command::AddCircles(circles) => {
                for circle in circles {
                    self.circles.insert(circle.id, circle.position);
                }
                None
            }
            Command::RemoveCircle(id) => {
                self.circles.remove(&id);
                None
            }
            Command::Update => {
                let step = self.script.pop_front().unwrap_or(0.0);
                let delta = Point::new(step, step);
                let updates = self
                    .circles
                    .iter_mut()
                    .map(|(id, position)| {
                        *position = *position + delta;
                        (id.clone(), PositionUpdate::new(*position, delta))
                    })
                    .collect();
                Some(updates)
            }
            _ => None,
        }
    }
}

pub fn scripted_engine(
    script: impl IntoIterator<Item = f64>,
) -> (impl FnMut(Command) -> Option<PositionUpdates> + Send + 'static, CommandLog) {
    let (mut engine, log) = ScriptedEngine::new(script);
    (move |command| engine.apply(command), log)
}

pub fn recording_listeners() -> (Listeners, EventLog) {
    let log = EventLog::default();
    let (start, moves, end) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));

    let listeners = Listeners::new()
        .on_move_start(move || start.borrow_mut().push("movestart".to_owned()))
        .on_move(move |_| moves.borrow_mut().push("move".to_owned()))
        .on_move_end(move || end.borrow_mut().push("moveend".to_owned()));

    (listeners, log)
}

/// Fires due ticks until the loop stops scheduling or `max_frames` is hit.
pub fn run_frames<T: WorkerTransport>(
    packer: &mut CirclePacker<T, ManualFrameScheduler>,
    max_frames: usize,
) -> usize {
    let mut fired = 0;
    while fired < max_frames {
        let Some(handle) = packer.scheduler_mut().take_due() else {
            break;
        };
        packer.on_frame(handle).unwrap();
        fired += 1;
    }
    fired
}
