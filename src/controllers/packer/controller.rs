use crate::controllers::packer::config::PackerConfig;
use crate::controllers::packer::errors::ControllerError;
use crate::controllers::packer::listeners::Listeners;
use crate::controllers::packer::ports::{FrameHandle, FrameScheduler};
use crate::controllers::packer::scheduling::ManualFrameScheduler;
use crate::controllers::packer::state::{ControllerState, LoopState};
use crate::core::data::{Bounds, Circle, CircleId, Point};
use crate::core::motion::has_moved;
use crate::core::validation::{filter_valid_circles, is_bounds_valid};
use crate::protocol::{Command, DragMove, DragTarget, Event, Message, RadiusChange};
use crate::worker::{PackingEngine, ThreadedTransport, WorkerProxy, WorkerTransport};
use std::slice;
use tracing::{debug, trace, warn};

/// Drives a background packing computation from a frame clock.
///
/// Mutating calls forward a command and, in continuous mode, start the
/// animation loop. Each tick drains worker results, then either requests
/// another `update` or, once nothing moves, goes idle and raises `moveend`.
/// All state changes happen on the caller's thread through `&mut self`.
pub struct CirclePacker<T: WorkerTransport, S: FrameScheduler> {
    worker: WorkerProxy<T>,
    scheduler: S,
    listeners: Listeners,
    state: LoopState,
    items_moving: bool,
    nudged: bool,
    continuous_mode: bool,
    initialized: bool,
}

impl<T: WorkerTransport, S: FrameScheduler> CirclePacker<T, S> {
    pub fn new(
        config: PackerConfig,
        listeners: Listeners,
        transport: T,
        scheduler: S,
    ) -> Result<Self, ControllerError> {
        let mut packer = Self {
            worker: WorkerProxy::new(transport),
            scheduler,
            listeners,
            state: LoopState::Idle,
            items_moving: true,
            nudged: false,
            continuous_mode: config.continuous_mode,
            initialized: false,
        };

        if let Some(passes) = config.centering_passes.filter(|&passes| passes > 0) {
            packer.set_centering_passes(passes)?;
        }
        if let Some(passes) = config.collision_passes.filter(|&passes| passes > 0) {
            packer.set_collision_passes(passes)?;
        }

        packer.add_circles(&config.circles)?;
        packer.set_bounds(config.bounds)?;
        packer.set_target(config.target)?;

        packer.initialized = true;
        debug!(
            continuous = packer.continuous_mode,
            "circle packer initialized"
        );

        if packer.continuous_mode {
            packer.start_loop()?;
        }

        Ok(packer)
    }

    /// Forwards the valid members of `circles`; invalid ones are dropped.
    /// A batch with no valid member sends nothing.
    pub fn add_circles(&mut self, circles: &[Circle]) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        let valid = filter_valid_circles(circles);
        let dropped = circles.len() - valid.len();
        if dropped > 0 {
            debug!(dropped, "dropping invalid circles from batch");
        }
        if valid.is_empty() {
            return Ok(());
        }

        self.forward(Command::AddCircles(valid))
    }

    pub fn add_circle(&mut self, circle: &Circle) -> Result<(), ControllerError> {
        self.add_circles(slice::from_ref(circle))
    }

    /// Accepts an id or a `&Circle`. An empty id is ignored.
    pub fn remove_circle(&mut self, circle: impl Into<CircleId>) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        let id = circle.into();
        if id.is_empty() {
            return Ok(());
        }

        self.forward(Command::RemoveCircle(id))
    }

    /// Ignored unless `radius` is finite and positive.
    pub fn set_radius(
        &mut self,
        id: impl Into<CircleId>,
        radius: f64,
    ) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if !radius.is_finite() || radius <= 0.0 {
            debug!(radius, "ignoring non-positive radius");
            return Ok(());
        }

        self.forward(Command::Radius(RadiusChange {
            id: id.into(),
            radius,
        }))
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if !is_bounds_valid(&bounds) {
            debug!(?bounds, "ignoring invalid bounds");
            return Ok(());
        }

        self.forward(Command::Bounds(bounds))
    }

    pub fn set_target(&mut self, target: Point) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if !target.is_numeric() {
            debug!(?target, "ignoring non-finite target");
            return Ok(());
        }

        self.forward(Command::Target(target))
    }

    pub fn set_centering_passes(&mut self, passes: u32) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.forward(Command::CenteringPasses(passes))
    }

    pub fn set_collision_passes(&mut self, passes: u32) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.forward(Command::CollisionPasses(passes))
    }

    pub fn set_damping(&mut self, damping: f64) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if !damping.is_finite() {
            debug!(damping, "ignoring non-finite damping");
            return Ok(());
        }

        self.forward(Command::Damping(damping))
    }

    /// Asks the worker for one simulation step. Its `move` result is
    /// delivered by the next [`Self::process_messages`] or frame.
    pub fn update(&mut self) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.forward(Command::Update)
    }

    pub fn drag_start(&mut self, id: impl Into<CircleId>) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.forward(Command::DragStart(DragTarget { id: id.into() }))
    }

    /// A non-finite position is ignored.
    pub fn drag(&mut self, id: impl Into<CircleId>, position: Point) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if !position.is_numeric() {
            debug!(?position, "ignoring non-finite drag position");
            return Ok(());
        }

        self.forward(Command::Drag(DragMove {
            id: id.into(),
            position,
        }))
    }

    pub fn drag_end(&mut self, id: impl Into<CircleId>) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.forward(Command::DragEnd(DragTarget { id: id.into() }))
    }

    /// Delivers every worker result that has arrived, in arrival order.
    /// Returns how many were handled.
    pub fn process_messages(&mut self) -> Result<usize, ControllerError> {
        self.ensure_alive()?;

        let messages = self.worker.drain()?;
        let handled = messages.len();
        for message in messages {
            self.handle_message(message);
        }

        Ok(handled)
    }

    /// Runs one loop iteration for a tick the scheduler fired.
    ///
    /// Ticks that are no longer pending (cancelled, superseded, or arriving
    /// after the loop stopped) are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if self.state.pending_frame() != Some(handle) {
            trace!(frame = handle.id(), "ignoring stale frame");
            return Ok(());
        }

        trace!(frame = handle.id(), "frame tick");
        self.state = LoopState::Looping { pending: None };

        if let Err(err) = self.advance_loop() {
            warn!(%err, "frame failed, stopping animation loop");
            self.halt_loop();
            return Err(err);
        }

        Ok(())
    }

    /// Enters the loop if idle, initialized and in continuous mode.
    pub fn start_loop(&mut self) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        if self.state != LoopState::Idle || !self.initialized || !self.continuous_mode {
            return Ok(());
        }

        // the first tick always sends an update, even if it drains a settled
        // result that was queued before the restart
        self.items_moving = true;
        self.nudged = true;

        let handle = self.scheduler.schedule_next_tick();
        self.state = LoopState::Looping {
            pending: Some(handle),
        };
        debug!(frame = handle.id(), "animation loop started");
        self.listeners.dispatch(&Event::MoveStart);

        Ok(())
    }

    pub fn stop_loop(&mut self) -> Result<(), ControllerError> {
        self.ensure_alive()?;
        self.halt_loop();
        Ok(())
    }

    /// Switching continuous mode on starts the loop; switching it off stops it.
    pub fn set_continuous_mode(&mut self, enabled: bool) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        self.continuous_mode = enabled;
        if enabled {
            self.start_loop()
        } else {
            self.halt_loop();
            Ok(())
        }
    }

    /// Terminates the worker, stops the loop (raising `moveend` if it was
    /// running) and drops every listener. Any later call fails with
    /// [`ControllerError::Destroyed`].
    pub fn destroy(&mut self) -> Result<(), ControllerError> {
        self.ensure_alive()?;

        self.worker.terminate();
        self.halt_loop();
        self.listeners.clear();
        self.state = LoopState::Destroyed;
        debug!("circle packer destroyed");

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        ControllerState {
            loop_state: self.state,
            items_moving: self.items_moving,
            continuous_mode: self.continuous_mode,
            initialized: self.initialized,
        }
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.state.is_looping()
    }

    #[must_use]
    pub fn are_items_moving(&self) -> bool {
        self.items_moving
    }

    #[must_use]
    pub fn is_continuous_mode(&self) -> bool {
        self.continuous_mode
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state == LoopState::Destroyed
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn worker(&self) -> &WorkerProxy<T> {
        &self.worker
    }

    pub fn worker_mut(&mut self) -> &mut WorkerProxy<T> {
        &mut self.worker
    }

    fn ensure_alive(&self) -> Result<(), ControllerError> {
        if self.is_destroyed() {
            return Err(ControllerError::Destroyed);
        }
        Ok(())
    }

    /// Sends `command`; a mutating one also keeps or starts the loop.
    fn forward(&mut self, command: Command) -> Result<(), ControllerError> {
        self.worker.send(&command)?;

        if !command.is_mutating() {
            return Ok(());
        }
        if self.state.is_looping() {
            self.nudged = true;
            return Ok(());
        }

        self.start_loop()
    }

    fn advance_loop(&mut self) -> Result<(), ControllerError> {
        self.process_messages()?;

        if std::mem::take(&mut self.nudged) {
            self.items_moving = true;
        }

        if !self.items_moving {
            debug!("packing converged");
            self.halt_loop();
            return Ok(());
        }

        self.worker.send(&Command::Update)?;
        let next = self.scheduler.schedule_next_tick();
        self.state = LoopState::Looping {
            pending: Some(next),
        };

        Ok(())
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::Event(event) => {
                if let Event::Move(updates) = &event {
                    self.items_moving = has_moved(updates);
                }
                self.listeners.dispatch(&event);
            }
            Message::Command(command) => {
                warn!(kind = command.kind(), "ignoring command received from worker");
            }
        }
    }

    fn halt_loop(&mut self) {
        let LoopState::Looping { pending } = self.state else {
            return;
        };

        self.state = LoopState::Idle;
        self.nudged = false;
        if let Some(handle) = pending {
            self.scheduler.cancel_tick(handle);
        }

        debug!("animation loop stopped");
        self.listeners.dispatch(&Event::MoveEnd);
    }
}

impl CirclePacker<ThreadedTransport, ManualFrameScheduler> {
    /// Runs `engine` on its own thread behind a host-driven frame clock.
    pub fn spawn<E: PackingEngine>(
        config: PackerConfig,
        listeners: Listeners,
        engine: E,
    ) -> Result<Self, ControllerError> {
        let transport = ThreadedTransport::spawn(engine)?;
        Self::new(config, listeners, transport, ManualFrameScheduler::new())
    }
}
