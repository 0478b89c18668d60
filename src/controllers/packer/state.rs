use crate::controllers::packer::ports::FrameHandle;

/// Animation loop lifecycle.
///
/// `pending` is the tick currently scheduled; it is `None` only while that
/// tick is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Looping {
        pending: Option<FrameHandle>,
    },
    Destroyed,
}

impl LoopState {
    #[must_use]
    pub fn is_looping(&self) -> bool {
        matches!(self, Self::Looping { .. })
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        match self {
            Self::Looping { pending } => *pending,
            _ => None,
        }
    }
}

/// Read-only snapshot of the controller for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub loop_state: LoopState,
    pub items_moving: bool,
    pub continuous_mode: bool,
    pub initialized: bool,
}

impl ControllerState {
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.loop_state.is_looping()
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.loop_state.pending_frame()
    }
}
