use crate::controllers::packer::ports::{FrameHandle, FrameScheduler};
use std::collections::VecDeque;

/// A frame clock the host advances itself: scheduled ticks queue up until
/// taken with [`ManualFrameScheduler::take_due`].
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    due: VecDeque<FrameHandle>,
    cancelled: u64,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.due.pop_front()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.due.len()
    }

    #[must_use]
    pub fn scheduled_total(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn cancelled_total(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn schedule_next_tick(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.due.push_back(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: FrameHandle) {
        let before = self.due.len();
        self.due.retain(|&due| due != handle);

        if self.due.len() != before {
            self.cancelled += 1;
        }
    }
}
