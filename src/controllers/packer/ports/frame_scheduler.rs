/// Identifies one scheduled tick so it can be cancelled or recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// The display clock that paces the animation loop.
///
/// When a scheduled tick fires, the host hands its handle back to
/// `CirclePacker::on_frame`.
pub trait FrameScheduler {
    fn schedule_next_tick(&mut self) -> FrameHandle;

    fn cancel_tick(&mut self, handle: FrameHandle);
}
