/// Ticket for one scheduled frame loop.
///
/// Each `start` hands out a new generation; only the newest uncancelled
/// generation may run frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_generation: u64,
    active: Option<u64>,
    frames_run: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame loop, retiring whichever loop was active.
    pub fn start(&mut self) -> FrameHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.active = Some(generation);
        FrameHandle { generation }
    }

    /// Idempotent; stale or already cancelled handles are ignored.
    pub fn cancel(&mut self, handle: FrameHandle) {
        if self.active == Some(handle.generation) {
            self.active = None;
        }
    }

    #[must_use]
    pub fn is_active(&self, handle: FrameHandle) -> bool {
        self.active == Some(handle.generation)
    }

    /// Runs `frame` only when `handle` is still the active loop.
    pub fn dispatch<R>(&mut self, handle: FrameHandle, frame: impl FnOnce() -> R) -> Option<R> {
        if !self.is_active(handle) {
            return None;
        }
        self.frames_run += 1;
        Some(frame())
    }

    #[must_use]
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}
