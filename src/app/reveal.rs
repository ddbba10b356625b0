use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Current,
    Hourly,
    Chart,
    Daily,
    Dashboard,
}

/// Offsets from the start of a reveal at which each panel appears.
pub const REVEAL_SCHEDULE: [(Duration, RevealStep); 5] = [
    (Duration::from_millis(100), RevealStep::Current),
    (Duration::from_millis(200), RevealStep::Hourly),
    (Duration::from_millis(300), RevealStep::Chart),
    (Duration::from_millis(400), RevealStep::Daily),
    (Duration::from_millis(500), RevealStep::Dashboard),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealProgress {
    pub current: bool,
    pub hourly: bool,
    pub chart: bool,
    pub daily: bool,
    pub dashboard: bool,
}

impl RevealProgress {
    fn mark(&mut self, step: RevealStep) {
        match step {
            RevealStep::Current => self.current = true,
            RevealStep::Hourly => self.hourly = true,
            RevealStep::Chart => self.chart = true,
            RevealStep::Daily => self.daily = true,
            RevealStep::Dashboard => self.dashboard = true,
        }
    }
}

/// Staged panel reveal; restarting invalidates steps still in flight.
#[derive(Debug, Default)]
pub struct RevealSchedule {
    generation: u64,
    progress: RevealProgress,
}

impl RevealSchedule {
    pub fn restart(&mut self) -> u64 {
        self.generation += 1;
        self.progress = RevealProgress::default();
        self.generation
    }

    /// Records `step` when it belongs to the live generation.
    pub fn accept(&mut self, generation: u64, step: RevealStep) -> bool {
        if generation != self.generation {
            return false;
        }
        self.progress.mark(step);
        true
    }

    #[must_use]
    pub fn progress(&self) -> RevealProgress {
        self.progress
    }
}
