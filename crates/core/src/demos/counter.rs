/// Counter with a fixed step that resets to its starting value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCounter {
    value: i64,
    initial: i64,
    step: i64,
}

impl StepCounter {
    #[must_use]
    pub const fn new(initial: i64, step: i64) -> Self {
        Self {
            value: initial,
            initial,
            step,
        }
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub const fn initial(&self) -> i64 {
        self.initial
    }

    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    pub fn increment(&mut self) {
        self.value += self.step;
    }

    pub fn decrement(&mut self) {
        self.value -= self.step;
    }

    pub fn increment_by(&mut self, amount: i64) {
        self.value += amount;
    }

    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// Seconds counter driven by an external one-second tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    seconds: u64,
    running: bool,
}

impl Stopwatch {
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance by one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    /// Back to zero and stopped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
