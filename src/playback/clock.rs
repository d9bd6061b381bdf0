//! Clock abstraction for the playback scheduler
//!
//! A clock keeps a timeline of pending [`Trigger`]s and hands back the ones that have
//! come due. Triggers are plain data rather than callbacks: the scheduler drains them
//! with [`Clock::take_due`] and dispatches them itself, which keeps the scheduler's
//! state in one place and lets tests drive time by hand with [`VirtualClock`].

use std::time::Instant;

/// What a trigger does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Sound the event at this index of the session's sequence and move the cursor to it
    Event(usize),
    /// End of the session
    Complete,
}

/// A scheduled request, tagged with the session that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub session: u64,
    pub kind: TriggerKind,
}

/// Time source plus a queue of scheduled triggers.
///
/// All times are seconds on the clock's own reference, as returned by [`Clock::now`].
pub trait Clock {
    /// Current time on this clock
    fn now(&self) -> f64;

    /// Begin delivering due triggers
    fn start(&mut self);

    /// Stop delivering triggers. Pending triggers are kept until cancelled.
    fn stop(&mut self);

    /// Queue a trigger to fire at absolute time `at`
    fn schedule_at(&mut self, at: f64, trigger: Trigger);

    /// Drop every pending trigger
    fn cancel_all(&mut self);

    /// Remove and return the triggers whose time has come, in firing order.
    ///
    /// Returns nothing while the clock is stopped.
    fn take_due(&mut self) -> Vec<(f64, Trigger)>;

    /// Number of triggers still waiting to fire
    fn pending(&self) -> usize;
}

/// Pending triggers ordered by time, then by the order they were scheduled.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Vec<(f64, Trigger)>,
}

impl Timeline {
    pub fn insert(&mut self, at: f64, trigger: Trigger) {
        // After every entry that fires no later, so equal times keep scheduling order
        let pos = self.entries.partition_point(|&(t, _)| t <= at);
        self.entries.insert(pos, (at, trigger));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry with time `<= now`
    pub fn drain_until(&mut self, now: f64) -> Vec<(f64, Trigger)> {
        let due = self.entries.partition_point(|&(t, _)| t <= now);
        self.entries.drain(..due).collect()
    }
}

/// A clock whose time only moves when told to.
///
/// Used in tests to step through a playback session deterministically.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: f64,
    running: bool,
    timeline: Timeline,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `seconds`
    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }

    /// Move time forward to `at`. Time never goes backwards.
    pub fn advance_to(&mut self, at: f64) {
        if at > self.now {
            self.now = at;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn schedule_at(&mut self, at: f64, trigger: Trigger) {
        self.timeline.insert(at, trigger);
    }

    fn cancel_all(&mut self) {
        self.timeline.clear();
    }

    fn take_due(&mut self) -> Vec<(f64, Trigger)> {
        if !self.running {
            return Vec::new();
        }
        self.timeline.drain_until(self.now)
    }

    fn pending(&self) -> usize {
        self.timeline.len()
    }
}

/// Wall-clock time, measured from when the clock was created.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    running: bool,
    timeline: Timeline,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
            running: false,
            timeline: Timeline::default(),
        }
    }

    /// Time of the next pending trigger, if any
    pub fn next_due(&self) -> Option<f64> {
        self.timeline.entries.first().map(|&(t, _)| t)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn schedule_at(&mut self, at: f64, trigger: Trigger) {
        self.timeline.insert(at, trigger);
    }

    fn cancel_all(&mut self) {
        self.timeline.clear();
    }

    fn take_due(&mut self) -> Vec<(f64, Trigger)> {
        if !self.running {
            return Vec::new();
        }
        let now = self.now();
        self.timeline.drain_until(now)
    }

    fn pending(&self) -> usize {
        self.timeline.len()
    }
}
