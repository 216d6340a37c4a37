//! One-shot delayed tasks driven by the fixed-timestep tick.
//!
//! The scheduler keeps its own millisecond clock that only moves when
//! [`Scheduler::advance`] is called, so delayed transitions are deterministic
//! and testable without real time. Every scheduled task gets a
//! [`TimerHandle`]; cancelling it guarantees the task never fires.
//!
//! Due tasks are drained one at a time with [`Scheduler::pop_due`]. A task
//! scheduled while draining (relative to the due time of the task that
//! scheduled it) is picked up by the same drain if it is already due.

use tracing::debug;

/// Work that fires after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Populate the wallet panel after startup.
    RevealWallet,
    /// Load the level after `level`, which was answered correctly.
    Advance { level: u32 },
    /// Start the exit animation of a notification.
    ExpireNotification { id: u64 },
    /// Drop a notification after its exit animation.
    RemoveNotification { id: u64 },
}

/// Cancellation handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A task taken off the queue, with the clock time it was due at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub due_ms: u64,
    pub task: Task,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: TimerHandle,
    due_ms: u64,
    task: Task,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_handle: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds ticked so far.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Time left before `handle` fires, if it is still pending.
    pub fn remaining_ms(&self, handle: TimerHandle) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.due_ms.saturating_sub(self.now_ms))
    }

    /// Fire `task` once `delay_ms` of ticked time has passed.
    pub fn schedule(&mut self, delay_ms: u32, task: Task) -> TimerHandle {
        self.schedule_at(self.now_ms + delay_ms as u64, task)
    }

    /// Fire `task` once the clock reaches `due_ms`. A time already in the
    /// past fires on the next [`Scheduler::pop_due`].
    pub fn schedule_at(&mut self, due_ms: u64, task: Task) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.entries.push(Entry {
            handle,
            due_ms,
            task,
        });
        debug!(?task, due_ms, "task scheduled");
        handle
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    /// Drop every pending task. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        if n > 0 {
            debug!(cancelled = n, "pending tasks cancelled");
        }
        n
    }

    /// Move the clock forward. Nothing fires until [`Scheduler::pop_due`].
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
    }

    /// Take the earliest task that is due at the current clock.
    ///
    /// Tasks come out in due-time order; ties keep scheduling order.
    pub fn pop_due(&mut self) -> Option<Fired> {
        let now = self.now_ms;
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now)
            .min_by_key(|(_, e)| (e.due_ms, e.handle))
            .map(|(i, _)| i)?;
        let e = self.entries.swap_remove(idx);
        Some(Fired {
            due_ms: e.due_ms,
            task: e.task,
        })
    }
}
