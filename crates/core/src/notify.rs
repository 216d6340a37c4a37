//! Transient toast notifications.
//!
//! A toast is visible for a fixed time, then spends a short exit phase
//! sliding out before it is removed. Timing lives in the scheduler; this
//! module only tracks which toasts exist and in which phase.

use arrayvec::ArrayVec;

use crate::types::Severity;

/// Maximum toasts kept at once. Pushing past this evicts the oldest.
pub const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    toasts: ArrayVec<Toast, MAX_TOASTS>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast. Returns its id and the id of an evicted toast, if any.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> (u64, Option<u64>) {
        let evicted = if self.toasts.is_full() {
            Some(self.toasts.remove(0).id)
        } else {
            None
        };

        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Visible,
        });
        (id, evicted)
    }

    /// Move a toast into its exit phase.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(t) if t.phase == ToastPhase::Visible => {
                t.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(i) => {
                self.toasts.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_lifecycle() {
        let mut n = Notifications::new();
        let (id, evicted) = n.push("Correct! +100 points", Severity::Success);
        assert_eq!(evicted, None);
        assert_eq!(n.get(id).unwrap().phase, ToastPhase::Visible);

        assert!(n.begin_exit(id));
        assert!(!n.begin_exit(id));
        assert_eq!(n.get(id).unwrap().phase, ToastPhase::Leaving);

        assert!(n.remove(id));
        assert!(!n.remove(id));
        assert!(n.is_empty());
    }

    #[test]
    fn full_queue_evicts_oldest() {
        let mut n = Notifications::new();
        let (first, _) = n.push("0", Severity::Info);
        for i in 1..MAX_TOASTS {
            n.push(i.to_string(), Severity::Info);
        }
        let (_, evicted) = n.push("overflow", Severity::Error);
        assert_eq!(evicted, Some(first));
        assert_eq!(n.len(), MAX_TOASTS);
        assert_eq!(n.iter().next().unwrap().message, "1");
    }
}
