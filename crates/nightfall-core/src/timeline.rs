//! Deferred effects - things that expire a fixed time after they start.
//!
//! Each entry carries the token of the state it was scheduled against. The
//! engine compares that token with the live state when the entry falls due
//! and drops it if the state has moved on, so a stale expiry can never undo
//! a newer transition.

use serde::{Deserialize, Serialize};

/// What happens when an entry falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Return the held tool to rest. Carries the recoil generation.
    EndRecoil { generation: u64 },
    /// Blank the HUD message. Carries the message generation.
    ClearMessage { generation: u64 },
    /// Let the fish escape. Carries the fishing session id.
    BiteWindowClosed { session: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Scheduled {
    due: f64,
    effect: Deferred,
}

/// Pending deferred effects, keyed on simulation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pending: Vec<Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` to fall due `delay` time-units after `now`.
    pub fn schedule(&mut self, now: f64, delay: f32, effect: Deferred) {
        self.pending.push(Scheduled {
            due: now + delay.max(0.0) as f64,
            effect,
        });
    }

    /// Remove and return every effect due at or before `now`, earliest
    /// first. Ties keep scheduling order.
    pub fn take_due(&mut self, now: f64) -> Vec<Deferred> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                due.push(*s);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|s| s.effect).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_early() {
        let mut tl = Timeline::new();
        tl.schedule(0.0, 1.5, Deferred::BiteWindowClosed { session: 1 });
        assert!(tl.take_due(1.49).is_empty());
        assert_eq!(tl.len(), 1);
    }

    #[test]
    fn test_due_in_time_order() {
        let mut tl = Timeline::new();
        tl.schedule(0.0, 2.0, Deferred::ClearMessage { generation: 1 });
        tl.schedule(0.0, 0.15, Deferred::EndRecoil { generation: 1 });
        tl.schedule(0.0, 9.0, Deferred::ClearMessage { generation: 2 });

        let due = tl.take_due(2.0);
        assert_eq!(
            due,
            vec![
                Deferred::EndRecoil { generation: 1 },
                Deferred::ClearMessage { generation: 1 },
            ]
        );
        assert_eq!(tl.len(), 1);
    }

    #[test]
    fn test_effects_fire_once() {
        let mut tl = Timeline::new();
        tl.schedule(1.0, 1.0, Deferred::BiteWindowClosed { session: 4 });
        assert_eq!(tl.take_due(5.0).len(), 1);
        assert!(tl.take_due(6.0).is_empty());
        assert!(tl.is_empty());
    }
}
