//! Deferred round-end events
//!
//! A round that ends is not presented immediately: the final frame is left
//! on screen for a short delay first. Each pending event carries the round
//! it belongs to so a restart inside the delay cannot be ended by the old
//! round's timer.

use serde::{Deserialize, Serialize};

use super::physics::RoundSignal;

/// Pending end-of-round presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEnd {
    pub round: u32,
    pub due_ms: f64,
    pub outcome: RoundSignal,
}

impl RoundEnd {
    pub fn message(&self) -> &'static str {
        match self.outcome {
            RoundSignal::Won => "Congratulations! You win!",
            RoundSignal::Lost => "Game over!",
        }
    }
}

/// Queue of pending round-end events, kept ordered by due time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    pending: Vec<RoundEnd>,
}

impl Scheduler {
    pub fn schedule(&mut self, event: RoundEnd) {
        let at = self
            .pending
            .iter()
            .position(|e| e.due_ms > event.due_ms)
            .unwrap_or(self.pending.len());
        self.pending.insert(at, event);
    }

    /// Drop every pending event not belonging to `round`
    pub fn cancel_except(&mut self, round: u32) -> usize {
        let before = self.pending.len();
        self.pending.retain(|e| e.round == round);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Remove and return all events due at `now_ms`, earliest first
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<RoundEnd> {
        let split = self
            .pending
            .iter()
            .position(|e| e.due_ms > now_ms)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(round: u32, due_ms: f64) -> RoundEnd {
        RoundEnd {
            round,
            due_ms,
            outcome: RoundSignal::Lost,
        }
    }

    #[test]
    fn test_drains_only_due_in_order() {
        let mut s = Scheduler::default();
        s.schedule(end(2, 300.0));
        s.schedule(end(1, 100.0));
        s.schedule(end(3, 200.0));

        assert!(s.drain_due(50.0).is_empty());
        let due: Vec<u32> = s.drain_due(200.0).iter().map(|e| e.round).collect();
        assert_eq!(due, vec![1, 3]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_cancel_except_keeps_current_round() {
        let mut s = Scheduler::default();
        s.schedule(end(1, 100.0));
        s.schedule(end(2, 150.0));
        assert_eq!(s.cancel_except(2), 1);
        assert_eq!(s.drain_due(1000.0)[0].round, 2);
        assert!(s.is_empty());
    }

    #[test]
    fn test_messages() {
        let won = RoundEnd {
            outcome: RoundSignal::Won,
            ..end(1, 0.0)
        };
        assert_eq!(won.message(), "Congratulations! You win!");
        assert_eq!(end(1, 0.0).message(), "Game over!");
    }
}
