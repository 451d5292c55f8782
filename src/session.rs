//! Purchase → reveal → reset lifecycle for one user session.
//!
//! | Phase | tickets | winning draw |
//! |-------|---------|--------------|
//! | Empty | none | none |
//! | Purchased | ≥1 | none |
//! | Revealed | ≥1 | some |
//!
//! The phase is derived from the data, so it can never disagree with it.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::constants::TICKET_PRICE;
use crate::number_mechanics::{generate_tickets, generate_winning_draw};
use crate::prize_mechanics::prize_breakdown;
use crate::types::{HistoryEntry, PrizeBreakdown, Ticket, WinningDraw};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Empty,
    Purchased,
    Revealed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    tickets: Vec<Ticket>,
    winning_draw: Option<WinningDraw>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.tickets.is_empty(), self.winning_draw.is_some()) {
            (true, _) => SessionPhase::Empty,
            (false, false) => SessionPhase::Purchased,
            (false, true) => SessionPhase::Revealed,
        }
    }

    /// Tickets in purchase order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn winning_draw(&self) -> Option<&WinningDraw> {
        self.winning_draw.as_ref()
    }

    pub fn total_spent(&self) -> u64 {
        self.tickets.len() as u64 * TICKET_PRICE
    }

    /// Buy `count` more tickets, appended after any already held.
    /// A revealed draw is kept and then covers the new tickets too.
    pub fn purchase<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.tickets.extend(generate_tickets(rng, count));
    }

    /// Draw the winning numbers, replacing any earlier draw.
    /// Does nothing without tickets.
    pub fn reveal<R: Rng>(&mut self, rng: &mut R) -> Option<&WinningDraw> {
        if self.tickets.is_empty() {
            return None;
        }
        self.winning_draw = Some(generate_winning_draw(rng));
        self.winning_draw.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Per-tier counts for the current tickets, once revealed.
    pub fn prize_breakdown(&self) -> Option<PrizeBreakdown> {
        self.winning_draw
            .as_ref()
            .map(|draw| prize_breakdown(&self.tickets, draw))
    }

    /// Snapshot of a revealed session for the history store.
    pub fn history_entry(&self, id: String, created_at: DateTime<Utc>) -> Option<HistoryEntry> {
        let winning_draw = self.winning_draw?;
        Some(HistoryEntry {
            id,
            tickets: self.tickets.clone(),
            winning_draw,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrizeTier;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_initial_state_empty() {
        let s = SessionState::new();
        assert_eq!(s.phase(), SessionPhase::Empty);
        assert!(s.tickets().is_empty());
        assert!(s.winning_draw().is_none());
        assert_eq!(s.total_spent(), 0);
    }

    #[test]
    fn test_purchase_appends() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 3);
        assert_eq!(s.phase(), SessionPhase::Purchased);
        let first = s.tickets().to_vec();

        s.purchase(&mut r, 2);
        assert_eq!(s.tickets().len(), 5);
        assert_eq!(&s.tickets()[..3], first.as_slice());
        assert_eq!(s.total_spent(), 5000);
    }

    #[test]
    fn test_purchase_zero_is_noop() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 0);
        assert_eq!(s, SessionState::new());
    }

    #[test]
    fn test_reveal_requires_tickets() {
        let mut r = rng();
        let mut s = SessionState::new();
        assert!(s.reveal(&mut r).is_none());
        assert_eq!(s.phase(), SessionPhase::Empty);
        assert!(s.prize_breakdown().is_none());
    }

    #[test]
    fn test_reveal_and_breakdown() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 10);
        let draw = *s.reveal(&mut r).unwrap();
        assert_eq!(s.phase(), SessionPhase::Revealed);
        assert_eq!(s.winning_draw(), Some(&draw));

        let b = s.prize_breakdown().unwrap();
        assert_eq!(b.total(), 10);
        assert!(b.get(PrizeTier::None) <= 10);
    }

    #[test]
    fn test_rereveal_replaces_draw() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 1);
        let mut draws = Vec::new();
        for _ in 0..5 {
            draws.push(*s.reveal(&mut r).unwrap());
        }
        assert_eq!(s.phase(), SessionPhase::Revealed);
        assert_eq!(s.winning_draw(), draws.last());
        assert_eq!(s.tickets().len(), 1);
        // Five seeded draws are not all identical.
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut r = rng();

        let mut empty = SessionState::new();
        empty.reset();
        assert_eq!(empty.phase(), SessionPhase::Empty);

        let mut purchased = SessionState::new();
        purchased.purchase(&mut r, 4);
        purchased.reset();
        assert_eq!(purchased.phase(), SessionPhase::Empty);
        assert!(purchased.tickets().is_empty());

        let mut revealed = SessionState::new();
        revealed.purchase(&mut r, 4);
        revealed.reveal(&mut r);
        revealed.reset();
        assert_eq!(revealed, SessionState::new());
        assert!(revealed.winning_draw().is_none());
    }

    #[test]
    fn test_purchase_after_reveal_keeps_draw() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 1);
        let draw = *s.reveal(&mut r).unwrap();
        s.purchase(&mut r, 2);
        assert_eq!(s.phase(), SessionPhase::Revealed);
        assert_eq!(s.winning_draw(), Some(&draw));
        assert_eq!(s.prize_breakdown().unwrap().total(), 3);
    }

    #[test]
    fn test_history_entry_only_when_revealed() {
        let mut r = rng();
        let mut s = SessionState::new();
        s.purchase(&mut r, 2);
        assert!(s.history_entry("id".into(), Utc::now()).is_none());

        s.reveal(&mut r);
        let entry = s.history_entry("id-1".into(), Utc::now()).unwrap();
        assert_eq!(entry.id, "id-1");
        assert_eq!(entry.tickets, s.tickets());
        assert_eq!(Some(&entry.winning_draw), s.winning_draw());
    }
}
