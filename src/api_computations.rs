//! Response views for the HTTP API, built from core types.
//!
//! Kept separate from `server` so the shapes can be unit-tested without a
//! router.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::*;
use crate::prize_mechanics::{count_matches, evaluate_prize, prize_breakdown};
use crate::session::{SessionPhase, SessionState};
use crate::statistics::{tier_totals, TierTotal};
use crate::types::{HistoryEntry, PrizeTier, Ticket, WinningDraw};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DrawView {
    pub numbers: [u8; NUMBERS_PER_TICKET],
    pub bonus_number: u8,
}

impl From<&WinningDraw> for DrawView {
    fn from(draw: &WinningDraw) -> Self {
        Self {
            numbers: *draw.numbers().numbers(),
            bonus_number: draw.bonus_number(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResultView {
    pub winning_draw: DrawView,
    pub prizes: Vec<TierTotal>,
    pub winners: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub ticket_count: usize,
    pub total_spent: u64,
    pub tickets: Vec<[u8; NUMBERS_PER_TICKET]>,
    pub result: Option<ResultView>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistoryEntryView {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub ticket_count: usize,
    pub tickets: Vec<[u8; NUMBERS_PER_TICKET]>,
    pub winning_draw: DrawView,
    pub prizes: Vec<TierTotal>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EvaluationView {
    pub ticket: [u8; NUMBERS_PER_TICKET],
    pub matches: usize,
    pub has_bonus: bool,
    pub tier: PrizeTier,
    pub rank: Option<u8>,
    pub label: &'static str,
}

fn ticket_numbers(tickets: &[Ticket]) -> Vec<[u8; NUMBERS_PER_TICKET]> {
    tickets.iter().map(|t| *t.numbers()).collect()
}

/// Winning draw plus per-tier counts for `tickets`.
pub fn compute_result_view(tickets: &[Ticket], draw: &WinningDraw) -> ResultView {
    let breakdown = prize_breakdown(tickets, draw);
    ResultView {
        winning_draw: draw.into(),
        prizes: tier_totals(&breakdown),
        winners: breakdown.winners(),
    }
}

pub fn compute_session_view(state: &SessionState) -> SessionView {
    SessionView {
        phase: state.phase(),
        ticket_count: state.tickets().len(),
        total_spent: state.total_spent(),
        tickets: ticket_numbers(state.tickets()),
        result: state
            .winning_draw()
            .map(|draw| compute_result_view(state.tickets(), draw)),
    }
}

pub fn compute_history_view(entries: &[HistoryEntry]) -> Vec<HistoryEntryView> {
    entries
        .iter()
        .map(|e| HistoryEntryView {
            id: e.id.clone(),
            created_at: e.created_at,
            ticket_count: e.tickets.len(),
            tickets: ticket_numbers(&e.tickets),
            winning_draw: (&e.winning_draw).into(),
            prizes: tier_totals(&prize_breakdown(&e.tickets, &e.winning_draw)),
        })
        .collect()
}

pub fn compute_evaluation(ticket: &Ticket, draw: &WinningDraw) -> EvaluationView {
    let tier = evaluate_prize(ticket, draw);
    EvaluationView {
        ticket: *ticket.numbers(),
        matches: count_matches(ticket, draw),
        has_bonus: ticket.contains(draw.bonus_number()),
        tier,
        rank: tier.rank(),
        label: tier.label(),
    }
}
