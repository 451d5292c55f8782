//! Prize rules: tier for one ticket, and per-tier counts for a batch.

use crate::types::{PrizeBreakdown, PrizeTier, Ticket, WinningDraw};

/// Number of ticket numbers that appear among the six winning numbers.
#[inline(always)]
pub fn count_matches(ticket: &Ticket, draw: &WinningDraw) -> usize {
    ticket
        .numbers()
        .iter()
        .filter(|&&n| draw.numbers().contains(n))
        .count()
}

/// Prize tier for `ticket` against `draw`.
///
/// | matches | bonus | tier |
/// |---------|-------|------|
/// | 6 | – | First |
/// | 5 | yes | Second |
/// | 5 | no | Third |
/// | 4 | – | Fourth |
/// | 3 | – | Fifth |
/// | ≤2 | – | None |
pub fn evaluate_prize(ticket: &Ticket, draw: &WinningDraw) -> PrizeTier {
    let has_bonus = ticket.contains(draw.bonus_number());
    match count_matches(ticket, draw) {
        6 => PrizeTier::First,
        5 if has_bonus => PrizeTier::Second,
        5 => PrizeTier::Third,
        4 => PrizeTier::Fourth,
        3 => PrizeTier::Fifth,
        _ => PrizeTier::None,
    }
}

/// Count of tickets whose prize tier equals `tier`.
pub fn count_by_tier(tickets: &[Ticket], draw: &WinningDraw, tier: PrizeTier) -> usize {
    tickets
        .iter()
        .filter(|t| evaluate_prize(t, draw) == tier)
        .count()
}

/// All six tier counts in a single pass. Same result as calling
/// [`count_by_tier`] once per tier.
pub fn prize_breakdown(tickets: &[Ticket], draw: &WinningDraw) -> PrizeBreakdown {
    let mut breakdown = PrizeBreakdown::default();
    for t in tickets {
        breakdown.record(evaluate_prize(t, draw));
    }
    breakdown
}
