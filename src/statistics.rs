//! Statistics over recorded winning draws.
//!
//! Frequencies count each draw's six numbers and its bonus number with equal
//! weight. Ties for the most frequent number go to the lowest number.

use serde::Serialize;

use crate::constants::*;
use crate::prize_mechanics::prize_breakdown;
use crate::types::{HistoryEntry, PrizeBreakdown, PrizeTier, WinningDraw};

/// Occurrences of each number across `draws`, bonus numbers included.
/// Index = number; index 0 is unused.
pub fn number_frequencies<'a, I>(draws: I) -> [u32; NUMBER_POOL_SIZE + 1]
where
    I: IntoIterator<Item = &'a WinningDraw>,
{
    let mut freq = [0u32; NUMBER_POOL_SIZE + 1];
    for draw in draws {
        for &n in draw.numbers().numbers() {
            freq[n as usize] += 1;
        }
        freq[draw.bonus_number() as usize] += 1;
    }
    freq
}

/// Number with the highest count in a frequency table; lowest number on a tie.
/// `None` when every count is zero.
pub fn most_frequent_in(freq: &[u32; NUMBER_POOL_SIZE + 1]) -> Option<u8> {
    let mut best: Option<(u8, u32)> = None;
    for n in NUMBER_MIN..=NUMBER_MAX {
        let count = freq[n as usize];
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((n, count)),
        }
    }
    best.map(|(n, _)| n)
}

/// Most frequent number across `draws`; `None` when `draws` is empty.
pub fn most_frequent_number(draws: &[WinningDraw]) -> Option<u8> {
    most_frequent_in(&number_frequencies(draws))
}

// ── History aggregates ──────────────────────────────────────────────

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistoryStatistics {
    pub num_entries: usize,
    pub total_tickets: usize,
    pub total_spent: u64,
    pub prizes: Vec<TierTotal>,
    /// Only reported once [`MIN_HISTORY_FOR_STATISTICS`] entries exist.
    pub most_frequent_number: Option<u8>,
    pub min_entries_required: usize,
    /// `(number, count)` for every number drawn at least once, ascending.
    pub number_frequencies: Vec<NumberFrequency>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierTotal {
    pub tier: PrizeTier,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct NumberFrequency {
    pub number: u8,
    pub count: u32,
}

pub fn tier_totals(breakdown: &PrizeBreakdown) -> Vec<TierTotal> {
    breakdown
        .iter()
        .map(|(tier, count)| TierTotal {
            tier,
            label: tier.label(),
            count,
        })
        .collect()
}

/// Aggregate all recorded sessions.
pub fn history_statistics(entries: &[HistoryEntry]) -> HistoryStatistics {
    let mut prizes = PrizeBreakdown::default();
    let mut total_tickets = 0usize;
    for e in entries {
        prizes.merge(&prize_breakdown(&e.tickets, &e.winning_draw));
        total_tickets += e.tickets.len();
    }

    let freq = number_frequencies(entries.iter().map(|e| &e.winning_draw));
    let most_frequent_number = if entries.len() >= MIN_HISTORY_FOR_STATISTICS {
        most_frequent_in(&freq)
    } else {
        None
    };

    let number_frequencies = (NUMBER_MIN..=NUMBER_MAX)
        .filter(|&n| freq[n as usize] > 0)
        .map(|n| NumberFrequency {
            number: n,
            count: freq[n as usize],
        })
        .collect();

    HistoryStatistics {
        num_entries: entries.len(),
        total_tickets,
        total_spent: total_tickets as u64 * TICKET_PRICE,
        prizes: tier_totals(&prizes),
        most_frequent_number,
        min_entries_required: MIN_HISTORY_FOR_STATISTICS,
        number_frequencies,
    }
}
