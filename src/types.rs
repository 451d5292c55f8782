use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::TicketError;

/// One lotto ticket: 6 distinct numbers in 1..=45, ascending.
///
/// The only ways to obtain a `Ticket` are [`Ticket::new`] (validates and sorts)
/// and the generators in [`crate::number_mechanics`], so every value upholds
/// the invariant. Serialized as a plain 6-element array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "[u8; NUMBERS_PER_TICKET]")]
pub struct Ticket([u8; NUMBERS_PER_TICKET]);

impl Ticket {
    /// Validate caller-supplied numbers and sort them ascending.
    pub fn new(numbers: &[u8]) -> Result<Self, TicketError> {
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(TicketError::WrongLength(numbers.len()));
        }
        let mut sorted = [0u8; NUMBERS_PER_TICKET];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();

        for (i, &n) in sorted.iter().enumerate() {
            if !is_valid_number(n) {
                return Err(TicketError::OutOfRange(n));
            }
            if i > 0 && sorted[i - 1] == n {
                return Err(TicketError::Duplicate(n));
            }
        }
        Ok(Self(sorted))
    }

    /// Build from numbers already known to be distinct, in range and sorted.
    pub(crate) fn from_sorted_unchecked(numbers: [u8; NUMBERS_PER_TICKET]) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self(numbers)
    }

    #[inline(always)]
    pub fn numbers(&self) -> &[u8; NUMBERS_PER_TICKET] {
        &self.0
    }

    /// Membership test; binary search since numbers are sorted.
    #[inline(always)]
    pub fn contains(&self, n: u8) -> bool {
        self.0.binary_search(&n).is_ok()
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = TicketError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Ticket::new(&numbers)
    }
}

impl From<Ticket> for [u8; NUMBERS_PER_TICKET] {
    fn from(ticket: Ticket) -> Self {
        ticket.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Six winning numbers plus a bonus number.
///
/// Generated draws keep the bonus outside the six numbers, but a draw read
/// back from history or supplied by a caller only needs the bonus in range.
/// Field names follow the persisted history layout (`numbers`, `bonusNumber`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWinningDraw")]
pub struct WinningDraw {
    numbers: Ticket,
    bonus_number: u8,
}

/// Unvalidated wire form of a [`WinningDraw`], checked on conversion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWinningDraw {
    numbers: Ticket,
    bonus_number: u8,
}

impl WinningDraw {
    /// Only the bonus range is checked; it may repeat one of `numbers`.
    pub fn new(numbers: Ticket, bonus_number: u8) -> Result<Self, TicketError> {
        if !is_valid_number(bonus_number) {
            return Err(TicketError::OutOfRange(bonus_number));
        }
        Ok(Self {
            numbers,
            bonus_number,
        })
    }

    /// Build from a bonus number already known to be in range.
    pub(crate) fn from_parts_unchecked(numbers: Ticket, bonus_number: u8) -> Self {
        debug_assert!(is_valid_number(bonus_number));
        Self {
            numbers,
            bonus_number,
        }
    }

    #[inline(always)]
    pub fn numbers(&self) -> &Ticket {
        &self.numbers
    }

    #[inline(always)]
    pub fn bonus_number(&self) -> u8 {
        self.bonus_number
    }
}

impl TryFrom<RawWinningDraw> for WinningDraw {
    type Error = TicketError;

    fn try_from(raw: RawWinningDraw) -> Result<Self, Self::Error> {
        WinningDraw::new(raw.numbers, raw.bonus_number)
    }
}

impl fmt::Display for WinningDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.numbers, self.bonus_number)
    }
}

/// Outcome of comparing one ticket against a winning draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeTier {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    None,
}

impl PrizeTier {
    /// All tiers, best first. Index in this array is [`PrizeTier::index`].
    pub const ALL: [PrizeTier; PRIZE_TIER_COUNT] = [
        PrizeTier::First,
        PrizeTier::Second,
        PrizeTier::Third,
        PrizeTier::Fourth,
        PrizeTier::Fifth,
        PrizeTier::None,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based rank for winning tiers, `None` for the no-prize tier.
    pub fn rank(self) -> Option<u8> {
        match self {
            PrizeTier::None => None,
            tier => Some(tier.index() as u8 + 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrizeTier::First => "1st prize",
            PrizeTier::Second => "2nd prize",
            PrizeTier::Third => "3rd prize",
            PrizeTier::Fourth => "4th prize",
            PrizeTier::Fifth => "5th prize",
            PrizeTier::None => "No prize",
        }
    }
}

/// Ticket counts per prize tier, indexed by [`PrizeTier::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrizeBreakdown {
    pub counts: [usize; PRIZE_TIER_COUNT],
}

impl PrizeBreakdown {
    #[inline(always)]
    pub fn get(&self, tier: PrizeTier) -> usize {
        self.counts[tier.index()]
    }

    #[inline(always)]
    pub fn record(&mut self, tier: PrizeTier) {
        self.counts[tier.index()] += 1;
    }

    /// Add another breakdown into this one.
    pub fn merge(&mut self, other: &PrizeBreakdown) {
        for (c, o) in self.counts.iter_mut().zip(other.counts.iter()) {
            *c += o;
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Tickets that won anything.
    pub fn winners(&self) -> usize {
        self.total() - self.get(PrizeTier::None)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrizeTier, usize)> + '_ {
        PrizeTier::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

/// One recorded session: its tickets, the draw they were checked against, and
/// when it was recorded. Serialized with the persisted history layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub tickets: Vec<Ticket>,
    pub winning_draw: WinningDraw,
    pub created_at: DateTime<Utc>,
}
