//! Random number generation for tickets and winning draws.
//!
//! All generators take the RNG by reference so callers decide between a
//! seeded `SmallRng` (simulation, tests) and an OS-seeded one (server).

use std::collections::BTreeSet;

use rand::Rng;

use crate::constants::*;
use crate::types::{Ticket, WinningDraw};

/// Pick one number uniformly from 1..=45.
#[inline(always)]
pub fn pick_number<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(NUMBER_MIN..=NUMBER_MAX)
}

/// Draw until 6 distinct numbers are collected, then return them ascending.
///
/// Expected draws ≈ 6.4 for a 45-number pool; no retry cap is needed.
pub fn generate_ticket<R: Rng>(rng: &mut R) -> Ticket {
    let mut picked = BTreeSet::new();
    while picked.len() < NUMBERS_PER_TICKET {
        picked.insert(pick_number(rng));
    }

    let mut numbers = [0u8; NUMBERS_PER_TICKET];
    for (slot, n) in numbers.iter_mut().zip(picked) {
        *slot = n;
    }
    Ticket::from_sorted_unchecked(numbers)
}

/// Generate `count` independent tickets in purchase order.
pub fn generate_tickets<R: Rng>(rng: &mut R, count: usize) -> Vec<Ticket> {
    (0..count).map(|_| generate_ticket(rng)).collect()
}

/// Generate a winning draw: six numbers plus a bonus number outside them.
pub fn generate_winning_draw<R: Rng>(rng: &mut R) -> WinningDraw {
    let numbers = generate_ticket(rng);
    let mut bonus = pick_number(rng);
    while numbers.contains(bonus) {
        bonus = pick_number(rng);
    }
    WinningDraw::from_parts_unchecked(numbers, bonus)
}
