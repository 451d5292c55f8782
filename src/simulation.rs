//! Batch simulation: many independent purchase → reveal sessions.
//!
//! Session `i` uses `SmallRng::seed_from_u64(seed + i)`, so results are
//! reproducible for a given seed regardless of thread count.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::constants::*;
use crate::session::SessionState;
use crate::statistics::{most_frequent_in, number_frequencies, tier_totals, TierTotal};
use crate::types::{PrizeBreakdown, PrizeTier, WinningDraw};

/// Outcome of one simulated session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOutcome {
    pub breakdown: PrizeBreakdown,
    pub winning_draw: WinningDraw,
}

/// Play one session: buy `tickets` tickets, reveal, tally.
///
/// Returns `None` only when `tickets == 0` (nothing to reveal against).
pub fn simulate_session(rng: &mut SmallRng, tickets: usize) -> Option<SessionOutcome> {
    let mut session = SessionState::new();
    session.purchase(rng, tickets);
    let winning_draw = *session.reveal(rng)?;
    let breakdown = session.prize_breakdown()?;
    Some(SessionOutcome {
        breakdown,
        winning_draw,
    })
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationResult {
    pub num_sessions: usize,
    pub tickets_per_session: usize,
    pub seed: u64,
    pub total_tickets: usize,
    pub total_spent: u64,
    pub prizes: Vec<TierTotal>,
    pub tier_rates: Vec<TierRate>,
    pub most_frequent_number: Option<u8>,
    #[serde(skip)]
    pub breakdown: PrizeBreakdown,
    #[serde(skip)]
    pub elapsed: Duration,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct TierRate {
    pub tier: PrizeTier,
    /// Fraction of all simulated tickets landing in this tier.
    pub rate: f64,
}

/// Simulate `num_sessions` sessions in parallel.
pub fn simulate_batch(num_sessions: usize, tickets_per_session: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let outcomes: Vec<SessionOutcome> = (0..num_sessions)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_session(&mut rng, tickets_per_session)
        })
        .collect();

    let elapsed = start.elapsed();

    let mut breakdown = PrizeBreakdown::default();
    for o in &outcomes {
        breakdown.merge(&o.breakdown);
    }
    let freq = number_frequencies(outcomes.iter().map(|o| &o.winning_draw));

    let total_tickets = breakdown.total();
    let tier_rates = breakdown
        .iter()
        .map(|(tier, count)| TierRate {
            tier,
            rate: if total_tickets > 0 {
                count as f64 / total_tickets as f64
            } else {
                0.0
            },
        })
        .collect();

    SimulationResult {
        num_sessions,
        tickets_per_session,
        seed,
        total_tickets,
        total_spent: total_tickets as u64 * TICKET_PRICE,
        prizes: tier_totals(&breakdown),
        tier_rates,
        most_frequent_number: most_frequent_in(&freq),
        breakdown,
        elapsed,
    }
}

/// Write a simulation result as pretty JSON, creating parent directories.
pub fn save_statistics(result: &SimulationResult, path: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_session_counts() {
        let mut rng = SmallRng::seed_from_u64(3);
        let o = simulate_session(&mut rng, 20).unwrap();
        assert_eq!(o.breakdown.total(), 20);
        assert!(!o.winning_draw.numbers().contains(o.winning_draw.bonus_number()));
    }

    #[test]
    fn test_simulate_session_no_tickets() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(simulate_session(&mut rng, 0).is_none());
    }

    #[test]
    fn test_simulate_batch_totals() {
        let r = simulate_batch(200, 5, 42);
        assert_eq!(r.total_tickets, 1000);
        assert_eq!(r.total_spent, 1_000_000);
        assert_eq!(r.prizes.len(), PRIZE_TIER_COUNT);
        let rate_sum: f64 = r.tier_rates.iter().map(|t| t.rate).sum();
        assert!((rate_sum - 1.0).abs() < 1e-9);
        assert!(r.most_frequent_number.is_some());
    }

    #[test]
    fn test_simulate_batch_deterministic() {
        let a = simulate_batch(100, 3, 7);
        let b = simulate_batch(100, 3, 7);
        assert_eq!(a.breakdown, b.breakdown);
        assert_eq!(a.most_frequent_number, b.most_frequent_number);
    }

    #[test]
    fn test_batch_most_frequent_agrees_with_statistics() {
        let seed = 11;
        let draws: Vec<WinningDraw> = (0..50u64)
            .filter_map(|i| {
                let mut rng = SmallRng::seed_from_u64(seed + i);
                simulate_session(&mut rng, 4).map(|o| o.winning_draw)
            })
            .collect();
        let r = simulate_batch(50, 4, seed);
        assert_eq!(
            r.most_frequent_number,
            crate::statistics::most_frequent_number(&draws)
        );
    }

    #[test]
    fn test_mostly_losing_tickets() {
        // P(no prize) ≈ 0.9755 per ticket.
        let r = simulate_batch(2000, 10, 1);
        let none_rate = r.breakdown.get(PrizeTier::None) as f64 / r.total_tickets as f64;
        assert!(none_rate > 0.95 && none_rate < 0.99, "none_rate={none_rate}");
    }

    #[test]
    fn test_save_statistics() {
        let path = std::env::temp_dir().join(format!("lotto_sim_{}.json", uuid::Uuid::new_v4()));
        let path = path.to_str().unwrap().to_string();
        let r = simulate_batch(10, 2, 5);
        save_statistics(&r, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["num_sessions"], 10);
        assert_eq!(json["total_tickets"], 20);
        assert!(json.get("elapsed").is_none());

        let _ = std::fs::remove_file(&path);
    }
}
