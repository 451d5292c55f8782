//! Property-based tests for ticket generation, prize rules and statistics.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use lotto::number_mechanics::{generate_ticket, generate_winning_draw};
use lotto::prize_mechanics::{count_by_tier, count_matches, evaluate_prize, prize_breakdown};
use lotto::session::{SessionPhase, SessionState};
use lotto::statistics::{most_frequent_number, number_frequencies};
use lotto::types::{PrizeTier, Ticket, WinningDraw};

/// Strategy: 6 distinct numbers from 1..=45 in arbitrary order.
fn ticket_numbers_strategy() -> impl Strategy<Value = Vec<u8>> {
    Just((1u8..=45).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|v| v[..6].to_vec())
}

fn ticket_strategy() -> impl Strategy<Value = Ticket> {
    ticket_numbers_strategy().prop_map(|v| Ticket::new(&v).unwrap())
}

/// Strategy: 7 distinct numbers → 6 winning numbers + bonus.
fn draw_strategy() -> impl Strategy<Value = WinningDraw> {
    Just((1u8..=45).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|v| WinningDraw::new(Ticket::new(&v[..6]).unwrap(), v[6]).unwrap())
}

proptest! {
    // 1. Generated tickets uphold the invariant for any seed
    #[test]
    fn generated_ticket_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let t = generate_ticket(&mut rng);
        let n = t.numbers();
        prop_assert!(n.windows(2).all(|w| w[0] < w[1]), "n={n:?}");
        prop_assert!(n.iter().all(|&x| (1..=45).contains(&x)), "n={n:?}");
    }

    // 2. Generated draws: bonus in range and outside the six numbers
    #[test]
    fn generated_draw_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let d = generate_winning_draw(&mut rng);
        prop_assert!((1..=45).contains(&d.bonus_number()));
        prop_assert!(!d.numbers().contains(d.bonus_number()));
        prop_assert!(d.numbers().numbers().windows(2).all(|w| w[0] < w[1]));
    }

    // 3. Ticket::new is order-insensitive
    #[test]
    fn ticket_new_order_insensitive(numbers in ticket_numbers_strategy()) {
        let mut reversed = numbers.clone();
        reversed.reverse();
        prop_assert_eq!(Ticket::new(&numbers).unwrap(), Ticket::new(&reversed).unwrap());
    }

    // 4. Evaluation is deterministic
    #[test]
    fn evaluate_deterministic(t in ticket_strategy(), d in draw_strategy()) {
        prop_assert_eq!(evaluate_prize(&t, &d), evaluate_prize(&t, &d));
    }

    // 5. Tier agrees with the match count
    #[test]
    fn tier_consistent_with_matches(t in ticket_strategy(), d in draw_strategy()) {
        let m = count_matches(&t, &d);
        let tier = evaluate_prize(&t, &d);
        match tier {
            PrizeTier::First => {
                prop_assert_eq!(m, 6);
            }
            PrizeTier::Second => {
                prop_assert_eq!(m, 5);
                prop_assert!(t.contains(d.bonus_number()));
            }
            PrizeTier::Third => {
                prop_assert_eq!(m, 5);
                prop_assert!(!t.contains(d.bonus_number()));
            }
            PrizeTier::Fourth => {
                prop_assert_eq!(m, 4);
            }
            PrizeTier::Fifth => {
                prop_assert_eq!(m, 3);
            }
            PrizeTier::None => {
                prop_assert!(m <= 2);
            }
        }
    }

    // 6. A draw's own numbers always win First
    #[test]
    fn draw_numbers_win_first(d in draw_strategy()) {
        prop_assert_eq!(evaluate_prize(d.numbers(), &d), PrizeTier::First);
    }

    // 7. Single-pass breakdown equals per-tier counts, and sums to the batch size
    #[test]
    fn breakdown_matches_count_by_tier(
        tickets in prop::collection::vec(ticket_strategy(), 0..40),
        d in draw_strategy(),
    ) {
        let b = prize_breakdown(&tickets, &d);
        for tier in PrizeTier::ALL {
            prop_assert_eq!(b.get(tier), count_by_tier(&tickets, &d, tier));
        }
        prop_assert_eq!(b.total(), tickets.len());
    }

    // 8. Most frequent number has the maximum count and is the lowest such number
    #[test]
    fn most_frequent_is_lowest_max(draws in prop::collection::vec(draw_strategy(), 1..20)) {
        let freq = number_frequencies(&draws);
        let n = most_frequent_number(&draws).unwrap();
        let max = *freq.iter().max().unwrap();
        prop_assert_eq!(freq[n as usize], max);
        prop_assert!(freq[1..n as usize].iter().all(|&c| c < max));
        prop_assert_eq!(freq.iter().sum::<u32>() as usize, draws.len() * 7);
    }

    // 9. Reset always returns to Empty
    #[test]
    fn reset_from_any_phase(seed in any::<u64>(), buys in 0usize..5, reveal in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut s = SessionState::new();
        s.purchase(&mut rng, buys);
        if reveal {
            s.reveal(&mut rng);
        }
        s.reset();
        prop_assert_eq!(s.phase(), SessionPhase::Empty);
        prop_assert!(s.tickets().is_empty());
        prop_assert!(s.winning_draw().is_none());
    }
}
