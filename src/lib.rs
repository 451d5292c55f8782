//! # Lotto: lottery number simulator
//!
//! A user buys tickets (6 distinct numbers from 1..=45, 1000 per ticket), a
//! winning draw of 6 numbers plus a bonus number is revealed, and every
//! ticket is graded into a prize tier. Revealed sessions are kept in a
//! bounded history (100 entries) that feeds simple statistics.
//!
//! | Module | Role |
//! |--------|------|
//! | [`number_mechanics`] | Random numbers, tickets, winning draws |
//! | [`prize_mechanics`] | Tier for one ticket, tier counts for a batch |
//! | [`storage`] | Bounded JSON history, fail-soft reads |
//! | [`statistics`] | Most frequent number, history aggregates |
//! | [`session`] | Purchase → reveal → reset state machine |
//! | [`purchase_input`] | Currency amount → ticket count validation |
//! | [`simulation`] | Parallel batch of independent sessions |
//! | [`server`] | HTTP API over one live session |
//!
//! ## Prize tiers
//!
//! | Tier | Condition |
//! |------|-----------|
//! | First | 6 matches |
//! | Second | 5 matches + bonus |
//! | Third | 5 matches |
//! | Fourth | 4 matches |
//! | Fifth | 3 matches |
//! | None | ≤ 2 matches |

pub mod api_computations;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod number_mechanics;
pub mod prize_mechanics;
pub mod purchase_input;
pub mod server;
pub mod session;
pub mod simulation;
pub mod statistics;
pub mod storage;
pub mod types;
