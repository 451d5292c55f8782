//! Lotto constants.
//!
//! - Number pool: [`NUMBER_MIN`]..=[`NUMBER_MAX`] = 1..=45
//! - Ticket size: [`NUMBERS_PER_TICKET`] = 6 distinct numbers
//! - Ticket price: [`TICKET_PRICE`] = 1000 currency units
//! - History capacity: [`MAX_HISTORY_COUNT`] = 100 entries

/// Smallest number that can be drawn.
pub const NUMBER_MIN: u8 = 1;

/// Largest number that can be drawn.
pub const NUMBER_MAX: u8 = 45;

/// Size of the number pool (45).
pub const NUMBER_POOL_SIZE: usize = NUMBER_MAX as usize;

/// Numbers on one ticket (and in the main part of a winning draw).
pub const NUMBERS_PER_TICKET: usize = 6;

/// Price of a single ticket. Purchase amounts must be a multiple of this.
pub const TICKET_PRICE: u64 = 1000;

/// Longest accepted purchase amount string (7 digits, i.e. up to 9,999,000).
pub const MAX_AMOUNT_DIGITS: usize = 7;

/// Number of prize tiers, including the no-prize tier.
pub const PRIZE_TIER_COUNT: usize = 6;

/// Maximum number of history entries retained, most recent first.
pub const MAX_HISTORY_COUNT: usize = 100;

/// History entries required before the most frequent number is reported.
pub const MIN_HISTORY_FOR_STATISTICS: usize = 3;

/// Storage key for the persisted history; the file is `<dir>/<key>.json`.
pub const HISTORY_STORAGE_KEY: &str = "lottoHistory";

/// Default directory holding the history file.
pub const DEFAULT_HISTORY_DIR: &str = "data";

/// Test whether `n` lies in the number pool.
#[inline(always)]
pub fn is_valid_number(n: u8) -> bool {
    (NUMBER_MIN..=NUMBER_MAX).contains(&n)
}
