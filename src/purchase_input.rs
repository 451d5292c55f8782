//! Purchase amount validation: raw currency string → ticket count.
//!
//! Runs before the session is touched; the session itself only ever sees a
//! ticket count.

use crate::constants::{MAX_AMOUNT_DIGITS, TICKET_PRICE};
use crate::error::AmountError;

/// Parse a purchase amount such as `"5000"` into a number of tickets.
///
/// Accepts 1–7 ASCII digits forming a positive multiple of [`TICKET_PRICE`].
/// Surrounding whitespace is ignored.
pub fn parse_purchase_amount(input: &str) -> Result<usize, AmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AmountError::Empty);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::NotANumber);
    }
    if input.len() > MAX_AMOUNT_DIGITS {
        return Err(AmountError::TooLong);
    }

    let amount: u64 = input.parse().map_err(|_| AmountError::NotANumber)?;
    tickets_for_amount(amount)
}

/// Ticket count for an already numeric amount.
pub fn tickets_for_amount(amount: u64) -> Result<usize, AmountError> {
    if amount == 0 || amount % TICKET_PRICE != 0 {
        return Err(AmountError::NotMultipleOfPrice);
    }
    Ok((amount / TICKET_PRICE) as usize)
}
