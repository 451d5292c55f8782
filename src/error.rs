//! Error types.
//!
//! Generation, evaluation and aggregation never fail. Errors only arise when
//! numbers or amounts come from outside (API requests, the history file).

use thiserror::Error;

/// Rejected ticket or winning-draw numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("a ticket needs exactly 6 numbers, got {0}")]
    WrongLength(usize),
    #[error("number {0} is outside 1..=45")]
    OutOfRange(u8),
    #[error("number {0} appears more than once")]
    Duplicate(u8),
}

/// Rejected purchase amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount must contain digits only")]
    NotANumber,
    #[error("amount may have at most 7 digits")]
    TooLong,
    #[error("amount must be a positive multiple of 1000")]
    NotMultipleOfPrice,
}

/// Why the persisted history could not be read.
#[derive(Debug, Error)]
pub enum ReadFault {
    #[error("history file not found")]
    Missing,
    #[error("failed to read history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed history file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Why the history could not be written back.
#[derive(Debug, Error)]
pub enum WriteFault {
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write history file: {0}")]
    Io(#[from] std::io::Error),
}
