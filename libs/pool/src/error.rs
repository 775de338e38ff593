//! Pool operation errors
//!
//! All variants are terminal for the triggering call: nothing was mutated
//! when one of these is returned.

use streampool_amm::CurveError;
use streampool_types::{AccountId, TokenSide};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient liquidity in reserve {side}")]
    InsufficientLiquidity { side: TokenSide },

    #[error("no active stream for {account}")]
    NoActiveStream { account: AccountId },

    #[error("reserve {side} cannot cover quoted output: need {needed}, have {available}")]
    InsufficientReserve {
        side: TokenSide,
        needed: u128,
        available: u128,
    },

    #[error("stream already active for {account}")]
    StreamAlreadyActive { account: AccountId },

    #[error("invalid quote: {0}")]
    InvalidQuote(#[from] CurveError),
}
