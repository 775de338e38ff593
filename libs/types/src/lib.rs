//! # Streampool Shared Types
//!
//! Identity and direction primitives shared by the pool engine and the
//! pricing curve. Accounts are identified by 20-byte addresses supplied by
//! the hosting execution environment; the pool never inspects them beyond
//! equality and map keying.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing an [`AccountId`] out of its hex form.
#[derive(Debug, Error)]
pub enum AccountIdError {
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected 20 bytes, got {0}")]
    WrongLength(usize),
}

/// Address-like depositor identity (full 20 bytes, no truncation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, AccountIdError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let len = bytes.len();
        let raw: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AccountIdError::WrongLength(len))?;
        Ok(Self(raw))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for AccountId {
    fn from(raw: [u8; 20]) -> Self {
        Self(raw)
    }
}

/// One side of the pool's token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSide {
    A,
    B,
}

impl TokenSide {
    pub fn other(self) -> Self {
        match self {
            TokenSide::A => TokenSide::B,
            TokenSide::B => TokenSide::A,
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSide::A => write!(f, "A"),
            TokenSide::B => write!(f, "B"),
        }
    }
}

/// Direction of a streamed swap, fixed at stream creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    AToB,
    BToA,
}

impl SwapDirection {
    /// Side whose reserve grows as chunks execute.
    pub fn input_side(self) -> TokenSide {
        match self {
            SwapDirection::AToB => TokenSide::A,
            SwapDirection::BToA => TokenSide::B,
        }
    }

    /// Side whose reserve pays out as chunks execute.
    pub fn output_side(self) -> TokenSide {
        self.input_side().other()
    }

    /// Maps the host-facing boolean calling convention (`true` = A→B).
    pub fn from_a_to_b(a_to_b: bool) -> Self {
        if a_to_b {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::AToB => write!(f, "A->B"),
            SwapDirection::BToA => write!(f, "B->A"),
        }
    }
}
