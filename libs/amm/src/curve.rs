//! Constant-product swap math with exact integer arithmetic
//!
//! All quotes are floored (truncation toward zero) so the computed output
//! never exceeds the paying reserve.

use thiserror::Error;

/// Degenerate curve inputs that upstream checks should have prevented.
///
/// These are surfaced to callers rather than swallowed: hitting one means
/// an internal invariant was violated somewhere above the curve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("output-side reserve is empty")]
    EmptyReserveOut,

    #[error("arithmetic overflow quoting {amount_in} against {reserve_in}/{reserve_out}")]
    Overflow {
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    },
}

/// Constant-product (x*y=k) pricing functions.
pub struct ConstantProduct;

impl ConstantProduct {
    /// Quote the output amount for a swap chunk against the live reserves.
    ///
    /// Implements `floor(amount_in * reserve_out / (reserve_in + amount_in))`
    /// with no fee term. A zero `amount_in` quotes zero: streams whose total
    /// is smaller than their chunk count execute zero-sized base chunks and
    /// settle everything in the final chunk.
    ///
    /// # Arguments
    /// * `amount_in` - Input token amount for this chunk
    /// * `reserve_in` - Reserve on the side being paid in
    /// * `reserve_out` - Reserve on the side paying out
    ///
    /// # Returns
    /// Floored output amount. Strictly less than `reserve_out` whenever
    /// `reserve_in > 0`; an empty input-side reserve quotes the whole
    /// output reserve, which is why the ledger re-checks coverage before
    /// applying a chunk.
    pub fn amount_out(
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, CurveError> {
        if reserve_out == 0 {
            return Err(CurveError::EmptyReserveOut);
        }
        if amount_in == 0 {
            return Ok(0);
        }

        // (x + dx) * (y - dy) = x * y  =>  dy = dx * y / (x + dx)
        let numerator = amount_in.checked_mul(reserve_out);
        let denominator = reserve_in.checked_add(amount_in);
        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => Ok(numerator / denominator),
            _ => Err(CurveError::Overflow {
                amount_in,
                reserve_in,
                reserve_out,
            }),
        }
    }

    /// The pool invariant `k = reserve_in * reserve_out`, if it fits the
    /// numeric domain. Used by property tests to check k never decreases.
    pub fn invariant(reserve_a: u128, reserve_b: u128) -> Option<u128> {
        reserve_a.checked_mul(reserve_b)
    }
}
