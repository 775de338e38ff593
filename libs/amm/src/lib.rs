//! # Streampool AMM Library - Constant-Product Pricing
//!
//! ## Purpose
//!
//! Pure pricing math for the streamed-swap pool. Implements the x*y=k
//! constant-product relation in exact integer arithmetic so that chunk
//! outputs are always floored and can never overdraw the paying reserve.
//!
//! ## Integration Points
//!
//! - **Input Sources**: live reserve pair from the pool ledger, chunk input
//!   size from the stream engine
//! - **Output Destinations**: the stream engine, which applies the quoted
//!   deltas to the ledger
//! - **Precision**: `u128` reserves, truncation toward zero (floor division)
//! - **Side effects**: none; every function here is pure

pub mod curve;

pub use curve::{ConstantProduct, CurveError};
