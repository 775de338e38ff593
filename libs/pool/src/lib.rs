//! # Streampool Pool Engine
//!
//! Single-pool AMM that executes large swaps incrementally. A swap order is
//! split into a fixed number of equal chunks (a "stream") and advanced one
//! chunk per explicit trigger call, each chunk priced against the live
//! constant-product curve. This crate owns the pool reserves, the
//! per-account stream records, and the orchestration between them.
//!
//! ## Architecture Role
//!
//! - [`ReserveLedger`] owns the two reserves and per-depositor balances and
//!   is the only component that mutates reserve totals.
//! - [`StreamStore`] owns the account → stream mapping (at most one live
//!   stream per account; absence is the terminal state).
//! - [`StreamEngine`] validates and opens streams, and settles one chunk
//!   per trigger: size the chunk, quote it against the curve, apply the
//!   reserve deltas, advance or delete the record.
//!
//! Every public operation is atomic all-or-nothing: a failed call leaves no
//! observable state change. The engine has no internal concurrency; it is a
//! logic module driven by a hosting environment that serializes calls.
//! `process_stream` is deliberately callable for any account, enabling
//! keeper-style third-party advancement.

pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod store;

pub use config::{PoolConfig, DEFAULT_STREAM_COUNT};
pub use engine::{ChunkReceipt, StreamEngine, StreamView};
pub use error::PoolError;
pub use ledger::{Balances, ReserveLedger};
pub use store::{Stream, StreamProgress, StreamStore};

pub use streampool_types::{AccountId, SwapDirection, TokenSide};
