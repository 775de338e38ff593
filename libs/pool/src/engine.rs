//! Stream Engine
//!
//! Orchestrates the chunked-swap state machine. Per account the lifecycle
//! is `NoStream` → `StreamActive` → `NoStream`; there is no cancellation
//! path. `enter_swap` validates and opens a stream without moving reserves;
//! `process_stream` settles exactly one chunk per call: size it, quote it
//! against the live curve, apply the reserve deltas, advance the record.
//!
//! `process_stream` is callable for any account, not just the stream's
//! owner. Execution is decoupled from ownership so relayers or scheduled
//! keepers can advance streams; no trigger incentive is defined here.

use crate::config::{PoolConfig, DEFAULT_STREAM_COUNT};
use crate::error::PoolError;
use crate::ledger::{Balances, ReserveLedger};
use crate::store::{Stream, StreamStore};
use serde::{Deserialize, Serialize};
use streampool_amm::ConstantProduct;
use streampool_types::{AccountId, SwapDirection, TokenSide};
use tracing::{info, warn};

/// Read model of a live stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamView {
    pub total_amount: u128,
    pub amount_swapped: u128,
    pub stream_count: u32,
    pub next_chunk_index: u32,
}

impl From<&Stream> for StreamView {
    fn from(stream: &Stream) -> Self {
        Self {
            total_amount: stream.total_amount,
            amount_swapped: stream.amount_swapped,
            stream_count: stream.stream_count,
            next_chunk_index: stream.next_chunk_index,
        }
    }
}

/// What one successful `process_stream` call settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkReceipt {
    pub chunk_index: u32,
    pub amount_in: u128,
    pub amount_out: u128,
    /// True when this was the final chunk and the stream was deleted.
    pub completed: bool,
}

/// The pool: reserves, stream records, and the settlement logic between
/// them. Methods take `&self`; a serializing host can share the engine
/// behind an `Arc`.
pub struct StreamEngine {
    ledger: ReserveLedger,
    streams: StreamStore,
    stream_count: u32,
}

impl StreamEngine {
    pub fn new(config: PoolConfig) -> Self {
        let stream_count = if config.stream_count == 0 {
            warn!(
                "stream_count of 0 is not executable, falling back to {}",
                DEFAULT_STREAM_COUNT
            );
            DEFAULT_STREAM_COUNT
        } else {
            config.stream_count
        };

        info!(
            reserve_a = config.reserve_a,
            reserve_b = config.reserve_b,
            stream_count,
            "pool initialized"
        );

        Self {
            ledger: ReserveLedger::new(config.reserve_a, config.reserve_b),
            streams: StreamStore::new(),
            stream_count,
        }
    }

    /// Deposit token A for `account`, increasing reserve A.
    pub fn deposit_token_a(&self, account: AccountId, amount: u128) -> Result<(), PoolError> {
        self.ledger.deposit(account, TokenSide::A, amount)
    }

    /// Deposit token B for `account`, increasing reserve B.
    pub fn deposit_token_b(&self, account: AccountId, amount: u128) -> Result<(), PoolError> {
        self.ledger.deposit(account, TokenSide::B, amount)
    }

    /// Open a stream: commit `amount` to be swapped in `stream_count`
    /// chunks. No reserves move until the first chunk is processed.
    ///
    /// The liquidity gate here is deliberately coarse: it only rejects an
    /// exactly-zero destination reserve. A stream can still stall
    /// mid-flight with `InsufficientReserve` if reserves drain after
    /// creation; each chunk re-checks precisely at execution time.
    pub fn enter_swap(
        &self,
        account: AccountId,
        amount: u128,
        direction: SwapDirection,
    ) -> Result<(), PoolError> {
        if amount == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let output_side = direction.output_side();
        if self.ledger.available_liquidity(output_side) == 0 {
            return Err(PoolError::InsufficientLiquidity { side: output_side });
        }

        self.streams
            .create(account, amount, self.stream_count, direction)?;

        info!(
            %account,
            total_amount = amount,
            stream_count = self.stream_count,
            %direction,
            "swap stream opened"
        );
        Ok(())
    }

    /// Advance one chunk of `account`'s stream. Callable by any party.
    ///
    /// All-or-nothing: a failed quote or an uncoverable output leaves the
    /// reserves and the stream record exactly as they were; the caller may
    /// simply re-trigger later.
    pub fn process_stream(&self, account: AccountId) -> Result<ChunkReceipt, PoolError> {
        let stream = self
            .streams
            .get(&account)
            .ok_or(PoolError::NoActiveStream { account })?;

        let amount_in = stream.next_chunk_input();
        let (reserve_a, reserve_b) = self.ledger.reserves();
        let (reserve_in, reserve_out) = match stream.direction {
            SwapDirection::AToB => (reserve_a, reserve_b),
            SwapDirection::BToA => (reserve_b, reserve_a),
        };

        let amount_out = ConstantProduct::amount_out(amount_in, reserve_in, reserve_out)?;

        // Reserves first, then the record. The host serializes calls, so
        // nothing can observe or disturb the state between the two steps.
        self.ledger
            .apply_chunk(stream.direction, amount_in, amount_out)?;
        let progress = self.streams.advance(&account, amount_in)?;

        let receipt = ChunkReceipt {
            chunk_index: progress.next_chunk_index - 1,
            amount_in,
            amount_out,
            completed: progress.completed,
        };

        info!(
            %account,
            chunk_index = receipt.chunk_index,
            amount_in,
            amount_out,
            completed = receipt.completed,
            "stream chunk processed"
        );
        Ok(receipt)
    }

    /// Read a stream's progress; `None` signals no active stream. Hosts
    /// exposing a tuple-shaped read can map `None` to all zeroes.
    pub fn get_stream(&self, account: &AccountId) -> Option<StreamView> {
        self.streams.get(account).map(|stream| (&stream).into())
    }

    /// Current reserve for one side.
    pub fn available_liquidity(&self, side: TokenSide) -> u128 {
        self.ledger.available_liquidity(side)
    }

    /// Both reserves as `(reserve_a, reserve_b)`.
    pub fn reserves(&self) -> (u128, u128) {
        self.ledger.reserves()
    }

    /// Cumulative deposits recorded for an account.
    pub fn balance_of(&self, account: &AccountId) -> Balances {
        self.ledger.balance_of(account)
    }
}
