//! Stream Store
//!
//! Owns the account → stream mapping. At most one live stream per account;
//! absence of a record is the terminal state signal, never a zeroed record.

use crate::error::PoolError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use streampool_types::{AccountId, SwapDirection};
use tracing::debug;

/// One in-flight chunked swap order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    /// Input amount committed at creation, > 0.
    pub total_amount: u128,
    /// Cumulative input consumed so far; reaches `total_amount` exactly at
    /// completion.
    pub amount_swapped: u128,
    /// Chunks this order is split into; fixed at creation.
    pub stream_count: u32,
    /// Next chunk to execute, in `[0, stream_count]`.
    pub next_chunk_index: u32,
    /// Swap direction, fixed at creation.
    pub direction: SwapDirection,
}

impl Stream {
    /// Input size of the chunk at `next_chunk_index`.
    ///
    /// Equal slices of `total_amount / stream_count`, except the final
    /// chunk takes everything not yet swapped so the cumulative total
    /// lands exactly on `total_amount`.
    pub fn next_chunk_input(&self) -> u128 {
        if self.next_chunk_index + 1 >= self.stream_count {
            self.total_amount - self.amount_swapped
        } else {
            self.total_amount / u128::from(self.stream_count)
        }
    }
}

/// Result of advancing a stream by one chunk.
#[derive(Debug, Clone, Copy)]
pub struct StreamProgress {
    pub amount_swapped: u128,
    pub next_chunk_index: u32,
    /// True when this advance hit `stream_count` and deleted the record.
    pub completed: bool,
}

/// Account-keyed stream records with exclusive ownership of their
/// lifecycle: create, per-chunk advance, terminal delete.
#[derive(Default)]
pub struct StreamStore {
    streams: DashMap<AccountId, Stream>,
}

impl StreamStore {
    pub fn new() -> Self {
        Self {
            streams: DashMap::new(),
        }
    }

    /// Read the current stream record, if one is live.
    pub fn get(&self, account: &AccountId) -> Option<Stream> {
        self.streams.get(account).map(|entry| entry.value().clone())
    }

    /// Number of live streams (diagnostics only).
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Create a stream for `account`. Rejects if one is already in flight.
    pub fn create(
        &self,
        account: AccountId,
        total_amount: u128,
        stream_count: u32,
        direction: SwapDirection,
    ) -> Result<(), PoolError> {
        match self.streams.entry(account) {
            Entry::Occupied(_) => Err(PoolError::StreamAlreadyActive { account }),
            Entry::Vacant(vacant) => {
                vacant.insert(Stream {
                    total_amount,
                    amount_swapped: 0,
                    stream_count,
                    next_chunk_index: 0,
                    direction,
                });
                debug!(%account, total_amount, stream_count, %direction, "stream created");
                Ok(())
            }
        }
    }

    /// Record one executed chunk: bump `amount_swapped` and
    /// `next_chunk_index`. When the index reaches `stream_count` the record
    /// is removed under the same entry lock, so no terminal state is ever
    /// observable.
    pub fn advance(
        &self,
        account: &AccountId,
        amount_consumed: u128,
    ) -> Result<StreamProgress, PoolError> {
        match self.streams.entry(*account) {
            Entry::Vacant(_) => Err(PoolError::NoActiveStream { account: *account }),
            Entry::Occupied(mut occupied) => {
                let stream = occupied.get_mut();
                stream.amount_swapped += amount_consumed;
                stream.next_chunk_index += 1;

                let progress = StreamProgress {
                    amount_swapped: stream.amount_swapped,
                    next_chunk_index: stream.next_chunk_index,
                    completed: stream.next_chunk_index == stream.stream_count,
                };
                if progress.completed {
                    occupied.remove();
                    debug!(%account, "stream completed and removed");
                }
                Ok(progress)
            }
        }
    }

    /// Remove a stream record. Idempotent.
    pub fn remove(&self, account: &AccountId) {
        self.streams.remove(account);
    }
}
