//! Reserve Ledger
//!
//! Owns the two pool reserves and per-depositor balances. The only
//! component permitted to mutate reserve totals: deposits increment one
//! side, chunk settlement moves value between the sides under a single
//! write guard.

use crate::error::PoolError;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use streampool_amm::CurveError;
use streampool_types::{AccountId, SwapDirection, TokenSide};
use tracing::debug;

/// Per-depositor deposit totals.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct Balances {
    pub token_a: u128,
    pub token_b: u128,
}

#[derive(Debug)]
struct Reserves {
    a: u128,
    b: u128,
}

/// The pool's two reserves plus depositor accounting.
///
/// Methods take `&self`; the reserve pair lives behind one `RwLock` so a
/// chunk's paired mutation commits atomically.
pub struct ReserveLedger {
    reserves: RwLock<Reserves>,
    balances: DashMap<AccountId, Balances>,
}

impl ReserveLedger {
    pub fn new(reserve_a: u128, reserve_b: u128) -> Self {
        Self {
            reserves: RwLock::new(Reserves {
                a: reserve_a,
                b: reserve_b,
            }),
            balances: DashMap::new(),
        }
    }

    /// Add a deposit to one side's reserve and the depositor's balance.
    ///
    /// No upper bound check; zero amounts are rejected.
    pub fn deposit(
        &self,
        account: AccountId,
        side: TokenSide,
        amount: u128,
    ) -> Result<(), PoolError> {
        if amount == 0 {
            return Err(PoolError::InvalidAmount);
        }

        {
            let mut reserves = self.reserves.write();
            match side {
                TokenSide::A => reserves.a += amount,
                TokenSide::B => reserves.b += amount,
            }
        }

        let mut balance = self.balances.entry(account).or_default();
        match side {
            TokenSide::A => balance.token_a += amount,
            TokenSide::B => balance.token_b += amount,
        }

        debug!(%account, %side, amount, "deposit applied");
        Ok(())
    }

    /// Current reserve for one side. Read-only.
    pub fn available_liquidity(&self, side: TokenSide) -> u128 {
        let reserves = self.reserves.read();
        match side {
            TokenSide::A => reserves.a,
            TokenSide::B => reserves.b,
        }
    }

    /// Both reserves as `(reserve_a, reserve_b)`.
    pub fn reserves(&self) -> (u128, u128) {
        let reserves = self.reserves.read();
        (reserves.a, reserves.b)
    }

    /// Cumulative deposits recorded for an account.
    pub fn balance_of(&self, account: &AccountId) -> Balances {
        self.balances
            .get(account)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    /// Settle one chunk: input side gains `amount_in`, output side pays
    /// `amount_out`, committed under one write guard or not at all.
    ///
    /// The coverage check is a safety net: the curve's floored quote cannot
    /// exceed a non-empty output reserve, but the ledger refuses overdraw
    /// independently of who quoted.
    pub fn apply_chunk(
        &self,
        direction: SwapDirection,
        amount_in: u128,
        amount_out: u128,
    ) -> Result<(), PoolError> {
        let mut guard = self.reserves.write();
        let reserves = &mut *guard;
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AToB => (&mut reserves.a, &mut reserves.b),
            SwapDirection::BToA => (&mut reserves.b, &mut reserves.a),
        };

        if amount_out > *reserve_out {
            return Err(PoolError::InsufficientReserve {
                side: direction.output_side(),
                needed: amount_out,
                available: *reserve_out,
            });
        }

        *reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(CurveError::Overflow {
                amount_in,
                reserve_in: *reserve_in,
                reserve_out: *reserve_out,
            })?;
        *reserve_out -= amount_out;

        debug!(%direction, amount_in, amount_out, "chunk settled against reserves");
        Ok(())
    }
}
