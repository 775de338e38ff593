//! End-to-end scenario tests for the streampool engine.
//!
//! Helpers shared by the integration tests in `tests/`.

use streampool_pool::{AccountId, PoolConfig, StreamEngine};

/// A deterministic test identity.
pub fn account(tag: u8) -> AccountId {
    AccountId([tag; 20])
}

/// Engine with the given starting reserves and the default chunk count.
pub fn pool(reserve_a: u128, reserve_b: u128) -> StreamEngine {
    StreamEngine::new(PoolConfig::new(reserve_a, reserve_b))
}

/// Install a test subscriber once so `RUST_LOG` controls engine tracing.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .try_init();
    });
}
