//! Property tests for reserve conservation across whole streams.

use proptest::prelude::*;
use streampool_e2e_tests::{account, pool};
use streampool_pool::{SwapDirection, TokenSide};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Per-chunk conservation: the input reserve grows by exactly the
    /// chunk input, the output reserve shrinks by exactly the floored
    /// constant-product quote, and the invariant k never decreases.
    #[test]
    fn chunks_conserve_value_and_grow_k(
        reserve_a in 1u128..=1_000_000_000_000,
        reserve_b in 1u128..=1_000_000_000_000,
        total in 1u128..=1_000_000_000,
    ) {
        let engine = pool(reserve_a, reserve_b);
        let user = account(42);
        engine.enter_swap(user, total, SwapDirection::AToB).unwrap();

        let mut swapped = 0u128;
        loop {
            let (r_in_before, r_out_before) = engine.reserves();
            let receipt = engine.process_stream(user).unwrap();
            let (r_in_after, r_out_after) = engine.reserves();

            // Conservation per chunk
            prop_assert_eq!(r_in_after, r_in_before + receipt.amount_in);
            prop_assert_eq!(r_out_after, r_out_before - receipt.amount_out);

            // Quote matches the floored closed form against pre-chunk reserves
            let expected = if receipt.amount_in == 0 {
                0
            } else {
                receipt.amount_in * r_out_before / (r_in_before + receipt.amount_in)
            };
            prop_assert_eq!(receipt.amount_out, expected);

            // k is non-decreasing under floor division
            prop_assert!(r_in_after * r_out_after >= r_in_before * r_out_before);

            swapped += receipt.amount_in;
            if receipt.completed {
                break;
            }
        }

        // Completion sums to the committed total, no rounding drift
        prop_assert_eq!(swapped, total);
        prop_assert_eq!(engine.get_stream(&user), None);
        prop_assert_eq!(
            engine.available_liquidity(TokenSide::A),
            reserve_a + total
        );
    }

    /// Progress is strictly monotonic: each trigger advances the chunk
    /// index by exactly one and never lets amount_swapped regress.
    #[test]
    fn progress_is_monotonic(
        total in 1u128..=1_000_000,
    ) {
        let engine = pool(1_000_000_000, 1_000_000_000);
        let user = account(7);
        engine.enter_swap(user, total, SwapDirection::BToA).unwrap();

        let mut last_index = 0u32;
        let mut last_swapped = 0u128;
        while let Some(view) = engine.get_stream(&user) {
            prop_assert_eq!(view.next_chunk_index, last_index);
            prop_assert!(view.amount_swapped >= last_swapped);
            prop_assert!(view.next_chunk_index < view.stream_count);

            let receipt = engine.process_stream(user).unwrap();
            last_index += 1;
            last_swapped += receipt.amount_in;
        }

        prop_assert_eq!(last_index, 10);
        prop_assert_eq!(last_swapped, total);
    }
}
