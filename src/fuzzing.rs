#![cfg(all(test, feature = "std"))]

use proptest::option;
use proptest::prelude::*;

use crate::GeneralizedSpec;

/// An arbitrary field value: usually near the sizes the family actually uses,
/// occasionally wild.
fn arb_field() -> impl Strategy<Value = Option<i64>> {
    option::of(prop_oneof![4 => -64i64..=2048, 1 => any::<i64>()])
}

prop_compose! {
    /// An arbitrary partial description of a sponge.
    fn arb_spec()(
        state_size in arb_field(),
        word_size in arb_field(),
        capacity in arb_field(),
        bitrate in arb_field(),
        output_length in arb_field(),
    ) -> GeneralizedSpec {
        GeneralizedSpec { state_size, word_size, capacity, bitrate, output_length }
    }
}

proptest! {
    /// Any input either resolves to a structurally coherent spec or fails cleanly;
    /// resolution must never panic.
    #[test]
    fn resolution_is_total(spec in arb_spec()) {
        if let Ok(resolved) = spec.resolve() {
            prop_assert!(resolved.state_size > 0);
            prop_assert!(resolved.state_size <= 1600);
            prop_assert_eq!(resolved.state_size % 25, 0);
            prop_assert_eq!(resolved.word_size * 25, resolved.state_size);
            prop_assert!(resolved.capacity > 0);
            prop_assert!(resolved.bitrate > 0);
            prop_assert!(resolved.output_length > 0);
            prop_assert_eq!(resolved.bitrate + resolved.capacity, resolved.state_size);
        }
    }

    /// Resolution is a pure function of the input.
    #[test]
    fn resolution_is_deterministic(spec in arb_spec()) {
        prop_assert_eq!(spec.resolve(), spec.resolve());
    }

    /// Whatever the caller pinned down survives resolution unchanged.
    #[test]
    fn given_fields_are_kept(spec in arb_spec()) {
        if let Ok(resolved) = spec.resolve() {
            if let Some(state_size) = spec.state_size {
                prop_assert_eq!(resolved.state_size, state_size);
            }
            if let Some(word_size) = spec.word_size {
                prop_assert_eq!(resolved.word_size, word_size);
            }
            if let Some(capacity) = spec.capacity {
                prop_assert_eq!(resolved.capacity, capacity);
            }
            if let Some(bitrate) = spec.bitrate {
                prop_assert_eq!(resolved.bitrate, bitrate);
            }
            if let Some(output_length) = spec.output_length {
                prop_assert_eq!(resolved.output_length, output_length);
            }
        }
    }

    /// A resolved spec that passes the strict byte-alignment check re-resolves to
    /// itself.
    #[test]
    fn clean_resolutions_are_fixpoints(spec in arb_spec()) {
        if let Ok(resolved) = spec.resolve() {
            if resolved.check().is_ok() {
                prop_assert_eq!(GeneralizedSpec::from(resolved).resolve(), Ok(resolved));
            }
        }
    }

    /// A word size on its own means the same thing as the matching state size.
    #[test]
    fn word_size_is_shorthand_for_the_state(word_size in 1i64..=64) {
        let via_word =
            GeneralizedSpec { word_size: Some(word_size), ..Default::default() }.resolve();
        let via_state =
            GeneralizedSpec { state_size: Some(word_size * 25), ..Default::default() }.resolve();
        prop_assert_eq!(via_word, via_state);
    }
}
