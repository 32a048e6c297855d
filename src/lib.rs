#![cfg_attr(not(feature = "std"), no_std)]

//! Parameter resolution for Keccak-family sponge constructions: fill in a partially
//! specified set of sponge parameters and reject incoherent ones.
//!
//! ```
//! use keccak_spec::GeneralizedSpec;
//!
//! // Pin the capacity, let everything else follow.
//! let spec = GeneralizedSpec { capacity: Some(256), ..GeneralizedSpec::default() }.resolve()?;
//! assert_eq!(spec.state_size, 1600);
//! assert_eq!(spec.bitrate, 1344);
//! assert_eq!(spec.output_length, 512);
//! # Ok::<(), keccak_spec::SpecError>(())
//! ```

use thiserror::Error;

pub mod sha3;

mod fuzzing;

/// Number of lanes in a Keccak state.
const LANES: i64 = 25;

/// Width in bits of the widest lane the family defines.
const MAX_WORD_SIZE: i64 = 64;

/// Width in bits of the largest permutation in the family, Keccak-f\[1600\].
const MAX_STATE_SIZE: i64 = LANES * MAX_WORD_SIZE;

// The fixed rate/capacity split used when only an output length is requested.
const DEFAULT_BITRATE: i64 = 1024;
const DEFAULT_CAPACITY: i64 = MAX_STATE_SIZE - DEFAULT_BITRATE;

/// A rule violated by a [`GeneralizedSpec`], or by a hand-assembled [`Spec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("state size must be positive, but was {0} bits")]
    StateNonpositive(i64),
    #[error("state size cannot exceed 1600 bits, but was {0}")]
    StateTooLarge(i64),
    #[error("state size must be a multiple of 25 bits, but was {0}")]
    StateNotMultipleOf25(i64),
    #[error("state size of {0} bits does not hold 25 lanes of {1} bits")]
    StateWordIncoherent(i64, i64),
    #[error("word size must be positive, but was {0} bits")]
    WordNonpositive(i64),
    #[error("word size cannot exceed 64 bits, but was {0}")]
    WordTooLarge(i64),
    #[error("capacity must be positive, but was {0} bits")]
    CapacityNonpositive(i64),
    #[error("capacity must be a multiple of 8 bits, but was {0}")]
    CapacityNotMultipleOf8(i64),
    #[error("bitrate must be positive, but was {0} bits")]
    BitrateNonpositive(i64),
    #[error("bitrate must be a multiple of 8 bits, but was {0}")]
    BitrateNotMultipleOf8(i64),
    #[error("output length must be positive, but was {0} bits")]
    OutputNonpositive(i64),
    #[error("bitrate {1} and capacity {2} do not sum to the state size of {0} bits")]
    StateBitrateCapacityIncoherent(i64, i64, i64),
}

fn validate_state_size(state_size: i64) -> Result<(), SpecError> {
    if state_size <= 0 {
        return Err(SpecError::StateNonpositive(state_size));
    }
    if state_size > MAX_STATE_SIZE {
        return Err(SpecError::StateTooLarge(state_size));
    }
    if state_size % LANES != 0 {
        return Err(SpecError::StateNotMultipleOf25(state_size));
    }
    Ok(())
}

fn validate_word_size(word_size: i64) -> Result<(), SpecError> {
    if word_size <= 0 {
        return Err(SpecError::WordNonpositive(word_size));
    }
    if word_size > MAX_WORD_SIZE {
        return Err(SpecError::WordTooLarge(word_size));
    }
    Ok(())
}

fn validate_capacity(capacity: i64) -> Result<(), SpecError> {
    if capacity <= 0 {
        return Err(SpecError::CapacityNonpositive(capacity));
    }
    if capacity % 8 != 0 {
        return Err(SpecError::CapacityNotMultipleOf8(capacity));
    }
    Ok(())
}

fn validate_bitrate(bitrate: i64) -> Result<(), SpecError> {
    if bitrate <= 0 {
        return Err(SpecError::BitrateNonpositive(bitrate));
    }
    if bitrate % 8 != 0 {
        return Err(SpecError::BitrateNotMultipleOf8(bitrate));
    }
    Ok(())
}

fn validate_output_length(output_length: i64) -> Result<(), SpecError> {
    if output_length <= 0 {
        return Err(SpecError::OutputNonpositive(output_length));
    }
    Ok(())
}

/// Default digest length for a capacity: twice the capacity, except that the minimum
/// 8-bit capacity keeps an 8-bit digest rather than 16.
fn default_output_length(capacity: i64) -> i64 {
    if capacity == 8 {
        8
    } else {
        capacity.saturating_mul(2)
    }
}

/// Concrete parameters for a Keccak-family sponge construction, all in bits.
///
/// Every field holds a definite value, and `bitrate + capacity == state_size` always
/// holds for a resolved spec. [`check`](Spec::check) additionally verifies the byte
/// alignment of the rate and capacity, which the standard constructions require and
/// which resolution only guarantees for state sizes that are multiples of 200.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spec {
    /// Total width of the permutation state.
    pub state_size: i64,
    /// Width of one of the state's 25 lanes.
    pub word_size: i64,
    /// Portion of the state hidden from direct input and output.
    pub capacity: i64,
    /// Portion of the state absorbed or squeezed in one sponge step.
    pub bitrate: i64,
    /// Requested digest length.
    pub output_length: i64,
}

impl Spec {
    /// Checks every rule a usable spec must satisfy, including the byte alignment of
    /// the rate and capacity.
    ///
    /// [`GeneralizedSpec::resolve`] already guarantees the structural rules, so this is
    /// the byte-granular gate for hand-assembled specs and for resolved toy widths
    /// below 200 bits, whose derived splits land off byte boundaries.
    pub fn check(&self) -> Result<(), SpecError> {
        validate_state_size(self.state_size)?;
        validate_word_size(self.word_size)?;
        if self.state_size != self.word_size * LANES {
            return Err(SpecError::StateWordIncoherent(self.state_size, self.word_size));
        }
        validate_capacity(self.capacity)?;
        validate_bitrate(self.bitrate)?;
        validate_output_length(self.output_length)?;
        if self.bitrate.saturating_add(self.capacity) != self.state_size {
            return Err(SpecError::StateBitrateCapacityIncoherent(
                self.state_size,
                self.bitrate,
                self.capacity,
            ));
        }
        Ok(())
    }
}

/// Partially specified parameters for a Keccak-family sponge construction.
///
/// Each field is either a concrete number of bits or `None`, leaving that field for
/// [`resolve`](GeneralizedSpec::resolve) to infer. The default value leaves everything
/// unspecified, which resolves to the widest standard construction: a 1600-bit state
/// squeezing a 512-bit digest over a 1024/576 rate/capacity split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneralizedSpec {
    pub state_size: Option<i64>,
    /// On its own, a word size implies a state of 25 such lanes.
    pub word_size: Option<i64>,
    pub capacity: Option<i64>,
    pub bitrate: Option<i64>,
    pub output_length: Option<i64>,
}

impl GeneralizedSpec {
    /// Resolves this partial description into a concrete [`Spec`].
    ///
    /// Explicitly given fields are validated in field order (state size, word size,
    /// capacity, bitrate, output length) and the first violated rule is returned as the
    /// error. The remaining fields are then inferred from whichever of the rate,
    /// capacity, and output length were given:
    ///
    /// - none of them: the state size (default 1600) picks the digest, 32% of the state
    ///   rounded up to whole bytes and at least one byte, and the rate is twice the
    ///   digest;
    /// - output length only: the fixed 1024/576 rate/capacity split of the 1600-bit
    ///   state;
    /// - exactly one of rate and capacity: the other is whatever the state (default
    ///   1600) leaves over, and the digest defaults to twice the capacity (an 8-bit
    ///   capacity keeps an 8-bit digest);
    /// - both rate and capacity: the state defaults to their sum, and a state known
    ///   from the first phase must equal that sum or the whole input is rejected as
    ///   [`SpecError::StateBitrateCapacityIncoherent`].
    ///
    /// Resolution is deterministic and never mutates the input, and a resolved spec
    /// that passes [`Spec::check`] resolves back to itself when fed in again.
    pub fn resolve(&self) -> Result<Spec, SpecError> {
        let mut state_size = self.state_size;

        // Validate what the caller pinned down, in field order, so the first invalid
        // field is the one reported.
        if let Some(state) = state_size {
            validate_state_size(state)?;
        }
        if let Some(word) = self.word_size {
            validate_word_size(word)?;
            match state_size {
                Some(state) if state != word * LANES => {
                    return Err(SpecError::StateWordIncoherent(state, word));
                }
                // A word size alone fixes the state size.
                None => state_size = Some(word * LANES),
                Some(_) => {}
            }
        }
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(bitrate) = self.bitrate {
            validate_bitrate(bitrate)?;
        }
        if let Some(output_length) = self.output_length {
            validate_output_length(output_length)?;
        }

        // Infer the rest. Which of the rate, capacity, and output length were given
        // selects exactly one derivation; a state size known from the first phase only
        // defaults or constrains, it never overrides a given rate or capacity.
        let (state_size, bitrate, capacity, output_length) =
            match (self.bitrate, self.capacity, self.output_length) {
                (None, None, None) => {
                    let state = state_size.unwrap_or(MAX_STATE_SIZE);
                    // Default digest: 32% of the state, rounded up to whole bytes, at
                    // least one byte.
                    let output = ((state * 32 / 100 + 7) & !7).max(8);
                    let bitrate = output * 2;
                    (state, bitrate, state - bitrate, output)
                }
                (None, None, Some(output)) => {
                    let state = state_size.unwrap_or(DEFAULT_BITRATE + DEFAULT_CAPACITY);
                    (state, DEFAULT_BITRATE, DEFAULT_CAPACITY, output)
                }
                (None, Some(capacity), output) => {
                    let state = state_size.unwrap_or(MAX_STATE_SIZE);
                    let output = output.unwrap_or_else(|| default_output_length(capacity));
                    (state, state - capacity, capacity, output)
                }
                (Some(bitrate), None, output) => {
                    let state = state_size.unwrap_or(MAX_STATE_SIZE);
                    let capacity = state - bitrate;
                    let output = output.unwrap_or_else(|| default_output_length(capacity));
                    (state, bitrate, capacity, output)
                }
                (Some(bitrate), Some(capacity), output) => {
                    let sum = bitrate.saturating_add(capacity);
                    if let Some(state) = state_size {
                        if state != sum {
                            return Err(SpecError::StateBitrateCapacityIncoherent(
                                state, bitrate, capacity,
                            ));
                        }
                    }
                    let output = output.unwrap_or_else(|| default_output_length(capacity));
                    (sum, bitrate, capacity, output)
                }
            };

        // The derivations can't break a rule the first phase enforced on a given
        // value, but they can combine into a state no permutation in the family has.
        // Re-check the structure of the whole before handing it out.
        validate_state_size(state_size)?;
        if capacity <= 0 {
            return Err(SpecError::CapacityNonpositive(capacity));
        }
        if bitrate <= 0 {
            return Err(SpecError::BitrateNonpositive(bitrate));
        }
        if output_length <= 0 {
            return Err(SpecError::OutputNonpositive(output_length));
        }
        if bitrate.saturating_add(capacity) != state_size {
            return Err(SpecError::StateBitrateCapacityIncoherent(
                state_size, bitrate, capacity,
            ));
        }

        Ok(Spec {
            state_size,
            word_size: state_size / LANES,
            capacity,
            bitrate,
            output_length,
        })
    }
}

impl TryFrom<GeneralizedSpec> for Spec {
    type Error = SpecError;

    fn try_from(spec: GeneralizedSpec) -> Result<Self, Self::Error> {
        spec.resolve()
    }
}

/// Re-generalizes a concrete spec with every field pinned. Resolving the result gives
/// the same spec back whenever it passes [`Spec::check`].
impl From<Spec> for GeneralizedSpec {
    fn from(spec: Spec) -> Self {
        GeneralizedSpec {
            state_size: Some(spec.state_size),
            word_size: Some(spec.word_size),
            capacity: Some(spec.capacity),
            bitrate: Some(spec.bitrate),
            output_length: Some(spec.output_length),
        }
    }
}
