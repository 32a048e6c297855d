//! Parameters for the FIPS 202 functions.
//!
//! The six approved functions come in two shapes:
//!
//! 1. [`SHA3_224`], [`SHA3_256`], [`SHA3_384`], and [`SHA3_512`], the fixed-length
//!    functions, whose capacity is twice the digest length.
//! 2. [`shake128`] and [`shake256`], the extendable-output functions, whose capacity is
//!    twice their security level and whose digest length is the caller's to pick.
//!
//! All six run on the full 1600-bit Keccak-f\[1600\] permutation. [`rawshake`] covers
//! the RawSHAKE functions the SHAKEs are defined in terms of; a SHAKE and its RawSHAKE
//! share their sponge parameters and differ only in the domain-separation suffix
//! appended by the padding, which happens outside this crate.

use crate::{MAX_STATE_SIZE, MAX_WORD_SIZE, Spec};

/// Parameters for SHA3-224.
pub const SHA3_224: Spec = sha3(224);

/// Parameters for SHA3-256.
pub const SHA3_256: Spec = sha3(256);

/// Parameters for SHA3-384.
pub const SHA3_384: Spec = sha3(384);

/// Parameters for SHA3-512.
pub const SHA3_512: Spec = sha3(512);

/// Parameters for a SHA-3 instance with the given digest length.
pub const fn sha3(output_length: i64) -> Spec {
    let capacity = output_length * 2;
    Spec {
        state_size: MAX_STATE_SIZE,
        word_size: MAX_WORD_SIZE,
        capacity,
        bitrate: MAX_STATE_SIZE - capacity,
        output_length,
    }
}

/// Parameters for a RawSHAKE instance with the given semicapacity and digest length.
pub const fn rawshake(semicapacity: i64, output_length: i64) -> Spec {
    let capacity = semicapacity * 2;
    Spec {
        state_size: MAX_STATE_SIZE,
        word_size: MAX_WORD_SIZE,
        capacity,
        bitrate: MAX_STATE_SIZE - capacity,
        output_length,
    }
}

/// Parameters for a SHAKE instance with the given semicapacity and digest length.
pub const fn shake(semicapacity: i64, output_length: i64) -> Spec {
    rawshake(semicapacity, output_length)
}

/// Parameters for SHAKE128 with the given digest length.
pub const fn shake128(output_length: i64) -> Spec {
    shake(128, output_length)
}

/// Parameters for SHAKE256 with the given digest length.
pub const fn shake256(output_length: i64) -> Spec {
    shake(256, output_length)
}
