//! Fixed-seed 64-bit hash for byte strings.
//!
//! Every call site hashes with the same seed, so a key maps to the same
//! probe sequence regardless of process, run, or insertion order. Input is
//! folded in 8-byte, then 4-byte, then single-byte chunks through an odd
//! multiplicative constant with shift-xor mixing, and finished with an
//! avalanche pass. Non-cryptographic.

/// Seed shared by all call sites. Changing it changes every probe sequence,
/// so it must stay fixed for the lifetime of a map.
const SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Odd multiplicative folding constant.
const FOLD: u64 = 0x8803_55f2_1e6d_1965;

/// Hash an arbitrary byte string to 64 bits.
pub(crate) fn hash64(bytes: &[u8]) -> u64 {
    let mut h = SEED ^ (bytes.len() as u64).wrapping_mul(FOLD);

    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        h = fold(h, u64::from_le_bytes(chunk.try_into().unwrap()));
    }

    let mut tail = chunks.remainder();
    if tail.len() >= 4 {
        let (word, rest) = tail.split_at(4);
        h = fold(h, u64::from(u32::from_le_bytes(word.try_into().unwrap())));
        tail = rest;
    }
    for &byte in tail {
        h = fold(h, u64::from(byte));
    }

    avalanche(h)
}

#[inline]
fn fold(h: u64, mut v: u64) -> u64 {
    v ^= v >> 23;
    v = v.wrapping_mul(0x2127_599b_f432_5c37);
    v ^= v >> 47;
    (h ^ v).wrapping_mul(FOLD)
}

// Finalizer: xor-shift, multiply, xor-shift, multiply, xor-shift. Small input
// differences must flip about half the output bits before the value is
// reduced to a slot index.
#[inline]
fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^ (h >> 33)
}
