//! Stable numeric identifiers for distorted files.
//!
//! Identifiers key the join between classified assets and quality scores, so
//! they must depend only on the filename. The hash is 64-bit FNV-1a over the
//! UTF-8 bytes, reinterpreted as a signed integer, made non-negative and
//! reduced modulo 10^16. Distinct names can collide; callers log collisions
//! but do not deduplicate.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Upper bound (exclusive) of every identifier.
pub const ASSET_ID_MODULUS: u64 = 10_000_000_000_000_000;

/// 64-bit FNV-1a hash.
#[must_use]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Derives the asset identifier for a distorted filename.
#[must_use]
pub fn asset_id(filename: &str) -> u64 {
    let signed = fnv1a_64(filename.as_bytes()) as i64;
    signed.unsigned_abs() % ASSET_ID_MODULUS
}
