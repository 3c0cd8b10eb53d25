// Stable string hash
//
// Seeding and partial-refund outcomes must be reproducible across runs and
// platforms, so they use 32-bit FNV-1a instead of std's randomized hasher.
// The raw hash is read as a signed 32-bit value and its magnitude is used.

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn fnv1a_32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Absolute value of the FNV-1a hash read as `i32`.
///
/// `i32::MIN` maps to `2^31` rather than overflowing.
pub fn stable_hash(input: &str) -> u32 {
    (fnv1a_32(input) as i32).unsigned_abs()
}
