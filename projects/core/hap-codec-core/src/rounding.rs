//! All block-compressed formats used by HAP encode 4x4 pixel blocks, so every dimension
//! is padded to the block grid before any size arithmetic takes place.
//!
//! Inputs are `u32` frame dimensions. The round-up helpers widen to [`u64`], so the padded
//! value is exact for every input (`u32::MAX` pads to `2^32`).

/// Rounds `n` up to the next multiple of 4. Multiples of 4 (including 0) are returned as-is.
#[inline(always)]
pub const fn round_up_to_multiple_of_4(n: u32) -> u64 {
    let n = n as u64;
    if n & 3 != 0 {
        (n + 3) & !3
    } else {
        n
    }
}

/// Rounds `n` up to the next multiple of 16. Multiples of 16 (including 0) are returned as-is.
#[inline(always)]
pub const fn round_up_to_multiple_of_16(n: u32) -> u64 {
    let n = n as u64;
    if n & 15 != 0 {
        (n + 15) & !15
    } else {
        n
    }
}

/// Rounds `n` down to the previous multiple of 4.
#[inline(always)]
pub const fn round_down_to_multiple_of_4(n: u32) -> u32 {
    n & !3
}
