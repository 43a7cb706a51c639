//! Low-level mask and formatting utilities for 32-bit packed words.
//!
//! Bit 0 is the least significant bit of the word. These functions are used
//! by layout compilation but are also useful on their own when working with
//! raw masks.

/// Width of a packed word in bits.
pub const WORD_BITS: u32 = 32;

/// Builds a mask with exactly `length` contiguous set bits whose least
/// significant bit sits at position `start`.
///
/// Equivalent to `((1 << length) - 1) << start` without the shift-overflow
/// hazard at `length == 32`. Bits that would fall beyond the word are
/// dropped, and `length == 0` yields an empty mask.
pub fn isolation_mask(start: u32, length: u32) -> u32 {
    if length == 0 || start >= WORD_BITS {
        return 0;
    }

    let unshifted = if length >= WORD_BITS {
        u32::MAX
    } else {
        (1u32 << length) - 1
    };

    unshifted << start
}

/// Formats `value` as a 32-character binary string, most significant bit
/// first, zero-padded. Diagnostic aid; pack/unpack never use it.
pub fn print_word(value: u32) -> String {
    format!("{value:032b}")
}
