//! Resolved per-section data produced by layout compilation.

use crate::bits;

/// A section with its bit position and isolation mask resolved.
///
/// Produced by [crate::layout::Layout::compile]; `start` and `mask` follow
/// from the declaration order of the input sections and never change
/// afterwards. Holding a `&CompiledSection` lets a caller skip the by-name
/// lookup (and its error path) entirely on hot reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSection {
    /// Name the section was declared under.
    pub name: String,
    /// Width in bits.
    pub length: u32,
    /// Bit offset of the least significant bit (0 = LSB of the word).
    pub start: u32,
    /// Word with exactly the section's bits set.
    pub mask: u32,
}

impl CompiledSection {
    pub(crate) fn resolve(name: String, length: u32, start: u32) -> Self {
        CompiledSection {
            mask: bits::isolation_mask(start, length),
            name,
            length,
            start,
        }
    }

    /// Largest value the section can hold.
    pub fn max_value(&self) -> u32 {
        self.mask >> self.start
    }

    /// Extracts this section's value from a packed word.
    ///
    /// Logical shift on `u32`, so a set top bit of `packed` cannot
    /// sign-extend into the result.
    pub fn extract(&self, packed: u32) -> u32 {
        // A zero-length section holds nothing; its start may sit at the word
        // boundary (e.g. declared after 32 used bits), where the shift would
        // overflow.
        if self.length == 0 {
            return 0;
        }

        (packed & self.mask) >> self.start
    }

    /// Shifts `value` into the section's position. Caller guarantees
    /// `value <= max_value()`; [crate::layout::Layout::pack] checks that
    /// before calling in strict mode.
    pub(crate) fn place(&self, value: u32) -> u32 {
        if self.length == 0 {
            return 0;
        }

        value << self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mask_and_start() {
        let section = CompiledSection::resolve("flags".to_string(), 3, 5);
        assert_eq!(section.start, 5);
        assert_eq!(section.mask, 0b111 << 5);
        assert_eq!(section.max_value(), 0b111);
    }

    #[test]
    fn test_extract_is_zero_fill() {
        // Top bit set in the packed word must not leak into lower sections.
        let section = CompiledSection::resolve("low".to_string(), 4, 0);
        assert_eq!(section.extract(0x8000_000A), 0xA);
    }

    #[test]
    fn test_extract_top_section() {
        let section = CompiledSection::resolve("top".to_string(), 1, 31);
        assert_eq!(section.extract(0x8000_0000), 1);
        assert_eq!(section.extract(0x7FFF_FFFF), 0);
    }

    #[test]
    fn test_full_word_section() {
        let section = CompiledSection::resolve("word".to_string(), 32, 0);
        assert_eq!(section.max_value(), u32::MAX);
        assert_eq!(section.extract(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_zero_length_section() {
        let section = CompiledSection::resolve("empty".to_string(), 0, 7);
        assert_eq!(section.mask, 0);
        assert_eq!(section.max_value(), 0);
        assert_eq!(section.extract(u32::MAX), 0);
    }

    #[test]
    fn test_zero_length_section_at_word_boundary() {
        let section = CompiledSection::resolve("empty".to_string(), 0, 32);
        assert_eq!(section.extract(u32::MAX), 0);
        assert_eq!(section.place(0), 0);
    }
}
