//! Layout: compiled arrangement of named sections within a 32-bit word,
//! used to pack value maps into words and unpack them back out.

use std::collections::{BTreeMap, HashMap};

use crate::{
    bits::WORD_BITS,
    compiled::CompiledSection,
    errors::{LayoutError, PackError, UnpackError},
    section::Section,
};

/// Runtime value checking performed by [Layout::pack].
///
/// Structural checks (capacity, duplicate names) run at compile time
/// regardless of this mode; it only controls the per-value range test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject values outside `0..2^length` with
    /// [PackError::ValueOverflow]. The default.
    #[default]
    Strict,
    /// Skip the range test. The caller guarantees every value fits its
    /// section; an out-of-range value corrupts neighboring sections.
    Unchecked,
}

/// A compiled layout: ordered [CompiledSection]s plus a name lookup.
///
/// Build one with [Layout::compile], then use [Layout::pack],
/// [Layout::unpack_section], and [Layout::unpack_all]. The first declared
/// section occupies the least significant bits; each later section sits
/// directly above its predecessor. A layout is immutable after compilation
/// and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Layout {
    used: u32,
    validation: Validation,
    /// Compiled sections in declaration order.
    pub sections: Vec<CompiledSection>,
    by_name: HashMap<String, usize>,
}

impl Layout {
    /// Compiles an ordered slice of [Section]s with [Validation::Strict].
    pub fn compile(sections: &[Section]) -> Result<Self, LayoutError> {
        Self::compile_with_validation(sections, Validation::default())
    }

    /// Compiles an ordered slice of [Section]s with an explicit validation
    /// mode. Fails if the summed lengths exceed 32 bits or a name repeats;
    /// both checks run in every mode.
    pub fn compile_with_validation(
        sections: &[Section],
        validation: Validation,
    ) -> Result<Self, LayoutError> {
        let used: u64 = sections.iter().map(|s| s.length as u64).sum();
        if used > WORD_BITS as u64 {
            return Err(LayoutError::CapacityExceeded { used });
        }

        let mut compiled: Vec<CompiledSection> = Vec::with_capacity(sections.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(sections.len());
        let mut start = 0u32;

        for (index, section) in sections.iter().enumerate() {
            if by_name.insert(section.name.clone(), index).is_some() {
                return Err(LayoutError::DuplicateSection(section.name.clone()));
            }

            compiled.push(CompiledSection::resolve(
                section.name.clone(),
                section.length,
                start,
            ));
            start += section.length;
        }

        Ok(Self {
            used: used as u32,
            validation,
            sections: compiled,
            by_name,
        })
    }

    /// Bits occupied by the declared sections.
    pub fn used(&self) -> u32 {
        self.used
    }

    /// Bits of the word left unassigned.
    pub fn free(&self) -> u32 {
        WORD_BITS - self.used
    }

    /// Looks up a section by name. Resolving once and then calling
    /// [CompiledSection::extract] avoids the per-call lookup of
    /// [Layout::unpack_section].
    pub fn section(&self, name: &str) -> Option<&CompiledSection> {
        self.by_name.get(name).map(|&index| &self.sections[index])
    }

    /// Packs `values` into a single word.
    ///
    /// Every declared section must have an entry in `values` and every key
    /// in `values` must name a declared section. Under [Validation::Strict]
    /// each value must satisfy `value <= max_value()` for its section.
    pub fn pack(&self, values: &BTreeMap<String, u32>) -> Result<u32, PackError> {
        for name in values.keys() {
            if !self.by_name.contains_key(name) {
                return Err(PackError::UnknownSection(name.clone()));
            }
        }

        let mut word = 0u32;
        for section in &self.sections {
            let &value = values
                .get(&section.name)
                .ok_or_else(|| PackError::MissingValue(section.name.clone()))?;

            if self.validation == Validation::Strict && value > section.max_value() {
                return Err(PackError::ValueOverflow {
                    section: section.name.clone(),
                    value,
                    max: section.max_value(),
                });
            }

            word |= section.place(value);
        }

        Ok(word)
    }

    /// Unpacks a single named section from `packed`.
    pub fn unpack_section(&self, packed: u32, name: &str) -> Result<u32, UnpackError> {
        let section = self
            .section(name)
            .ok_or_else(|| UnpackError::UnknownSection(name.to_string()))?;

        Ok(section.extract(packed))
    }

    /// Unpacks every declared section from `packed` into a map, in
    /// declaration order.
    pub fn unpack_all(&self, packed: u32) -> BTreeMap<String, u32> {
        self.sections
            .iter()
            .map(|section| (section.name.clone(), section.extract(packed)))
            .collect()
    }
}
