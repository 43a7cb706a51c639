//! Definition of named sections used to build a [crate::layout::Layout].

/// A single named bit range requested from a layout.
///
/// Declaration order is significant: the first declared section occupies the
/// least significant bits of the packed word, each later section the bits
/// directly above its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Name used to address the section in pack/unpack maps.
    pub name: String,
    /// Width of the section in bits.
    pub length: u32,
}

impl Section {
    pub fn new(name: impl Into<String>, length: u32) -> Self {
        Section {
            name: name.into(),
            length,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::SectionDef> for Section {
    fn from(value: crate::serde::SectionDef) -> Self {
        Section {
            name: value.name,
            length: value.length,
        }
    }
}
