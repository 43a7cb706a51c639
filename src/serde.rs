//! JSON-deserializable layout description.
//!
//! These types describe the *shape* of a packed word. They are intended to be
//! constructed from JSON (for example a layout file shipped with your
//! application) and then compiled into core `bitmask` types.

use serde::{Deserialize, Serialize};

/// Top-level layout definition consisting of an ordered list of sections.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutDef {
    /// Sections in declaration order; the first occupies the lowest bits.
    pub sections: Vec<SectionDef>,
}

/// Description of a single named section.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SectionDef {
    /// Name used to address the section in pack/unpack maps.
    pub name: String,
    /// Width of the section in bits.
    pub length: u32,
}

impl LayoutDef {
    /// Converts the definition into [crate::section::Section]s ready for
    /// [crate::layout::Layout::compile].
    pub fn into_sections(self) -> Vec<crate::section::Section> {
        self.sections.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "sections": [
                { "name": "kind", "length": 3 },
                { "name": "id", "length": 12 }
            ]
        }"#;

        let def: LayoutDef = serde_json::from_str(json).unwrap();
        let layout = Layout::compile(&def.into_sections()).unwrap();

        assert_eq!(layout.used(), 15);
        assert_eq!(layout.section("id").unwrap().start, 3);
    }
}
