//! # bitmask
//!
//! A library for packing several small named integers into one 32-bit word
//! using a declarative layout.
//!
//! Declare an ordered list of sections with fixed bit widths, compile them
//! into a [layout::Layout], then pack a map of values into a single `u32` or
//! unpack sections back out. The first declared section occupies the least
//! significant bits; the word format is stable across implementations that
//! follow the same convention.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use bitmask::layout::Layout;
//! use bitmask::section::Section;
//!
//! let layout = Layout::compile(&[
//!     Section::new("opcode", 6),
//!     Section::new("target", 10),
//!     Section::new("payload", 16),
//! ]).unwrap();
//!
//! let values = BTreeMap::from([
//!     ("opcode".to_string(), 9u32),
//!     ("target".to_string(), 517),
//!     ("payload".to_string(), 40000),
//! ]);
//!
//! let packed = layout.pack(&values).unwrap();
//! assert_eq!(layout.unpack_section(packed, "target"), Ok(517));
//! assert_eq!(layout.unpack_all(packed), values);
//! ```

pub mod bits;
pub mod compiled;
pub mod errors;
pub mod layout;
pub mod section;
#[cfg(feature = "serde")]
pub mod serde;
