//! Error types for layout compilation, packing, and unpacking.

use std::error::Error;
use std::fmt;

/// Errors produced when compiling [crate::section::Section]s into a
/// [crate::layout::Layout].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Summed section lengths exceed the 32-bit word.
    CapacityExceeded {
        /// Total bits requested by the sections.
        used: u64,
    },
    /// Two sections share the same name.
    DuplicateSection(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::CapacityExceeded { used } => {
                write!(f, "sections require {used} bits, word holds 32")
            }
            LayoutError::DuplicateSection(name) => {
                write!(f, "duplicate section name '{name}'")
            }
        }
    }
}

impl Error for LayoutError {}

/// Errors produced by [crate::layout::Layout::pack].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A declared section has no entry in the value map.
    MissingValue(String),
    /// A key in the value map names no declared section.
    UnknownSection(String),
    /// A value does not fit within its section's bit width.
    ValueOverflow {
        /// Section whose value overflowed.
        section: String,
        /// The offending value.
        value: u32,
        /// Largest value the section can hold.
        max: u32,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::MissingValue(name) => {
                write!(f, "no value supplied for section '{name}'")
            }
            PackError::UnknownSection(name) => {
                write!(f, "unknown section '{name}'")
            }
            PackError::ValueOverflow {
                section,
                value,
                max,
            } => {
                write!(f, "value {value} exceeds max {max} for section '{section}'")
            }
        }
    }
}

impl Error for PackError {}

/// Errors produced by [crate::layout::Layout::unpack_section].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    /// The requested name matches no declared section.
    UnknownSection(String),
}

impl fmt::Display for UnpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpackError::UnknownSection(name) => {
                write!(f, "unknown section '{name}'")
            }
        }
    }
}

impl Error for UnpackError {}
