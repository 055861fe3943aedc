//! Declarative field tables.
//!
//! Every record kind in the two file formats is described by a constant
//! array of [`FieldSpec`]s; the builders never position bytes by hand.

use crate::error::LayoutError;

/// Padding policy for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    /// Left-justify, fill with spaces (free text).
    Space,
    /// Right-justify, fill with zeros (numeric).
    Zero,
}

/// Placement of one field inside a fixed-width record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// 1-based offset, matching the national layout documents.
    pub start: usize,
    pub length: usize,
    pub required: bool,
    pub default: &'static str,
    pub pad: Pad,
}

impl FieldSpec {
    /// Optional space-padded text field.
    pub const fn text(name: &'static str, start: usize, length: usize) -> Self {
        Self {
            name,
            start,
            length,
            required: false,
            default: "",
            pad: Pad::Space,
        }
    }

    /// Required space-padded text field.
    pub const fn required_text(name: &'static str, start: usize, length: usize) -> Self {
        Self {
            required: true,
            ..Self::text(name, start, length)
        }
    }

    /// Required zero-padded numeric field.
    pub const fn numeric(name: &'static str, start: usize, length: usize) -> Self {
        Self {
            required: true,
            pad: Pad::Zero,
            ..Self::text(name, start, length)
        }
    }

    /// Optional zero-padded numeric field.
    pub const fn optional_numeric(name: &'static str, start: usize, length: usize) -> Self {
        Self {
            pad: Pad::Zero,
            ..Self::text(name, start, length)
        }
    }

    /// Attach a default used when no value is supplied.
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// An ordered, non-overlapping set of fields with one canonical total length.
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    pub name: &'static str,
    /// Record length in characters, exclusive of the line terminator.
    pub total_length: usize,
    pub fields: &'static [FieldSpec],
}

impl RecordLayout {
    /// Verify the construction invariants: fields do not overlap and the
    /// maximum extent equals the declared total length. Violations are
    /// construction bugs, so this runs from tests rather than on every pack.
    pub fn check_well_formed(&self) -> Result<(), LayoutError> {
        let mut occupied = vec![false; self.total_length];
        let mut max_extent = 0usize;
        for field in self.fields {
            let begin = field.start - 1;
            let end = begin + field.length;
            if end > self.total_length {
                return Err(LayoutError::ExtentMismatch {
                    record: self.name,
                    expected: self.total_length,
                    actual: end,
                });
            }
            for slot in &mut occupied[begin..end] {
                if *slot {
                    return Err(LayoutError::OverlappingField {
                        record: self.name,
                        field: field.name,
                    });
                }
                *slot = true;
            }
            max_extent = max_extent.max(end);
        }
        if max_extent != self.total_length {
            return Err(LayoutError::ExtentMismatch {
                record: self.name,
                expected: self.total_length,
                actual: max_extent,
            });
        }
        Ok(())
    }
}
