use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{record}: required field missing: {field}")]
    MissingRequiredField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record}: field {field} overlaps a previous field")]
    OverlappingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record}: fields extend to {actual} but record length is {expected}")]
    ExtentMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{record}: assembled {actual} characters, layout requires {expected}")]
    LengthMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },
}
