//! Fixed-width record layouts and the packing engine behind the national
//! billing file formats.
//!
//! Layouts are pure declarative tables ([`FieldSpec`] arrays); packing a
//! record is a pure function from a layout plus a value map to a buffer of
//! exactly the layout's total length.

pub mod error;
pub mod packer;
pub mod spec;
pub mod text;

pub use error::LayoutError;
pub use packer::{ValueMap, pack};
pub use spec::{FieldSpec, Pad, RecordLayout};
pub use text::to_seven_bit;
