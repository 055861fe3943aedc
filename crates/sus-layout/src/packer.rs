//! The field packing engine.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::LayoutError;
use crate::spec::{Pad, RecordLayout};

/// Field values keyed by layout field name.
///
/// Absent keys fall back to the field's declared default. Values are stored
/// as their final textual form; numeric callers rely on the layout's
/// zero-padding rather than formatting digits themselves.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    values: BTreeMap<String, String>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the field when a value is present; otherwise leave the default.
    pub fn set_opt(&mut self, name: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Overwrite the field with an empty value, masking any default.
    pub fn clear(&mut self, name: &str) -> &mut Self {
        self.values.insert(name.to_string(), String::new());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether the field holds a non-blank value.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Apply a transformation to every stored value.
    pub fn map_values(&mut self, f: impl Fn(&str) -> String) {
        for value in self.values.values_mut() {
            *value = f(value);
        }
    }
}

/// Pack a value map into a record of exactly `layout.total_length`
/// characters.
///
/// Resolution per field: provided value, else the declared default, else
/// empty. A required field resolving to blank fails. Values longer than the
/// field are truncated silently; truncation is how regulation-bounded free
/// text (names, addresses) is fitted.
pub fn pack(layout: &RecordLayout, values: &ValueMap) -> Result<String, LayoutError> {
    let mut buffer = vec![' '; layout.total_length];

    for field in layout.fields {
        let resolved = values.get(field.name).unwrap_or(field.default);
        if field.required && resolved.trim().is_empty() {
            return Err(LayoutError::MissingRequiredField {
                record: layout.name,
                field: field.name,
            });
        }

        let padded = match field.pad {
            Pad::Zero => format!("{resolved:0>width$}", width = field.length),
            Pad::Space => format!("{resolved:<width$}", width = field.length),
        };
        let begin = field.start - 1;
        for (slot, ch) in buffer[begin..begin + field.length]
            .iter_mut()
            .zip(padded.chars())
        {
            *slot = ch;
        }
    }

    let record: String = buffer.into_iter().collect();
    if record.chars().count() != layout.total_length {
        return Err(LayoutError::LengthMismatch {
            record: layout.name,
            expected: layout.total_length,
            actual: record.chars().count(),
        });
    }
    Ok(record)
}
