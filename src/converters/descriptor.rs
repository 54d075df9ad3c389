//! Immutable record of a validated converter declaration.

use serde::{Deserialize, Serialize};

/// A validated converter: which type declares it and what it converts.
///
/// Descriptors are plain values; once extraction produces one it is never
/// mutated, and a fresh set is built for every generation round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConverterDescriptor {
    /// Fully-qualified name of the declaring type.
    pub class_name: String,
    /// Fully-qualified name of the conversion method's parameter type.
    pub type_from: String,
    /// Fully-qualified name of the conversion method's return type.
    pub type_to: String,
}

impl ConverterDescriptor {
    pub fn new(
        class_name: impl Into<String>,
        type_from: impl Into<String>,
        type_to: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            type_from: type_from.into(),
            type_to: type_to.into(),
        }
    }

    /// Registry key for this descriptor.
    pub fn key(&self) -> (String, String) {
        (self.type_from.clone(), self.type_to.clone())
    }

    /// Whether source and target types coincide.
    pub fn is_identity(&self) -> bool {
        self.type_from == self.type_to
    }
}

/// Check that a name is a syntactically valid fully-qualified type name.
///
/// Accepts identifier segments joined by `::` or `.`, so both Rust path
/// names (`core::num::NonZeroU32`) and dotted platform names
/// (`java.lang.Integer`) pass.
pub fn is_qualified_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split("::")
            .flat_map(|part| part.split('.'))
            .all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
