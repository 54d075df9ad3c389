//! Capability interface over candidate converter declarations.
//!
//! The pipeline never inspects compiler metadata itself; the host scanner
//! hands it values implementing [`ConverterDeclaration`]. Concrete adapters
//! differ per toolchain (`analyzers::rust_converter` wraps a syn impl
//! block; test fixtures implement the trait in memory).

use serde::{Deserialize, Serialize};

/// Signature shape of one candidate conversion method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodShape {
    /// Method name as declared.
    pub name: String,
    /// Fully-qualified parameter types; the receiver is not included.
    pub parameter_types: Vec<String>,
    /// Fully-qualified return type; `None` models a void return.
    pub return_type: Option<String>,
}

impl MethodShape {
    pub fn new(
        name: impl Into<String>,
        parameter_types: Vec<String>,
        return_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_types,
            return_type,
        }
    }
}

/// One candidate converter declaration, as handed over by the host scanner.
pub trait ConverterDeclaration {
    /// Fully-qualified name of the declaring type.
    fn qualified_name(&self) -> &str;

    /// Shapes of every candidate conversion method on the declaring type.
    fn conversion_methods(&self) -> &[MethodShape];

    /// Parameter type of the conversion method, when the declaration has
    /// exactly one candidate taking exactly one parameter.
    fn conversion_parameter_type(&self) -> Option<&str> {
        match self.conversion_methods() {
            [method] => match method.parameter_types.as_slice() {
                [param] => Some(param),
                _ => None,
            },
            _ => None,
        }
    }

    /// Return type of the conversion method, when the declaration has
    /// exactly one candidate.
    fn conversion_return_type(&self) -> Option<&str> {
        match self.conversion_methods() {
            [method] => method.return_type.as_deref(),
            _ => None,
        }
    }
}
