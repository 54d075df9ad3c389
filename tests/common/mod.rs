// Test utility module for convmap integration tests
#![allow(dead_code)]

use convmap::{ConverterDeclaration, MethodShape};

/// In-memory declaration fixture, platform-neutral.
///
/// Carries whatever names the test hands it, dotted or `::`-separated,
/// standing in for a host scanner's adapter.
#[derive(Debug, Clone)]
pub struct FakeDecl {
    pub qualified_name: String,
    pub methods: Vec<MethodShape>,
}

impl FakeDecl {
    /// A well-formed converter declaration: one method, one parameter,
    /// value return.
    pub fn converter(class_name: &str, type_from: &str, type_to: &str) -> Self {
        Self {
            qualified_name: class_name.to_string(),
            methods: vec![MethodShape::new(
                "convert",
                vec![type_from.to_string()],
                Some(type_to.to_string()),
            )],
        }
    }

    pub fn with_methods(class_name: &str, methods: Vec<MethodShape>) -> Self {
        Self {
            qualified_name: class_name.to_string(),
            methods,
        }
    }
}

impl ConverterDeclaration for FakeDecl {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn conversion_methods(&self) -> &[MethodShape] {
        &self.methods
    }
}
