//! The extraction-and-validation pipeline: declarations in, registry out.

pub mod declaration;
pub mod descriptor;
pub mod extractor;
pub mod factory;
pub mod registry;

pub use declaration::{ConverterDeclaration, MethodShape};
pub use descriptor::{is_qualified_name, ConverterDescriptor};
pub use extractor::extract;
pub use factory::ConverterFactory;
pub use registry::ConverterRegistry;
