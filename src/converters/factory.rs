//! Batch extraction over ordered declaration sequences.

use crate::config::ExtractionConfig;
use crate::converters::declaration::ConverterDeclaration;
use crate::converters::descriptor::ConverterDescriptor;
use crate::converters::extractor::extract;
use crate::errors::Result;

/// Runs extraction over the declarations of one generation round.
///
/// A factory is a stateless value; build a fresh one per round rather than
/// caching an instance across rounds.
#[derive(Debug, Clone, Default)]
pub struct ConverterFactory {
    config: ExtractionConfig,
}

impl ConverterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract a descriptor from every declaration, in input order.
    ///
    /// Fails with the first malformed declaration and returns no partial
    /// result: generated code cannot be emitted from an incomplete
    /// converter set.
    pub fn create<D>(&self, decls: &[D]) -> Result<Vec<ConverterDescriptor>>
    where
        D: ConverterDeclaration,
    {
        decls.iter().map(|decl| extract(decl, &self.config)).collect()
    }
}
