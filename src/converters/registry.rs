//! `(type_from, type_to)`-keyed index over extracted descriptors.

use im::{HashMap, Vector};

use crate::converters::descriptor::ConverterDescriptor;
use crate::errors::{Error, Result};

/// Read-only converter index consulted by the emission stage.
///
/// Built once per generation round and never mutated afterwards, so a
/// registry may be shared freely for concurrent lookups. The persistent
/// backing maps make cloning cheap.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    by_pair: HashMap<(String, String), ConverterDescriptor>,
    by_source: HashMap<String, Vector<ConverterDescriptor>>,
    ordered: Vector<ConverterDescriptor>,
}

impl ConverterRegistry {
    /// Index descriptors by conversion pair.
    ///
    /// Two descriptors claiming the same `(type_from, type_to)` pair are a
    /// conflict the generator cannot resolve; construction fails naming
    /// both declaring types, and no registry escapes on that path.
    pub fn build(descriptors: impl IntoIterator<Item = ConverterDescriptor>) -> Result<Self> {
        let mut registry = Self::default();
        for descriptor in descriptors {
            registry.insert(descriptor)?;
        }
        log::debug!("converter registry built with {} entries", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, descriptor: ConverterDescriptor) -> Result<()> {
        let key = descriptor.key();
        if let Some(existing) = self.by_pair.get(&key) {
            return Err(Error::DuplicateConverter {
                type_from: descriptor.type_from.clone(),
                type_to: descriptor.type_to.clone(),
                first: existing.class_name.clone(),
                second: descriptor.class_name.clone(),
            });
        }
        self.by_source
            .entry(descriptor.type_from.clone())
            .or_default()
            .push_back(descriptor.clone());
        self.ordered.push_back(descriptor.clone());
        self.by_pair.insert(key, descriptor);
        Ok(())
    }

    /// Look up the converter for an exact conversion pair.
    ///
    /// Absence is a normal outcome ("no converter registered"), left to
    /// the caller to interpret.
    pub fn lookup(&self, type_from: &str, type_to: &str) -> Option<&ConverterDescriptor> {
        self.by_pair
            .get(&(type_from.to_string(), type_to.to_string()))
    }

    /// All converters consuming `type_from`, in registration order.
    pub fn candidates_from(&self, type_from: &str) -> Vector<ConverterDescriptor> {
        self.by_source.get(type_from).cloned().unwrap_or_default()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConverterDescriptor> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }
}
