//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use springsmith_core::{last_segment, strip_last_segment};

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use springsmith_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "List");
/// imports.add_qualified("java.util.Optional");
/// imports.add("org.springframework.stereotype", "Service");
///
/// assert_eq!(imports.qualified_names(), vec![
///     "java.util.List",
///     "java.util.Optional",
///     "org.springframework.stereotype.Service",
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a dotted qualified name. Unqualified names are ignored.
    pub fn add_qualified(&mut self, name: &str) {
        if let Some(module) = strip_last_segment(name) {
            self.add(module, last_segment(name));
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Drop every module for which `keep` returns false.
    pub fn retain_modules(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.imports.retain(|module, _| keep(module));
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every imported symbol as a qualified name, sorted.
    pub fn qualified_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .iter()
            .flat_map(|(module, symbols)| symbols.iter().map(move |s| format!("{}.{}", module, s)))
            .collect();
        names.sort();
        names
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
