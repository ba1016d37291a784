//! Ordered option store with composite-key lookup
//!
//! Owns every `ConfOption` for one editing session. Construction order is
//! the catalog's table order and is the authoritative display order. The
//! store has exactly one owner for the lifetime of the session; nothing here
//! needs locking.

use std::collections::HashMap;

use super::catalog::{build_catalog, HostFacts};
use super::option::{ConfFile, ConfOption};

pub struct ConfStore {
    options: Vec<ConfOption>,
    index: HashMap<(String, ConfFile), usize>,
}

impl ConfStore {
    /// Build the store for the detected host
    pub fn new(facts: &HostFacts) -> Self {
        Self::from_options(build_catalog(facts))
    }

    pub fn from_options(options: Vec<ConfOption>) -> Self {
        let index = options
            .iter()
            .enumerate()
            .map(|(i, o)| ((o.name.clone(), o.file), i))
            .collect();
        Self { options, index }
    }

    /// Look an option up by its composite identity
    pub fn find(&self, name: &str, file: ConfFile) -> Option<usize> {
        self.index.get(&(name.to_string(), file)).copied()
    }

    pub fn get(&self, idx: usize) -> Option<&ConfOption> {
        self.options.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut ConfOption> {
        self.options.get_mut(idx)
    }

    /// All options in display order
    pub fn iter(&self) -> impl Iterator<Item = &ConfOption> {
        self.options.iter()
    }

    /// Options belonging to one file, in display order
    pub fn iter_file(&self, file: ConfFile) -> impl Iterator<Item = &ConfOption> {
        self.options.iter().filter(move |o| o.file == file)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of options currently customized away from their default
    pub fn modified_count(&self) -> usize {
        self.options.iter().filter(|o| !o.is_default()).count()
    }

    /// Restore every option to its default value
    pub fn reset_all(&mut self) {
        for opt in &mut self.options {
            opt.reset_to_default();
        }
    }
}
