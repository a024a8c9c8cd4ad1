use itertools::Itertools;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{InMemoryMap, MutableMap};

/// No design is stored under the requested name.
#[derive(Clone, PartialEq, Eq, Error, Debug)]
#[error("no design named {0:?}")]
pub struct UnknownDesign(pub String);

/// Name-keyed storage for serialized designs.
///
/// Contents are held in their wire form (a color name string or a nested
/// four-element array) and treated as opaque; decoding policy stays with
/// the callers. Designs live for the life of the process only.
pub struct DesignStore<M = InMemoryMap<Value>> {
    designs: M,
}

impl Default for DesignStore {
    fn default() -> Self {
        Self::new(InMemoryMap::new())
    }
}

impl<M: MutableMap<Value>> DesignStore<M> {
    pub fn new(designs: M) -> Self {
        Self { designs }
    }

    /// Every saved name, sorted.
    pub fn names(&self) -> Vec<String> {
        self.designs
            .names()
            .into_iter()
            .sorted()
            .map(str::to_owned)
            .collect()
    }

    /// The design saved under `name`.
    pub fn load(&self, name: &str) -> Result<&Value, UnknownDesign> {
        let design = self
            .designs
            .get(name)
            .ok_or_else(|| UnknownDesign(name.to_owned()));
        debug!(name, found = design.is_ok(), "load design");
        design
    }

    /// Saves `content` under `name`. Returns true when this replaced a
    /// previously saved design.
    pub fn save(&mut self, name: impl Into<String>, content: Value) -> bool {
        let name = name.into();
        let replaced = self.designs.insert(name.clone(), content);
        debug!(name = %name, replaced, "saved design");
        replaced
    }
}
