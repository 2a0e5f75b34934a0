//! Declared resource types.

use sdesa_core::ResourceTypeId;

use crate::{ModelError, ModelResult, NameMap};

/// Name ↔ id table of resource types ("loader", "spotter", …).
///
/// Activities and resources refer to types by [`ResourceTypeId`]; a type
/// must be declared here before anything may reference it.
#[derive(Clone, Debug, Default)]
pub struct ResourceTypes {
    names:   Vec<String>,
    by_name: NameMap<ResourceTypeId>,
}

impl ResourceTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`, returning its id.
    ///
    /// Declaring the same name twice returns the existing id.
    pub fn declare(&mut self, name: impl Into<String>) -> ModelResult<ResourceTypeId> {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return Ok(id);
        }
        let id = ResourceTypeId::try_from(self.names.len())
            .ok()
            .filter(|id| *id != ResourceTypeId::INVALID)
            .ok_or(ModelError::CapacityExceeded("resource types"))?;
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Option<ResourceTypeId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: ResourceTypeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn contains(&self, id: ResourceTypeId) -> bool {
        id.index() < self.names.len()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceTypeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (ResourceTypeId(i as u16), n.as_str()))
    }
}
