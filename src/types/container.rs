//! Ordered name → tensor mapping

use super::Tensor;
use crate::error::{AccessError, TensorFileError};

/// The in-memory form of a container.
///
/// Iteration order is insertion order, which is also the on-disk order of
/// the descriptor table and data region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorFile {
    fields: Vec<(String, Tensor)>,
}

impl TensorFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Names must be non-empty and unique.
    pub fn insert(&mut self, name: impl Into<String>, tensor: Tensor) -> Result<(), TensorFileError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TensorFileError::InvalidField {
                name,
                reason: "field names must not be empty".into(),
            });
        }
        if self.contains(&name) {
            return Err(TensorFileError::InvalidField {
                name,
                reason: "duplicate field name".into(),
            });
        }
        self.fields.push((name, tensor));
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, tensor: Tensor) -> Result<Self, TensorFileError> {
        self.insert(name, tensor)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but a missing field is an error
    pub fn require(&self, name: &str) -> Result<&Tensor, AccessError> {
        self.get(name).ok_or_else(|| AccessError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<Tensor> {
        let idx = self.fields.iter().position(|(k, _)| k == name)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tensor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for TensorFile {
    type Item = (String, Tensor);
    type IntoIter = std::vec::IntoIter<(String, Tensor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
