//! Flat rows and the header list they share.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::Scalar;

/// A flat mapping of header name to leaf value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRow {
    cells: Vec<(String, Scalar)>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell. An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let name = name.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((name, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.cells
            .iter()
            .find(|(cell, _)| cell == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Scalar> {
        self.cells.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for FlatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Ordered, duplicate-free column names for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderList(Vec<String>);

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header unless it is already present; first-seen position wins.
    pub fn push(&mut self, header: impl Into<String>) {
        let header = header.into();
        if !self.contains(&header) {
            self.0.push(header);
        }
    }

    pub fn contains(&self, header: &str) -> bool {
        self.0.iter().any(|existing| existing == header)
    }

    pub fn position(&self, header: &str) -> Option<usize> {
        self.0.iter().position(|existing| existing == header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the row has exactly these keys in this order.
    pub fn matches_row(&self, row: &FlatRow) -> bool {
        row.len() == self.len() && row.keys().zip(self.iter()).all(|(key, header)| key == header)
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut headers = Self::new();
        for header in iter {
            headers.push(header);
        }
        headers
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
