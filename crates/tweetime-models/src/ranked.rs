//! Ranked busiest-day groups.
//!
//! A mapping from a category label to its ranked text entries. Iteration
//! order is insertion order, which is also the ranking order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from category label to ranked entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl RankedGroups {
    /// Creates an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category. Re-inserting an existing label replaces its
    /// entries but keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, entries: Vec<String>) {
        self.groups.insert(label.into(), entries);
    }

    /// Returns the entries for a category.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Iterates categories in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(label, entries)| (label.as_str(), entries.as_slice()))
    }

    /// Category labels in ranking order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<L, E> FromIterator<(L, Vec<E>)> for RankedGroups
where
    L: Into<String>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<E>)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (label, entries) in iter {
            groups.insert(label, entries.into_iter().map(Into::into).collect());
        }
        groups
    }
}
