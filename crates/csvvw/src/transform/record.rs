//! Per-row feature grouping.

use indexmap::IndexMap;

/// A named raw value borrowed from an input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Feature<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// One input row split into label and feature groups.
///
/// Built fresh per row and dropped once rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedRecord<'a> {
    /// Label text; empty when no label is configured or present.
    pub label: &'a str,
    /// String-typed features in column order.
    pub string_group: Vec<Feature<'a>>,
    /// Integer and float features in column order.
    pub numeric_group: Vec<Feature<'a>>,
    /// Explicitly assigned namespaces, in order of first use.
    pub namespaces: IndexMap<&'a str, Vec<Feature<'a>>>,
}

impl<'a> ClassifiedRecord<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    pub fn push_namespaced(&mut self, namespace: &'a str, feature: Feature<'a>) {
        self.namespaces.entry(namespace).or_default().push(feature);
    }

    /// Total number of features across all groups.
    pub fn feature_count(&self) -> usize {
        self.string_group.len()
            + self.numeric_group.len()
            + self.namespaces.values().map(Vec::len).sum::<usize>()
    }
}
