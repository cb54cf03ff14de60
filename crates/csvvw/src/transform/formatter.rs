//! Renders classified records as Vowpal Wabbit input lines.
//!
//! Three mutually exclusive modes share the label and namespace helpers.
//! Named namespaces are rendered as `|ns value...` in inline and
//! namespace-names modes and dropped in bag-of-words mode.

use serde::{Deserialize, Serialize};

use super::record::{ClassifiedRecord, Feature};

/// Separator opening the feature section of a line.
const MARKER: &str = " |";
/// Namespace holding numeric features in namespace-names mode.
const NUMERIC_NAMESPACE: &str = "numeric";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Values only. `label_marker` controls the ` |` after the label.
    BagOfWords { label_marker: bool },
    /// Each string feature in its own namespace, numerics under `|numeric`.
    NamespaceNames,
    /// `name_value` strings and `name:value` numerics in one namespace.
    Inline,
}

impl RenderMode {
    /// Select the mode from configuration flags; `bow` wins.
    pub fn from_flags(bow: bool, namespace_names: bool) -> Self {
        if bow {
            RenderMode::BagOfWords {
                label_marker: !namespace_names,
            }
        } else if namespace_names {
            RenderMode::NamespaceNames
        } else {
            RenderMode::Inline
        }
    }

    pub fn render(&self, record: &ClassifiedRecord<'_>) -> String {
        match *self {
            RenderMode::BagOfWords { label_marker } => render_bag_of_words(record, label_marker),
            RenderMode::NamespaceNames => render_namespace_names(record),
            RenderMode::Inline => render_inline(record),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::BagOfWords { .. } => "bag of words",
            RenderMode::NamespaceNames => "namespace names",
            RenderMode::Inline => "inline",
        }
    }
}

/// Formats records under a fixed [`RenderMode`].
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter {
    mode: RenderMode,
}

impl LineFormatter {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render one line, without a trailing newline.
    pub fn format(&self, record: &ClassifiedRecord<'_>) -> String {
        self.mode.render(record)
    }
}

/// `label |` followed by bare values of the string then numeric groups.
pub fn render_bag_of_words(record: &ClassifiedRecord<'_>, label_marker: bool) -> String {
    let mut line = String::with_capacity(line_capacity(record));
    line.push_str(record.label);
    if label_marker {
        line.push_str(MARKER);
    }

    for feature in record.string_group.iter().chain(&record.numeric_group) {
        line.push(' ');
        line.push_str(feature.value);
    }

    line
}

/// `label |a x |b y |numeric n:1 |ns v`
pub fn render_namespace_names(record: &ClassifiedRecord<'_>) -> String {
    let mut line = String::with_capacity(line_capacity(record));
    line.push_str(record.label);

    for feature in &record.string_group {
        line.push_str(MARKER);
        line.push_str(feature.name);
        line.push(' ');
        line.push_str(feature.value);
    }

    line.push_str(MARKER);
    line.push_str(NUMERIC_NAMESPACE);
    push_numeric(&mut line, &record.numeric_group);
    push_namespaces(&mut line, record);

    line
}

/// `label | a_x n:1 |ns v`
pub fn render_inline(record: &ClassifiedRecord<'_>) -> String {
    let mut line = String::with_capacity(line_capacity(record));
    line.push_str(record.label);
    line.push_str(MARKER);

    for feature in &record.string_group {
        line.push(' ');
        line.push_str(feature.name);
        line.push('_');
        line.push_str(feature.value);
    }

    push_numeric(&mut line, &record.numeric_group);
    push_namespaces(&mut line, record);

    line
}

fn push_numeric(line: &mut String, features: &[Feature<'_>]) {
    for feature in features {
        line.push(' ');
        line.push_str(feature.name);
        line.push(':');
        line.push_str(feature.value);
    }
}

/// Named namespaces drop feature names and keep values only.
fn push_namespaces(line: &mut String, record: &ClassifiedRecord<'_>) {
    for (namespace, features) in &record.namespaces {
        line.push_str(MARKER);
        line.push_str(namespace);
        for feature in features {
            line.push(' ');
            line.push_str(feature.value);
        }
    }
}

fn line_capacity(record: &ClassifiedRecord<'_>) -> usize {
    let features: usize = record
        .string_group
        .iter()
        .chain(&record.numeric_group)
        .chain(record.namespaces.values().flatten())
        .map(|f| f.name.len() + f.value.len() + 2)
        .sum();
    let namespaces: usize = record.namespaces.keys().map(|ns| ns.len() + 2).sum();

    record.label.len() + MARKER.len() + NUMERIC_NAMESPACE.len() + features + namespaces
}
