//! Row classification and line rendering.

mod classifier;
mod formatter;
mod record;

pub use classifier::{RecordClassifier, binarize_label};
pub use formatter::{
    LineFormatter, RenderMode, render_bag_of_words, render_inline, render_namespace_names,
};
pub use record::{ClassifiedRecord, Feature};
