//! Loaders for the reference and submission files

mod resources;
mod tsv;
mod xml;

pub use resources::load_sources;
pub use tsv::{
    load_classification_predictions, load_classification_reference, load_correction_predictions,
    load_correction_reference, load_predicted_spans, load_reference_spans,
};
pub use xml::{load_responses, parse_responses};

use std::path::Path;

/// File name used as the origin of schema errors
fn origin(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
