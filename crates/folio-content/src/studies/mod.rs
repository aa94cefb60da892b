#![forbid(unsafe_code)]

//! Case-study documents, one builder per project.

mod icons;

pub use icons::icons;

use crate::document::{Block, Document};

/// Fallback document for projects without a written case study.
///
/// Deliberately heading-free: an empty outline is the signal for the table
/// of contents to render nothing.
pub fn placeholder() -> Document {
    Document::new(vec![Block::Paragraph(
        "Project content will go here. This is a placeholder for the project \
details, case study, or any other content you'd like to display.",
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::outline;

    #[test]
    fn placeholder_has_no_outline() {
        assert!(outline(&placeholder()).is_empty());
    }
}
