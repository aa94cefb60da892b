#![forbid(unsafe_code)]

//! Case-study document model and outline derivation.
//!
//! A case study is an ordered list of [`Block`]s. The table of contents is
//! not stored anywhere: it is derived by scanning a document for headings
//! that carry an anchor id ([`outline`]), so the outline can never reference
//! a heading that does not exist and never misses one that does.
//!
//! # Invariants
//!
//! 1. [`outline`] yields exactly one [`TocItem`] per anchored rank-2/3
//!    heading, in document order.
//! 2. Scanning is idempotent: the same document always yields the same
//!    outline.
//! 3. Headings without an anchor id are rendered but never listed.

/// Heading rank. Only ranks 2 and 3 participate in the outline; the page
/// title itself is rank 1 and rendered by the page header, not the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric rank (2 or 3).
    pub const fn rank(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One content block of a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Section heading. `id` is the anchor the ToC navigates to; headings
    /// without one are skipped by the outline scan.
    Heading {
        level: HeadingLevel,
        id: Option<&'static str>,
        text: &'static str,
    },
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    /// An image slot. The terminal port renders a captioned placeholder
    /// frame; `label` names what would be shown.
    Figure {
        label: &'static str,
        caption: &'static str,
    },
    Quote {
        text: &'static str,
        attribution: &'static str,
    },
    Divider,
}

/// A complete case-study document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// An outline entry derived from an anchored heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocItem {
    /// Anchor id, matching the heading it was derived from.
    pub id: &'static str,
    /// The heading's own text.
    pub text: &'static str,
    pub level: HeadingLevel,
}

/// Scan a document for anchored rank-2/3 headings, in document order.
pub fn outline(doc: &Document) -> Vec<TocItem> {
    doc.blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading {
                level,
                id: Some(id),
                text,
            } => Some(TocItem {
                id,
                text,
                level: *level,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(vec![
            Block::Heading {
                level: HeadingLevel::H2,
                id: Some("overview"),
                text: "Overview",
            },
            Block::Paragraph("intro"),
            Block::Heading {
                level: HeadingLevel::H3,
                id: Some("research"),
                text: "Research",
            },
            Block::Heading {
                level: HeadingLevel::H2,
                id: None,
                text: "Unanchored",
            },
            Block::Divider,
            Block::Heading {
                level: HeadingLevel::H2,
                id: Some("results"),
                text: "Results",
            },
        ])
    }

    #[test]
    fn outline_lists_anchored_headings_in_document_order() {
        let items = outline(&sample());
        let ids: Vec<&str> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, ["overview", "research", "results"]);
        assert_eq!(items[0].level.rank(), 2);
        assert_eq!(items[1].level.rank(), 3);
        assert_eq!(items[0].text, "Overview");
    }

    #[test]
    fn unanchored_headings_are_skipped() {
        let items = outline(&sample());
        assert!(items.iter().all(|i| i.text != "Unanchored"));
    }

    #[test]
    fn scan_is_idempotent() {
        let doc = sample();
        assert_eq!(outline(&doc), outline(&doc));
    }

    #[test]
    fn empty_document_yields_empty_outline() {
        assert!(outline(&Document::new(vec![])).is_empty());
    }
}
