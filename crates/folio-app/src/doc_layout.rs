#![forbid(unsafe_code)]

//! Document layout: case-study blocks → styled terminal lines.
//!
//! The layout pass is where heading geometry is born: every anchored
//! heading records the line range its visual block occupies, and that
//! geometry is what the visibility tracker samples against. Anchors are
//! emitted in document order and cover the heading's breathing room (the
//! blank row above and below as well as the text), so partially-scrolled
//! headings produce fractional intersection ratios instead of all-or-nothing
//! flips.
//!
//! Laying out the same document at the same width twice yields identical
//! lines and anchors; a width change re-wraps text but never reorders
//! anchors.

use folio_content::{Block, Document, HeadingLevel};
use folio_ui::tracker::Anchor;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Minimum usable content width; anything narrower is clamped up.
const MIN_WIDTH: u16 = 20;

/// A laid-out document: renderable lines plus heading geometry.
#[derive(Debug, Clone, Default)]
pub struct LaidOut {
    pub lines: Vec<Line<'static>>,
    /// Anchored headings in document order.
    pub anchors: Vec<Anchor>,
}

impl LaidOut {
    /// Total height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Geometry for one anchor id.
    #[must_use]
    pub fn anchor(&self, id: &str) -> Option<Anchor> {
        self.anchors.iter().find(|a| a.id == id).copied()
    }
}

/// Lay a document out at the given content width.
#[must_use]
pub fn layout(doc: &Document, width: u16) -> LaidOut {
    let width = width.max(MIN_WIDTH) as usize;
    let mut out = LaidOut::default();

    for block in &doc.blocks {
        match block {
            Block::Heading { level, id, text } => {
                let block_start = out.lines.len();
                out.lines.push(Line::default());
                let style = match level {
                    HeadingLevel::H2 => theme::heading2(),
                    HeadingLevel::H3 => theme::heading3(),
                };
                let indent = match level {
                    HeadingLevel::H2 => "",
                    HeadingLevel::H3 => "  ",
                };
                for wrapped in wrap(text, width.saturating_sub(indent.len())) {
                    out.lines
                        .push(Line::from(Span::styled(format!("{indent}{wrapped}"), style)));
                }
                out.lines.push(Line::default());
                if let Some(id) = id {
                    out.anchors.push(Anchor {
                        id,
                        start: block_start,
                        len: out.lines.len() - block_start,
                    });
                }
            }
            Block::Paragraph(text) => {
                for wrapped in wrap(text, width) {
                    out.lines
                        .push(Line::from(Span::styled(wrapped, theme::body())));
                }
                out.lines.push(Line::default());
            }
            Block::Bullets(items) => {
                for item in *items {
                    let mut first = true;
                    for wrapped in wrap(item, width.saturating_sub(2)) {
                        let prefix = if first { "• " } else { "  " };
                        first = false;
                        out.lines.push(Line::from(Span::styled(
                            format!("{prefix}{wrapped}"),
                            theme::body(),
                        )));
                    }
                }
                out.lines.push(Line::default());
            }
            Block::Figure { label, caption } => {
                let inner = width.saturating_sub(2);
                out.lines.push(Line::from(Span::styled(
                    format!("╭{}╮", "─".repeat(inner)),
                    theme::divider(),
                )));
                out.lines.push(Line::from(Span::styled(
                    center(&format!("▨ {label}"), width),
                    theme::caption(),
                )));
                out.lines.push(Line::from(Span::styled(
                    format!("╰{}╯", "─".repeat(inner)),
                    theme::divider(),
                )));
                out.lines.push(Line::from(Span::styled(
                    center(caption, width),
                    theme::caption(),
                )));
                out.lines.push(Line::default());
            }
            Block::Quote { text, attribution } => {
                for wrapped in wrap(text, width.saturating_sub(2)) {
                    out.lines.push(Line::from(vec![
                        Span::styled("▌ ", theme::divider()),
                        Span::styled(wrapped, theme::quote()),
                    ]));
                }
                out.lines.push(Line::from(Span::styled(
                    format!("  {attribution}"),
                    theme::caption(),
                )));
                out.lines.push(Line::default());
            }
            Block::Divider => {
                out.lines.push(Line::from(Span::styled(
                    "─".repeat(width),
                    theme::divider(),
                )));
                out.lines.push(Line::default());
            }
        }
    }

    out
}

/// Greedy word wrap against display width.
///
/// Words wider than the line get a line of their own rather than being
/// split mid-glyph.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_owned();
    }
    let pad = (width - text_width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{outline, studies};

    #[test]
    fn anchors_match_outline_in_order() {
        let doc = studies::icons();
        let laid = layout(&doc, 72);
        let anchor_ids: Vec<&str> = laid.anchors.iter().map(|a| a.id).collect();
        let outline_ids: Vec<&str> = outline(&doc).iter().map(|i| i.id).collect();
        assert_eq!(anchor_ids, outline_ids);
    }

    #[test]
    fn anchor_rows_are_strictly_increasing() {
        let laid = layout(&studies::icons(), 72);
        for pair in laid.anchors.windows(2) {
            assert!(
                pair[0].start + pair[0].len <= pair[1].start,
                "overlapping anchors: {pair:?}"
            );
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let doc = studies::icons();
        let a = layout(&doc, 72);
        let b = layout(&doc, 72);
        assert_eq!(a.anchors, b.anchors);
        assert_eq!(a.height(), b.height());
    }

    #[test]
    fn rewrap_preserves_anchor_order() {
        let doc = studies::icons();
        let wide: Vec<&str> = layout(&doc, 100).anchors.iter().map(|a| a.id).collect();
        let narrow: Vec<&str> = layout(&doc, 40).anchors.iter().map(|a| a.id).collect();
        assert_eq!(wide, narrow);
    }

    #[test]
    fn placeholder_has_no_anchors() {
        let laid = layout(&studies::placeholder(), 72);
        assert!(laid.anchors.is_empty());
        assert!(laid.height() > 0);
    }

    #[test]
    fn heading_anchor_covers_breathing_room() {
        let laid = layout(&studies::icons(), 72);
        let overview = laid.anchor("overview").expect("overview anchor");
        // Blank above + text + blank below.
        assert!(overview.len >= 3, "anchor too thin: {overview:?}");
    }

    #[test]
    fn wrap_respects_display_width() {
        use unicode_width::UnicodeWidthStr;
        let text = "the quick brown fox jumps over the lazy dog repeatedly";
        for line in wrap(text, 16) {
            assert!(line.width() <= 16, "line too wide: {line:?}");
        }
    }

    #[test]
    fn wrap_keeps_words_intact() {
        let lines = wrap("alpha beta gamma", 5);
        assert_eq!(lines, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn wrap_of_empty_text_is_single_blank() {
        assert_eq!(wrap("", 10), [""]);
    }
}
