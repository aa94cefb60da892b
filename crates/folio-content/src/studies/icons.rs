#![forbid(unsafe_code)]

//! "Icons" case study: the icon-system redesign.

use crate::document::{Block, Document, HeadingLevel};

pub fn icons() -> Document {
    use Block::*;
    use HeadingLevel::*;

    Document::new(vec![
        Heading {
            level: H2,
            id: Some("overview"),
            text: "Overview",
        },
        Paragraph(
            "This project involved redesigning the icon system for a design \
system, focusing on consistency, scalability, and improved visual \
communication. The goal was to create a comprehensive icon library that \
could support the growing needs of the product while maintaining clarity \
and accessibility.",
        ),
        Figure {
            label: "icons-overview",
            caption: "Overview of the icon redesign process",
        },
        Heading {
            level: H2,
            id: Some("problem"),
            text: "Problem",
        },
        Paragraph(
            "The existing icon system had several issues: inconsistent stroke \
weights, varying sizes, and lack of a cohesive visual language. This led to \
confusion for designers and developers when selecting appropriate icons for \
different contexts.",
        ),
        Bullets(&[
            "Inconsistent visual weight across icon families",
            "No clear guidelines for icon usage",
            "Limited icon set that didn't cover all use cases",
            "Poor accessibility in smaller sizes",
        ]),
        Heading {
            level: H2,
            id: Some("process"),
            text: "Process",
        },
        Paragraph(
            "We started by auditing all existing icons and identifying common \
patterns. Then we established design principles and created a new icon \
system based on a consistent grid and stroke weight.",
        ),
        Heading {
            level: H3,
            id: Some("research"),
            text: "Research",
        },
        Paragraph(
            "Conducted a comprehensive audit of existing icons, analyzed \
competitor icon systems, and gathered feedback from designers and \
developers.",
        ),
        Heading {
            level: H3,
            id: Some("design"),
            text: "Design",
        },
        Paragraph(
            "Created a unified design system with consistent stroke weights, \
grid-based layouts, and clear guidelines for sizing and usage.",
        ),
        Figure {
            label: "icons-process",
            caption: "Design process and iterations",
        },
        Heading {
            level: H2,
            id: Some("solution"),
            text: "Solution",
        },
        Paragraph("We created a new icon system with the following key improvements:"),
        Bullets(&[
            "Unified stroke weight of 1.5px for consistency",
            "24px base grid system for easy scaling",
            "Comprehensive icon library covering 200+ icons",
            "Clear documentation and usage guidelines",
            "Improved accessibility with better contrast and sizing",
        ]),
        Figure {
            label: "icons-demo",
            caption: "Video demo of icon system",
        },
        Heading {
            level: H2,
            id: Some("results"),
            text: "Results",
        },
        Paragraph(
            "The new icon system has significantly improved consistency across \
the product and reduced design and development time. Designers can now \
easily find and use appropriate icons, while developers have clear \
guidelines for implementation.",
        ),
        Quote {
            text: "The new icon system has made our design process so much more \
efficient. We spend less time searching for icons and more time building \
great experiences.",
            attribution: "— Design Team Lead",
        },
        Divider,
        Heading {
            level: H2,
            id: Some("conclusion"),
            text: "Conclusion",
        },
        Paragraph(
            "This project demonstrated the importance of systematic thinking \
in design. By establishing clear principles and guidelines, we created a \
scalable icon system that will continue to serve the product as it grows.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HeadingLevel, outline};

    #[test]
    fn outline_matches_section_structure() {
        let items = outline(&icons());
        let ids: Vec<&str> = items.iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            [
                "overview",
                "problem",
                "process",
                "research",
                "design",
                "solution",
                "results",
                "conclusion"
            ]
        );
    }

    #[test]
    fn subsections_are_rank_three() {
        let items = outline(&icons());
        for item in items {
            let expected = if item.id == "research" || item.id == "design" {
                HeadingLevel::H3
            } else {
                HeadingLevel::H2
            };
            assert_eq!(item.level, expected, "wrong rank for {}", item.id);
        }
    }

    #[test]
    fn anchor_ids_are_unique() {
        let items = outline(&icons());
        for (idx, item) in items.iter().enumerate() {
            assert!(
                !items.iter().skip(idx + 1).any(|other| other.id == item.id),
                "duplicate anchor id: {}",
                item.id
            );
        }
    }
}
