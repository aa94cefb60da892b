#![forbid(unsafe_code)]

//! Project records shown on the work listing.
//!
//! [`PROJECTS`] is the single source of truth for ordering and metadata, in
//! the same way a screen registry pins ordering for a tab bar: the listing
//! renders it top to bottom, and detail pages resolve ids against it.

use std::fmt;

/// Stable identifier for a project. Ids never change once published because
/// they appear in persisted state and in the detail-page route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Background tone for a project tile without a hero image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Warm,
    Cool,
}

/// A portfolio project. Defined once at load time; immutable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    /// Display tags in presentation order.
    pub tags: &'static [&'static str],
    /// Hero image reference, if the project has one.
    pub image: Option<&'static str>,
    pub tone: Tone,
}

/// All projects, in listing order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "Icons",
        tags: &[
            "Process improvement",
            "UI Design",
            "Design System",
            "Iconography",
        ],
        image: Some("icon-project-card"),
        tone: Tone::Neutral,
    },
    Project {
        id: ProjectId(2),
        title: "Framework",
        tags: &["UX Research", "Process improvement"],
        image: None,
        tone: Tone::Neutral,
    },
    Project {
        id: ProjectId(3),
        title: "Multi-level grouping",
        tags: &["UI Design", "Data Table"],
        image: None,
        tone: Tone::Neutral,
    },
    Project {
        id: ProjectId(4),
        title: "Toolbar",
        tags: &["Design System", "Process improvement"],
        image: None,
        tone: Tone::Neutral,
    },
    Project {
        id: ProjectId(5),
        title: "Tables",
        tags: &["AI", "UX Research"],
        image: None,
        tone: Tone::Neutral,
    },
    Project {
        id: ProjectId(6),
        title: "Vpply design system",
        tags: &["UI Design", "Data Table", "Process improvement"],
        image: None,
        tone: Tone::Neutral,
    },
];

/// Resolve a project id against the registry.
///
/// Unknown ids return `None`; the caller renders a not-found page.
pub fn find_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
