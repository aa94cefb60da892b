#![forbid(unsafe_code)]

//! Static content for the Folio portfolio: project records, case-study
//! documents, and the registry that maps one to the other.
//!
//! Everything in this crate is defined once at compile time and immutable at
//! runtime. The UI crates consume it read-only; the only derived structure is
//! the document outline ([`document::outline`]), which is recomputed from a
//! [`document::Document`] whenever a case-study page is mounted.

pub mod document;
pub mod project;
pub mod registry;
pub mod site;
pub mod studies;

pub use document::{Block, Document, HeadingLevel, TocItem, outline};
pub use project::{PROJECTS, Project, ProjectId, Tone, find_project};
pub use registry::case_study_for;
