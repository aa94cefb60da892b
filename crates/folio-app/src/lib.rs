#![forbid(unsafe_code)]

//! The `folio` terminal portfolio application.
//!
//! Wires the static content and the interaction state machines to a
//! ratatui/crossterm terminal: three navigable pages (work listing, about,
//! project detail), a scroll-aware page header, and the scroll-spy table of
//! contents on case-study pages.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod doc_layout;
pub mod logging;
pub mod screens;
pub mod theme;
