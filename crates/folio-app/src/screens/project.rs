#![forbid(unsafe_code)]

//! Project detail screen: the laid-out case study, the scroll-aware
//! header, and the scroll-spy table of contents.
//!
//! The screen owns the whole reading pipeline: layout produces line
//! geometry, the tracker samples it against the viewport on every tick,
//! and the ToC state machine decides what those samples mean. Mouse hit
//! geometry is recorded during render so event handling always agrees with
//! what was actually drawn.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use folio_content::{Document, Project, ProjectId, case_study_for, find_project, outline, studies};
use folio_ui::prefs;
use folio_ui::scroll::SmoothScroll;
use folio_ui::toc::{TocControl, TocState};
use folio_ui::HeaderVisibility;
use folio_ui::tracker::{Anchor, LineBandTracker, Viewport, VisibilityTracker};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::doc_layout::{self, LaidOut, wrap};
use crate::theme;

use super::{Outcome, Screen, ScreenId, Shared};

/// Document row of the "Back to Work" link in the page prefix.
const BACK_ROW: usize = 1;
/// Max content column width; keeps line length readable on wide terminals.
const MAX_CONTENT_WIDTH: u16 = 72;
/// Horizontal room reserved for the ToC panel when it is shown.
const TOC_GUTTER: u16 = 34;
/// Panel widths.
const PANEL_EXPANDED_W: u16 = 28;
const PANEL_COLLAPSED_W: u16 = 6;

const BACK_LABEL: &str = "← Back to Work";
const UNPIN_TOOLTIP: &str = "Unpin table of contents";
const PIN_TOOLTIP: &str = "Pin table of contents";

/// Hit geometry recorded at the last render.
#[derive(Debug, Default)]
struct TocHits {
    panel: Option<Rect>,
    entries: Vec<(Rect, &'static str)>,
    collapse: Option<Rect>,
    pin: Option<Rect>,
}

pub struct ProjectScreen {
    project: Option<&'static Project>,
    doc: Document,
    toc: TocState,
    tracker: LineBandTracker,
    header: HeaderVisibility,
    laid: LaidOut,
    laid_width: u16,
    scroll: usize,
    smooth: Option<SmoothScroll>,
    content_height: usize,
    hits: TocHits,
    back_hit: Option<Rect>,
    pointer_in_panel: bool,
    pointer_on_collapse: bool,
    pointer_on_pin: bool,
    probed: bool,
}

impl ProjectScreen {
    /// Mount the screen for a project id. The collapsed preference is read
    /// here, before anything renders, so the first paint already shows the
    /// persisted form.
    #[must_use]
    pub fn new(id: ProjectId, shared: &Shared) -> Self {
        let project = find_project(id);
        let doc = match project {
            Some(p) => case_study_for(p.id).unwrap_or_else(studies::placeholder),
            None => studies::placeholder(),
        };
        let items = outline(&doc);
        let collapsed = prefs::toc_collapsed(&*shared.prefs);
        Self {
            project,
            doc,
            toc: TocState::new(items, collapsed),
            tracker: LineBandTracker::new(),
            header: HeaderVisibility::new(),
            laid: LaidOut::default(),
            laid_width: 0,
            scroll: 0,
            smooth: None,
            content_height: 0,
            hits: TocHits::default(),
            back_hit: None,
            pointer_in_panel: false,
            pointer_on_collapse: false,
            pointer_on_pin: false,
            probed: false,
        }
    }

    /// The mounted ToC state (exposed for integration tests).
    #[must_use]
    pub fn toc(&self) -> &TocState {
        &self.toc
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    fn page_prefix(project: &Project, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines: Vec<Line<'static>> = vec![Line::default()];

        lines.push(Line::from(Span::styled(BACK_LABEL, theme::footer_link())));
        lines.push(Line::default());

        let mut chips: Vec<Span<'static>> = Vec::new();
        for tag in project.tags {
            if !chips.is_empty() {
                chips.push(Span::raw(" "));
            }
            chips.push(Span::styled(format!(" {tag} "), theme::chip()));
        }
        if !chips.is_empty() {
            lines.push(Line::from(chips));
            lines.push(Line::default());
        }

        for wrapped in wrap(project.title, width) {
            lines.push(Line::from(Span::styled(wrapped, theme::hero_name())));
        }
        lines.push(Line::default());

        // Hero image slot: a framed placeholder where the hero art would go.
        let inner = width.saturating_sub(2);
        let label = project.image.unwrap_or(project.title);
        lines.push(Line::from(Span::styled(
            format!("╭{}╮", "─".repeat(inner)),
            theme::divider(),
        )));
        lines.push(Line::from(Span::styled(
            format!("│{:^inner$}│", format!("▨ {label}")),
            theme::caption(),
        )));
        lines.push(Line::from(Span::styled(
            format!("╰{}╯", "─".repeat(inner)),
            theme::divider(),
        )));
        lines.push(Line::default());

        lines
    }

    fn relayout(&mut self, width: u16) {
        let mut laid = LaidOut::default();
        if let Some(project) = self.project {
            laid.lines = Self::page_prefix(project, width);
        }
        let body = doc_layout::layout(&self.doc, width);
        let shift = laid.lines.len();
        laid.lines.extend(body.lines);
        laid.anchors = body
            .anchors
            .iter()
            .map(|a| Anchor {
                id: a.id,
                start: a.start + shift,
                len: a.len,
            })
            .collect();
        self.tracker.observe(laid.anchors.clone());
        self.laid = laid;
        self.laid_width = width;
    }

    fn max_scroll(&self) -> usize {
        self.laid.height().saturating_sub(self.content_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn scroll_by(&mut self, delta: isize) {
        // Manual scrolling takes over from any animated one.
        self.smooth = None;
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = self.scroll.saturating_add(delta as usize);
        }
        self.clamp_scroll();
    }

    fn scroll_to(&mut self, offset: usize) {
        self.smooth = None;
        self.scroll = offset;
        self.clamp_scroll();
    }

    fn toggle_collapsed(&mut self, shared: &Shared) {
        if self.toc.is_collapsed() {
            self.toc.hover_leave();
            self.toc.expand_via_click();
        } else {
            self.toc.collapse();
        }
        prefs::set_toc_collapsed(&*shared.prefs, self.toc.is_collapsed());
    }

    fn navigate_toc(&mut self, id: &'static str, now: Instant) {
        let Some(anchor) = self.laid.anchor(id) else {
            return;
        };
        if let Some(target) = self.toc.navigate_to(id, anchor.start, self.scroll, now) {
            let target = target.min(self.max_scroll());
            self.smooth = Some(SmoothScroll::new(self.scroll, target, now));
        }
    }

    fn on_mouse(&mut self, mouse: &MouseEvent, shared: &mut Shared, now: Instant) -> Outcome {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::Moved => self.on_pointer_moved(pos, now),
            MouseEventKind::Down(MouseButton::Left) => return self.on_click(pos, shared, now),
            _ => {}
        }
        Outcome::None
    }

    fn on_pointer_moved(&mut self, pos: Position, now: Instant) {
        let in_panel = self.hits.panel.is_some_and(|rect| rect.contains(pos));
        if in_panel && !self.pointer_in_panel {
            self.toc.hover_enter();
        } else if !in_panel && self.pointer_in_panel {
            self.toc.hover_leave();
        }
        self.pointer_in_panel = in_panel;

        let on_collapse = self.hits.collapse.is_some_and(|rect| rect.contains(pos));
        if on_collapse && !self.pointer_on_collapse {
            self.toc.control_hover_enter(TocControl::Collapse, now);
        } else if !on_collapse && self.pointer_on_collapse {
            self.toc.control_hover_leave(TocControl::Collapse);
        }
        self.pointer_on_collapse = on_collapse;

        let on_pin = self.hits.pin.is_some_and(|rect| rect.contains(pos));
        if on_pin && !self.pointer_on_pin {
            self.toc.control_hover_enter(TocControl::Pin, now);
        } else if !on_pin && self.pointer_on_pin {
            self.toc.control_hover_leave(TocControl::Pin);
        }
        self.pointer_on_pin = on_pin;
    }

    fn on_click(&mut self, pos: Position, shared: &mut Shared, now: Instant) -> Outcome {
        if self.back_hit.is_some_and(|rect| rect.contains(pos)) {
            return Outcome::Navigate(ScreenId::Work);
        }
        if self.hits.collapse.is_some_and(|rect| rect.contains(pos)) {
            self.toc.collapse();
            prefs::set_toc_collapsed(&*shared.prefs, true);
            return Outcome::None;
        }
        if self.hits.pin.is_some_and(|rect| rect.contains(pos)) {
            self.toc.pin(now);
            prefs::set_toc_collapsed(&*shared.prefs, false);
            return Outcome::None;
        }
        let entry = self
            .hits
            .entries
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, id)| id);
        if let Some(id) = entry {
            self.navigate_toc(id, now);
            return Outcome::None;
        }
        if self.hits.panel.is_some_and(|rect| rect.contains(pos)) && self.toc.is_collapsed() {
            let was_collapsed = self.toc.is_collapsed();
            self.toc.expand_via_click();
            if was_collapsed != self.toc.is_collapsed() {
                prefs::set_toc_collapsed(&*shared.prefs, false);
            }
        }
        Outcome::None
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    fn render_not_found(&mut self, frame: &mut Frame, area: Rect) {
        let content = Rect {
            x: area.x + theme::PAGE_MARGIN,
            y: area.y,
            width: area.width.saturating_sub(theme::PAGE_MARGIN * 2),
            height: area.height,
        };
        if content.width == 0 || content.height < 4 {
            return;
        }
        let lines = vec![
            Line::default(),
            Line::from(Span::styled("Project not found", theme::heading2())),
            Line::default(),
            Line::from(Span::styled("← Back to home", theme::footer_link())),
        ];
        frame.render_widget(Paragraph::new(Text::from(lines)), content);
        self.back_hit = Some(Rect::new(
            content.x,
            content.y + 3,
            BACK_LABEL.width() as u16,
            1,
        ));
    }

    fn render_toc(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        self.hits = TocHits::default();
        if self.toc.is_empty() {
            return;
        }

        let overlay = self.toc.overlay_visible();
        let expanded = !self.toc.is_collapsed() || overlay;
        let panel_w = if expanded {
            PANEL_EXPANDED_W
        } else {
            PANEL_COLLAPSED_W
        };
        let items = self.toc.items().to_vec();
        let inner_rows = items.len() as u16 + u16::from(expanded);
        let panel_h = (inner_rows + 2).min(area.height.saturating_sub(2));
        if panel_h < 3 || area.width < panel_w + 4 {
            return;
        }
        let panel = Rect::new(
            (area.x + area.width).saturating_sub(panel_w + 2),
            area.y + 1,
            panel_w,
            panel_h,
        );

        frame.render_widget(Clear, panel);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::divider());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        self.hits.panel = Some(panel);

        if expanded {
            // Header row: label plus the collapse (pinned form) or pin
            // (hover overlay) control.
            let header_row = Rect::new(inner.x, inner.y, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("CONTENTS", theme::toc_heading()))),
                header_row,
            );
            let button = Rect::new(inner.x + inner.width.saturating_sub(3), inner.y, 3, 1);
            let glyph = if overlay { "[+]" } else { "[–]" };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(glyph, theme::toc_control()))),
                button,
            );
            if overlay {
                self.hits.pin = Some(button);
            } else {
                self.hits.collapse = Some(button);
            }

            let active = self.toc.active_id();
            for (idx, item) in items.iter().enumerate() {
                let y = inner.y + 1 + idx as u16;
                if y >= inner.y + inner.height {
                    break;
                }
                let row = Rect::new(inner.x, y, inner.width, 1);
                let indent = if item.level.rank() == 3 { "  " } else { "" };
                let label = truncate_to(item.text, (inner.width as usize).saturating_sub(indent.len() + 1));
                let is_active = active == Some(item.id);
                let style = if is_active {
                    theme::toc_active()
                } else {
                    theme::toc_inactive()
                };
                let text = format!(" {indent}{label}");
                let padded = format!("{text:<width$}", width = inner.width as usize);
                frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, style))), row);
                self.hits.entries.push((row, item.id));
            }
        } else {
            // Collapsed form: indicator bars, wide for sections, short for
            // subsections. Visual only; the hover overlay owns interaction.
            let active = self.toc.active_id();
            for (idx, item) in items.iter().enumerate() {
                let y = inner.y + idx as u16;
                if y >= inner.y + inner.height {
                    break;
                }
                let row = Rect::new(inner.x, y, inner.width, 1);
                let bar = if item.level.rank() == 2 { "━━━━" } else { "━━" };
                let style = if active == Some(item.id) {
                    theme::toc_bar_active()
                } else {
                    theme::toc_bar_inactive()
                };
                let padded = format!("{bar:>width$}", width = inner.width as usize);
                frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, style))), row);
            }
        }

        // Control tooltips, shown to the left of the panel.
        let tooltip = if self.toc.tooltip_visible(TocControl::Collapse, now) {
            Some(UNPIN_TOOLTIP)
        } else if self.toc.tooltip_visible(TocControl::Pin, now) {
            Some(PIN_TOOLTIP)
        } else {
            None
        };
        if let Some(text) = tooltip {
            let w = text.width() as u16 + 2;
            let x = panel.x.saturating_sub(w + 1);
            if x > area.x {
                let rect = Rect::new(x, panel.y + 1, w, 1);
                frame.render_widget(Clear, rect);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!(" {text} "),
                        theme::tooltip(),
                    ))),
                    rect,
                );
            }
        }
    }
}

fn truncate_to(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_owned();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.to_string().width();
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl Screen for ProjectScreen {
    fn title(&self) -> &'static str {
        "Project"
    }

    fn update(&mut self, event: &Event, shared: &mut Shared, now: Instant) -> Outcome {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                    Outcome::Navigate(ScreenId::Work)
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_by(-1);
                    Outcome::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_by(1);
                    Outcome::None
                }
                KeyCode::PageUp => {
                    self.scroll_by(-(self.content_height.saturating_sub(1) as isize));
                    Outcome::None
                }
                KeyCode::PageDown => {
                    self.scroll_by(self.content_height.saturating_sub(1) as isize);
                    Outcome::None
                }
                KeyCode::Home => {
                    self.scroll_to(0);
                    Outcome::None
                }
                KeyCode::End => {
                    self.scroll_to(usize::MAX);
                    Outcome::None
                }
                KeyCode::Char('t') => {
                    if !self.toc.is_empty() {
                        self.toggle_collapsed(shared);
                    }
                    Outcome::None
                }
                _ => Outcome::None,
            },
            Event::Mouse(mouse) => self.on_mouse(mouse, shared, now),
            _ => Outcome::None,
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(smooth) = self.smooth {
            self.scroll = smooth.offset(now);
            if smooth.is_complete(now) {
                self.smooth = None;
            }
        }
        self.clamp_scroll();
        self.header.on_scroll(self.scroll, now);

        if self.content_height == 0 {
            return;
        }
        let viewport = Viewport::new(self.scroll, self.content_height);
        let entries = self.tracker.sample(viewport);
        self.toc.on_visibility(&entries, now);

        if !self.probed {
            self.probed = true;
            if self.toc.active_id().is_none() {
                let first_in_view = self
                    .tracker
                    .first_anchor()
                    .is_some_and(|a| a.start < viewport.bottom());
                self.toc.ensure_initial_active(first_in_view);
            }
        }
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, _shared: &Shared, now: Instant) {
        self.back_hit = None;
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.project.is_none() {
            self.hits = TocHits::default();
            return self.render_not_found(frame, area);
        }

        let toc_shown = !self.toc.is_empty() && area.width >= theme::TOC_MIN_TERM_WIDTH;
        let gutter = if toc_shown { TOC_GUTTER } else { 0 };
        let content_w = area
            .width
            .saturating_sub(theme::PAGE_MARGIN * 2 + gutter)
            .min(MAX_CONTENT_WIDTH);
        if content_w == 0 {
            return;
        }
        if self.laid_width != content_w {
            self.relayout(content_w);
        }
        self.content_height = area.height as usize;
        self.clamp_scroll();

        let end = (self.scroll + self.content_height).min(self.laid.height());
        let visible: Vec<Line<'static>> = self.laid.lines[self.scroll..end].to_vec();
        let content = Rect::new(area.x + theme::PAGE_MARGIN, area.y, content_w, area.height);
        frame.render_widget(Paragraph::new(Text::from(visible)), content);

        // Back link hit box, only while its row is on screen.
        if BACK_ROW >= self.scroll && BACK_ROW < end {
            self.back_hit = Some(Rect::new(
                content.x,
                content.y + (BACK_ROW - self.scroll) as u16,
                BACK_LABEL.width() as u16,
                1,
            ));
        }

        if toc_shown {
            self.render_toc(frame, area, now);
        } else {
            self.hits = TocHits::default();
        }
    }

    fn header_reveal(&self, now: Instant) -> f32 {
        self.header.reveal_fraction(now)
    }

    /// Detail pages keep the full height for reading; no footer.
    fn shows_footer(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::MemoryStore;
    use std::sync::Arc;

    fn shared() -> Shared {
        Shared::without_clipboard(Arc::new(MemoryStore::new()))
    }

    fn mounted(id: u32) -> ProjectScreen {
        let shared = shared();
        let mut screen = ProjectScreen::new(ProjectId(id), &shared);
        screen.relayout(72);
        screen.content_height = 40;
        screen
    }

    #[test]
    fn unknown_project_mounts_not_found() {
        let shared = shared();
        let screen = ProjectScreen::new(ProjectId(999), &shared);
        assert!(screen.project.is_none());
        assert!(screen.toc().is_empty());
    }

    #[test]
    fn project_without_study_has_empty_toc() {
        let screen = mounted(2);
        assert!(screen.toc().is_empty());
        assert!(screen.laid.anchors.is_empty());
    }

    #[test]
    fn icons_project_outline_is_anchored_in_order() {
        let screen = mounted(1);
        let ids: Vec<&str> = screen.laid.anchors.iter().map(|a| a.id).collect();
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
    fn remount_yields_identical_outline() {
        let a = mounted(1);
        let b = mounted(1);
        assert_eq!(a.laid.anchors, b.laid.anchors);
        let a_items: Vec<_> = a.toc().items().to_vec();
        let b_items: Vec<_> = b.toc().items().to_vec();
        assert_eq!(a_items, b_items);
    }

    #[test]
    fn tick_activates_first_heading_at_top() {
        let mut screen = mounted(1);
        screen.tick(Instant::now());
        assert_eq!(screen.toc().active_id(), Some("overview"));
    }

    #[test]
    fn toc_click_scrolls_and_pins_active() {
        let now = Instant::now();
        let mut screen = mounted(1);
        screen.tick(now);
        screen.navigate_toc("results", now);
        assert_eq!(screen.toc().active_id(), Some("results"));
        assert!(screen.smooth.is_some(), "click starts a smooth scroll");

        // Ticks mid-flight keep the clicked heading active even while other
        // headings pass through the reading band.
        let mut t = now;
        for _ in 0..20 {
            t += std::time::Duration::from_millis(30);
            screen.tick(t);
            assert_eq!(screen.toc().active_id(), Some("results"));
        }
    }

    #[test]
    fn collapsed_preference_applies_at_mount() {
        let store = Arc::new(MemoryStore::new());
        prefs::set_toc_collapsed(&*store, true);
        let shared = Shared::without_clipboard(store);
        let screen = ProjectScreen::new(ProjectId(1), &shared);
        assert!(screen.toc().is_collapsed());
    }

    #[test]
    fn keyboard_toggle_persists_collapsed_flag() {
        let store = Arc::new(MemoryStore::new());
        let shared =
            Shared::without_clipboard(Arc::clone(&store) as Arc<dyn prefs::PreferenceStore>);
        let mut screen = ProjectScreen::new(ProjectId(1), &shared);
        screen.toggle_collapsed(&shared);
        assert!(screen.toc().is_collapsed());
        assert!(prefs::toc_collapsed(&*store));
    }

    #[test]
    fn manual_scroll_cancels_smooth_scroll() {
        let now = Instant::now();
        let mut screen = mounted(1);
        screen.navigate_toc("conclusion", now);
        assert!(screen.smooth.is_some());
        screen.scroll_by(-1);
        assert!(screen.smooth.is_none());
    }
}
