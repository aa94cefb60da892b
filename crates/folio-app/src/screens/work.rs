#![forbid(unsafe_code)]

//! Work screen: landing hero plus the project grid.
//!
//! The grid has two presentations — card tiles or compact list rows —
//! persisted as the `view_mode` preference. The mode is read once at
//! construction, before the first paint, so reopening the app can never
//! flash the other mode.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use folio_content::{PROJECTS, Project, ProjectId, site};
use folio_ui::prefs::{self, ViewMode};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::doc_layout::wrap;
use crate::theme;

use super::{Outcome, Screen, ScreenId, Shared};

/// Card tile height including its border.
const CARD_HEIGHT: u16 = 4;
/// Gap between card columns.
const CARD_GAP: u16 = 2;

pub struct WorkScreen {
    view_mode: ViewMode,
    selected: usize,
    /// Project hit boxes recorded at the last render.
    hits: Vec<(Rect, ProjectId)>,
    /// The view-mode toggle's hit box.
    toggle_hit: Option<Rect>,
}

impl WorkScreen {
    #[must_use]
    pub fn new(shared: &Shared) -> Self {
        Self {
            view_mode: prefs::view_mode(&*shared.prefs),
            selected: 0,
            hits: Vec::new(),
            toggle_hit: None,
        }
    }

    /// The persisted presentation currently in effect.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn toggle_view(&mut self, shared: &Shared) {
        self.view_mode = self.view_mode.toggled();
        prefs::set_view_mode(&*shared.prefs, self.view_mode);
    }

    fn move_selection(&mut self, delta: isize) {
        let len = PROJECTS.len() as isize;
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).rem_euclid(len);
        self.selected = next as usize;
    }

    fn selected_project(&self) -> &'static Project {
        &PROJECTS[self.selected.min(PROJECTS.len() - 1)]
    }

    fn tags_line(project: &Project) -> String {
        project.tags.join(" · ")
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect, width: usize) -> u16 {
        let mut lines: Vec<Line<'static>> = vec![
            Line::default(),
            Line::from(Span::styled(site::NAME, theme::hero_name())),
            Line::from(Span::styled(site::ROLE, theme::caption())),
            Line::default(),
        ];
        for wrapped in wrap(site::TAGLINE, width) {
            lines.push(Line::from(Span::styled(wrapped, theme::heading2())));
        }
        lines.push(Line::default());
        for wrapped in wrap(site::BLURB, width) {
            lines.push(Line::from(Span::styled(wrapped, theme::body())));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(site::CONTACT_HEADING.to_owned(), theme::card_title()),
            Span::styled("  —  ".to_owned(), theme::footer()),
            Span::styled(site::CONTACT_LINE.to_owned(), theme::caption()),
        ]));
        lines.push(Line::default());

        let height = (lines.len() as u16).min(area.height);
        let hero = Rect::new(area.x, area.y, area.width, height);
        frame.render_widget(Paragraph::new(Text::from(lines)), hero);
        height
    }

    fn render_grid_header(&mut self, frame: &mut Frame, area: Rect, y: u16) -> u16 {
        if y >= area.y + area.height {
            self.toggle_hit = None;
            return y;
        }
        let row = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Featured projects",
                theme::heading2(),
            ))),
            row,
        );

        let label = match self.view_mode {
            ViewMode::Card => "view: ⊞ card",
            ViewMode::List => "view: ☰ list",
        };
        let w = label.width() as u16;
        let toggle = Rect::new((area.x + area.width).saturating_sub(w), y, w, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, theme::toc_control()))),
            toggle,
        );
        self.toggle_hit = Some(toggle);
        y + 2
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, mut y: u16) {
        let card_w = (area.width.saturating_sub(CARD_GAP)) / 2;
        if card_w < 10 {
            return self.render_list(frame, area, y);
        }
        for (idx, project) in PROJECTS.iter().enumerate() {
            let col = (idx % 2) as u16;
            if idx > 0 && col == 0 {
                y += CARD_HEIGHT;
            }
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let x = area.x + col * (card_w + CARD_GAP);
            let card = Rect::new(x, y, card_w, CARD_HEIGHT);
            let selected = idx == self.selected;
            let border_style = if selected {
                theme::card_selected()
            } else {
                theme::divider()
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style);
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let title = if project.image.is_some() {
                format!("▨ {}", project.title)
            } else {
                project.title.to_owned()
            };
            let content = Text::from(vec![
                Line::from(Span::styled(title, theme::card_title())),
                Line::from(Span::styled(Self::tags_line(project), theme::caption())),
            ]);
            frame.render_widget(Paragraph::new(content), inner);
            self.hits.push((card, project.id));
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, y: u16) {
        for (idx, project) in PROJECTS.iter().enumerate() {
            let row_y = y + idx as u16;
            if row_y >= area.y + area.height {
                break;
            }
            let row = Rect::new(area.x, row_y, area.width, 1);
            let selected = idx == self.selected;
            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected {
                theme::card_selected()
            } else {
                theme::card_title()
            };
            let line = Line::from(vec![
                Span::styled(marker.to_owned(), title_style),
                Span::styled(project.title.to_owned(), title_style),
                Span::styled("  — ".to_owned(), theme::footer()),
                Span::styled(Self::tags_line(project), theme::caption()),
            ]);
            frame.render_widget(Paragraph::new(line), row);
            self.hits.push((row, project.id));
        }
    }
}

impl Screen for WorkScreen {
    fn title(&self) -> &'static str {
        "Work"
    }

    fn update(&mut self, event: &Event, shared: &mut Shared, _now: Instant) -> Outcome {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('v') => {
                    self.toggle_view(shared);
                    Outcome::None
                }
                KeyCode::Enter => Outcome::Navigate(ScreenId::Project(self.selected_project().id)),
                KeyCode::Up | KeyCode::Char('k') => {
                    let step = match self.view_mode {
                        ViewMode::Card => -2,
                        ViewMode::List => -1,
                    };
                    self.move_selection(step);
                    Outcome::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let step = match self.view_mode {
                        ViewMode::Card => 2,
                        ViewMode::List => 1,
                    };
                    self.move_selection(step);
                    Outcome::None
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.move_selection(-1);
                    Outcome::None
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.move_selection(1);
                    Outcome::None
                }
                _ => Outcome::None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let pos = Position::new(mouse.column, mouse.row);
                    if self.toggle_hit.is_some_and(|rect| rect.contains(pos)) {
                        self.toggle_view(shared);
                        return Outcome::None;
                    }
                    for &(rect, id) in &self.hits {
                        if rect.contains(pos) {
                            return Outcome::Navigate(ScreenId::Project(id));
                        }
                    }
                    Outcome::None
                }
                _ => Outcome::None,
            },
            _ => Outcome::None,
        }
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, _shared: &Shared, _now: Instant) {
        self.hits.clear();

        let content = Rect {
            x: area.x + theme::PAGE_MARGIN,
            y: area.y,
            width: area.width.saturating_sub(theme::PAGE_MARGIN * 2),
            height: area.height,
        };
        if content.width == 0 || content.height == 0 {
            return;
        }

        let text_width = (content.width as usize).min(72);
        let hero_height = self.render_hero(frame, content, text_width);
        let y = self.render_grid_header(frame, content, content.y + hero_height);

        match self.view_mode {
            ViewMode::Card => self.render_cards(frame, content, y),
            ViewMode::List => self.render_list(frame, content, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::MemoryStore;
    use std::sync::Arc;

    fn shared_with(mode: Option<ViewMode>) -> Shared {
        let store = MemoryStore::new();
        if let Some(mode) = mode {
            prefs::set_view_mode(&store, mode);
        }
        Shared::without_clipboard(Arc::new(store))
    }

    #[test]
    fn view_mode_defaults_to_card() {
        let shared = shared_with(None);
        assert_eq!(WorkScreen::new(&shared).view_mode(), ViewMode::Card);
    }

    #[test]
    fn persisted_view_mode_applies_before_first_paint() {
        let shared = shared_with(Some(ViewMode::List));
        // Construction alone fixes the mode; no render has happened yet.
        assert_eq!(WorkScreen::new(&shared).view_mode(), ViewMode::List);
    }

    #[test]
    fn toggle_persists_for_next_session() {
        let shared = shared_with(None);
        let mut screen = WorkScreen::new(&shared);
        screen.toggle_view(&shared);
        assert_eq!(screen.view_mode(), ViewMode::List);
        // A "reload" sees the stored value.
        assert_eq!(WorkScreen::new(&shared).view_mode(), ViewMode::List);
    }

    #[test]
    fn selection_wraps_both_directions() {
        let shared = shared_with(None);
        let mut screen = WorkScreen::new(&shared);
        screen.move_selection(-1);
        assert_eq!(screen.selected, PROJECTS.len() - 1);
        screen.move_selection(1);
        assert_eq!(screen.selected, 0);
    }
}
