#![forbid(unsafe_code)]

//! Application model and event loop.
//!
//! Single-threaded and event-driven: terminal events and a ~60ms tick both
//! feed the current screen, and navigation swaps screens in place. Screen
//! constructors read their persisted preferences before the first draw, so
//! nothing ever flashes the wrong default.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::chrome;
use crate::screens::about::AboutScreen;
use crate::screens::project::ProjectScreen;
use crate::screens::work::WorkScreen;
use crate::screens::{Outcome, Screen, ScreenId, Shared};

/// Tick cadence for animations and visibility sampling.
const TICK: Duration = Duration::from_millis(60);

enum ActiveScreen {
    Work(WorkScreen),
    About(AboutScreen),
    Project(ProjectScreen),
}

pub struct App {
    screen: ActiveScreen,
    id: ScreenId,
    shared: Shared,
    header_area: Rect,
    footer_shown: bool,
    footer_area: Rect,
    should_quit: bool,
}

fn build_screen(id: ScreenId, shared: &Shared) -> ActiveScreen {
    match id {
        ScreenId::Work => ActiveScreen::Work(WorkScreen::new(shared)),
        ScreenId::About => ActiveScreen::About(AboutScreen::new()),
        ScreenId::Project(pid) => ActiveScreen::Project(ProjectScreen::new(pid, shared)),
    }
}

impl App {
    #[must_use]
    pub fn new(start: ScreenId, shared: Shared) -> Self {
        let screen = build_screen(start, &shared);
        Self {
            screen,
            id: start,
            shared,
            header_area: Rect::default(),
            footer_shown: false,
            footer_area: Rect::default(),
            should_quit: false,
        }
    }

    /// The page currently shown.
    #[must_use]
    pub fn current(&self) -> ScreenId {
        self.id
    }

    fn screen_ref(&self) -> &dyn Screen {
        match &self.screen {
            ActiveScreen::Work(s) => s,
            ActiveScreen::About(s) => s,
            ActiveScreen::Project(s) => s,
        }
    }

    pub fn navigate(&mut self, id: ScreenId) {
        if self.id == id {
            return;
        }
        tracing::debug!(?id, "navigate");
        self.screen = build_screen(id, &self.shared);
        self.id = id;
    }

    /// Run until quit, drawing and ticking on the tick cadence.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        exit_after: Option<Duration>,
    ) -> io::Result<()> {
        let started = Instant::now();
        let mut last_tick = Instant::now();

        while !self.should_quit {
            if let Some(limit) = exit_after
                && started.elapsed() >= limit
            {
                break;
            }

            let now = Instant::now();
            terminal.draw(|frame| self.draw(frame, now))?;

            let timeout = TICK.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                let ev = event::read()?;
                self.handle_event(&ev, Instant::now());
            }
            if last_tick.elapsed() >= TICK {
                last_tick = Instant::now();
                self.tick(last_tick);
            }
        }
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) {
        match &mut self.screen {
            ActiveScreen::Work(s) => s.tick(now),
            ActiveScreen::About(s) => s.tick(now),
            ActiveScreen::Project(s) => s.tick(now),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let reveal = self.screen_ref().header_reveal(now);
        let header_h = chrome::header_height(reveal);
        self.footer_shown = self.screen_ref().shows_footer();
        let footer_h = if self.footer_shown {
            chrome::FOOTER_HEIGHT
        } else {
            0
        };

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(header_h),
            Constraint::Min(0),
            Constraint::Length(footer_h),
        ])
        .areas(area);
        self.header_area = header_area;
        self.footer_area = footer_area;

        if header_h > 0 {
            chrome::render_header(frame, header_area, self.id.nav_tab());
        }

        match &mut self.screen {
            ActiveScreen::Work(s) => s.view(frame, content_area, &self.shared, now),
            ActiveScreen::About(s) => s.view(frame, content_area, &self.shared, now),
            ActiveScreen::Project(s) => s.view(frame, content_area, &self.shared, now),
        }

        if footer_h > 0 {
            chrome::render_footer(frame, footer_area, self.shared.email_copied(now));
        }
    }

    pub fn handle_event(&mut self, ev: &Event, now: Instant) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.should_quit = true;
                    return;
                }
                match key.code {
                    KeyCode::Char('q') => {
                        self.should_quit = true;
                        return;
                    }
                    KeyCode::Char('1') => {
                        self.navigate(ScreenId::Work);
                        return;
                    }
                    KeyCode::Char('2') => {
                        self.navigate(ScreenId::About);
                        return;
                    }
                    KeyCode::Char('c') if self.footer_shown => {
                        self.shared.copy_email(now);
                        return;
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(tab) = chrome::nav_hit(self.header_area, mouse.column, mouse.row) {
                    let id = match tab {
                        crate::screens::NavTab::Work => ScreenId::Work,
                        crate::screens::NavTab::About => ScreenId::About,
                    };
                    self.navigate(id);
                    return;
                }
                if self.footer_shown
                    && chrome::footer_email_hit(self.footer_area, mouse.column, mouse.row)
                {
                    self.shared.copy_email(now);
                    return;
                }
            }
            _ => {}
        }

        let outcome = match &mut self.screen {
            ActiveScreen::Work(s) => s.update(ev, &mut self.shared, now),
            ActiveScreen::About(s) => s.update(ev, &mut self.shared, now),
            ActiveScreen::Project(s) => s.update(ev, &mut self.shared, now),
        };
        match outcome {
            Outcome::None => {}
            Outcome::Navigate(id) => self.navigate(id),
            Outcome::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use folio_content::ProjectId;
    use folio_ui::MemoryStore;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(
            ScreenId::Work,
            Shared::without_clipboard(Arc::new(MemoryStore::new())),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).map_or(" ", |c| c.symbol()));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn starts_on_requested_screen() {
        assert_eq!(app().current(), ScreenId::Work);
    }

    #[test]
    fn number_keys_switch_pages() {
        let mut app = app();
        app.handle_event(&press(KeyCode::Char('2')), Instant::now());
        assert_eq!(app.current(), ScreenId::About);
        app.handle_event(&press(KeyCode::Char('1')), Instant::now());
        assert_eq!(app.current(), ScreenId::Work);
    }

    #[test]
    fn enter_opens_selected_project_and_esc_returns() {
        let mut app = app();
        app.handle_event(&press(KeyCode::Enter), Instant::now());
        assert_eq!(app.current(), ScreenId::Project(ProjectId(1)));
        app.handle_event(&press(KeyCode::Esc), Instant::now());
        assert_eq!(app.current(), ScreenId::Work);
    }

    #[test]
    fn draw_renders_work_landing() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let now = Instant::now();
        terminal.draw(|f| app.draw(f, now)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("Grace Tulsa"), "hero missing:\n{text}");
        assert!(text.contains("Featured projects"), "grid header missing");
        assert!(text.contains("Icons"), "project card missing");
    }

    #[test]
    fn draw_renders_project_page_with_toc() {
        let mut app = app();
        app.navigate(ScreenId::Project(ProjectId(1)));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let now = Instant::now();
        terminal.draw(|f| app.draw(f, now)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("CONTENTS"), "toc panel missing:\n{text}");
        assert!(text.contains("Overview"), "outline entry missing");
        assert!(text.contains("Back to Work"), "back link missing");
    }

    #[test]
    fn narrow_terminal_hides_toc_panel() {
        let mut app = app();
        app.navigate(ScreenId::Project(ProjectId(1)));
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("terminal");
        let now = Instant::now();
        terminal.draw(|f| app.draw(f, now)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(!text.contains("CONTENTS"), "toc should hide under 100 cols");
    }

    #[test]
    fn unknown_project_renders_not_found() {
        let mut app = app();
        app.navigate(ScreenId::Project(ProjectId(999)));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let now = Instant::now();
        terminal.draw(|f| app.draw(f, now)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("Project not found"), "fallback missing");
        assert!(text.contains("Back to home"), "escape hatch missing");
    }

    #[test]
    fn project_without_study_renders_no_toc_frame() {
        let mut app = app();
        app.navigate(ScreenId::Project(ProjectId(2)));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let now = Instant::now();
        terminal.draw(|f| app.draw(f, now)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(!text.contains("CONTENTS"), "empty outline must render nothing");
        assert!(text.contains("Project content will go here"));
    }
}
