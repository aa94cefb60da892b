#![forbid(unsafe_code)]

//! About screen: static copy under the shared chrome.

use std::time::Instant;

use crossterm::event::Event;
use folio_content::site;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::doc_layout::wrap;
use crate::theme;

use super::{Outcome, Screen, Shared};

#[derive(Default)]
pub struct AboutScreen;

impl AboutScreen {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Screen for AboutScreen {
    fn title(&self) -> &'static str {
        "About"
    }

    fn update(&mut self, _event: &Event, _shared: &mut Shared, _now: Instant) -> Outcome {
        Outcome::None
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, _shared: &Shared, _now: Instant) {
        let content = Rect {
            x: area.x + theme::PAGE_MARGIN,
            y: area.y,
            width: area.width.saturating_sub(theme::PAGE_MARGIN * 2),
            height: area.height,
        };
        if content.width == 0 || content.height == 0 {
            return;
        }
        let width = (content.width as usize).min(72);

        let mut lines: Vec<Line<'static>> = vec![
            Line::default(),
            Line::from(Span::styled("About", theme::heading2())),
            Line::default(),
        ];
        for paragraph in site::ABOUT {
            for wrapped in wrap(paragraph, width) {
                lines.push(Line::from(Span::styled(wrapped, theme::body())));
            }
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(Text::from(lines)), content);
    }
}
