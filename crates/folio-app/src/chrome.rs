#![forbid(unsafe_code)]

//! Shared page chrome: the sliding header with wordmark and nav tabs, and
//! the footer with external links and the email-copy affordance.
//!
//! Hit geometry is computed by pure functions over the area rect so event
//! handling and rendering can never disagree about where a control is.

use folio_content::site;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::screens::NavTab;
use crate::theme;

/// Full header height in rows.
pub const HEADER_HEIGHT: u16 = 3;
/// Footer height in rows.
pub const FOOTER_HEIGHT: u16 = 2;

/// Header rows to show for an animated reveal fraction in [0, 1].
#[must_use]
pub fn header_height(reveal: f32) -> u16 {
    (f32::from(HEADER_HEIGHT) * reveal.clamp(0.0, 1.0)).round() as u16
}

fn nav_label(tab: NavTab) -> &'static str {
    match tab {
        NavTab::Work => " Work ",
        NavTab::About => " About ",
    }
}

/// Rects of the two nav tabs on the header's content row.
#[must_use]
pub fn nav_rects(area: Rect) -> [(Rect, NavTab); 2] {
    let row = area.y + area.height.saturating_sub(1);
    let about_w = nav_label(NavTab::About).width() as u16;
    let work_w = nav_label(NavTab::Work).width() as u16;
    let right = (area.x + area.width).saturating_sub(theme::PAGE_MARGIN);
    let about_x = right.saturating_sub(about_w);
    let work_x = about_x.saturating_sub(work_w + 2);
    [
        (Rect::new(work_x, row, work_w, 1), NavTab::Work),
        (Rect::new(about_x, row, about_w, 1), NavTab::About),
    ]
}

/// Which nav tab a click at (column, row) lands on, if any.
#[must_use]
pub fn nav_hit(area: Rect, column: u16, row: u16) -> Option<NavTab> {
    let pos = Position::new(column, row);
    nav_rects(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, tab)| tab)
}

/// Render the header into `area` (which may be shorter than
/// [`HEADER_HEIGHT`] mid-transition; the content row slides in first).
pub fn render_header(frame: &mut Frame, area: Rect, active: Option<NavTab>) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    // Dotted texture rows above the content row.
    for i in 0..area.height.saturating_sub(1) {
        let dots = "·   ".repeat(area.width as usize / 4 + 1);
        let row = Rect::new(area.x, area.y + i, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(dots, theme::footer()))),
            row,
        );
    }

    let content_row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ".repeat(theme::PAGE_MARGIN as usize) + site::WORDMARK,
            theme::wordmark(),
        ))),
        content_row,
    );

    for (rect, tab) in nav_rects(area) {
        let style = if active == Some(tab) {
            theme::nav_active()
        } else {
            theme::nav_inactive()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(nav_label(tab), style))),
            rect,
        );
    }
}

/// Rect of the email control on the footer's content row.
#[must_use]
pub fn footer_email_rect(area: Rect) -> Rect {
    let row = area.y + area.height.saturating_sub(1);
    let email_w = site::EMAIL.width() as u16;
    let right = (area.x + area.width).saturating_sub(theme::PAGE_MARGIN);
    Rect::new(right.saturating_sub(email_w), row, email_w, 1)
}

/// Whether a click at (column, row) lands on the email control.
#[must_use]
pub fn footer_email_hit(area: Rect, column: u16, row: u16) -> bool {
    footer_email_rect(area).contains(Position::new(column, row))
}

/// Render the footer: copyright left, links and the email control right.
///
/// While `email_copied` is set the control shows the confirmation instead
/// of the address; on clipboard failure the caller never sets it, so the
/// user simply sees no confirmation.
pub fn render_footer(frame: &mut Frame, area: Rect, email_copied: bool) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let rule = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(area.width as usize),
            theme::footer(),
        ))),
        rule,
    );

    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ".repeat(theme::PAGE_MARGIN as usize) + site::COPYRIGHT,
            theme::footer(),
        ))),
        row,
    );

    // Right-aligned: links, then the email control.
    let email_rect = footer_email_rect(area);
    let email_style = if email_copied {
        theme::copied_feedback()
    } else {
        theme::footer_link()
    };
    let email_text = if email_copied {
        let label = "✓ Copied!";
        format!("{label:>width$}", width = site::EMAIL.width())
    } else {
        site::EMAIL.to_owned()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(email_text, email_style))),
        email_rect,
    );

    let mut x = email_rect.x;
    for label in site::FOOTER_LINKS.iter().rev() {
        let w = label.width() as u16 + 3;
        x = x.saturating_sub(w);
        let rect = Rect::new(x, email_rect.y, w, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{label}   "),
                theme::footer_link(),
            ))),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 3,
    };

    #[test]
    fn header_height_tracks_reveal() {
        assert_eq!(header_height(1.0), HEADER_HEIGHT);
        assert_eq!(header_height(0.0), 0);
        assert!(header_height(0.5) > 0);
    }

    #[test]
    fn nav_tabs_do_not_overlap() {
        let [(work, _), (about, _)] = nav_rects(AREA);
        assert!(work.x + work.width <= about.x);
        assert_eq!(work.y, about.y);
    }

    #[test]
    fn nav_hit_resolves_each_tab() {
        let [(work, work_tab), (about, about_tab)] = nav_rects(AREA);
        assert_eq!(nav_hit(AREA, work.x + 1, work.y), Some(work_tab));
        assert_eq!(nav_hit(AREA, about.x + 1, about.y), Some(about_tab));
        assert_eq!(nav_hit(AREA, 0, 0), None);
    }

    #[test]
    fn email_rect_sits_inside_footer() {
        let footer = Rect::new(0, 30, 120, FOOTER_HEIGHT);
        let email = footer_email_rect(footer);
        assert!(email.x >= footer.x);
        assert!(email.x + email.width <= footer.x + footer.width);
        assert!(footer_email_hit(footer, email.x, email.y));
        assert!(!footer_email_hit(footer, 0, footer.y));
    }
}
