//! Brand header and common chrome rendering.
//!
//! The ASCII wordmark, screen titles, key-hint bar, and the status line
//! live here so every screen shares the same frame.

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the brand wordmark.
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the brand wordmark.
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a bordered screen title.
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        let gold = Style::default().fg(Colors::GOLD);
        vec![
            Line::from(Span::styled(
                " ██╗     ██╗███╗   ██╗ ██████╗ ██████╗ ██╗     ███╗   ██╗",
                gold,
            )),
            Line::from(Span::styled(
                " ██║     ██║████╗  ██║██╔════╝██╔═══██╗██║     ████╗  ██║",
                gold,
            )),
            Line::from(Span::styled(
                " ██║     ██║██╔██╗ ██║██║     ██║   ██║██║     ██╔██╗ ██║",
                gold,
            )),
            Line::from(Span::styled(
                " ██║     ██║██║╚██╗██║██║     ██║   ██║██║     ██║╚██╗██║",
                gold,
            )),
            Line::from(Span::styled(
                " ███████╗██║██║ ╚████║╚██████╗╚██████╔╝███████╗██║ ╚████║",
                gold,
            )),
            Line::from(Span::styled(
                " ╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═════╝ ╚══════╝╚═╝  ╚═══╝",
                gold,
            )),
            Line::from(Span::styled(
                "H O T E L S",
                Style::default().fg(Colors::FG_SECONDARY),
            )),
        ]
    }
}

/// Render the centered key-hint bar along the bottom of the screen.
pub fn render_nav_bar(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", Styles::muted()));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(Colors::GOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Styles::muted()));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(bar, area);
}

/// Render the one-line status message area.
pub fn render_status_line(f: &mut Frame, area: Rect, message: Option<&str>, is_error: bool) {
    let Some(text) = message else {
        return;
    };
    let style = if is_error { Styles::error() } else { Styles::success() };
    let widget = Paragraph::new(format!(" {}", text)).style(style);
    f.render_widget(widget, area);
}
