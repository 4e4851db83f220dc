//! UI rendering module
//!
//! Screen layout and rendering for every application mode. Each screen
//! lives in its own submodule; `UiRenderer` owns the shared chrome and
//! dispatches on the current mode.

pub mod forms;
pub mod header;
pub mod pages;
pub mod wizard;

use crate::app::{AppMode, AppState};
use crate::theme::Colors;
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Top-level renderer owning the brand header.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the full frame for the current mode.
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let background = Block::default().style(Style::default().bg(Colors::BG_PRIMARY));
        f.render_widget(background, f.area());

        // The wordmark only fits on taller terminals; drop it first when
        // space runs out.
        let header_height = if f.area().height >= 28 { 8 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height), // Wordmark
                Constraint::Length(3),             // Screen title
                Constraint::Min(10),               // Screen body
                Constraint::Length(1),             // Status line
                Constraint::Length(2),             // Key hints
            ])
            .split(f.area());

        if header_height > 0 {
            self.header.render_header(f, chunks[0]);
        }
        self.header.render_title(f, chunks[1], state.mode.title());

        match state.mode {
            AppMode::Home => pages::render_home(f, chunks[2], state.home_selection),
            AppMode::About => pages::render_about(f, chunks[2], state.about_scroll),
            AppMode::Services => pages::render_services(f, chunks[2], state.services_scroll),
            AppMode::Reservations => wizard::render_reservations(f, chunks[2], &state.reservations),
            AppMode::Chauffeur => forms::render_chauffeur(f, chunks[2], &state.chauffeur),
            AppMode::Contact => forms::render_contact(f, chunks[2], &state.contact),
            AppMode::Login => forms::render_login(f, chunks[2], &state.login),
            AppMode::Signup => forms::render_signup(f, chunks[2], &state.signup),
        }

        let status = if state.status_message.is_empty() {
            None
        } else {
            Some(state.status_message.as_str())
        };
        header::render_status_line(f, chunks[3], status, state.status_is_error);
        header::render_nav_bar(f, chunks[4], nav_hints(state.mode));
    }
}

/// Key hints shown in the bottom bar for each mode.
fn nav_hints(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Home => &[("↑/↓", "Navigate"), ("Enter", "Select"), ("q", "Quit")],
        AppMode::Reservations => &[
            ("Tab", "Next field"),
            ("↑/↓", "Rooms"),
            ("←/→", "Guests"),
            ("Enter", "Continue"),
            ("Backspace", "Back"),
            ("Esc", "Home"),
        ],
        AppMode::Chauffeur => &[
            ("Tab", "Next field"),
            ("←/→", "Cycle choice"),
            ("Enter", "Submit"),
            ("Esc", "Home"),
        ],
        AppMode::Contact | AppMode::Signup => &[
            ("Tab", "Next field"),
            ("Space", "Toggle"),
            ("Enter", "Submit"),
            ("Esc", "Home"),
        ],
        AppMode::Login => &[
            ("Tab", "Next field"),
            ("Space", "Toggle"),
            ("Enter", "Sign in"),
            ("Esc", "Home"),
        ],
        AppMode::About | AppMode::Services => &[("↑/↓", "Scroll"), ("Esc", "Home")],
    }
}
