//! Reservation wizard screen.
//!
//! Renders the three-stage booking flow: dates/room selection, guest
//! details, and the confirmation summary with the price breakdown. The
//! screen state owns the wizard plus the raw text buffers for date entry;
//! everything derived (nights, totals) is recomputed from the draft on
//! each frame.

use crate::booking::{price_summary, BookingWizard, WizardStage};
use crate::catalog;
use crate::theme::{Colors, Styles};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Input field identifiers for the stay-selection stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayField {
    CheckIn,
    CheckOut,
    Guests,
    Room,
}

impl StayField {
    pub fn all() -> &'static [Self] {
        &[Self::CheckIn, Self::CheckOut, Self::Guests, Self::Room]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckIn => "Check-in Date (YYYY-MM-DD)",
            Self::CheckOut => "Check-out Date (YYYY-MM-DD)",
            Self::Guests => "Number of Guests",
            Self::Room => "Room",
        }
    }
}

/// Input field identifiers for the guest-info stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
}

impl GuestField {
    pub fn all() -> &'static [Self] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::SpecialRequests,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::SpecialRequests => "Special Requests",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::SpecialRequests)
    }
}

/// State for the reservations screen.
///
/// Owns the wizard and the UI-side bookkeeping (field cursors, raw date
/// text). Dropped and recreated when the guest navigates away, which
/// discards the draft per the booking lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ReservationScreenState {
    pub wizard: BookingWizard,
    /// Raw date text; parsed into the draft on every edit.
    pub check_in_input: String,
    pub check_out_input: String,
    /// Field cursor within the stay-selection stage.
    pub stay_field: usize,
    /// Field cursor within the guest-info stage.
    pub guest_field: usize,
    /// Room list cursor (stay-selection stage).
    pub room_cursor: usize,
    /// Acknowledgment text after a successful submit.
    pub ack: Option<String>,
}

impl ReservationScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field in the stay-selection stage.
    pub fn current_stay_field(&self) -> StayField {
        StayField::all()[self.stay_field]
    }

    /// Current field in the guest-info stage.
    pub fn current_guest_field(&self) -> GuestField {
        GuestField::all()[self.guest_field]
    }

    /// Move the field cursor forward within the current stage.
    pub fn next_field(&mut self) {
        match self.wizard.stage() {
            WizardStage::SelectStay => {
                if self.stay_field < StayField::all().len() - 1 {
                    self.stay_field += 1;
                }
            }
            WizardStage::GuestInfo => {
                if self.guest_field < GuestField::all().len() - 1 {
                    self.guest_field += 1;
                }
            }
            WizardStage::Confirmation => {}
        }
    }

    /// Move the field cursor backward within the current stage.
    pub fn previous_field(&mut self) {
        match self.wizard.stage() {
            WizardStage::SelectStay => self.stay_field = self.stay_field.saturating_sub(1),
            WizardStage::GuestInfo => self.guest_field = self.guest_field.saturating_sub(1),
            WizardStage::Confirmation => {}
        }
    }

    /// Re-parse the date buffers into the draft. Invalid or partial text
    /// clears the corresponding date; validation happens at advance time.
    pub fn sync_dates(&mut self) {
        let check_in = NaiveDate::parse_from_str(self.check_in_input.trim(), "%Y-%m-%d").ok();
        let check_out = NaiveDate::parse_from_str(self.check_out_input.trim(), "%Y-%m-%d").ok();
        let draft = self.wizard.draft_mut();
        draft.check_in = check_in;
        draft.check_out = check_out;
    }

    /// Move the room cursor and select the room under it.
    pub fn room_up(&mut self) {
        self.room_cursor = self.room_cursor.saturating_sub(1);
        self.select_room_at_cursor();
    }

    /// Move the room cursor and select the room under it.
    pub fn room_down(&mut self) {
        if self.room_cursor < catalog::rooms().len() - 1 {
            self.room_cursor += 1;
        }
        self.select_room_at_cursor();
    }

    /// Write the room under the cursor into the draft.
    pub fn select_room_at_cursor(&mut self) {
        let room = catalog::rooms()[self.room_cursor];
        self.wizard.draft_mut().room_id = Some(room.id.to_string());
    }

    /// Adjust the guest count (1..=6, as on the brand site).
    pub fn adjust_guests(&mut self, delta: i32) {
        let guests = self.wizard.draft().guests as i32 + delta;
        self.wizard.draft_mut().guests = guests.clamp(1, 6) as u32;
    }

    /// Mutable reference to the text buffer under the cursor, if the
    /// current field is text-editable.
    pub fn current_text_mut(&mut self) -> Option<&mut String> {
        match self.wizard.stage() {
            WizardStage::SelectStay => match self.current_stay_field() {
                StayField::CheckIn => Some(&mut self.check_in_input),
                StayField::CheckOut => Some(&mut self.check_out_input),
                StayField::Guests | StayField::Room => None,
            },
            WizardStage::GuestInfo => {
                let draft = self.wizard.draft_mut();
                Some(match GuestField::all()[self.guest_field] {
                    GuestField::FirstName => &mut draft.first_name,
                    GuestField::LastName => &mut draft.last_name,
                    GuestField::Email => &mut draft.email,
                    GuestField::Phone => &mut draft.phone,
                    GuestField::SpecialRequests => &mut draft.special_requests,
                })
            }
            WizardStage::Confirmation => None,
        }
    }
}

/// Render the reservations screen for the current wizard stage.
pub fn render_reservations(f: &mut Frame, area: Rect, state: &ReservationScreenState) {
    let ack_height = if state.ack.is_some() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Stepper
            Constraint::Length(ack_height), // Post-submit acknowledgment
            Constraint::Min(10),            // Stage content
            Constraint::Length(3),          // Instructions
        ])
        .split(area);

    render_stepper(f, chunks[0], state.wizard.stage());

    if let Some(ref ack) = state.ack {
        let banner = Paragraph::new(format!("  ✓ {}", ack))
            .style(Styles::success())
            .alignment(Alignment::Center);
        f.render_widget(banner, chunks[1]);
    }

    match state.wizard.stage() {
        WizardStage::SelectStay => render_select_stay(f, chunks[2], state),
        WizardStage::GuestInfo => render_guest_info(f, chunks[2], state),
        WizardStage::Confirmation => render_confirmation(f, chunks[2], state),
    }

    let instructions = match state.wizard.stage() {
        WizardStage::Confirmation => {
            " [Enter] Confirm Booking   [Esc] Back   [Tab] —"
        }
        _ => " [Tab/Shift+Tab] Fields   [←/→] Adjust   [Enter] Next   [Esc] Back",
    };
    let footer = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(Styles::muted())
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, chunks[3]);
}

/// Render the three-step progress indicator.
fn render_stepper(f: &mut Frame, area: Rect, current: WizardStage) {
    let mut spans = Vec::new();
    for (i, stage) in WizardStage::all_stages().iter().enumerate() {
        let style = if *stage == current {
            Styles::title()
        } else if stage.order() < current.order() {
            Styles::success()
        } else {
            Styles::muted()
        };
        spans.push(Span::styled(
            format!(" {}. {} ", stage.step_number(), stage.title()),
            style,
        ));
        if i < WizardStage::all_stages().len() - 1 {
            spans.push(Span::styled(" → ", Styles::muted()));
        }
    }

    let stepper = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(stepper, area);
}

/// Render an outlined single-line input field.
fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, active: bool, warn: bool) {
    let border_style = if active {
        Style::default().fg(Colors::BORDER_ACTIVE)
    } else {
        Style::default().fg(Colors::BORDER_INACTIVE)
    };
    let label_style = if active {
        Styles::title()
    } else if warn {
        Style::default().fg(Colors::WARNING)
    } else {
        Styles::muted()
    };
    let cursor = if active { "_" } else { "" };

    let field = Paragraph::new(format!("  {}: {}{}", label, value, cursor))
        .style(label_style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(field, area);
}

fn render_select_stay(f: &mut Frame, area: Rect, state: &ReservationScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Check-in
            Constraint::Length(3), // Check-out
            Constraint::Length(3), // Guests
            Constraint::Min(6),    // Room list
        ])
        .split(area);

    let current = state.current_stay_field();
    let draft = state.wizard.draft();

    render_field(
        f,
        chunks[0],
        StayField::CheckIn.label(),
        &state.check_in_input,
        current == StayField::CheckIn,
        draft.check_in.is_none(),
    );
    render_field(
        f,
        chunks[1],
        StayField::CheckOut.label(),
        &state.check_out_input,
        current == StayField::CheckOut,
        draft.check_out.is_none(),
    );

    let plural = if draft.guests > 1 { "s" } else { "" };
    render_field(
        f,
        chunks[2],
        StayField::Guests.label(),
        &format!("{} Guest{}", draft.guests, plural),
        current == StayField::Guests,
        false,
    );

    // Room list with rate and size
    let items: Vec<ListItem> = catalog::rooms()
        .iter()
        .map(|room| {
            let selected = draft.room_id.as_deref() == Some(room.id);
            let marker = if selected { " [SELECTED] " } else { "  " };
            let line = format!(
                "{}{} — ${}/night ({}) — {}",
                marker, room.name, room.rate, room.capacity_label, room.description
            );
            let style = if selected {
                Styles::success().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let border_style = if current == StayField::Room {
        Style::default().fg(Colors::BORDER_ACTIVE)
    } else {
        Style::default().fg(Colors::BORDER_INACTIVE)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Choose Your Room ")
                .title_style(Styles::heading())
                .border_style(border_style),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    if current == StayField::Room {
        list_state.select(Some(state.room_cursor));
    }
    f.render_stateful_widget(list, chunks[3], &mut list_state);
}

fn render_guest_info(f: &mut Frame, area: Rect, state: &ReservationScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let draft = state.wizard.draft();
    let values = [
        &draft.first_name,
        &draft.last_name,
        &draft.email,
        &draft.phone,
        &draft.special_requests,
    ];

    for (i, (field, value)) in GuestField::all().iter().zip(values.iter()).enumerate() {
        let required_marker = if field.is_required() { " *" } else { "" };
        render_field(
            f,
            chunks[i],
            &format!("{}{}", field.label(), required_marker),
            value,
            i == state.guest_field,
            field.is_required() && value.is_empty(),
        );
    }
}

fn render_confirmation(f: &mut Frame, area: Rect, state: &ReservationScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let draft = state.wizard.draft();
    let room_name = draft.selected_room().map(|r| r.name).unwrap_or("—");
    let fmt_date = |d: Option<NaiveDate>| {
        d.map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    };

    let mut details = vec![
        detail_line("Guest Name", &format!("{} {}", draft.first_name, draft.last_name)),
        detail_line("Email", &draft.email),
        detail_line("Phone", &draft.phone),
        detail_line("Check-in", &fmt_date(draft.check_in)),
        detail_line("Check-out", &fmt_date(draft.check_out)),
        detail_line("Room Type", room_name),
        detail_line("Number of Guests", &draft.guests.to_string()),
    ];
    if !draft.special_requests.is_empty() {
        details.push(detail_line("Special Requests", &draft.special_requests));
    }

    let details_widget = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Booking Details ")
                .title_style(Styles::heading()),
        );
    f.render_widget(details_widget, chunks[0]);

    // Price summary
    let summary = price_summary(draft);
    let nights = draft.night_count();
    let plural = if nights == 1 { "" } else { "s" };
    let summary_lines = vec![
        Line::from(Span::styled(
            format!("{} × {} night{}", room_name, nights, plural),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::from(Span::styled(
            format!("Subtotal        ${:.2}", summary.subtotal),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::from(Span::styled(
            format!("Taxes & Fees    ${:.2}", summary.tax),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total           ${:.2}", summary.total),
            Styles::price(),
        )),
    ];

    let summary_widget = Paragraph::new(summary_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Price Summary ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::GOLD)),
    );
    f.render_widget(summary_widget, chunks[1]);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Styles::muted()),
        Span::styled(value.to_string(), Style::default().fg(Colors::FG_PRIMARY)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_dates_parses_valid_input() {
        let mut state = ReservationScreenState::new();
        state.check_in_input = "2025-06-01".to_string();
        state.check_out_input = "2025-06-04".to_string();
        state.sync_dates();
        assert_eq!(state.wizard.draft().night_count(), 3);
    }

    #[test]
    fn test_sync_dates_clears_on_invalid_input() {
        let mut state = ReservationScreenState::new();
        state.check_in_input = "2025-06-01".to_string();
        state.sync_dates();
        assert!(state.wizard.draft().check_in.is_some());

        state.check_in_input = "2025-06".to_string();
        state.sync_dates();
        assert!(state.wizard.draft().check_in.is_none());
    }

    #[test]
    fn test_room_cursor_selects() {
        let mut state = ReservationScreenState::new();
        state.room_down();
        assert_eq!(
            state.wizard.draft().room_id.as_deref(),
            Some(catalog::rooms()[1].id)
        );
    }

    #[test]
    fn test_guest_adjust_clamps() {
        let mut state = ReservationScreenState::new();
        state.adjust_guests(-5);
        assert_eq!(state.wizard.draft().guests, 1);
        state.adjust_guests(10);
        assert_eq!(state.wizard.draft().guests, 6);
    }

    #[test]
    fn test_field_cursor_bounds() {
        let mut state = ReservationScreenState::new();
        state.previous_field();
        assert_eq!(state.stay_field, 0);
        for _ in 0..10 {
            state.next_field();
        }
        assert_eq!(state.stay_field, StayField::all().len() - 1);
    }
}
