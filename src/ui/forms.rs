//! Login, signup, contact, and chauffeur screen rendering.
//!
//! All four screens share the outlined-field look of the reservation
//! wizard; selector fields (department, vehicle, duration) render their
//! current choice and are cycled with the arrow keys.

use crate::forms::{
    ChauffeurField, ChauffeurState, ContactField, ContactState, LoginField, LoginState,
    SignupField, SignupState,
};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render an outlined single-line input field.
fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let border_style = if active {
        Style::default().fg(Colors::BORDER_ACTIVE)
    } else {
        Style::default().fg(Colors::BORDER_INACTIVE)
    };
    let label_style = if active {
        Styles::title()
    } else {
        Style::default().fg(Colors::FG_PRIMARY)
    };
    let cursor = if active { "_" } else { "" };

    let field = Paragraph::new(format!("  {}: {}{}", label, value, cursor))
        .style(label_style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(field, area);
}

/// Render a checkbox row.
fn render_checkbox(f: &mut Frame, area: Rect, label: &str, checked: bool, active: bool) {
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if active {
        Styles::title()
    } else {
        Style::default().fg(Colors::FG_PRIMARY)
    };
    let row = Paragraph::new(format!("  {} {}", marker, label)).style(style);
    f.render_widget(row, area);
}

fn masked(value: &str) -> String {
    "*".repeat(value.len())
}

// ============================================================================
// Login
// ============================================================================

pub fn render_login(f: &mut Frame, area: Rect, state: &LoginState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Remember me
            Constraint::Length(2), // Status
            Constraint::Min(0),    // Hint
        ])
        .split(area);

    let title = Paragraph::new("Welcome Back")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let current = state.current();
    render_field(
        f,
        chunks[1],
        LoginField::Email.label(),
        &state.email,
        current == LoginField::Email,
    );
    render_field(
        f,
        chunks[2],
        LoginField::Password.label(),
        &masked(&state.password),
        current == LoginField::Password,
    );
    render_checkbox(
        f,
        chunks[3],
        LoginField::RememberMe.label(),
        state.remember_me,
        current == LoginField::RememberMe,
    );

    if let Some(ref error) = state.error {
        let widget = Paragraph::new(format!("  {}", error)).style(Styles::error());
        f.render_widget(widget, chunks[4]);
    } else if state.authenticated {
        let widget =
            Paragraph::new("  Signed in. Welcome to Lincoln Hotels.").style(Styles::success());
        f.render_widget(widget, chunks[4]);
    }

    let hint = Paragraph::new("  Demo account: demo@lincolnhotels.com / demo123")
        .style(Styles::muted());
    f.render_widget(hint, chunks[5]);
}

// ============================================================================
// Signup
// ============================================================================

pub fn render_signup(f: &mut Frame, area: Rect, state: &SignupState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Password
            Constraint::Length(3), // Confirm password
            Constraint::Length(1), // Terms
            Constraint::Length(1), // Newsletter
            Constraint::Min(2),    // Errors / status
        ])
        .split(area);

    let title = Paragraph::new("Join Lincoln Hotels")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let current = state.current();
    let text_fields = [
        (SignupField::FirstName, state.first_name.clone()),
        (SignupField::LastName, state.last_name.clone()),
        (SignupField::Email, state.email.clone()),
        (SignupField::Phone, state.phone.clone()),
        (SignupField::Password, masked(&state.password)),
        (SignupField::ConfirmPassword, masked(&state.confirm_password)),
    ];
    for (i, (field, value)) in text_fields.iter().enumerate() {
        render_field(f, chunks[i + 1], field.label(), value, current == *field);
    }

    render_checkbox(
        f,
        chunks[7],
        SignupField::AgreeToTerms.label(),
        state.agree_to_terms,
        current == SignupField::AgreeToTerms,
    );
    render_checkbox(
        f,
        chunks[8],
        SignupField::SubscribeNewsletter.label(),
        state.subscribe_newsletter,
        current == SignupField::SubscribeNewsletter,
    );

    if !state.errors.is_empty() {
        let lines: Vec<Line> = state
            .errors
            .iter()
            .map(|e| Line::from(Span::styled(format!("  • {}", e), Styles::error())))
            .collect();
        let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(widget, chunks[9]);
    } else if state.submitted {
        let widget = Paragraph::new("  Account created successfully! Welcome to Lincoln Hotels.")
            .style(Styles::success());
        f.render_widget(widget, chunks[9]);
    }
}

// ============================================================================
// Contact
// ============================================================================

pub fn render_contact(f: &mut Frame, area: Rect, state: &ContactState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Subject
            Constraint::Length(3), // Department
            Constraint::Length(3), // Message
            Constraint::Min(2),    // Status
        ])
        .split(area);

    let title = Paragraph::new("Contact Our Concierge")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let current = state.current();
    render_field(f, chunks[1], ContactField::Name.label(), &state.name, current == ContactField::Name);
    render_field(f, chunks[2], ContactField::Email.label(), &state.email, current == ContactField::Email);
    render_field(f, chunks[3], ContactField::Phone.label(), &state.phone, current == ContactField::Phone);
    render_field(f, chunks[4], ContactField::Subject.label(), &state.subject, current == ContactField::Subject);
    render_field(
        f,
        chunks[5],
        ContactField::Department.label(),
        state.department.label(),
        current == ContactField::Department,
    );
    render_field(f, chunks[6], ContactField::Message.label(), &state.message, current == ContactField::Message);

    if state.submitted {
        let widget = Paragraph::new(
            "  Message sent! Our team responds within 2 hours during business hours.",
        )
        .style(Styles::success());
        f.render_widget(widget, chunks[7]);
    } else if !state.is_complete() {
        let widget = Paragraph::new("  Name, email, subject, and message are required.")
            .style(Styles::muted());
        f.render_widget(widget, chunks[7]);
    }
}

// ============================================================================
// Chauffeur
// ============================================================================

pub fn render_chauffeur(f: &mut Frame, area: Rect, state: &ChauffeurState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_chauffeur_form(f, columns[0], state);
    render_chauffeur_summary(f, columns[1], state);
}

fn render_chauffeur_form(f: &mut Frame, area: Rect, state: &ChauffeurState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Pickup date
            Constraint::Length(3), // Pickup location
            Constraint::Length(3), // Destination
            Constraint::Length(3), // Vehicle
            Constraint::Length(3), // Duration
            Constraint::Length(3), // Passengers
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("Premium Chauffeur Service")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let current = state.current();
    render_field(
        f,
        chunks[1],
        ChauffeurField::PickupDate.label(),
        &state.pickup_date_input,
        current == ChauffeurField::PickupDate,
    );
    render_field(
        f,
        chunks[2],
        ChauffeurField::PickupLocation.label(),
        &state.pickup_location,
        current == ChauffeurField::PickupLocation,
    );
    render_field(
        f,
        chunks[3],
        ChauffeurField::Destination.label(),
        &state.destination,
        current == ChauffeurField::Destination,
    );

    let vehicle_text = state
        .selected_vehicle()
        .map(|v| format!("{} — ${}/hour ({})", v.name, v.rate, v.capacity_label))
        .unwrap_or_else(|| "none selected".to_string());
    render_field(
        f,
        chunks[4],
        ChauffeurField::Vehicle.label(),
        &vehicle_text,
        current == ChauffeurField::Vehicle,
    );
    render_field(
        f,
        chunks[5],
        ChauffeurField::Duration.label(),
        state.duration.label(),
        current == ChauffeurField::Duration,
    );
    render_field(
        f,
        chunks[6],
        ChauffeurField::Passengers.label(),
        &state.passengers.to_string(),
        current == ChauffeurField::Passengers,
    );
}

fn render_chauffeur_summary(f: &mut Frame, area: Rect, state: &ChauffeurState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Contact fields (compressed)
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3), // Special requests
            Constraint::Min(5),    // Estimate
        ])
        .split(area);

    let current = state.current();
    let contact_fields = [
        (ChauffeurField::FirstName, &state.first_name),
        (ChauffeurField::LastName, &state.last_name),
        (ChauffeurField::Email, &state.email),
        (ChauffeurField::Phone, &state.phone),
        (ChauffeurField::SpecialRequests, &state.special_requests),
    ];
    for (i, (field, value)) in contact_fields.iter().enumerate() {
        render_field(f, chunks[i], field.label(), value, current == *field);
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("Estimated total: ${}", state.estimate()),
        Styles::price(),
    ))];
    if state.submitted {
        lines.push(Line::from(Span::styled(
            "Booking request submitted! Our team will contact you shortly.",
            Styles::success(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "*Final price may vary based on distance and additional services",
            Styles::muted(),
        )));
    }

    let estimate = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Estimate ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::GOLD)),
    );
    f.render_widget(estimate, chunks[5]);
}
