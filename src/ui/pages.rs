//! Home menu and static content screens (about, services).

use crate::catalog;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Home menu entries: label plus a one-line description shown beside it.
pub const HOME_MENU: &[(&str, &str)] = &[
    ("Book a Stay", "Reserve one of our six signature rooms and suites"),
    ("Chauffeur Service", "Arrange a private driver and luxury vehicle"),
    ("Services & Amenities", "Explore dining, spa, and concierge offerings"),
    ("About Lincoln Hotels", "Our story and what sets us apart"),
    ("Contact Us", "Reach the concierge desk"),
    ("Sign In", "Access your member account"),
    ("Create Account", "Join Lincoln Hotels"),
];

pub fn render_home(f: &mut Frame, area: Rect, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Tagline
            Constraint::Min(10),   // Menu
            Constraint::Length(2), // Footer
        ])
        .split(area);

    let tagline = Paragraph::new(vec![
        Line::from(Span::styled(
            "Experience Unparalleled Luxury",
            Styles::title(),
        )),
        Line::from(Span::styled(
            "Where every stay becomes an unforgettable experience",
            Styles::muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[0]);

    let items: Vec<ListItem> = HOME_MENU
        .iter()
        .map(|(label, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<24}", label), Style::default().fg(Colors::FG_PRIMARY)),
                Span::styled((*desc).to_string(), Styles::muted()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::GOLD)),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");
    f.render_stateful_widget(menu, chunks[1], &mut list_state);

    let footer = Paragraph::new("↑/↓ navigate • Enter select • q quit")
        .style(Styles::muted())
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

pub fn render_about(f: &mut Frame, area: Rect, scroll: u16) {
    let lines = vec![
        Line::from(Span::styled("About Lincoln Hotels", Styles::title())),
        Line::from(""),
        Line::from(
            "For over two decades, Lincoln Hotels has defined luxury hospitality, \
             welcoming discerning travelers to properties where timeless elegance \
             meets modern comfort.",
        ),
        Line::from(""),
        Line::from(
            "Every detail of a Lincoln stay is considered: hand-selected furnishings, \
             award-winning dining, and a concierge team available around the clock.",
        ),
        Line::from(""),
        Line::from(Span::styled("Why Guests Choose Us", Styles::heading())),
        Line::from("  • Six signature rooms and suites, from Superior to Presidential"),
        Line::from("  • Michelin-starred fine dining and 24-hour room service"),
        Line::from("  • World-class spa, wellness center, and rooftop pool"),
        Line::from("  • Private chauffeur fleet for airport transfers and city tours"),
        Line::from("  • Personalized concierge service for every guest"),
        Line::from(""),
        Line::from(Span::styled(
            "We look forward to welcoming you.",
            Styles::muted(),
        )),
    ];

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::NONE).padding(
            ratatui::widgets::Padding::new(2, 2, 1, 1),
        ));
    f.render_widget(content, area);
}

pub fn render_services(f: &mut Frame, area: Rect, scroll: u16) {
    let mut lines = vec![
        Line::from(Span::styled("Services & Amenities", Styles::title())),
        Line::from(""),
        Line::from(Span::styled("Rooms & Suites", Styles::heading())),
    ];

    for room in catalog::rooms() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<22}", room.name), Style::default().fg(Colors::FG_PRIMARY)),
            Span::styled(format!("${}/night", room.rate), Styles::price()),
            Span::styled(format!("  {}", room.capacity_label), Styles::muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", room.description),
            Styles::muted(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Hotel Amenities", Styles::heading())));
    for amenity in catalog::amenities() {
        lines.push(Line::from(Span::styled(
            format!("  {}", amenity.title),
            Style::default().fg(Colors::FG_PRIMARY),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", amenity.description),
            Styles::muted(),
        )));
        for feature in amenity.features {
            lines.push(Line::from(Span::styled(
                format!("      • {}", feature),
                Styles::muted(),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Chauffeur Fleet", Styles::heading())));
    for vehicle in catalog::vehicles() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<22}", vehicle.name),
                Style::default().fg(Colors::FG_PRIMARY),
            ),
            Span::styled(format!("${}/hour", vehicle.rate), Styles::price()),
            Span::styled(format!("  {}", vehicle.capacity_label), Styles::muted()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ scroll • Esc back",
        Styles::muted(),
    )));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::NONE).padding(
            ratatui::widgets::Padding::new(2, 2, 1, 1),
        ));
    f.render_widget(content, area);
}
