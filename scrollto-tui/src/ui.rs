//! UI rendering module.
//!
//! This module handles all the TUI rendering using ratatui. The screen layout
//! is computed by [`layout`] so that mouse hit-testing in the app uses the
//! exact rectangles that were drawn.

use ratatui::{
    layout::{Alignment as TextAlignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, LogLevel};
use crate::carousel::{CarouselWidget, ITEM_HEIGHT};
use crate::controller::Alignment;
use crate::theme::{colors, styles};

const BUTTON_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;

/// A clickable control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Align(Alignment),
    Previous,
    Next,
}

impl Button {
    pub fn caption(&self) -> &'static str {
        match self {
            Button::Align(Alignment::Start) => "|◀ start",
            Button::Align(Alignment::Center) => "▶|◀",
            Button::Align(Alignment::End) => "end ▶|",
            Button::Previous => "◀ prev",
            Button::Next => "next ▶",
        }
    }
}

/// Rectangles of every region on screen
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub header: Rect,
    pub carousel: Rect,
    /// Inner area the items scroll through
    pub carousel_viewport: Rect,
    pub scroll_position: Rect,
    pub navigation: Rect,
    pub buttons: Vec<(Button, Rect)>,
    pub log: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Button under a screen position
    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

/// Compute the screen layout for a terminal area
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title
            Constraint::Length(ITEM_HEIGHT + 2), // Carousel
            Constraint::Min(1),                  // Spacer
            Constraint::Length(BUTTON_HEIGHT + 3), // Controls
            Constraint::Length(7),               // Log area
            Constraint::Length(1),               // Status line
        ])
        .split(area);

    let carousel = chunks[1];
    let carousel_viewport = Block::default().borders(Borders::ALL).inner(carousel);

    // Button groups sit side by side
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    let scroll_position = halves[0];
    let navigation = halves[1];

    let mut buttons = Vec::with_capacity(5);
    let align_buttons: Vec<Button> = Alignment::all().iter().map(|a| Button::Align(*a)).collect();
    buttons.extend(button_row(scroll_position, &align_buttons));
    buttons.extend(button_row(navigation, &[Button::Previous, Button::Next]));

    ScreenLayout {
        header: chunks[0],
        carousel,
        carousel_viewport,
        scroll_position,
        navigation,
        buttons,
        log: chunks[4],
        status: chunks[5],
    }
}

/// Centered row of buttons below a one-line group label
fn button_row(group: Rect, buttons: &[Button]) -> Vec<(Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(group);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(buttons.iter().map(|_| Constraint::Length(BUTTON_WIDTH)))
        .spacing(1)
        .flex(Flex::Center)
        .split(rows[2]);

    buttons.iter().copied().zip(cells.iter().copied()).collect()
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, area);

    let screen = layout(area);

    render_header(frame, app, screen.header);
    render_carousel(frame, app, &screen);
    render_group_label(frame, "Scroll Position", screen.scroll_position);
    render_group_label(frame, "Navigation", screen.navigation);
    for (button, rect) in &screen.buttons {
        render_button(frame, app, *button, *rect);
    }
    render_logs(frame, app, screen.log);
    render_status(frame, app, screen.status);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let label = app
        .items
        .get(app.controller.index())
        .map(|item| item.label.as_str())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" scrollTo ", styles::title()),
        Span::styled("│ ", styles::border_dim()),
        Span::styled(
            format!("#{} of {}", state.index + 1, app.items.len()),
            styles::text(),
        ),
        Span::styled("  ", styles::text()),
        Span::styled(label, styles::label()),
        Span::styled(format!("  @ {}", state.alignment.name()), styles::text_dim()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border())
            .style(Style::default().bg(colors::BG_MEDIUM)),
    );
    frame.render_widget(header, area);
}

fn render_carousel(frame: &mut Frame, app: &App, screen: &ScreenLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_dim())
        .style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(block, screen.carousel);

    frame.render_widget(
        CarouselWidget::new(&app.items, &app.carousel),
        screen.carousel_viewport,
    );
}

fn render_group_label(frame: &mut Frame, label: &str, area: Rect) {
    let area = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let paragraph = Paragraph::new(label)
        .style(styles::label())
        .alignment(TextAlignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_button(frame: &mut Frame, app: &App, button: Button, area: Rect) {
    let style = match button {
        Button::Align(alignment) if alignment == app.controller.alignment() => {
            styles::button_active()
        }
        Button::Previous if app.controller.is_first() => styles::button_disabled(),
        Button::Next if app.controller.is_last() => styles::button_disabled(),
        _ => styles::button(),
    };

    // Caption on the middle row of the button
    let text = vec![Line::from(""), Line::from(button.caption())];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(TextAlignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let (prefix, color) = match entry.level {
                LogLevel::Info => ("i", colors::BLUE),
                LogLevel::Success => ("+", colors::GREEN),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    styles::text_hint(),
                ),
                Span::styled(format!("[{}] ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.as_str(), styles::text_dim()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Scroll Log ")
            .title_style(Style::default().fg(colors::FG_DIM))
            .borders(Borders::ALL)
            .border_style(styles::border_dim())
            .style(Style::default().bg(colors::BG_DARK)),
    );

    frame.render_widget(list, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_text())
        .style(styles::text_hint().bg(colors::BG_DIM));
    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(52, 19, area);
    frame.render_widget(Clear, popup_area);

    let section = Style::default()
        .fg(colors::ACCENT)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(colors::BLUE);

    let help_text = vec![
        Line::from(Span::styled("Keyboard & Mouse", styles::title())),
        Line::from(""),
        Line::from(Span::styled("Scroll Position", section)),
        Line::from(vec![
            Span::styled("  s / c / e      ", key),
            Span::raw("Align start / center / end"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Navigation", section)),
        Line::from(vec![
            Span::styled("  h/l Left/Right ", key),
            Span::raw("Previous / next item"),
        ]),
        Line::from(vec![
            Span::styled("  Home / End     ", key),
            Span::raw("First / last item"),
        ]),
        Line::from(vec![
            Span::styled("  1-9, 0         ", key),
            Span::raw("Select item 1-9, 10"),
        ]),
        Line::from(vec![
            Span::styled("  Click          ", key),
            Span::raw("Select item / press button"),
        ]),
        Line::from(""),
        Line::from(Span::styled("General", section)),
        Line::from(vec![
            Span::styled("  ?              ", key),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("  q/Esc/Ctrl+C   ", key),
            Span::raw("Quit"),
        ]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(styles::title())
                .borders(Borders::ALL)
                .border_style(styles::border())
                .style(Style::default().bg(colors::BG_MEDIUM)),
        )
        .style(styles::text());

    frame.render_widget(paragraph, popup_area);
}

/// Helper to create a centered rectangle
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let area = Rect::new(0, 0, 100, 30);
        let screen = layout(area);

        assert_eq!(screen.carousel.height, ITEM_HEIGHT + 2);
        assert_eq!(screen.carousel_viewport.width, 98);
        assert_eq!(screen.carousel_viewport.height, ITEM_HEIGHT);
        assert_eq!(screen.buttons.len(), 5);
    }

    #[test]
    fn test_buttons_inside_groups() {
        let screen = layout(Rect::new(0, 0, 100, 30));
        for (button, rect) in &screen.buttons {
            let group = match button {
                Button::Align(_) => screen.scroll_position,
                Button::Previous | Button::Next => screen.navigation,
            };
            assert_eq!(rect.intersection(group), *rect, "{:?} outside its group", button);
            assert_eq!(rect.width, BUTTON_WIDTH);
        }
    }

    #[test]
    fn test_button_at() {
        let screen = layout(Rect::new(0, 0, 100, 30));
        for (button, rect) in &screen.buttons {
            assert_eq!(screen.button_at(rect.x, rect.y), Some(*button));
            assert_eq!(
                screen.button_at(rect.right() - 1, rect.bottom() - 1),
                Some(*button)
            );
        }
        assert_eq!(screen.button_at(0, 0), None);
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(rect, Rect::new(40, 20, 20, 10));
    }
}
