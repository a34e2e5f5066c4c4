//! Layout components (tab bar, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tabs with their switch keys
const TABS: &[(&str, View)] = &[("F1", View::Contact), ("F2", View::Newsletter)];

/// Split the screen into tab bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab bar
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_view();
    let mut spans = vec![Span::styled(
        " bloom ",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    for (key, view) in TABS {
        let style = if *view == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{key} {}", view.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if app.state.form.is_submitting() {
        spans.push(Span::styled("● sending", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled(
        view_hints(app.state.form.is_active_field_multiline()),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused row
fn view_hints(on_multiline: bool) -> String {
    let enter = if on_multiline {
        "Enter:newline"
    } else {
        "Enter:submit"
    };
    format!("Tab:next  {enter}  {SUBMIT_SHORTCUT}:submit  F1/F2:switch")
}
