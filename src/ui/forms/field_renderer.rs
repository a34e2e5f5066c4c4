//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows of the input box for single-line fields (borders included)
const SINGLE_LINE_HEIGHT: u16 = 3;
/// Rows of the input box for multi-line fields (borders included)
const MULTI_LINE_HEIGHT: u16 = 6;
/// Row under the input reserved for the error message
const ERROR_LINE_HEIGHT: u16 = 1;

/// Everything needed to draw one input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    /// Empty when the field has no error
    pub error: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Drawn faded while the entrance animation runs
    pub is_dim: bool,
}

/// Total rows a field occupies, error line included
pub fn field_height(is_multiline: bool) -> u16 {
    let input = if is_multiline {
        MULTI_LINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    };
    input + ERROR_LINE_HEIGHT
}

/// Draw an input box with a red border and message when the field has an error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(ERROR_LINE_HEIGHT)])
        .split(area);

    let has_error = !field.error.is_empty();

    let mut border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if field.is_dim {
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let value_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if field.value.is_empty() {
        vec![Line::from(Span::styled(field.placeholder, placeholder_style))]
    } else if field.is_multiline {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(field.value, value_style))]
    };

    // Cursor goes before the placeholder, after typed text
    if field.value.is_empty() {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, cursor);
        }
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut input = Paragraph::new(lines).block(block);
    if field.is_multiline {
        input = input.wrap(Wrap { trim: false });
    }
    frame.render_widget(input, chunks[0]);

    if has_error {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {}", field.error),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(field: &FieldView) -> (String, Buffer) {
        let height = field_height(field.is_multiline);
        let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (buffer_to_string(&buffer), buffer)
    }

    fn field<'a>(value: &'a str, error: &'a str) -> FieldView<'a> {
        FieldView {
            label: "Name",
            placeholder: "John Doe",
            value,
            error,
            is_active: false,
            is_multiline: false,
            is_dim: false,
        }
    }

    #[test]
    fn test_heights() {
        assert_eq!(field_height(false), 4);
        assert_eq!(field_height(true), 7);
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let (output, _) = render(&field("", ""));
        assert!(output.contains("Name"));
        assert!(output.contains("John Doe"));
    }

    #[test]
    fn test_value_replaces_placeholder() {
        let (output, _) = render(&field("Jo", ""));
        assert!(output.contains("Jo"));
        assert!(!output.contains("John Doe"));
    }

    #[test]
    fn test_error_shows_message_and_red_border() {
        let (output, buffer) = render(&field("J", "Name must be at least 2 characters."));
        assert!(output.contains("Name must be at least 2 characters."));
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_no_error_keeps_neutral_border() {
        let (_, buffer) = render(&field("Jo", ""));
        assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn test_multiline_renders_each_line() {
        let view = FieldView {
            is_multiline: true,
            ..field("first\nsecond", "")
        };
        let (output, _) = render(&view);
        assert!(output.contains("first"));
        assert!(output.contains("second"));
    }
}
