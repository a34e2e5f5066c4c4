//! Shared layout for a form: heading, fields, submit button

use super::field_renderer::{draw_field, field_height, FieldView};
use crate::state::{FormComponent, FormSchema, RevealState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Rows used by the heading (title, blank, two lines of description)
const HEADING_HEIGHT: u16 = 4;

/// Static copy of a form
pub struct FormCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
}

/// Label shown on the submit button
pub fn button_label(copy: &FormCopy, is_submitting: bool) -> &'static str {
    if is_submitting {
        copy.submitting_label
    } else {
        copy.submit_label
    }
}

/// Shift `area` down by the animation's remaining offset
fn offset_area(area: Rect, reveal: &RevealState) -> Rect {
    let offset = reveal.current_offset().min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// Draw a complete form into `area`
pub fn draw_form<F: FormSchema>(
    frame: &mut Frame,
    area: Rect,
    copy: &FormCopy,
    form: &FormComponent<F>,
    header_reveal: &RevealState,
    form_reveal: &RevealState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADING_HEIGHT + RevealState::OFFSET_ROWS),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    draw_heading(frame, offset_area(chunks[0], header_reveal), copy, header_reveal);
    draw_fields(frame, offset_area(chunks[1], form_reveal), copy, form, form_reveal);
}

fn draw_heading(frame: &mut Frame, area: Rect, copy: &FormCopy, reveal: &RevealState) {
    let mut title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let mut description_style = Style::default().fg(Color::Gray);
    if reveal.is_dim() {
        title_style = title_style.add_modifier(Modifier::DIM);
        description_style = description_style.add_modifier(Modifier::DIM);
    }

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(copy.title, title_style)),
        Line::from(""),
        Line::from(Span::styled(copy.description, description_style)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(heading, area);
}

fn draw_fields<F: FormSchema>(
    frame: &mut Frame,
    area: Rect,
    copy: &FormCopy,
    form: &FormComponent<F>,
    reveal: &RevealState,
) {
    let mut constraints: Vec<Constraint> = F::ALL
        .iter()
        .map(|f| Constraint::Length(field_height(f.is_multiline())))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let is_dim = reveal.is_dim();

    for (&field, &chunk) in F::ALL.iter().zip(chunks.iter()) {
        draw_field(
            frame,
            chunk,
            &FieldView {
                label: field.label(),
                placeholder: field.placeholder(),
                value: form.values().get(field),
                error: form.errors().get(field),
                is_active: form.active_field() == Some(field),
                is_multiline: field.is_multiline(),
                is_dim,
            },
        );
    }

    render_button(
        frame,
        chunks[F::count()],
        button_label(copy, form.is_submitting()),
        form.is_button_active(),
        !form.is_submitting(),
    );
}
