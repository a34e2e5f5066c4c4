//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::MountedForm;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    match &app.state.form {
        MountedForm::Contact(form) => {
            forms::draw_contact_form(frame, main_area, form, &app.state.reveal)
        }
        MountedForm::Newsletter(form) => {
            forms::draw_newsletter_form(frame, main_area, form, &app.state.reveal)
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Notices overlay everything until dismissed
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
