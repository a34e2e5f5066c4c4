//! Contact form ("Get in Touch")

use super::form_body::{draw_form, FormCopy};
use crate::state::{ContactField, FormComponent, RevealAnimations};
use ratatui::{layout::Rect, Frame};

const COPY: FormCopy = FormCopy {
    title: "Get in Touch",
    description: "We'd love to hear from you. Fill out the form below and we'll get back to you as soon as possible.",
    submit_label: "Send Message",
    submitting_label: "Sending...",
};

pub fn draw_contact_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormComponent<ContactField>,
    reveal: &RevealAnimations,
) {
    draw_form(frame, area, &COPY, form, &reveal.header, &reveal.form);
}
