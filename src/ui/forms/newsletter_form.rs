//! Newsletter signup ("Stay Inspired")

use super::form_body::{draw_form, FormCopy};
use crate::state::{FormComponent, NewsletterField, RevealAnimations};
use ratatui::{layout::Rect, Frame};

const COPY: FormCopy = FormCopy {
    title: "Stay Inspired",
    description: "Subscribe to our newsletter for the latest updates on minimal design and floral artistry.",
    submit_label: "Subscribe",
    submitting_label: "Subscribing...",
};

pub fn draw_newsletter_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormComponent<NewsletterField>,
    reveal: &RevealAnimations,
) {
    draw_form(frame, area, &COPY, form, &reveal.header, &reveal.form);
}
