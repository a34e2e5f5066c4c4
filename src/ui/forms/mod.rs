//! Form rendering module
//!
//! - `field_renderer`: single input with its inline error line
//! - `form_body`: heading, fields and submit button for any form schema
//! - `contact_form` / `newsletter_form`: copy and labels per form

mod contact_form;
mod field_renderer;
mod form_body;
mod newsletter_form;

pub use contact_form::draw_contact_form;
pub use newsletter_form::draw_newsletter_form;
