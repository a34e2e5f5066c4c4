//! Application state definitions

use super::forms::{ContactField, FormComponent, NewsletterField, SubmitOutcome};
use super::reveal_state::RevealState;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Contact,
    Newsletter,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Newsletter => "Newsletter",
        }
    }
}

/// The one form component currently mounted
#[derive(Debug, Clone)]
pub enum MountedForm {
    Contact(FormComponent<ContactField>),
    Newsletter(FormComponent<NewsletterField>),
}

impl MountedForm {
    /// Fresh component for a view
    pub fn mount(view: View) -> Self {
        match view {
            View::Contact => Self::Contact(FormComponent::new()),
            View::Newsletter => Self::Newsletter(FormComponent::new()),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Contact(_) => View::Contact,
            Self::Newsletter(_) => View::Newsletter,
        }
    }

    pub fn next_field(&mut self) {
        match self {
            Self::Contact(f) => f.next_field(),
            Self::Newsletter(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            Self::Contact(f) => f.prev_field(),
            Self::Newsletter(f) => f.prev_field(),
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self {
            Self::Contact(f) => f.input_char(c),
            Self::Newsletter(f) => f.input_char(c),
        }
    }

    pub fn backspace(&mut self) {
        match self {
            Self::Contact(f) => f.backspace(),
            Self::Newsletter(f) => f.backspace(),
        }
    }

    pub fn is_button_active(&self) -> bool {
        match self {
            Self::Contact(f) => f.is_button_active(),
            Self::Newsletter(f) => f.is_button_active(),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self {
            Self::Contact(f) => f.is_active_field_multiline(),
            Self::Newsletter(f) => f.is_active_field_multiline(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Self::Contact(f) => f.is_submitting(),
            Self::Newsletter(f) => f.is_submitting(),
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match self {
            Self::Contact(f) => f.submit(),
            Self::Newsletter(f) => f.submit(),
        }
    }

    pub fn complete(&mut self, ticket: Uuid) -> Option<&'static str> {
        match self {
            Self::Contact(f) => f.complete(ticket),
            Self::Newsletter(f) => f.complete(ticket),
        }
    }

    pub fn fail(&mut self, ticket: Uuid) -> bool {
        match self {
            Self::Contact(f) => f.fail(ticket),
            Self::Newsletter(f) => f.fail(ticket),
        }
    }
}

/// Kind of modal notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Successful submission
    Confirmation,
    Error,
}

/// A modal message waiting for acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Entrance animations restarted on every mount
#[derive(Debug, Clone)]
pub struct RevealAnimations {
    pub header: RevealState,
    pub form: RevealState,
}

impl RevealAnimations {
    /// The form follows the header after a short delay
    const FORM_DELAY: Duration = Duration::from_millis(200);

    pub fn start() -> Self {
        Self {
            header: RevealState::new(Duration::ZERO),
            form: RevealState::new(Self::FORM_DELAY),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.header.is_complete() && self.form.is_complete()
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: MountedForm,
    pub reveal: RevealAnimations,
    /// Modal notices, oldest first
    pub notices: VecDeque<Notice>,
}

impl AppState {
    pub fn new(view: View) -> Self {
        Self {
            form: MountedForm::mount(view),
            reveal: RevealAnimations::start(),
            notices: VecDeque::new(),
        }
    }

    pub fn current_view(&self) -> View {
        self.form.view()
    }

    /// Replace the mounted form with a fresh one for `view`
    pub fn mount(&mut self, view: View) {
        self.form = MountedForm::mount(view);
        self.reveal = RevealAnimations::start();
    }

    pub fn push_confirmation(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Confirmation,
            message: message.into(),
        });
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    /// Notice currently shown, if any
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(View::default())
    }
}
