//! Application state and core logic

use crate::state::{AppState, SubmitOutcome, View};
use crate::submit::{Submission, SubmitError, Submitter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Completion of a submission task, delivered back to the UI loop
#[derive(Debug)]
pub struct SubmissionEvent {
    /// View whose component started the submission
    pub view: View,
    pub ticket: Uuid,
    pub result: Result<(), SubmitError>,
}

/// The submission task currently running
struct InFlight {
    ticket: Uuid,
    handle: JoinHandle<()>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated submissions go
    submitter: Arc<dyn Submitter>,
    events_tx: UnboundedSender<SubmissionEvent>,
    events_rx: UnboundedReceiver<SubmissionEvent>,
    in_flight: Option<InFlight>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with `view` mounted
    pub fn new(view: View, submitter: Arc<dyn Submitter>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        tracing::debug!(view = view.label(), "Mounting form");

        Self {
            state: AppState::new(view),
            submitter,
            events_tx,
            events_rx,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether an entrance animation is still running
    pub fn is_animating(&self) -> bool {
        !self.state.reveal.is_complete()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // A notice blocks everything until acknowledged
        if self.state.current_notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        let on_button = self.state.form.is_button_active();

        match key.code {
            KeyCode::F(1) => self.switch_view(View::Contact),
            KeyCode::F(2) => self.switch_view(View::Newsletter),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Submit shortcut (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Enter if on_button => self.submit(),
            // Enter in the message field adds a newline
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.state.form.input_char('\n')
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Unmount the current form and mount a fresh `view`.
    ///
    /// Any in-flight submission is cancelled; a completion that still slips
    /// through carries a ticket the new component does not know.
    pub fn switch_view(&mut self, view: View) {
        let current = self.state.current_view();
        if view == current {
            return;
        }

        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
            tracing::info!(
                view = current.label(),
                ticket = %in_flight.ticket,
                "Cancelled in-flight submission on unmount"
            );
        }

        tracing::debug!(from = current.label(), to = view.label(), "Switching form");
        self.state.mount(view);
    }

    /// Run the submit flow on the mounted form
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(submission) => self.dispatch(submission),
            SubmitOutcome::Rejected { error_count } => {
                tracing::info!(
                    view = self.state.current_view().label(),
                    error_count,
                    "Form has validation errors"
                );
            }
            SubmitOutcome::InFlight => {}
        }
    }

    /// Hand the submission to the submitter on a background task
    fn dispatch(&mut self, submission: Submission) {
        let view = self.state.current_view();
        let ticket = submission.id;
        let submitter = Arc::clone(&self.submitter);
        let tx = self.events_tx.clone();

        tracing::info!(form = submission.form, %ticket, "Submitting form");

        let handle = tokio::spawn(async move {
            let result = submitter.submit(submission).await;
            // Only fails once the app is gone
            let _ = tx.send(SubmissionEvent {
                view,
                ticket,
                result,
            });
        });

        self.in_flight = Some(InFlight { ticket, handle });
    }

    /// Apply every completion that has arrived since the last call
    pub fn poll_submissions(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_submission_event(event);
        }
    }

    /// Wait for the next completion
    #[cfg(test)]
    pub async fn next_submission_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.recv().await
    }

    /// Apply a completion to the mounted form, if it still belongs to it
    pub fn apply_submission_event(&mut self, event: SubmissionEvent) {
        if event.view != self.state.current_view() {
            tracing::debug!(ticket = %event.ticket, "Dropping completion for unmounted form");
            return;
        }

        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.ticket == event.ticket)
        {
            self.in_flight = None;
        }

        match event.result {
            Ok(()) => {
                if let Some(message) = self.state.form.complete(event.ticket) {
                    tracing::info!(ticket = %event.ticket, "Submission complete");
                    self.state.push_confirmation(message);
                }
            }
            Err(e) => {
                if self.state.form.fail(event.ticket) {
                    tracing::warn!(ticket = %event.ticket, "Submission failed: {e}");
                    self.state
                        .push_error(format!("Sorry, your submission could not be sent. {e}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactField, MountedForm, NewsletterField, NoticeKind};
    use crate::submit::{MockSubmitter, SimulatedSubmitter};
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn fill_contact(app: &mut App, values: [&str; 5]) {
        for value in values {
            type_text(app, value);
            app.handle_key(press(KeyCode::Tab));
        }
    }

    fn simulated_app(view: View) -> App {
        App::new(view, Arc::new(SimulatedSubmitter::default()))
    }

    fn contact(app: &App) -> &crate::state::FormComponent<ContactField> {
        match &app.state.form {
            MountedForm::Contact(f) => f,
            other => panic!("expected contact form, got {:?}", other.view()),
        }
    }

    fn newsletter(app: &App) -> &crate::state::FormComponent<NewsletterField> {
        match &app.state.form {
            MountedForm::Newsletter(f) => f,
            other => panic!("expected newsletter form, got {:?}", other.view()),
        }
    }

    mod keys {
        use super::*;

        #[tokio::test]
        async fn test_typing_fills_fields_in_order() {
            let mut app = simulated_app(View::Contact);
            fill_contact(&mut app, ["Jo", "jo@x.co", "1234567890", "$100", "Hi"]);
            let form = contact(&app);
            assert_eq!(form.values().get(ContactField::Name), "Jo");
            assert_eq!(form.values().get(ContactField::PhoneNumber), "1234567890");
            assert_eq!(form.values().get(ContactField::Message), "Hi");
            assert!(form.is_button_active());
        }

        #[tokio::test]
        async fn test_enter_in_message_adds_newline() {
            let mut app = simulated_app(View::Contact);
            for _ in 0..4 {
                app.handle_key(press(KeyCode::Tab));
            }
            type_text(&mut app, "a");
            app.handle_key(press(KeyCode::Enter));
            type_text(&mut app, "b");
            assert_eq!(contact(&app).values().get(ContactField::Message), "a\nb");
            assert!(contact(&app).errors().is_empty());
        }

        #[tokio::test]
        async fn test_enter_in_single_line_field_submits() {
            let mut app = simulated_app(View::Newsletter);
            type_text(&mut app, "bad");
            app.handle_key(press(KeyCode::Enter));
            assert!(newsletter(&app).errors().has_error(NewsletterField::Email));
        }

        #[tokio::test]
        async fn test_ctrl_chars_are_not_typed() {
            let mut app = simulated_app(View::Newsletter);
            app.handle_key(ctrl('x'));
            assert!(newsletter(&app).values().is_empty());
        }

        #[tokio::test]
        async fn test_function_keys_switch_views() {
            let mut app = simulated_app(View::Contact);
            app.handle_key(press(KeyCode::F(2)));
            assert_eq!(app.state.current_view(), View::Newsletter);
            app.handle_key(press(KeyCode::F(1)));
            assert_eq!(app.state.current_view(), View::Contact);
        }

        #[tokio::test]
        async fn test_switching_to_current_view_keeps_state() {
            let mut app = simulated_app(View::Newsletter);
            type_text(&mut app, "keep");
            app.handle_key(press(KeyCode::F(2)));
            assert_eq!(newsletter(&app).values().get(NewsletterField::Email), "keep");
        }

        #[tokio::test]
        async fn test_notice_blocks_input_until_dismissed() {
            let mut app = simulated_app(View::Newsletter);
            app.state.push_confirmation("done");
            type_text(&mut app, "x");
            assert!(newsletter(&app).values().is_empty());
            app.handle_key(press(KeyCode::Enter));
            assert!(app.state.current_notice().is_none());
            type_text(&mut app, "x");
            assert_eq!(newsletter(&app).values().get(NewsletterField::Email), "x");
        }
    }

    mod submission_flow {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_contact_valid_submission_resets_after_delay() {
            let mut app = simulated_app(View::Contact);
            fill_contact(
                &mut app,
                [
                    "Jo",
                    "jo@x.co",
                    "1234567890",
                    "$100",
                    "Hello there, need flowers",
                ],
            );
            let started = tokio::time::Instant::now();
            app.handle_key(ctrl('s'));
            assert!(contact(&app).is_submitting());

            // Button is disabled while in flight
            app.handle_key(press(KeyCode::Enter));
            assert!(contact(&app).is_submitting());

            let event = app.next_submission_event().await.unwrap();
            assert!(started.elapsed() >= Duration::from_millis(2000));
            app.apply_submission_event(event);

            let form = contact(&app);
            assert!(!form.is_submitting());
            assert!(form.values().is_empty());
            assert!(form.errors().is_empty());
            assert_eq!(app.state.notices.len(), 1);
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Confirmation);
            assert_eq!(
                notice.message,
                "Thank you for your message. We'll get back to you soon!"
            );
        }

        #[tokio::test]
        async fn test_contact_invalid_submission_sets_errors() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().never();
            let mut app = App::new(View::Contact, Arc::new(mock));

            fill_contact(&mut app, ["J", "bad", "123", "", "hi"]);
            app.handle_key(press(KeyCode::Enter));

            let form = contact(&app);
            assert!(!form.is_submitting());
            assert_eq!(
                form.errors().get(ContactField::Name),
                "Name must be at least 2 characters."
            );
            assert_eq!(
                form.errors().get(ContactField::Email),
                "Please enter a valid email address."
            );
            assert_eq!(
                form.errors().get(ContactField::PhoneNumber),
                "Please enter a valid phone number."
            );
            assert_eq!(
                form.errors().get(ContactField::Budget),
                "Please enter your budget."
            );
            assert_eq!(
                form.errors().get(ContactField::Message),
                "Message must be at least 10 characters."
            );
            assert!(app.state.notices.is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_newsletter_valid_submission() {
            let mut app = simulated_app(View::Newsletter);
            type_text(&mut app, "user@example.com");
            app.handle_key(press(KeyCode::Enter));
            assert!(newsletter(&app).is_submitting());

            let event = app.next_submission_event().await.unwrap();
            app.apply_submission_event(event);

            assert_eq!(newsletter(&app).values().get(NewsletterField::Email), "");
            assert_eq!(
                app.state.current_notice().unwrap().message,
                "Thank you for subscribing to our newsletter!"
            );
        }

        #[tokio::test]
        async fn test_newsletter_invalid_never_submits() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().never();
            let mut app = App::new(View::Newsletter, Arc::new(mock));

            type_text(&mut app, "not-an-email");
            app.handle_key(press(KeyCode::Enter));

            assert!(!newsletter(&app).is_submitting());
            assert_eq!(
                newsletter(&app).errors().get(NewsletterField::Email),
                "Please enter a valid email address."
            );
        }

        #[tokio::test]
        async fn test_submitter_receives_snapshot_once() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .withf(|s| {
                    s.form == "newsletter"
                        && s.fields.get("email").map(String::as_str) == Some("user@example.com")
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = App::new(View::Newsletter, Arc::new(mock));

            type_text(&mut app, "user@example.com");
            app.handle_key(press(KeyCode::Enter));
            app.handle_key(press(KeyCode::Enter));

            let event = app.next_submission_event().await.unwrap();
            assert!(event.result.is_ok());
        }

        #[tokio::test]
        async fn test_failed_submission_keeps_values_and_shows_error() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Transport("offline".to_string())));
            let mut app = App::new(View::Newsletter, Arc::new(mock));

            type_text(&mut app, "user@example.com");
            app.handle_key(press(KeyCode::Enter));
            let event = app.next_submission_event().await.unwrap();
            app.apply_submission_event(event);

            let form = newsletter(&app);
            assert!(!form.is_submitting());
            assert_eq!(form.values().get(NewsletterField::Email), "user@example.com");
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert!(notice.message.contains("offline"));
        }
    }

    mod unmount {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_switching_view_cancels_in_flight_submission() {
            let mut app = simulated_app(View::Newsletter);
            type_text(&mut app, "user@example.com");
            app.handle_key(press(KeyCode::Enter));
            assert!(newsletter(&app).is_submitting());

            app.switch_view(View::Contact);
            tokio::time::sleep(Duration::from_secs(3)).await;
            app.poll_submissions();

            assert!(app.state.notices.is_empty());
            assert!(contact(&app).values().is_empty());
        }

        #[tokio::test]
        async fn test_completion_for_other_view_is_dropped() {
            let mut app = simulated_app(View::Contact);
            app.apply_submission_event(SubmissionEvent {
                view: View::Newsletter,
                ticket: Uuid::new_v4(),
                result: Ok(()),
            });
            assert!(app.state.notices.is_empty());
        }

        #[tokio::test]
        async fn test_stale_ticket_after_remount_is_ignored() {
            let mut app = simulated_app(View::Newsletter);
            type_text(&mut app, "user@example.com");
            app.handle_key(press(KeyCode::Enter));
            let ticket = newsletter(&app).pending_ticket().unwrap();

            app.switch_view(View::Contact);
            app.switch_view(View::Newsletter);
            app.apply_submission_event(SubmissionEvent {
                view: View::Newsletter,
                ticket,
                result: Ok(()),
            });

            assert!(app.state.notices.is_empty());
            assert!(!newsletter(&app).is_submitting());
        }
    }

    #[tokio::test]
    async fn test_quit_flag() {
        let mut app = simulated_app(View::Contact);
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_animating_right_after_mount() {
        let app = simulated_app(View::Contact);
        assert!(app.is_animating());
    }
}
