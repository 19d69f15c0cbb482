pub mod service;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::content::SiteCopy;
pub use service::{Ack, ContactSubmissionService, FieldError, SubmissionError};

/// Where a contact form is mounted. A send from the dialog closes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOrigin {
    Section,
    Dialog,
}

impl ContactOrigin {
    pub fn id_prefix(self) -> &'static str {
        match self {
            ContactOrigin::Section => "contact",
            ContactOrigin::Dialog => "dialog",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Instagram,
    Facebook,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Key used in the JSON payload and in server field errors.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Instagram => "instagram",
            ContactField::Facebook => "facebook",
            ContactField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<ContactField> {
        match key {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "instagram" => Some(ContactField::Instagram),
            "facebook" => Some(ContactField::Facebook),
            // Older backends call the message "description".
            "message" | "description" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Instagram => "Instagram Handle",
            ContactField::Facebook => "Facebook Profile",
            ContactField::Message => "Message",
        }
    }

    pub fn localized_label(self, copy: &SiteCopy) -> &'static str {
        let label = match self {
            ContactField::Name => copy.label_name,
            ContactField::Email => copy.label_email,
            ContactField::Instagram => copy.label_instagram,
            ContactField::Facebook => copy.label_facebook,
            ContactField::Message => copy.label_message,
        };
        label.trim_end_matches(" *")
    }
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub message: String,
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ContactFormDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Instagram => self.instagram = optional(value),
            ContactField::Facebook => self.facebook = optional(value),
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Instagram => self.instagram.as_deref().unwrap_or(""),
            ContactField::Facebook => self.facebook.as_deref().unwrap_or(""),
            ContactField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactFormDraft::default()
    }

    /// Presence check only, whitespace counts as missing.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let missing: Vec<ContactField> = ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let handle = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            instagram: handle(&self.instagram),
            facebook: handle(&self.facebook),
            message: self.message.trim().to_string(),
        })
    }
}

fn join_labels(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<ContactField>,
}

/// Payload handed to the submission service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn email_body(&self) -> String {
        format!(
            "New Contact Form Submission from Social Riser Website:\n\n\
             Name: {}\n\
             Email: {}\n\
             Instagram: {}\n\
             Facebook: {}\n\n\
             Message:\n{}\n",
            self.name,
            self.email,
            self.instagram.as_deref().unwrap_or("Not provided"),
            self.facebook.as_deref().unwrap_or("Not provided"),
            self.message,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending {
        ticket: u64,
    },
    Sent,
    Failed(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    /// A submission is already in flight.
    Busy,
    Dispatched { ticket: u64, message: ContactMessage },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Sent,
    Failed(SubmissionError),
    /// The ticket was cancelled or superseded.
    Ignored,
}

/// One contact form instance: the draft plus its submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: ContactFormDraft,
    pub status: SubmissionStatus,
    pub field_errors: Vec<(ContactField, String)>,
    next_ticket: u64,
}

impl ContactState {
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
        self.field_errors.retain(|(f, _)| *f != field);
        if matches!(self.status, SubmissionStatus::Sent | SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Sending { .. })
    }

    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    /// Validates the draft and, when complete, hands out a ticket for exactly one send.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }
        match self.draft.validate() {
            Err(e) => {
                warn!("Contact form rejected: {}", e);
                SubmitOutcome::Rejected(e)
            }
            Ok(message) => {
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                self.status = SubmissionStatus::Sending { ticket };
                self.field_errors.clear();
                info!("Submitting contact form (ticket {})", ticket);
                SubmitOutcome::Dispatched { ticket, message }
            }
        }
    }

    pub fn resolve(&mut self, ticket: u64, result: Result<Ack, SubmissionError>) -> Resolution {
        if self.status != (SubmissionStatus::Sending { ticket }) {
            info!("Dropping result of stale contact submission {}", ticket);
            return Resolution::Ignored;
        }
        match result {
            Ok(ack) => {
                info!("Contact form sent (ticket {}, ack {:?})", ticket, ack.id);
                self.draft = ContactFormDraft::default();
                self.status = SubmissionStatus::Sent;
                Resolution::Sent
            }
            Err(e) => {
                warn!("Contact form failed (ticket {}): {}", ticket, e);
                if let SubmissionError::Invalid { fields } = &e {
                    self.field_errors = fields
                        .iter()
                        .filter_map(|fe| {
                            ContactField::from_key(&fe.field).map(|f| (f, fe.message.clone()))
                        })
                        .collect();
                }
                self.status = SubmissionStatus::Failed(e.to_string());
                Resolution::Failed(e)
            }
        }
    }

    /// Throws the draft away and invalidates any pending ticket. Returns true when a send was
    /// still in flight, so the caller can tell the visitor it never went out.
    pub fn discard(&mut self) -> bool {
        let cancelled = match self.status {
            SubmissionStatus::Sending { ticket } => {
                info!("Cancelling contact submission {}", ticket);
                true
            }
            _ => false,
        };
        self.draft = ContactFormDraft::default();
        self.status = SubmissionStatus::Idle;
        self.field_errors.clear();
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NavAction, NavigationState};
    use futures::executor::block_on;
    use service::testing::RecordingService;

    fn filled() -> ContactFormDraft {
        let mut draft = ContactFormDraft::default();
        draft.set(ContactField::Name, "Jane Doe".to_string());
        draft.set(ContactField::Email, "jane@example.com".to_string());
        draft.set(ContactField::Message, "Interested in a campaign".to_string());
        draft
    }

    /// Drives one submit through `service` the way the form component does.
    fn submit_via(state: &mut ContactState, service: &RecordingService) -> Option<Resolution> {
        match state.submit() {
            SubmitOutcome::Dispatched { ticket, message } => {
                let result = block_on(service.send(message));
                Some(state.resolve(ticket, result))
            }
            _ => None,
        }
    }

    #[test]
    fn empty_optional_handles_are_none() {
        let mut draft = ContactFormDraft::default();
        draft.set(ContactField::Instagram, "@jane".to_string());
        draft.set(ContactField::Instagram, String::new());
        assert_eq!(draft.instagram, None);
        assert_eq!(draft.get(ContactField::Instagram), "");
    }

    #[test]
    fn each_missing_required_field_blocks_submit() {
        for field in ContactField::REQUIRED {
            let service = RecordingService::succeeding();
            let mut state = ContactState {
                draft: filled(),
                ..ContactState::default()
            };
            state.edit(field, "   ".to_string());
            let before = state.draft.clone();

            assert_eq!(submit_via(&mut state, &service), None);
            assert_eq!(state.draft, before);
            assert!(!state.draft.is_empty());
            assert_eq!(state.status, SubmissionStatus::Idle);
            assert_eq!(service.calls(), 0);
        }
    }

    #[test]
    fn validation_lists_all_missing_fields() {
        let err = ContactFormDraft::default().validate().unwrap_err();
        assert_eq!(err.missing, ContactField::REQUIRED.to_vec());
        assert_eq!(
            err.to_string(),
            "missing required fields: Name, Email, Message"
        );
    }

    #[test]
    fn successful_submit_sends_once_and_resets() {
        let service = RecordingService::succeeding();
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };

        assert_eq!(submit_via(&mut state, &service), Some(Resolution::Sent));
        assert_eq!(service.calls(), 1);
        assert!(state.draft.is_empty());
        assert_eq!(state.status, SubmissionStatus::Sent);

        let sent = service.last().expect("message recorded");
        assert_eq!(sent.name, "Jane Doe");
        assert_eq!(sent.instagram, None);
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let service = RecordingService::failing(SubmissionError::Timeout);
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };

        let resolution = submit_via(&mut state, &service);
        assert_eq!(resolution, Some(Resolution::Failed(SubmissionError::Timeout)));
        assert_eq!(state.draft, filled());
        assert!(matches!(state.status, SubmissionStatus::Failed(_)));

        // Resubmission is allowed.
        assert!(matches!(state.submit(), SubmitOutcome::Dispatched { ticket: 1, .. }));
    }

    #[test]
    fn server_field_errors_are_attached() {
        let service = RecordingService::failing(SubmissionError::Invalid {
            fields: vec![FieldError {
                field: "email".to_string(),
                message: "looks invalid".to_string(),
            }],
        });
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };
        submit_via(&mut state, &service);
        assert_eq!(state.field_error(ContactField::Email), Some("looks invalid"));

        state.edit(ContactField::Email, "jane@example.org".to_string());
        assert_eq!(state.field_error(ContactField::Email), None);
    }

    #[test]
    fn second_submit_while_sending_is_busy() {
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };
        assert!(matches!(state.submit(), SubmitOutcome::Dispatched { .. }));
        assert_eq!(state.submit(), SubmitOutcome::Busy);
    }

    #[test]
    fn discard_cancels_pending_submission() {
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };
        let SubmitOutcome::Dispatched { ticket, .. } = state.submit() else {
            panic!("expected dispatch");
        };
        assert!(state.discard());
        assert!(state.draft.is_empty());

        let late = state.resolve(ticket, Ok(Ack::default()));
        assert_eq!(late, Resolution::Ignored);
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn discard_without_pending_send_reports_nothing_cancelled() {
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };
        assert!(!state.discard());

        let service = RecordingService::succeeding();
        state.draft = filled();
        submit_via(&mut state, &service);
        assert!(!state.discard());
    }

    /// What the form does with a resolution: a sent message is reported to the navigation state.
    fn settle(nav: &mut NavigationState, origin: ContactOrigin, resolution: &Resolution) {
        if *resolution == Resolution::Sent {
            nav.apply(NavAction::ContactSent(origin));
        }
    }

    #[test]
    fn successful_dialog_submit_closes_dialog() {
        let mut nav = NavigationState::default();
        nav.apply(NavAction::OpenContactDialog);
        let service = RecordingService::succeeding();
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };

        let resolution = submit_via(&mut state, &service).expect("dispatched");
        settle(&mut nav, ContactOrigin::Dialog, &resolution);
        assert!(!nav.contact_dialog_open);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn failed_dialog_submit_keeps_dialog_open() {
        let mut nav = NavigationState::default();
        nav.apply(NavAction::OpenContactDialog);
        let service = RecordingService::failing(SubmissionError::Network("offline".to_string()));
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };

        let resolution = submit_via(&mut state, &service).expect("dispatched");
        settle(&mut nav, ContactOrigin::Dialog, &resolution);
        assert!(nav.contact_dialog_open);
        assert_eq!(state.draft, filled());
    }

    #[test]
    fn section_submit_leaves_open_dialog_alone() {
        let mut nav = NavigationState::default();
        nav.apply(NavAction::OpenContactDialog);
        let service = RecordingService::succeeding();
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };

        let resolution = submit_via(&mut state, &service).expect("dispatched");
        settle(&mut nav, ContactOrigin::Section, &resolution);
        assert!(nav.contact_dialog_open);
    }

    #[test]
    fn stale_ticket_does_not_clear_new_draft() {
        let mut state = ContactState {
            draft: filled(),
            ..ContactState::default()
        };
        let SubmitOutcome::Dispatched { ticket: first, .. } = state.submit() else {
            panic!("expected dispatch");
        };
        state.discard();
        state.draft = filled();
        let SubmitOutcome::Dispatched { ticket: second, .. } = state.submit() else {
            panic!("expected dispatch");
        };
        assert_ne!(first, second);

        assert_eq!(state.resolve(first, Ok(Ack::default())), Resolution::Ignored);
        assert_eq!(state.draft, filled());
        assert_eq!(state.resolve(second, Ok(Ack::default())), Resolution::Sent);
    }

    #[test]
    fn email_body_marks_missing_handles() {
        let mut draft = filled();
        draft.set(ContactField::Facebook, "fb.com/jane".to_string());
        let body = draft.validate().unwrap().email_body();
        assert!(body.contains("Name: Jane Doe"));
        assert!(body.contains("Instagram: Not provided"));
        assert!(body.contains("Facebook: fb.com/jane"));
        assert!(body.ends_with("Interested in a campaign\n"));
    }

    #[test]
    fn from_key_accepts_legacy_description() {
        assert_eq!(ContactField::from_key("description"), Some(ContactField::Message));
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Instagram,
            ContactField::Facebook,
            ContactField::Message,
        ] {
            assert_eq!(ContactField::from_key(field.key()), Some(field));
        }
    }
}
