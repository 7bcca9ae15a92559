//! # Trip Form State
//!
//! The single state container behind the create-trip page.
//!
//! ## Responsibilities:
//! - Destination, date range, organizer and invite list values
//! - Visibility of the guest step and the two modals
//! - Submission lifecycle (idle, pending, created, failed)
//! - Submit preconditions and the per-field errors they produce
//!
//! All mutation goes through [`TripForm::apply`], which lets the browser bind
//! the container to a reducer and lets tests drive it directly.

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::{CreateTripRequest, DateRange, InviteList, TripId};

/// Visibility of one step or modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

/// Lifecycle of the create-trip request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    /// Request sent, waiting for the backend
    Pending,
    /// Backend accepted the trip; navigation is under way
    Created(TripId),
    /// Request failed; message is shown in the confirm modal
    Failed(String),
}

impl Submission {
    /// Whether the submit control must stay disabled
    pub fn is_locked(&self) -> bool {
        matches!(self, Submission::Pending | Submission::Created(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fields that can block a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Destination,
    DateRange,
    Guests,
    OwnerName,
    OwnerEmail,
}

/// First failed submit precondition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripFormError {
    #[error("Enter where you are going")]
    MissingDestination,
    #[error("Pick the start and end dates of the trip")]
    MissingDateRange,
    #[error("Invite at least one guest")]
    NoGuestsInvited,
    #[error("Enter your full name")]
    MissingOwnerName,
    #[error("Enter your email address")]
    MissingOwnerEmail,
}

impl TripFormError {
    pub fn field(&self) -> FormField {
        match self {
            TripFormError::MissingDestination => FormField::Destination,
            TripFormError::MissingDateRange => FormField::DateRange,
            TripFormError::NoGuestsInvited => FormField::Guests,
            TripFormError::MissingOwnerName => FormField::OwnerName,
            TripFormError::MissingOwnerEmail => FormField::OwnerEmail,
        }
    }
}

/// Messages for every field that blocked the last submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, error: &TripFormError) {
        self.0.insert(error.field(), error.to_string());
    }

    fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

/// Every user-triggered change to the form
#[derive(Debug, Clone, PartialEq)]
pub enum TripFormAction {
    SetDestination(String),
    SetDateRange(DateRange),
    SetOwnerName(String),
    SetOwnerEmail(String),
    OpenGuestsInput,
    CloseGuestsInput,
    OpenGuestsModal,
    CloseGuestsModal,
    OpenConfirmModal,
    CloseConfirmModal,
    AddEmail(String),
    RemoveEmail(String),
    /// Submit stopped by a failed precondition
    SubmitBlocked(TripFormError),
    SubmitStarted,
    SubmitSucceeded(TripId),
    SubmitFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub destination: String,
    pub date_range: DateRange,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: InviteList,

    pub guests_input: Disclosure,
    pub guests_modal: Disclosure,
    pub confirm_modal: Disclosure,

    pub submission: Submission,
    pub field_errors: FieldErrors,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: TripFormAction) {
        debug!(target: "trip_form", "apply {:?}", action);
        match action {
            TripFormAction::SetDestination(destination) => {
                self.destination = destination;
                self.field_errors.clear(FormField::Destination);
            }
            TripFormAction::SetDateRange(range) => {
                self.date_range = range;
                self.field_errors.clear(FormField::DateRange);
            }
            TripFormAction::SetOwnerName(name) => {
                self.owner_name = name;
                self.field_errors.clear(FormField::OwnerName);
            }
            TripFormAction::SetOwnerEmail(email) => {
                self.owner_email = email;
                self.field_errors.clear(FormField::OwnerEmail);
            }
            TripFormAction::OpenGuestsInput => self.guests_input = Disclosure::Open,
            TripFormAction::CloseGuestsInput => self.guests_input = Disclosure::Closed,
            TripFormAction::OpenGuestsModal => self.guests_modal = Disclosure::Open,
            TripFormAction::CloseGuestsModal => self.guests_modal = Disclosure::Closed,
            TripFormAction::OpenConfirmModal => self.confirm_modal = Disclosure::Open,
            TripFormAction::CloseConfirmModal => {
                // Keep the modal up while the request is out
                if !self.submission.is_locked() {
                    self.confirm_modal = Disclosure::Closed;
                }
            }
            TripFormAction::AddEmail(email) => {
                if self.emails_to_invite.add(&email) {
                    self.field_errors.clear(FormField::Guests);
                } else {
                    debug!(target: "trip_form", "skipping duplicate or empty invite {:?}", email);
                }
            }
            TripFormAction::RemoveEmail(email) => {
                self.emails_to_invite.remove(&email);
            }
            TripFormAction::SubmitBlocked(first) => {
                self.field_errors = self.missing_fields();
                self.field_errors.insert(&first);
                self.submission = Submission::Idle;
            }
            TripFormAction::SubmitStarted => {
                self.field_errors = FieldErrors::default();
                self.submission = Submission::Pending;
            }
            TripFormAction::SubmitSucceeded(trip_id) => {
                self.submission = Submission::Created(trip_id);
            }
            TripFormAction::SubmitFailed(message) => {
                self.confirm_modal = Disclosure::Open;
                self.submission = Submission::Failed(message);
            }
        }
    }

    /// Check the submit preconditions in order and build the request body.
    ///
    /// Order: destination, both dates, at least one guest, owner name, owner
    /// email. Only the first failure is returned.
    pub fn validate(&self) -> Result<CreateTripRequest, TripFormError> {
        if self.destination.is_empty() {
            return Err(TripFormError::MissingDestination);
        }

        let (starts_at, ends_at) = self.date_range.bounds().ok_or(TripFormError::MissingDateRange)?;

        if self.emails_to_invite.is_empty() {
            return Err(TripFormError::NoGuestsInvited);
        }

        if self.owner_name.is_empty() {
            return Err(TripFormError::MissingOwnerName);
        }

        if self.owner_email.is_empty() {
            return Err(TripFormError::MissingOwnerEmail);
        }

        Ok(CreateTripRequest {
            destination: self.destination.clone(),
            owner_name: self.owner_name.clone(),
            owner_email: self.owner_email.clone(),
            starts_at,
            ends_at,
            emails_to_invite: self.emails_to_invite.to_vec(),
        })
    }

    /// Every failed precondition, not just the first.
    pub fn missing_fields(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.destination.is_empty() {
            errors.insert(&TripFormError::MissingDestination);
        }
        if !self.date_range.is_complete() {
            errors.insert(&TripFormError::MissingDateRange);
        }
        if self.emails_to_invite.is_empty() {
            errors.insert(&TripFormError::NoGuestsInvited);
        }
        if self.owner_name.is_empty() {
            errors.insert(&TripFormError::MissingOwnerName);
        }
        if self.owner_email.is_empty() {
            errors.insert(&TripFormError::MissingOwnerEmail);
        }
        errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nov(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
    }

    fn filled_form() -> TripForm {
        let mut form = TripForm::new();
        form.apply(TripFormAction::SetDestination("Florianópolis, BR".to_string()));
        form.apply(TripFormAction::SetDateRange(DateRange::new(nov(3), nov(10))));
        form.apply(TripFormAction::AddEmail("a@x.com".to_string()));
        form.apply(TripFormAction::SetOwnerName("Jane".to_string()));
        form.apply(TripFormAction::SetOwnerEmail("jane@x.com".to_string()));
        form
    }

    #[test]
    fn test_initial_state_is_empty_and_closed() {
        let form = TripForm::new();
        assert!(form.destination.is_empty());
        assert!(form.date_range.is_empty());
        assert!(form.emails_to_invite.is_empty());
        assert_eq!(form.guests_input, Disclosure::Closed);
        assert_eq!(form.guests_modal, Disclosure::Closed);
        assert_eq!(form.confirm_modal, Disclosure::Closed);
        assert_eq!(form.submission, Submission::Idle);
        assert!(form.field_errors.is_empty());
    }

    #[test]
    fn test_open_guests_input_is_idempotent() {
        let mut form = TripForm::new();
        form.apply(TripFormAction::OpenGuestsInput);
        form.apply(TripFormAction::OpenGuestsInput);
        assert!(form.guests_input.is_open());

        form.apply(TripFormAction::CloseGuestsInput);
        assert!(!form.guests_input.is_open());
    }

    #[test]
    fn test_disclosures_are_independent() {
        let mut form = TripForm::new();
        form.apply(TripFormAction::OpenGuestsModal);
        assert!(form.guests_modal.is_open());
        assert!(!form.confirm_modal.is_open());
        assert!(!form.guests_input.is_open());

        form.apply(TripFormAction::OpenConfirmModal);
        form.apply(TripFormAction::CloseGuestsModal);
        assert!(!form.guests_modal.is_open());
        assert!(form.confirm_modal.is_open());
    }

    #[test]
    fn test_add_and_remove_emails() {
        let mut form = TripForm::new();
        form.apply(TripFormAction::AddEmail("a@x.com".to_string()));
        form.apply(TripFormAction::AddEmail("b@x.com".to_string()));
        form.apply(TripFormAction::AddEmail("a@x.com".to_string()));
        assert_eq!(form.emails_to_invite.as_slice(), ["a@x.com", "b@x.com"]);

        form.apply(TripFormAction::RemoveEmail("a@x.com".to_string()));
        form.apply(TripFormAction::RemoveEmail("nobody@x.com".to_string()));
        assert_eq!(form.emails_to_invite.as_slice(), ["b@x.com"]);
    }

    #[test]
    fn test_validate_builds_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.destination, "Florianópolis, BR");
        assert_eq!(request.owner_name, "Jane");
        assert_eq!(request.owner_email, "jane@x.com");
        assert_eq!(request.starts_at.date_naive(), nov(3));
        assert_eq!(request.ends_at.date_naive(), nov(10));
        assert_eq!(request.emails_to_invite, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let mut form = filled_form();
        form.destination.clear();
        assert_eq!(form.validate(), Err(TripFormError::MissingDestination));

        let mut form = filled_form();
        form.date_range.to = None;
        assert_eq!(form.validate(), Err(TripFormError::MissingDateRange));

        let mut form = filled_form();
        form.date_range = DateRange::default();
        assert_eq!(form.validate(), Err(TripFormError::MissingDateRange));

        let mut form = filled_form();
        form.apply(TripFormAction::RemoveEmail("a@x.com".to_string()));
        assert_eq!(form.validate(), Err(TripFormError::NoGuestsInvited));

        let mut form = filled_form();
        form.owner_name.clear();
        assert_eq!(form.validate(), Err(TripFormError::MissingOwnerName));

        let mut form = filled_form();
        form.owner_email.clear();
        assert_eq!(form.validate(), Err(TripFormError::MissingOwnerEmail));
    }

    #[test]
    fn test_validate_checks_in_order() {
        let form = TripForm::new();
        assert_eq!(form.validate(), Err(TripFormError::MissingDestination));

        let mut form = TripForm::new();
        form.owner_name = "Jane".to_string();
        form.destination = "Lisbon".to_string();
        assert_eq!(form.validate(), Err(TripFormError::MissingDateRange));
    }

    #[test]
    fn test_blocked_submit_records_every_missing_field() {
        let mut form = TripForm::new();
        form.destination = "Lisbon".to_string();
        let first = form.validate().unwrap_err();
        form.apply(TripFormAction::SubmitBlocked(first));

        assert_eq!(form.field_errors.len(), 4);
        assert!(form.field_errors.get(FormField::Destination).is_none());
        assert!(form.field_errors.get(FormField::DateRange).is_some());
        assert!(form.field_errors.get(FormField::Guests).is_some());
        assert_eq!(form.field_errors.get(FormField::OwnerName), Some("Enter your full name"));
        assert!(form.field_errors.get(FormField::OwnerEmail).is_some());
        assert_eq!(form.submission, Submission::Idle);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = TripForm::new();
        let first = form.validate().unwrap_err();
        form.apply(TripFormAction::SubmitBlocked(first));
        assert!(form.field_errors.get(FormField::OwnerName).is_some());

        form.apply(TripFormAction::SetOwnerName("Jane".to_string()));
        assert!(form.field_errors.get(FormField::OwnerName).is_none());

        form.apply(TripFormAction::AddEmail("a@x.com".to_string()));
        assert!(form.field_errors.get(FormField::Guests).is_none());
        assert!(form.field_errors.get(FormField::Destination).is_some());
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = filled_form();
        form.apply(TripFormAction::OpenConfirmModal);
        form.apply(TripFormAction::SubmitStarted);
        assert!(form.is_submitting());

        // Close is ignored while pending
        form.apply(TripFormAction::CloseConfirmModal);
        assert!(form.confirm_modal.is_open());

        form.apply(TripFormAction::SubmitFailed("Network error".to_string()));
        assert!(!form.is_submitting());
        assert!(form.confirm_modal.is_open());
        assert_eq!(form.submission.error_message(), Some("Network error"));

        form.apply(TripFormAction::SubmitStarted);
        form.apply(TripFormAction::SubmitSucceeded(TripId::from("abc123")));
        assert_eq!(form.submission, Submission::Created(TripId::from("abc123")));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_close_confirm_modal_after_failure() {
        let mut form = filled_form();
        form.apply(TripFormAction::OpenConfirmModal);
        form.apply(TripFormAction::SubmitStarted);
        form.apply(TripFormAction::SubmitFailed("boom".to_string()));
        form.apply(TripFormAction::CloseConfirmModal);
        assert!(!form.confirm_modal.is_open());
    }
}
