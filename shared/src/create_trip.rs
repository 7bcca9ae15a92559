use async_trait::async_trait;
use log::{info, warn};
use thiserror::Error;

use crate::{CreateTripRequest, CreateTripResponse, TripForm, TripFormAction, TripFormError, TripId};

/// Failure talking to the trips backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateTripError {
    #[error(transparent)]
    Validation(#[from] TripFormError),
    #[error("A trip is already being created")]
    AlreadySubmitting,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Backend endpoint used to create trips.
///
/// Futures are not `Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait TripsApi {
    async fn create_trip(&self, request: &CreateTripRequest) -> Result<CreateTripResponse, ApiError>;
}

/// Client-side location change
pub trait Navigator {
    /// Open the details view of a freshly created trip
    fn show_trip(&self, trip_id: &TripId);
}

/// Route of the trip details view for `trip_id`
pub fn trip_details_path(trip_id: &TripId) -> String {
    format!("/trips/{}", trip_id)
}

/// Run one submit of the create-trip form.
///
/// `form` is the snapshot the user submitted; every state change is reported
/// through `dispatch` so the caller owns the live state. At most one request
/// is sent, and only when every precondition holds. On success the navigator
/// is sent to the trip details route; on failure nothing navigates.
pub async fn create_trip<A, N, D>(
    form: &TripForm,
    api: &A,
    navigator: &N,
    dispatch: D,
) -> Result<TripId, CreateTripError>
where
    A: TripsApi + ?Sized,
    N: Navigator + ?Sized,
    D: Fn(TripFormAction),
{
    if form.is_submitting() {
        return Err(CreateTripError::AlreadySubmitting);
    }

    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => {
            info!(target: "create_trip", "submit blocked: {}", error);
            dispatch(TripFormAction::SubmitBlocked(error.clone()));
            return Err(error.into());
        }
    };

    dispatch(TripFormAction::SubmitStarted);
    info!(
        target: "create_trip",
        "creating trip to {:?} with {} guest(s)",
        request.destination,
        request.emails_to_invite.len()
    );

    match api.create_trip(&request).await {
        Ok(response) => {
            let trip_id = response.trip_id;
            info!(target: "create_trip", "trip {} created", trip_id);
            dispatch(TripFormAction::SubmitSucceeded(trip_id.clone()));
            navigator.show_trip(&trip_id);
            Ok(trip_id)
        }
        Err(error) => {
            warn!(target: "create_trip", "failed to create trip: {}", error);
            dispatch(TripFormAction::SubmitFailed(error.to_string()));
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateRange, Submission};
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct FakeTripsApi {
        calls: RefCell<Vec<CreateTripRequest>>,
        reply: Result<CreateTripResponse, ApiError>,
    }

    impl FakeTripsApi {
        fn returning(trip_id: TripId) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply: Ok(CreateTripResponse { trip_id }),
            }
        }

        fn failing(error: ApiError) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply: Err(error),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl TripsApi for FakeTripsApi {
        async fn create_trip(&self, request: &CreateTripRequest) -> Result<CreateTripResponse, ApiError> {
            self.calls.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn show_trip(&self, trip_id: &TripId) {
            self.paths.borrow_mut().push(trip_details_path(trip_id));
        }
    }

    fn nov(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
    }

    fn filled_form() -> TripForm {
        let mut form = TripForm::new();
        for action in [
            TripFormAction::SetDestination("Lisbon, PT".to_string()),
            TripFormAction::SetDateRange(DateRange::new(nov(3), nov(10))),
            TripFormAction::AddEmail("a@x.com".to_string()),
            TripFormAction::SetOwnerName("Jane".to_string()),
            TripFormAction::SetOwnerEmail("jane@x.com".to_string()),
        ] {
            form.apply(action);
        }
        form
    }

    /// Submit `form` the way the page does: snapshot in, actions back into the live state.
    async fn submit(
        form: &RefCell<TripForm>,
        api: &FakeTripsApi,
        navigator: &RecordingNavigator,
    ) -> Result<TripId, CreateTripError> {
        let snapshot = form.borrow().clone();
        create_trip(&snapshot, api, navigator, |action| form.borrow_mut().apply(action)).await
    }

    #[test]
    fn test_trip_details_path() {
        assert_eq!(trip_details_path(&TripId::from("abc123")), "/trips/abc123");
        assert_eq!(trip_details_path(&TripId::from(7i64)), "/trips/7");
    }

    #[tokio::test]
    async fn test_missing_field_performs_no_call() {
        let cases: [(fn(&mut TripForm), TripFormError); 6] = [
            (|f: &mut TripForm| f.destination.clear(), TripFormError::MissingDestination),
            (|f: &mut TripForm| f.date_range = DateRange::default(), TripFormError::MissingDateRange),
            (|f: &mut TripForm| f.date_range.to = None, TripFormError::MissingDateRange),
            (|f: &mut TripForm| f.emails_to_invite = Default::default(), TripFormError::NoGuestsInvited),
            (|f: &mut TripForm| f.owner_name.clear(), TripFormError::MissingOwnerName),
            (|f: &mut TripForm| f.owner_email.clear(), TripFormError::MissingOwnerEmail),
        ];

        for (break_form, expected) in cases {
            let mut form = filled_form();
            break_form(&mut form);
            let form = RefCell::new(form);
            let api = FakeTripsApi::returning(TripId::from("abc123"));
            let navigator = RecordingNavigator::default();

            let result = submit(&form, &api, &navigator).await;

            assert_eq!(result, Err(CreateTripError::Validation(expected.clone())));
            assert_eq!(api.call_count(), 0);
            assert!(navigator.paths.borrow().is_empty());
            assert!(form.borrow().field_errors.get(expected.field()).is_some());
            assert_eq!(form.borrow().submission, Submission::Idle);
        }
    }

    #[tokio::test]
    async fn test_complete_form_issues_one_call_and_navigates() {
        let form = RefCell::new(filled_form());
        let api = FakeTripsApi::returning(TripId::from("abc123"));
        let navigator = RecordingNavigator::default();

        let result = submit(&form, &api, &navigator).await;

        assert_eq!(result, Ok(TripId::from("abc123")));
        assert_eq!(api.call_count(), 1);
        let sent = &api.calls.borrow()[0];
        assert_eq!(sent.destination, "Lisbon, PT");
        assert_eq!(sent.owner_name, "Jane");
        assert_eq!(sent.owner_email, "jane@x.com");
        assert_eq!(sent.starts_at.date_naive(), nov(3));
        assert_eq!(sent.ends_at.date_naive(), nov(10));
        assert_eq!(sent.emails_to_invite, vec!["a@x.com".to_string()]);
        assert_eq!(*navigator.paths.borrow(), vec!["/trips/abc123".to_string()]);
        assert_eq!(form.borrow().submission, Submission::Created(TripId::from("abc123")));
    }

    #[tokio::test]
    async fn test_numeric_trip_id_navigates() {
        let form = RefCell::new(filled_form());
        let api = FakeTripsApi::returning(TripId::from(42i64));
        let navigator = RecordingNavigator::default();

        submit(&form, &api, &navigator).await.unwrap();

        assert_eq!(*navigator.paths.borrow(), vec!["/trips/42".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_call_keeps_modal_open_and_does_not_navigate() {
        let mut initial = filled_form();
        initial.apply(TripFormAction::OpenConfirmModal);
        let form = RefCell::new(initial);
        let api = FakeTripsApi::failing(ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        });
        let navigator = RecordingNavigator::default();

        let result = submit(&form, &api, &navigator).await;

        assert!(matches!(result, Err(CreateTripError::Api(ApiError::Status { status: 500, .. }))));
        assert_eq!(api.call_count(), 1);
        assert!(navigator.paths.borrow().is_empty());
        let form = form.borrow();
        assert!(form.confirm_modal.is_open());
        assert_eq!(
            form.submission.error_message(),
            Some("Server error 500: Internal Server Error")
        );
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_retry_after_failure_is_allowed() {
        let form = RefCell::new(filled_form());
        let navigator = RecordingNavigator::default();

        let failing = FakeTripsApi::failing(ApiError::Network("offline".to_string()));
        assert!(submit(&form, &failing, &navigator).await.is_err());

        let working = FakeTripsApi::returning(TripId::from("t-9"));
        assert_eq!(submit(&form, &working, &navigator).await, Ok(TripId::from("t-9")));
        assert_eq!(*navigator.paths.borrow(), vec!["/trips/t-9".to_string()]);
    }

    #[tokio::test]
    async fn test_pending_submission_blocks_second_call() {
        let mut pending = filled_form();
        pending.apply(TripFormAction::SubmitStarted);
        let form = RefCell::new(pending);
        let api = FakeTripsApi::returning(TripId::from("abc123"));
        let navigator = RecordingNavigator::default();

        let result = submit(&form, &api, &navigator).await;

        assert_eq!(result, Err(CreateTripError::AlreadySubmitting));
        assert_eq!(api.call_count(), 0);
        assert!(navigator.paths.borrow().is_empty());
        assert_eq!(form.borrow().submission, Submission::Pending);
    }

    #[tokio::test]
    async fn test_full_create_trip_scenario() {
        let form = RefCell::new(TripForm::new());
        let apply = |action| form.borrow_mut().apply(action);

        apply(TripFormAction::SetDestination("Florianópolis, BR".to_string()));
        apply(TripFormAction::SetDateRange(
            DateRange::default().select_day(nov(3)).select_day(nov(10)),
        ));
        apply(TripFormAction::OpenGuestsInput);
        apply(TripFormAction::OpenGuestsModal);
        apply(TripFormAction::AddEmail("a@x.com".to_string()));
        apply(TripFormAction::AddEmail("b@x.com".to_string()));
        apply(TripFormAction::AddEmail("a@x.com".to_string()));
        apply(TripFormAction::CloseGuestsModal);
        apply(TripFormAction::OpenConfirmModal);
        apply(TripFormAction::SetOwnerName("Jane".to_string()));
        apply(TripFormAction::SetOwnerEmail("jane@x.com".to_string()));

        let api = FakeTripsApi::returning(TripId::from("trip-77"));
        let navigator = RecordingNavigator::default();
        let trip_id = submit(&form, &api, &navigator).await.unwrap();

        assert_eq!(trip_id, TripId::from("trip-77"));
        assert_eq!(api.call_count(), 1);
        let sent = &api.calls.borrow()[0];
        assert_eq!(sent.destination, "Florianópolis, BR");
        assert_eq!(sent.emails_to_invite, vec!["a@x.com".to_string(), "b@x.com".to_string()]);
        assert_eq!(sent.starts_at.date_naive(), nov(3));
        assert_eq!(sent.ends_at.date_naive(), nov(10));
        assert_eq!(*navigator.paths.borrow(), vec!["/trips/trip-77".to_string()]);
    }
}
