use std::rc::Rc;

use shared::{create_trip, CreateTripError, DateRange, TripForm, TripFormAction};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::navigation::RouterNavigator;

const COMPONENT: &str = "create_trip";

/// Reducer wrapper so the form can live in `use_reducer`
#[derive(Clone, Default, PartialEq)]
pub struct TripFormState(pub TripForm);

impl Reducible for TripFormState {
    type Action = TripFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        form.apply(action);
        Rc::new(Self(form))
    }
}

pub struct UseCreateTripResult {
    pub state: TripForm,
    pub actions: CreateTripActions,
}

#[derive(Clone)]
pub struct CreateTripActions {
    pub on_destination_change: Callback<String>,
    pub on_date_range_change: Callback<DateRange>,
    pub on_owner_name_change: Callback<String>,
    pub on_owner_email_change: Callback<String>,
    pub open_guests_input: Callback<()>,
    pub close_guests_input: Callback<()>,
    pub open_guests_modal: Callback<()>,
    pub close_guests_modal: Callback<()>,
    pub open_confirm_modal: Callback<()>,
    pub close_confirm_modal: Callback<()>,
    pub add_email: Callback<SubmitEvent>,
    pub remove_email: Callback<String>,
    pub create_trip: Callback<SubmitEvent>,
}

/// Hook owning the create-trip form for the lifetime of the page
#[hook]
pub fn use_create_trip(api_client: &ApiClient) -> UseCreateTripResult {
    let form = use_reducer(TripFormState::default);
    // Latch for clicks that land before the Pending state has rendered
    let in_flight = use_mut_ref(|| false);
    let router = use_navigator();

    let dispatch_with = |action: fn() -> TripFormAction| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action()))
    };

    let on_destination_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(TripFormAction::SetDestination(value)))
    };

    let on_date_range_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |range: DateRange| dispatcher.dispatch(TripFormAction::SetDateRange(range)))
    };

    let on_owner_name_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(TripFormAction::SetOwnerName(value)))
    };

    let on_owner_email_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(TripFormAction::SetOwnerEmail(value)))
    };

    let add_email = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
                return;
            };
            let email = FormData::new_with_form(&target)
                .ok()
                .and_then(|data| data.get("email").as_string())
                .unwrap_or_default();

            // Keep the typed value when the list would not take it
            if !form.0.emails_to_invite.accepts(&email) {
                Logger::debug_with_component(COMPONENT, &format!("Not inviting {:?}", email));
                return;
            }

            form.dispatch(TripFormAction::AddEmail(email));
            target.reset();
        })
    };

    let remove_email = {
        let dispatcher = form.dispatcher();
        Callback::from(move |email: String| dispatcher.dispatch(TripFormAction::RemoveEmail(email)))
    };

    let on_create_trip = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *in_flight.borrow() {
                return;
            }
            let Some(router) = router.clone() else {
                Logger::error_with_component(COMPONENT, "Create trip page rendered outside a router");
                return;
            };

            *in_flight.borrow_mut() = true;
            let snapshot = form.0.clone();
            let dispatcher = form.dispatcher();
            let in_flight = in_flight.clone();
            let api_client = api_client.clone();
            let navigator = RouterNavigator::new(router);

            spawn_local(async move {
                let result = create_trip(&snapshot, &api_client, &navigator, move |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                *in_flight.borrow_mut() = false;

                match result {
                    Ok(trip_id) => {
                        Logger::info_with_component(COMPONENT, &format!("Trip {} created", trip_id));
                    }
                    Err(CreateTripError::Validation(error)) => {
                        Logger::debug_with_component(COMPONENT, &format!("Submit blocked: {}", error));
                    }
                    Err(error) => {
                        Logger::warn_with_component(COMPONENT, &error.to_string());
                    }
                }
            });
        })
    };

    UseCreateTripResult {
        state: form.0.clone(),
        actions: CreateTripActions {
            on_destination_change,
            on_date_range_change,
            on_owner_name_change,
            on_owner_email_change,
            open_guests_input: dispatch_with(|| TripFormAction::OpenGuestsInput),
            close_guests_input: dispatch_with(|| TripFormAction::CloseGuestsInput),
            open_guests_modal: dispatch_with(|| TripFormAction::OpenGuestsModal),
            close_guests_modal: dispatch_with(|| TripFormAction::CloseGuestsModal),
            open_confirm_modal: dispatch_with(|| TripFormAction::OpenConfirmModal),
            close_confirm_modal: dispatch_with(|| TripFormAction::CloseConfirmModal),
            add_email,
            remove_email,
            create_trip: on_create_trip,
        },
    }
}
