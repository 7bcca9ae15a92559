use shared::FormField;
use yew::prelude::*;

use crate::components::confirm_trip_modal::ConfirmTripModal;
use crate::components::destination_and_date_step::DestinationAndDateStep;
use crate::components::invite_guests_modal::InviteGuestsModal;
use crate::components::invite_guests_step::InviteGuestsStep;
use crate::hooks::use_create_trip::use_create_trip;
use crate::services::api::ApiClient;

#[function_component(CreateTripPage)]
pub fn create_trip_page() -> Html {
    let api_client = ApiClient::new();
    let trip = use_create_trip(&api_client);
    let state = &trip.state;
    let actions = &trip.actions;

    let error_for = |field: FormField| state.field_errors.get(field).map(str::to_string);

    html! {
        <div class="create-trip-page">
            <div class="create-trip-content">
                <header class="create-trip-header">
                    <h1 class="logo">{"plann.er"}</h1>
                    <p class="tagline">{"Invite your friends and plan your next trip!"}</p>
                </header>

                <div class="create-trip-steps">
                    <DestinationAndDateStep
                        destination={state.destination.clone()}
                        date_range={state.date_range}
                        guests_input_open={state.guests_input.is_open()}
                        destination_error={error_for(FormField::Destination)}
                        date_range_error={error_for(FormField::DateRange)}
                        on_destination_change={actions.on_destination_change.clone()}
                        on_date_range_change={actions.on_date_range_change.clone()}
                        on_open_guests_input={actions.open_guests_input.clone()}
                        on_close_guests_input={actions.close_guests_input.clone()}
                    />

                    {if state.guests_input.is_open() {
                        html! {
                            <InviteGuestsStep
                                emails_to_invite={state.emails_to_invite.clone()}
                                guests_error={error_for(FormField::Guests)}
                                on_open_guests_modal={actions.open_guests_modal.clone()}
                                on_open_confirm_modal={actions.open_confirm_modal.clone()}
                            />
                        }
                    } else { html! {} }}
                </div>

                <p class="terms">
                    {"By planning your trip with plann.er you automatically agree"}
                    <br />
                    {"to our "}
                    <a href="#" class="terms-link">{"terms of use"}</a>
                    {" and "}
                    <a href="#" class="terms-link">{"privacy policy"}</a>
                    {"."}
                </p>
            </div>

            {if state.guests_modal.is_open() {
                html! {
                    <InviteGuestsModal
                        emails_to_invite={state.emails_to_invite.clone()}
                        on_add_email={actions.add_email.clone()}
                        on_remove_email={actions.remove_email.clone()}
                        on_close={actions.close_guests_modal.clone()}
                    />
                }
            } else { html! {} }}

            {if state.confirm_modal.is_open() {
                html! {
                    <ConfirmTripModal
                        destination={state.destination.clone()}
                        date_range={state.date_range}
                        owner_name={state.owner_name.clone()}
                        owner_email={state.owner_email.clone()}
                        field_errors={state.field_errors.clone()}
                        submission={state.submission.clone()}
                        on_owner_name_change={actions.on_owner_name_change.clone()}
                        on_owner_email_change={actions.on_owner_email_change.clone()}
                        on_create_trip={actions.create_trip.clone()}
                        on_close={actions.close_confirm_modal.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
