use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct TripDetailsPageProps {
    pub trip_id: String,
}

/// Landing view after a trip is created
#[function_component(TripDetailsPage)]
pub fn trip_details_page(props: &TripDetailsPageProps) -> Html {
    html! {
        <div class="trip-details-page">
            <h1>{"Trip created 🎉"}</h1>
            <p class="trip-id">
                {"Trip "}
                <code>{props.trip_id.clone()}</code>
                {" is ready. Your guests will receive an invitation by email."}
            </p>
            <Link<Route> to={Route::CreateTrip} classes="btn btn-secondary">
                {"Plan another trip"}
            </Link<Route>>
        </div>
    }
}
