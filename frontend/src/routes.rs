use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::create_trip::CreateTripPage;
use crate::pages::trip_details::TripDetailsPage;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    CreateTrip,
    #[at("/trips/:trip_id")]
    TripDetails { trip_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::CreateTrip => html! { <CreateTripPage /> },
        Route::TripDetails { trip_id } => html! { <TripDetailsPage {trip_id} /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::CreateTrip}>{"Plan a new trip"}</Link<Route>>
            </div>
        },
    }
}
