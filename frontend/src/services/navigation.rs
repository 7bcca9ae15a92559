use shared::{trip_details_path, TripId};
use yew_router::navigator::Navigator as RouterHandle;

use crate::routes::Route;
use crate::services::logging::Logger;

/// `shared::Navigator` backed by the `yew-router` history
#[derive(Clone)]
pub struct RouterNavigator {
    router: RouterHandle,
}

impl RouterNavigator {
    pub fn new(router: RouterHandle) -> Self {
        Self { router }
    }
}

/// Details route for `trip_id`, built from the id rather than a parsed path
pub fn trip_route(trip_id: &TripId) -> Route {
    Route::TripDetails {
        trip_id: trip_id.to_string(),
    }
}

impl shared::Navigator for RouterNavigator {
    fn show_trip(&self, trip_id: &TripId) {
        Logger::debug_with_component("navigation", &format!("Opening {}", trip_details_path(trip_id)));
        self.router.push(&trip_route(trip_id));
    }
}
