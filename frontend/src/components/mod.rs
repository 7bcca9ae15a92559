pub mod confirm_trip_modal;
pub mod date_range_picker;
pub mod destination_and_date_step;
pub mod invite_guests_modal;
pub mod invite_guests_step;
