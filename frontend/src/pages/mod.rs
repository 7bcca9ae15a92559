pub mod create_trip;
pub mod trip_details;
