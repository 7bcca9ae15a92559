pub mod use_create_trip;
