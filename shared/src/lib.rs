use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{DateTime, Utc};

pub mod create_trip;
pub mod date_range;
pub mod invites;
pub mod trip_form;

pub use create_trip::{create_trip, trip_details_path, ApiError, CreateTripError, Navigator, TripsApi};
pub use date_range::DateRange;
pub use invites::InviteList;
pub use trip_form::{
    Disclosure, FieldErrors, FormField, Submission, TripForm, TripFormAction, TripFormError,
};

/// Body of `POST /trips`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    /// Free-text destination, e.g. "Florianópolis, BR"
    pub destination: String,
    pub owner_name: String,
    /// Organizer email (format is validated by the backend, not here)
    pub owner_email: String,
    /// First day of the trip (RFC 3339)
    pub starts_at: DateTime<Utc>,
    /// Last day of the trip (RFC 3339)
    pub ends_at: DateTime<Utc>,
    /// Guest emails in the order they were added
    pub emails_to_invite: Vec<String>,
}

/// Response of `POST /trips`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripResponse {
    #[serde(rename = "tripId")]
    pub trip_id: TripId,
}

/// Opaque trip identifier assigned by the backend.
///
/// The backend may answer with either a string (uuid) or any JSON number
/// (unsigned ids past `i64::MAX` and floats included), both are accepted and
/// rendered the same way in route paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Number(id) => write!(f, "{}", id),
            TripId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for TripId {
    fn from(id: &str) -> Self {
        TripId::Text(id.to_string())
    }
}

impl From<String> for TripId {
    fn from(id: String) -> Self {
        TripId::Text(id)
    }
}

impl From<i64> for TripId {
    fn from(id: i64) -> Self {
        TripId::Number(id.into())
    }
}
