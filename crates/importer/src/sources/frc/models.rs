use serde::{Deserialize, Serialize};

/// Response envelope of the district events listing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventsResponse {
    #[serde(rename = "Events")]
    pub events: Vec<ApiEvent>,
}

/// One event as returned by the FRC Events API. Fields the importer does
/// not store are ignored during deserialization.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiEvent {
    pub name: String,
    #[serde(rename = "dateStart")]
    pub date_start: String,
    #[serde(rename = "dateEnd")]
    pub date_end: String,
    pub code: String,
}
