use serde::{Deserialize, Serialize};

/// A scheduled dealer appointment, as received from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAppointment {
    /// Server identifier for the appointment
    pub appointment_id: String,

    /// Vehicle listing this appointment is for
    pub product_id: String,

    /// RFC3339 timestamp for the scheduled slot
    #[serde(default)]
    pub scheduled_at: Option<String>,

    /// Dealer display name
    #[serde(default)]
    pub dealer_name: String,

    /// Server-side status, e.g. `scheduled`, `cancelled`
    #[serde(default)]
    pub status: String,
}
