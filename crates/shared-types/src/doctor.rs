use serde::{Deserialize, Serialize};

/// Public profile of a doctor in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DoctorProfile {
    /// Public identifier, e.g. "DOC001".
    pub id: String,
    pub full_name: String,
    pub specialization: String,
    pub years_experience: i32,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default = "default_true")]
    pub accepting_patients: bool,
}

fn default_true() -> bool {
    true
}

impl DoctorProfile {
    /// The demo profile shown on the `/doctor-dashboard` route when no doctor
    /// session exists. A placeholder until doctor sessions carry the profile.
    pub fn demo() -> Self {
        Self {
            id: "DOC001".to_string(),
            full_name: "Dr. James Miller".to_string(),
            specialization: "Cardiologist".to_string(),
            years_experience: 15,
            contact_email: "jamesmiller@medic.com".to_string(),
            contact_phone: "+1-555-0123".to_string(),
            accepting_patients: true,
        }
    }
}
