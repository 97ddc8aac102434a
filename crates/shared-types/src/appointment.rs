use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Lowercase string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status string, defaulting to Scheduled for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Scheduled,
        }
    }

    /// Only scheduled appointments can transition.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (
                AppointmentStatus::Scheduled,
                AppointmentStatus::Completed | AppointmentStatus::Cancelled
            )
        )
    }
}

/// An appointment as returned to clients, with the joined doctor name so the
/// UI never issues a second lookup for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: i64,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialization: String,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request to book a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct BookAppointmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Doctor is required"))
    )]
    pub doctor_id: String,
    pub scheduled_at: DateTime<Utc>,
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 3,
            max = 500,
            message = "Reason must be between 3 and 500 characters"
        ))
    )]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(status, AppointmentStatus::from_str_or_default(status.as_str()));
        }
    }

    #[test]
    fn unknown_status_defaults_to_scheduled() {
        assert_eq!(
            AppointmentStatus::from_str_or_default("rescheduled"),
            AppointmentStatus::Scheduled
        );
    }

    #[test]
    fn scheduled_can_complete_or_cancel() {
        let s = AppointmentStatus::Scheduled;
        assert!(s.can_transition_to(AppointmentStatus::Completed));
        assert!(s.can_transition_to(AppointmentStatus::Cancelled));
    }

    #[test]
    fn terminal_states_cannot_transition() {
        assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Cancelled));
        assert!(!AppointmentStatus::Cancelled.can_transition_to(AppointmentStatus::Completed));
        assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Scheduled));
    }

    #[test]
    fn appointment_roundtrips_through_json() {
        let appt = Appointment {
            id: Uuid::new_v4(),
            patient_id: 1,
            doctor_id: "DOC001".into(),
            doctor_name: "Dr. James Miller".into(),
            specialization: "Cardiologist".into(),
            scheduled_at: Utc::now(),
            reason: "Annual checkup".into(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        };
        let json = serde_json::to_string(&appt).unwrap();
        let parsed: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(appt, parsed);
    }
}
