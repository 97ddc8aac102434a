//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format an appointment time as "Jan 20, 2026 9:35 PM".
pub fn format_appointment_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}
