pub mod doctor_dashboard;
pub mod home;
pub mod landing;
pub mod not_found;
pub mod patient_dashboard;

use dioxus::prelude::*;

use doctor_dashboard::DoctorDashboard;
use home::Home;
use not_found::NotFound;

/// Application routes.
///
/// `/` resolves to the landing page or the patient dashboard depending on
/// session state; `/doctor-dashboard` always renders the doctor view.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/doctor-dashboard")]
    DoctorDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
