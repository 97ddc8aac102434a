pub mod account_settings;
pub mod auth_modal;
pub mod doctor_auth_modal;

pub use account_settings::AccountSettings;
pub use auth_modal::AuthModal;
pub use doctor_auth_modal::DoctorAuthModal;
