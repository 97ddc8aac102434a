#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod appointment;
pub use appointment::*;

mod doctor;
pub use doctor::*;

mod flags;
pub use flags::*;
