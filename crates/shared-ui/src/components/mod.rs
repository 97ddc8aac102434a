// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod skeleton;

// Simple primitive wrappers
pub mod label;
pub mod separator;

// Overlay/popup wrappers
pub mod dialog;
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use separator::*;
pub use skeleton::*;
pub use toast::*;
