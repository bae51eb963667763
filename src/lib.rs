pub mod api;
pub mod core;
pub mod gui;
pub mod persistence;

pub use api::ApiClient;
pub use core::TalentMatchError;
pub use gui::TalentMatchApp;
