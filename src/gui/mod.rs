pub mod app;
pub mod components;
pub mod error_modal;
pub mod pages;
pub mod router;
pub mod settings;
pub mod shell;
pub mod theme;

pub use app::TalentMatchApp;
pub use error_modal::ErrorModal;
pub use settings::SettingsData;
