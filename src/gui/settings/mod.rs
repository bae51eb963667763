pub mod data;
pub mod modal;

pub use data::{
    SettingsData,
    API_URL_ENV,
    SETTINGS_FILE,
};
pub use modal::SettingsModal;
