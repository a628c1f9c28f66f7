pub mod settings_dialog;
pub mod profile_panel;
pub mod selection;

pub use settings_dialog::{SettingsDialog, SettingsTab};
pub use profile_panel::show_profile_panel;

// Re-export selection functions
pub use selection::initialize_and_show_banner;
