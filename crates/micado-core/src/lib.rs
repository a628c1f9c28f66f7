// Micado Core Library
// Settings model, persistence and the settings dialog for the Micado plug-in

pub mod app;
pub mod codec;
pub mod commands;
pub mod constants;
pub mod editor;
pub mod error;
pub mod platform;
pub mod profile;
pub mod store;
pub mod ui;
pub mod validation;

// Re-export the main types for easy access
pub use app::MicadoApp;
pub use codec::{ProfileCodec, XmlCodec};
pub use commands::HostCommand;
pub use editor::{LayerChecklist, LayerItem, SettingsEditor};
pub use error::{Result, SettingsError};
pub use profile::{ConfigurationProfile, LayerKind, NumericField};
pub use store::SettingsStore;
pub use validation::{validate_field, FieldError, FieldRule, FieldState};
