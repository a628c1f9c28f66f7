// Platform module
pub mod banner;

pub mod parameters {
    pub mod gui {
        pub const APPLICATION_NAME: &str = "Micado - Microfluidic Chip Design";
        pub const VERSION: &str = env!("CARGO_PKG_VERSION"); // Single source of truth from Cargo.toml
        pub const VIEWPORT_X: f32 = 960.0;
        pub const VIEWPORT_Y: f32 = 640.0;
    }

    pub mod settings {
        /// Subdirectory of the per-user application data directory
        pub const DIRECTORY_NAME: &str = "micado";
        pub const CURRENT_FILE_NAME: &str = "current-settings.xml";
        /// Caption of the file-dialog filter for settings documents
        pub const FILE_FILTER_NAME: &str = "micado settings";
    }
}
