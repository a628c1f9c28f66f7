use std::path::Path;

use egui_lens::ReactiveEventLogger;

use crate::platform::banner;

/// Initialize and display the application banner in the event log
pub fn initialize_and_show_banner(logger: &ReactiveEventLogger, settings_path: &Path) {
    logger.log_info(&banner::startup_banner(settings_path));
}
