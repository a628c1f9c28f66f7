use std::path::Path;

use chrono::Local;

use crate::platform::parameters::gui;

/// Start-up text for the event log: who we are, where the current
/// settings live and which egui/quick-xml builds we run against
pub fn startup_banner(settings_path: &Path) -> String {
    let mut lines = vec![
        format!("{} {}", gui::APPLICATION_NAME, gui::VERSION),
        format!("Started {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        format!("Settings file : {}", settings_path.display()),
    ];
    if !settings_path.exists() {
        lines.push("  (not saved yet, compiled-in defaults are in use)".to_string());
    }
    lines.push(format!(
        "Built with egui {}, quick-xml {}",
        env!("EGUI_VERSION"),
        env!("QUICK_XML_VERSION")
    ));
    lines.join("\n")
}
