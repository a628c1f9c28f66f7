use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::commands::HostCommand;
use crate::constants::LOG_TYPE_COMMAND;
use crate::error::Result;
use crate::profile::ConfigurationProfile;
use crate::store::SettingsStore;
use crate::ui::{self, SettingsDialog, initialize_and_show_banner};

/// Desktop shell hosting the plug-in: a command line, the current settings
/// and the event log. The settings dialog opens modally on top.
pub struct MicadoApp {
    pub store: SettingsStore,

    /// Settings in effect for this session, owned here and lent to the dialog
    pub current: ConfigurationProfile,

    pub settings_dialog: SettingsDialog,

    // Command line input
    pub command_input: String,

    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,
}

impl MicadoApp {
    /// Create the app on the per-user settings file
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(SettingsStore::new()?))
    }

    pub fn with_store(store: SettingsStore) -> Self {
        let mut initial_logger_state = ReactiveEventLoggerState::new();
        initial_logger_state.show_timestamps = false;
        let logger_state = Dynamic::new(initial_logger_state);
        let log_colors = Dynamic::new(LogColors::default());

        let current = store.load_or_default();

        let app = Self {
            store,
            current,
            settings_dialog: SettingsDialog::new(),
            command_input: String::new(),
            logger_state,
            log_colors,
        };

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        initialize_and_show_banner(&logger, app.store.current_path());

        app
    }

    pub fn run_command(&mut self, command: HostCommand) {
        let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
        logger.log_custom(LOG_TYPE_COMMAND, command.name());

        match command {
            HostCommand::MicadoSettings => {
                if self.settings_dialog.is_open() {
                    return;
                }
                self.settings_dialog.open(&self.current);
            }
        }
    }

    /// Run whatever was typed at the command line
    fn submit_command_line(&mut self) {
        let input = std::mem::take(&mut self.command_input);
        if input.trim().is_empty() {
            return;
        }

        match HostCommand::parse(&input) {
            Some(command) => self.run_command(command),
            None => {
                let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
                logger.log_warning(&format!("Unknown command: {}", input.trim()));
            }
        }
    }

    fn show_command_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for command in HostCommand::ALL {
                if ui.button(command.name()).on_hover_text(command.description()).clicked() {
                    self.run_command(command);
                }
            }

            ui.separator();
            ui.label("Command:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.command_input)
                    .desired_width(240.0)
                    .hint_text("Type a command and press Enter"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit_command_line();
            }
        });
    }
}

impl eframe::App for MicadoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dialog_open = self.settings_dialog.is_open();

        egui::TopBottomPanel::top("command_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                self.show_command_bar(ui);
            });
        });

        egui::TopBottomPanel::bottom("event_log")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
                logger.show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                ui::show_profile_panel(ui, &self.current);
            });
        });

        let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
        self.settings_dialog.show(ctx, &mut self.current, &self.store, &logger);
    }
}
