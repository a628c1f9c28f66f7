use std::path::PathBuf;

use egui_lens::ReactiveEventLogger;

use crate::codec::ProfileCodec;
use crate::constants::LOG_TYPE_VALIDATION;
use crate::editor::SettingsEditor;
use crate::platform::parameters::settings::FILE_FILTER_NAME;
use crate::profile::{ConfigurationProfile, LayerKind, NumericField};
use crate::store::SettingsStore;

const PUNCH_FIELDS: [NumericField; 3] = [
    NumericField::PunchRadius,
    NumericField::PunchBarNumber,
    NumericField::PunchBarWidth,
];
const VALVE_FIELDS: [NumericField; 2] = [
    NumericField::ValveRelativeWidth,
    NumericField::ValveRelativeHeight,
];
const EXTRA_SPACE_FIELDS: [NumericField; 3] = [
    NumericField::FlowExtraWidth,
    NumericField::ValveExtraWidth,
    NumericField::ControlLineExtraWidth,
];
const MINIMUM_DISTANCE_FIELDS: [NumericField; 2] = [
    NumericField::Resolution,
    NumericField::Punch2Line,
];

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 90, 90);

/// Pages of the settings dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Drawing,
    Layers,
    Routing,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [SettingsTab::Drawing, SettingsTab::Layers, SettingsTab::Routing];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Drawing => "Drawing",
            SettingsTab::Layers => "Layers",
            SettingsTab::Routing => "Routing",
        }
    }
}

/// Button pressed during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    Import,
    Export,
    Accept,
    Cancel,
}

/// Modal window editing the current settings
#[derive(Default)]
pub struct SettingsDialog {
    /// Present while the dialog is open
    editor: Option<SettingsEditor>,
    tab: SettingsTab,
    /// Last failure, shown above the buttons until the next action
    status: Option<String>,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.editor.is_some()
    }

    /// Open the dialog on a fresh copy of `current`. Edits from an earlier
    /// cancelled session are discarded.
    pub fn open(&mut self, current: &ConfigurationProfile) {
        self.editor = Some(SettingsEditor::from_profile(current));
        self.status = None;
    }

    pub fn close(&mut self) {
        self.editor = None;
        self.status = None;
    }

    pub fn editor(&self) -> Option<&SettingsEditor> {
        self.editor.as_ref()
    }

    pub fn show<C: ProfileCodec>(
        &mut self,
        ctx: &egui::Context,
        current: &mut ConfigurationProfile,
        store: &SettingsStore<C>,
        logger: &ReactiveEventLogger,
    ) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        let mut action = None;
        let tab = &mut self.tab;
        let status = &self.status;

        egui::Window::new("Micado Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for page in SettingsTab::ALL {
                        ui.selectable_value(tab, page, page.title());
                    }
                });
                ui.separator();

                match tab {
                    SettingsTab::Drawing => show_drawing_page(ui, editor, logger),
                    SettingsTab::Layers => show_layers_page(ui, editor, logger),
                    SettingsTab::Routing => show_routing_page(ui, editor, logger),
                }

                ui.add_space(10.0);
                if let Some(message) = status {
                    ui.colored_label(ERROR_COLOR, message);
                }
                if !editor.can_commit() {
                    ui.colored_label(ERROR_COLOR, "Fix the highlighted fields to enable OK and Export");
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Import...").clicked() {
                        action = Some(DialogAction::Import);
                    }
                    if ui.add_enabled(editor.can_commit(), egui::Button::new("Export...")).clicked() {
                        action = Some(DialogAction::Export);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Cancel").clicked() {
                            action = Some(DialogAction::Cancel);
                        }
                        if ui.add_enabled(editor.can_commit(), egui::Button::new("OK")).clicked() {
                            action = Some(DialogAction::Accept);
                        }
                    });
                });
            });

        if let Some(action) = action {
            self.handle_action(action, current, store, logger);
        }
    }

    fn handle_action<C: ProfileCodec>(
        &mut self,
        action: DialogAction,
        current: &mut ConfigurationProfile,
        store: &SettingsStore<C>,
        logger: &ReactiveEventLogger,
    ) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        self.status = None;

        match action {
            DialogAction::Cancel => {
                logger.log_info("Settings dialog cancelled, changes discarded");
                self.close();
            }
            DialogAction::Accept => match editor.accept(current, store) {
                Ok(()) => {
                    logger.log_info(&format!("Saved settings to {}", store.current_path().display()));
                    self.close();
                }
                Err(e) => self.report_failure(logger, "Saving settings failed", &e),
            },
            DialogAction::Export => {
                let Some(path) = pick_export_path(store) else {
                    return;
                };
                match editor.export_to_file(store, &path) {
                    Ok(()) => logger.log_info(&format!("Exported settings to {}", path.display())),
                    Err(e) => self.report_failure(logger, "Export failed", &e),
                }
            }
            DialogAction::Import => {
                let Some(path) = pick_import_path(store) else {
                    return;
                };
                match editor.import_from_file(store, &path) {
                    Ok(()) => logger.log_info(&format!(
                        "Imported settings from {} (press OK to make them current)",
                        path.display()
                    )),
                    Err(e) => self.report_failure(logger, "Import failed", &e),
                }
            }
        }
    }

    fn report_failure(&mut self, logger: &ReactiveEventLogger, what: &str, error: &crate::SettingsError) {
        let message = format!("{}: {}", what, error);
        log::error!("{}", message);
        logger.log_error(&message);
        self.status = Some(message);
    }
}

fn pick_export_path<C: ProfileCodec>(store: &SettingsStore<C>) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export Micado Settings")
        .add_filter(FILE_FILTER_NAME, &[store.codec().extension()])
        .save_file()
}

fn pick_import_path<C: ProfileCodec>(store: &SettingsStore<C>) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Import Micado Settings")
        .add_filter(FILE_FILTER_NAME, &[store.codec().extension()])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn show_drawing_page(ui: &mut egui::Ui, editor: &mut SettingsEditor, logger: &ReactiveEventLogger) {
    ui.group(|ui| {
        ui.label("Punch");
        field_grid(ui, "punch_fields", &PUNCH_FIELDS, editor, logger);
    });
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label("Valve");
        field_grid(ui, "valve_fields", &VALVE_FIELDS, editor, logger);
    });
}

fn show_routing_page(ui: &mut egui::Ui, editor: &mut SettingsEditor, logger: &ReactiveEventLogger) {
    field_grid(ui, "connection_fields", &[NumericField::ConnectionWidth], editor, logger);
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label("Extra Space");
        field_grid(ui, "extra_space_fields", &EXTRA_SPACE_FIELDS, editor, logger);
    });
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label("Minimum Distance");
        field_grid(ui, "minimum_distance_fields", &MINIMUM_DISTANCE_FIELDS, editor, logger);
    });
}

fn show_layers_page(ui: &mut egui::Ui, editor: &mut SettingsEditor, logger: &ReactiveEventLogger) {
    ui.horizontal_top(|ui| {
        for kind in LayerKind::ALL {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(kind.label());
                    layer_checklist(ui, kind, editor, logger);
                });
            });
        }
    });
}

fn layer_checklist(ui: &mut egui::Ui, kind: LayerKind, editor: &mut SettingsEditor, logger: &ReactiveEventLogger) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut editor.layers_mut(kind).new_layer)
                .desired_width(120.0)
                .hint_text("Layer name"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || submitted) && editor.add_layer(kind) {
            if let Some(item) = editor.layers(kind).items.last() {
                logger.log_info(&format!("Added layer '{}' to {}", item.name, kind.label()));
            }
        }
    });

    egui::ScrollArea::vertical()
        .id_salt(kind.label())
        .max_height(160.0)
        .show(ui, |ui| {
            for item in editor.layers_mut(kind).items.iter_mut() {
                ui.checkbox(&mut item.checked, item.name.as_str());
            }
        });
}

/// Label, text box and error column for each field; validates on blur
fn field_grid(
    ui: &mut egui::Ui,
    id: &str,
    fields: &[NumericField],
    editor: &mut SettingsEditor,
    logger: &ReactiveEventLogger,
) {
    egui::Grid::new(id).num_columns(3).spacing([8.0, 4.0]).show(ui, |ui| {
        for &field in fields {
            ui.label(format!("{}:", field.label()));

            let response = ui.add(egui::TextEdit::singleline(editor.text_mut(field)).desired_width(80.0));
            if response.lost_focus() {
                let state = editor.on_focus_lost(field);
                if let Some(error) = state.error() {
                    logger.log_custom(
                        LOG_TYPE_VALIDATION,
                        &format!("{} '{}' {}", field.label(), editor.text(field), error),
                    );
                }
            }

            match editor.field_state(field).error() {
                Some(error) => {
                    ui.colored_label(ERROR_COLOR, format!("⚠ {}", error));
                }
                None => {
                    ui.label("");
                }
            }
            ui.end_row();
        }
    });
}
