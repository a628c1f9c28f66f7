use crate::profile::{ConfigurationProfile, LayerKind, NumericField};

/// Read-only view of the current profile
pub fn show_profile_panel(ui: &mut egui::Ui, profile: &ConfigurationProfile) {
    ui.heading("Current Settings");
    ui.separator();

    egui::Grid::new("current_profile")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for kind in LayerKind::ALL {
                ui.label(kind.label());
                let layers = profile.layers(kind);
                if layers.is_empty() {
                    ui.weak("(none)");
                } else {
                    ui.monospace(layers.join(", "));
                }
                ui.end_row();
            }

            for field in NumericField::ALL {
                ui.label(field.label());
                ui.monospace(field.read(profile));
                ui.end_row();
            }
        });
}
