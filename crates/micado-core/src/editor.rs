use std::collections::HashMap;
use std::path::Path;

use crate::codec::ProfileCodec;
use crate::error::{Result, SettingsError};
use crate::profile::{ConfigurationProfile, LayerKind, NumericField};
use crate::store::SettingsStore;
use crate::validation::{validate_field, FieldState};

/// One entry of a layer checklist
#[derive(Debug, Clone, PartialEq)]
pub struct LayerItem {
    pub name: String,
    pub checked: bool,
}

/// Editable layer set: the listed layers, which of them are checked, and
/// the text typed into the "add layer" box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerChecklist {
    pub items: Vec<LayerItem>,
    pub new_layer: String,
}

impl LayerChecklist {
    pub fn from_names(names: &[String]) -> Self {
        Self {
            items: names
                .iter()
                .map(|name| LayerItem {
                    name: name.clone(),
                    checked: true,
                })
                .collect(),
            new_layer: String::new(),
        }
    }

    /// Names of the checked items, in list order
    pub fn checked_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.name.clone())
            .collect()
    }

    /// Append the pending layer name as a checked item. Blank input is
    /// ignored; a name already in the list is appended again.
    pub fn add_pending(&mut self) -> bool {
        let name = self.new_layer.trim();
        if name.is_empty() {
            return false;
        }
        self.items.push(LayerItem {
            name: name.to_string(),
            checked: true,
        });
        self.new_layer.clear();
        true
    }
}

/// Form model behind the settings dialog.
///
/// Holds one text buffer per numeric field and a checklist per layer set.
/// Fields are validated one at a time when they lose focus; the accept and
/// export actions are only available while every field is valid.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    texts: HashMap<NumericField, String>,
    states: HashMap<NumericField, FieldState>,
    flow_layers: LayerChecklist,
    control_layers: LayerChecklist,
}

impl SettingsEditor {
    pub fn from_profile(profile: &ConfigurationProfile) -> Self {
        let mut editor = Self {
            texts: HashMap::new(),
            states: HashMap::new(),
            flow_layers: LayerChecklist::default(),
            control_layers: LayerChecklist::default(),
        };
        editor.load_into(profile);
        editor
    }

    /// Mirror `profile` into the form. Every layer starts checked and all
    /// previous field errors are cleared; no validation is run.
    pub fn load_into(&mut self, profile: &ConfigurationProfile) {
        self.texts = NumericField::ALL
            .iter()
            .map(|field| (*field, field.read(profile)))
            .collect();
        self.states.clear();
        self.flow_layers = LayerChecklist::from_names(&profile.flow_layers);
        self.control_layers = LayerChecklist::from_names(&profile.control_layers);
    }

    pub fn text(&self, field: NumericField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace a field's text without validating it
    pub fn set_text(&mut self, field: NumericField, text: impl Into<String>) {
        self.texts.insert(field, text.into());
    }

    /// Mutable access to the text buffer, for binding to a text box
    pub fn text_mut(&mut self, field: NumericField) -> &mut String {
        self.texts.entry(field).or_default()
    }

    /// Validate one field after it lost input focus
    pub fn on_focus_lost(&mut self, field: NumericField) -> FieldState {
        let state = validate_field(field, self.text(field));
        if !state.is_valid() {
            log::debug!("{} rejected: {:?}", field.label(), state);
        }
        self.states.insert(field, state);
        state
    }

    pub fn validate_all(&mut self) {
        for field in NumericField::ALL {
            self.on_focus_lost(field);
        }
    }

    pub fn field_state(&self, field: NumericField) -> FieldState {
        self.states.get(&field).copied().unwrap_or_default()
    }

    pub fn invalid_fields(&self) -> Vec<NumericField> {
        NumericField::ALL
            .into_iter()
            .filter(|field| !self.field_state(*field).is_valid())
            .collect()
    }

    pub fn all_valid(&self) -> bool {
        NumericField::ALL
            .iter()
            .all(|field| self.field_state(*field).is_valid())
    }

    /// Whether the OK and Export actions are enabled
    pub fn can_commit(&self) -> bool {
        self.all_valid()
    }

    /// Write the form into `profile`. Fields whose text does not parse keep
    /// the profile's previous value; each layer set becomes its checked items.
    pub fn commit_into(&self, profile: &mut ConfigurationProfile) {
        for field in NumericField::ALL {
            field.write(profile, self.text(field));
        }
        profile.flow_layers = self.flow_layers.checked_names();
        profile.control_layers = self.control_layers.checked_names();
    }

    /// Commit the form into the current profile and persist it to the
    /// store's fixed path. `current` only changes once the file is written.
    pub fn accept<C: ProfileCodec>(
        &self,
        current: &mut ConfigurationProfile,
        store: &SettingsStore<C>,
    ) -> Result<()> {
        self.ensure_committable()?;
        let mut candidate = current.clone();
        self.commit_into(&mut candidate);
        store.persist_current(&candidate)?;
        *current = candidate;
        Ok(())
    }

    /// Export the form, not the stored profile, to `path`. The current
    /// profile is not touched.
    pub fn export_to_file<C: ProfileCodec>(&self, store: &SettingsStore<C>, path: &Path) -> Result<()> {
        self.ensure_committable()?;
        let mut profile = ConfigurationProfile::default();
        self.commit_into(&mut profile);
        store.export(&profile, path)
    }

    /// Replace the form with the profile stored at `path` and validate every
    /// field, so out-of-range values in the file block OK and Export. Nothing
    /// is persisted; on failure the form is left as it was.
    pub fn import_from_file<C: ProfileCodec>(&mut self, store: &SettingsStore<C>, path: &Path) -> Result<()> {
        let profile = store.import(path)?;
        self.load_into(&profile);
        self.validate_all();
        Ok(())
    }

    pub fn layers(&self, kind: LayerKind) -> &LayerChecklist {
        match kind {
            LayerKind::Flow => &self.flow_layers,
            LayerKind::Control => &self.control_layers,
        }
    }

    pub fn layers_mut(&mut self, kind: LayerKind) -> &mut LayerChecklist {
        match kind {
            LayerKind::Flow => &mut self.flow_layers,
            LayerKind::Control => &mut self.control_layers,
        }
    }

    pub fn set_new_layer_text(&mut self, kind: LayerKind, text: impl Into<String>) {
        self.layers_mut(kind).new_layer = text.into();
    }

    /// Add the pending layer name to `kind`'s list; returns false for blank input
    pub fn add_layer(&mut self, kind: LayerKind) -> bool {
        self.layers_mut(kind).add_pending()
    }

    pub fn set_layer_checked(&mut self, kind: LayerKind, index: usize, checked: bool) {
        if let Some(item) = self.layers_mut(kind).items.get_mut(index) {
            item.checked = checked;
        }
    }

    fn ensure_committable(&self) -> Result<()> {
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::InvalidFields(invalid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn test_load_into_mirrors_profile() {
        let editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        assert_eq!(editor.text(NumericField::PunchBarNumber), "8");
        assert_eq!(editor.text(NumericField::Resolution), "0.3");
        assert_eq!(editor.layers(LayerKind::Flow).items.len(), 1);
        assert!(editor.layers(LayerKind::Control).items.iter().all(|item| item.checked));
        assert!(editor.can_commit());
    }

    #[test]
    fn test_typing_does_not_validate() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.set_text(NumericField::PunchRadius, "-1");
        assert!(editor.can_commit());

        editor.on_focus_lost(NumericField::PunchRadius);
        assert!(!editor.can_commit());
    }

    #[test]
    fn test_gating_follows_each_field() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.set_text(NumericField::PunchRadius, "-1");
        assert_eq!(
            editor.on_focus_lost(NumericField::PunchRadius),
            FieldState::Invalid(FieldError::NotPositive)
        );
        assert_eq!(editor.invalid_fields(), vec![NumericField::PunchRadius]);
        assert!(!editor.all_valid());

        editor.set_text(NumericField::PunchRadius, "0.4");
        editor.on_focus_lost(NumericField::PunchRadius);
        assert!(editor.all_valid());
        assert!(editor.can_commit());
    }

    #[test]
    fn test_commit_keeps_unparsed_values() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.set_text(NumericField::ValveRelativeWidth, "2.25");
        editor.set_text(NumericField::ConnectionWidth, "n/a");

        let mut profile = ConfigurationProfile::default();
        editor.commit_into(&mut profile);
        assert_eq!(profile.valve_relative_width, 2.25);
        assert_eq!(profile.connection_width, 0.05);
    }

    #[test]
    fn test_unchecked_layers_are_dropped_on_commit() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.set_layer_checked(LayerKind::Control, 0, false);

        let mut profile = ConfigurationProfile::default();
        editor.commit_into(&mut profile);
        assert!(profile.control_layers.is_empty());
        assert_eq!(profile.flow_layers, vec!["Flow"]);
        // Empty layer sets never block a commit
        assert!(editor.can_commit());
    }

    #[test]
    fn test_add_layer() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());

        editor.set_new_layer_text(LayerKind::Flow, "   ");
        assert!(!editor.add_layer(LayerKind::Flow));
        assert_eq!(editor.layers(LayerKind::Flow).items.len(), 1);

        editor.set_new_layer_text(LayerKind::Flow, " Flow2 ");
        assert!(editor.add_layer(LayerKind::Flow));
        assert!(editor.layers(LayerKind::Flow).new_layer.is_empty());

        editor.set_new_layer_text(LayerKind::Flow, "Flow2");
        assert!(editor.add_layer(LayerKind::Flow));
        assert_eq!(
            editor.layers(LayerKind::Flow).checked_names(),
            vec!["Flow", "Flow2", "Flow2"]
        );
    }

    #[test]
    fn test_load_into_clears_errors() {
        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.set_text(NumericField::Resolution, "abc");
        editor.on_focus_lost(NumericField::Resolution);
        assert!(!editor.can_commit());

        editor.load_into(&ConfigurationProfile::default());
        assert!(editor.can_commit());
        assert_eq!(editor.text(NumericField::Resolution), "0.3");
    }

    #[test]
    fn test_accept_is_blocked_while_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("current-settings.xml"));
        let mut current = ConfigurationProfile::default();

        let mut editor = SettingsEditor::from_profile(&current);
        editor.set_text(NumericField::PunchBarWidth, "0.2");
        editor.set_text(NumericField::PunchBarNumber, "0");
        editor.validate_all();

        let err = editor.accept(&mut current, &store).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidFields(ref fields) if fields == &[NumericField::PunchBarNumber]));
        assert_eq!(current, ConfigurationProfile::default());
        assert!(!store.current_path().exists());
    }

    #[test]
    fn test_failed_accept_leaves_current_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // The fixed path's parent is a regular file, so its directory cannot be created
        let blocker = dir.path().join("micado");
        std::fs::write(&blocker, "").unwrap();
        let store = SettingsStore::with_path(blocker.join("current-settings.xml"));
        let mut current = ConfigurationProfile::default();

        let mut editor = SettingsEditor::from_profile(&current);
        editor.set_text(NumericField::PunchRadius, "0.9");
        editor.validate_all();

        let err = editor.accept(&mut current, &store).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert_eq!(current.punch_radius, 0.4);
        assert_eq!(current, ConfigurationProfile::default());
        assert_eq!(editor.text(NumericField::PunchRadius), "0.9");
    }

    #[test]
    fn test_import_validates_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("current-settings.xml"));
        let path = dir.path().join("foreign.xml");
        std::fs::write(
            &path,
            "<Settings><PunchRadius>-5</PunchRadius><PunchBarNumber>0</PunchBarNumber></Settings>",
        )
        .unwrap();

        let mut editor = SettingsEditor::from_profile(&ConfigurationProfile::default());
        editor.import_from_file(&store, &path).unwrap();

        assert_eq!(editor.text(NumericField::PunchRadius), "-5");
        assert_eq!(
            editor.invalid_fields(),
            vec![NumericField::PunchBarNumber, NumericField::PunchRadius]
        );
        assert!(!editor.can_commit());

        let mut current = ConfigurationProfile::default();
        assert!(matches!(
            editor.accept(&mut current, &store),
            Err(SettingsError::InvalidFields(_))
        ));
        assert!(!store.current_path().exists());
    }
}
