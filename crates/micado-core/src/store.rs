use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{ProfileCodec, XmlCodec};
use crate::error::{Result, SettingsError};
use crate::platform::parameters::settings;
use crate::profile::ConfigurationProfile;

/// Durable storage for configuration profiles.
///
/// The store knows one fixed per-user file holding the "current" settings,
/// and can export or import profiles at any other path with the same codec.
#[derive(Debug, Clone)]
pub struct SettingsStore<C = XmlCodec> {
    current_path: PathBuf,
    codec: C,
}

impl SettingsStore<XmlCodec> {
    /// Store rooted at `<data dir>/micado/current-settings.xml`
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or(SettingsError::NoDataDir)?;
        Ok(Self::with_path(
            data_dir
                .join(settings::DIRECTORY_NAME)
                .join(settings::CURRENT_FILE_NAME),
        ))
    }

    pub fn with_path(current_path: impl Into<PathBuf>) -> Self {
        Self::with_codec(current_path, XmlCodec)
    }
}

impl<C: ProfileCodec> SettingsStore<C> {
    pub fn with_codec(current_path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            current_path: current_path.into(),
            codec,
        }
    }

    /// Location of the current settings file
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Read the current settings file. A missing file yields the compiled-in
    /// defaults; an unreadable or malformed file is an error.
    pub fn load_current(&self) -> Result<ConfigurationProfile> {
        if !self.current_path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.current_path.display()
            );
            return Ok(ConfigurationProfile::default());
        }
        self.import(&self.current_path)
    }

    /// Start-up entry point: like [`load_current`](Self::load_current), but a
    /// broken settings file falls back to the defaults instead of failing.
    pub fn load_or_default(&self) -> ConfigurationProfile {
        match self.load_current() {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("Ignoring current settings: {}", e);
                ConfigurationProfile::default()
            }
        }
    }

    /// Serialize `profile` and write it to `path`
    pub fn export(&self, profile: &ConfigurationProfile, path: &Path) -> Result<()> {
        let text = self.codec.serialize(profile)?;
        fs::write(path, text).map_err(|e| SettingsError::io(path, e))?;
        log::debug!("Wrote settings to {}", path.display());
        Ok(())
    }

    /// Read and deserialize the profile stored at `path`
    pub fn import(&self, path: &Path) -> Result<ConfigurationProfile> {
        let text = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let profile = self.codec.deserialize(&text)?;
        log::debug!("Read settings from {}", path.display());
        Ok(profile)
    }

    /// Write `profile` to the current settings file, creating its directory
    pub fn persist_current(&self, profile: &ConfigurationProfile) -> Result<()> {
        if let Some(dir) = self.current_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| SettingsError::io(dir, e))?;
            }
        }
        self.export(profile, &self.current_path)?;
        log::info!("Saved current settings to {}", self.current_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_path() {
        // Not every CI machine has a data dir
        if let Ok(store) = SettingsStore::new() {
            assert!(store.current_path().ends_with("micado/current-settings.xml"));
        }
    }

    #[test]
    fn test_missing_current_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("micado").join("current-settings.xml"));
        assert_eq!(store.load_current().unwrap(), ConfigurationProfile::default());
        assert_eq!(store.load_or_default(), ConfigurationProfile::default());
    }

    #[test]
    fn test_persist_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appdata").join("micado").join("current-settings.xml");
        let store = SettingsStore::with_path(&path);

        let mut profile = ConfigurationProfile::default();
        profile.punch_bar_number = 10;
        store.persist_current(&profile).unwrap();

        assert!(path.exists());
        assert_eq!(store.load_current().unwrap(), profile);
    }

    #[test]
    fn test_export_does_not_create_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("current-settings.xml"));
        let target = dir.path().join("missing").join("export.xml");

        let err = store.export(&ConfigurationProfile::default(), &target).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_corrupt_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current-settings.xml");
        fs::write(&path, "<Settings><PunchRadius>").unwrap();
        let store = SettingsStore::with_path(&path);

        assert!(matches!(
            store.load_current(),
            Err(SettingsError::Deserialization { .. })
        ));
        assert_eq!(store.load_or_default(), ConfigurationProfile::default());
    }
}
