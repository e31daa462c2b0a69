use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::AppError, profile::ProfileStore};

/// Profiles file in user's home directory
const GLOBAL_PROFILES_FILE: &str = ".git-swap-config.json";

/// Gets the path to the profiles file in the home directory
pub fn get_global_profile_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
    Ok(home_dir.join(GLOBAL_PROFILES_FILE))
}

/// Location of the profiles file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Uses `path` when given, otherwise the file in the home directory
    pub fn new(path: Option<PathBuf>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => path,
            None => get_global_profile_path()?,
        };
        debug!(path = %path.display(), "using profiles file");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads profiles from the JSON file
    ///
    /// A missing or blank file is an empty store.
    pub fn load(&self) -> Result<ProfileStore, AppError> {
        let file_contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("profiles file does not exist yet");
                return Ok(ProfileStore::new());
            }
            Err(err) => return Err(err.into()),
        };

        if file_contents.trim().is_empty() {
            return Ok(ProfileStore::new());
        }

        let store: ProfileStore =
            serde_json::from_str(&file_contents).map_err(|source| AppError::ConfigFormat {
                path: self.path.clone(),
                source,
            })?;
        debug!(profiles = store.len(), "loaded profiles");
        Ok(store)
    }

    /// Saves profiles to the JSON file, replacing its contents
    ///
    /// # Arguments
    /// * `store` - Profiles to save
    pub fn save(&self, store: &ProfileStore) -> Result<(), AppError> {
        let json: String = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, json)?;
        debug!(profiles = store.len(), "saved profiles");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> Storage {
        Storage::new(Some(temp_dir.path().join("profiles.json"))).unwrap()
    }

    #[test]
    fn missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = storage_in(&temp_dir).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn blank_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        fs::write(storage.path(), "  \n").unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        fs::write(storage.path(), "{ not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, AppError::ConfigFormat { .. }));
    }

    #[test]
    fn missing_and_null_fields_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        fs::write(
            storage.path(),
            r#"{
                "w": {"email": "w@x.com"},
                "n": {"name": "N", "email": "n@x.com", "ssh_key": null, "signing_key": null}
            }"#,
        )
        .unwrap();

        let store = storage.load().unwrap();
        let w = store.get("w").unwrap();
        assert_eq!(w.name, "");
        assert_eq!(w.email, "w@x.com");
        let n = store.get("n").unwrap();
        assert_eq!(n.name, "N");
        assert_eq!(n.ssh_key, "");
        assert_eq!(n.signing_key, "");
    }

    #[test]
    fn save_then_load_returns_same_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let mut store = ProfileStore::new();
        store.insert(
            "work",
            Profile {
                name: "Jane Doe".to_string(),
                email: "jane@corp.com".to_string(),
                ssh_key: "~/.ssh/id_work".to_string(),
                signing_key: "ssh-ed25519 AAAA".to_string(),
            },
        );
        store.insert(
            "home",
            Profile {
                name: "Jane".to_string(),
                email: "jane@home.org".to_string(),
                ..Profile::default()
            },
        );

        storage.save(&store).unwrap();
        assert_eq!(storage.load().unwrap(), store);
    }

    #[test]
    fn saved_document_uses_field_names_and_sorted_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let mut store = ProfileStore::new();
        store.insert("b", Profile::default());
        store.insert("a", Profile::default());
        storage.save(&store).unwrap();

        let written = fs::read_to_string(storage.path()).unwrap();
        assert!(written.find("\"a\"").unwrap() < written.find("\"b\"").unwrap());
        assert!(written.contains("\"ssh_key\""));
        assert!(written.contains("\"signing_key\""));
    }
}
