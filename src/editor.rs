use tracing::info;

use crate::{
    error::AppError,
    profile::{Profile, ProfileStore},
    prompt::LineInput,
    storage::Storage,
    validation::{email_warning, key_warning},
};

/// Input that clears a field while editing
pub const CLEAR_MARKER: &str = "-";

const EDIT_HELP: &str = "Enter keeps the current value, '-' clears it";

/// Applies one edit answer to a field: empty keeps, `-` clears, anything else replaces
pub fn apply_edit(current: &mut String, input: &str) {
    match input {
        "" => {}
        CLEAR_MARKER => current.clear(),
        value => *current = value.to_string(),
    }
}

/// Prompts for a new profile under `key` and saves it
///
/// Nothing is written until every prompt has been answered.
///
/// # Arguments
/// * `key` - Profile key, must not exist yet
pub fn add_profile(
    storage: &Storage,
    store: &mut ProfileStore,
    key: &str,
    input: &mut dyn LineInput,
) -> Result<Vec<String>, AppError> {
    if store.contains(key) {
        return Err(AppError::DuplicateProfile(key.to_string()));
    }

    let name = input.read_line("Enter Name:", None)?;
    let email = input.read_line("Enter Email:", None)?;
    let ssh_key = input.read_line(
        "Enter SSH Key Path (optional):",
        Some("Press Enter to skip"),
    )?;
    let signing_key = input.read_line(
        "Enter Signing Key (GPG key id or SSH public key, optional):",
        Some("Press Enter to skip"),
    )?;

    let warnings: Vec<String> = key_warning(key).into_iter().chain(email_warning(&email)).collect();

    store.insert(
        key,
        Profile {
            name,
            email,
            ssh_key,
            signing_key,
        },
    );
    storage.save(store)?;
    info!(profile = key, "added profile");
    Ok(warnings)
}

/// Prompts for each field of `key`, showing the current value, and saves
pub fn edit_profile(
    storage: &Storage,
    store: &mut ProfileStore,
    key: &str,
    input: &mut dyn LineInput,
) -> Result<Profile, AppError> {
    let mut profile: Profile = store
        .get(key)
        .cloned()
        .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))?;

    edit_field(input, "Enter Name", &mut profile.name)?;
    edit_field(input, "Enter Email", &mut profile.email)?;
    edit_field(input, "Enter SSH Key Path", &mut profile.ssh_key)?;
    edit_field(input, "Enter Signing Key", &mut profile.signing_key)?;

    store.insert(key, profile.clone());
    storage.save(store)?;
    info!(profile = key, "updated profile");
    Ok(profile)
}

fn edit_field(input: &mut dyn LineInput, label: &str, field: &mut String) -> Result<(), AppError> {
    let answer = input.read_line(&format!("{label} [{field}]:"), Some(EDIT_HELP))?;
    apply_edit(field, &answer);
    Ok(())
}

/// Deletes `key` from the store and saves
pub fn remove_profile(
    storage: &Storage,
    store: &mut ProfileStore,
    key: &str,
) -> Result<Profile, AppError> {
    let removed = store
        .remove(key)
        .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))?;
    storage.save(store)?;
    info!(profile = key, "removed profile");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ReaderInput;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup(temp_dir: &TempDir) -> (Storage, ProfileStore) {
        let storage = Storage::new(Some(temp_dir.path().join("profiles.json"))).unwrap();
        let mut store = ProfileStore::new();
        store.insert(
            "work",
            Profile {
                name: "Jane Doe".to_string(),
                email: "jane@corp.com".to_string(),
                ssh_key: "~/.ssh/id_work".to_string(),
                signing_key: "ABCD1234".to_string(),
            },
        );
        storage.save(&store).unwrap();
        (storage, store)
    }

    fn scripted(lines: &str) -> ReaderInput<Cursor<String>> {
        ReaderInput::new(Cursor::new(lines.to_string()))
    }

    #[test]
    fn add_trims_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);

        let mut input = scripted("  Jane \n jane@home.org\n\n ssh-ed25519 AAAA \n");
        add_profile(&storage, &mut store, "home", &mut input).unwrap();

        let expected = Profile {
            name: "Jane".to_string(),
            email: "jane@home.org".to_string(),
            ssh_key: String::new(),
            signing_key: "ssh-ed25519 AAAA".to_string(),
        };
        assert_eq!(store.get("home"), Some(&expected));
        assert_eq!(storage.load().unwrap().get("home"), Some(&expected));
    }

    #[test]
    fn add_existing_key_leaves_store_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);
        let before = store.clone();

        let mut input = scripted("Other\nother@x.com\n\n\n");
        let err = add_profile(&storage, &mut store, "work", &mut input).unwrap_err();

        assert!(matches!(err, AppError::DuplicateProfile(ref key) if key == "work"));
        assert_eq!(store, before);
        assert_eq!(storage.load().unwrap(), before);
    }

    #[test]
    fn add_warns_on_reserved_key_and_bad_email() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);

        let mut input = scripted("Name\nnope\n\n\n");
        let warnings = add_profile(&storage, &mut store, "status", &mut input).unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(store.contains("status"));
    }

    #[test]
    fn add_then_remove_restores_store() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);
        let before = store.clone();

        let mut input = scripted("Temp\ntemp@x.com\n\n\n");
        add_profile(&storage, &mut store, "temp", &mut input).unwrap();
        remove_profile(&storage, &mut store, "temp").unwrap();

        assert_eq!(store, before);
        assert_eq!(storage.load().unwrap(), before);
    }

    #[test]
    fn edit_with_empty_answers_keeps_everything() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);
        let before = store.get("work").cloned();

        let mut input = scripted("\n\n\n\n");
        edit_profile(&storage, &mut store, "work", &mut input).unwrap();
        assert_eq!(store.get("work").cloned(), before);
    }

    #[test]
    fn edit_clears_and_replaces_single_fields() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);

        let mut input = scripted("\njane@newcorp.com\n-\n\n");
        let edited = edit_profile(&storage, &mut store, "work", &mut input).unwrap();

        assert_eq!(edited.name, "Jane Doe");
        assert_eq!(edited.email, "jane@newcorp.com");
        assert_eq!(edited.ssh_key, "");
        assert_eq!(edited.signing_key, "ABCD1234");
        assert_eq!(storage.load().unwrap().get("work"), Some(&edited));
    }

    #[test]
    fn edit_and_remove_missing_key_fail() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, mut store) = setup(&temp_dir);

        let mut input = scripted("\n\n\n\n");
        assert!(matches!(
            edit_profile(&storage, &mut store, "ghost", &mut input),
            Err(AppError::ProfileNotFound(_))
        ));
        assert!(matches!(
            remove_profile(&storage, &mut store, "ghost"),
            Err(AppError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn apply_edit_rules() {
        let mut field = "old".to_string();
        apply_edit(&mut field, "");
        assert_eq!(field, "old");
        apply_edit(&mut field, "new");
        assert_eq!(field, "new");
        apply_edit(&mut field, CLEAR_MARKER);
        assert_eq!(field, "");
    }
}
