use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of an SSH public key used as a signing key
pub const SSH_SIGNING_PREFIX: &str = "ssh-";

/// Represents a Git identity stored in the profiles file
///
/// Missing or `null` fields load as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    /// Git username (user.name)
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Git email address (user.email)
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// Path to a private SSH key, empty when unused
    #[serde(deserialize_with = "null_as_empty")]
    pub ssh_key: String,
    /// GPG key id or SSH public key used for commit signing, empty when unused
    #[serde(deserialize_with = "null_as_empty")]
    pub signing_key: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    /// `core.sshCommand` value pinning this profile's key, if it has one
    pub fn ssh_command(&self) -> Option<String> {
        if self.ssh_key.is_empty() {
            return None;
        }
        Some(format!(
            "ssh -i {} -o IdentitiesOnly=yes -F /dev/null",
            self.ssh_key
        ))
    }

    pub fn signs_commits(&self) -> bool {
        !self.signing_key.is_empty()
    }

    /// True when the signing key is an SSH key rather than a GPG key id
    pub fn uses_ssh_signing(&self) -> bool {
        self.signing_key.starts_with(SSH_SIGNING_PREFIX)
    }

    pub fn matches_identity(&self, name: &str, email: &str) -> bool {
        self.name == name && self.email == email
    }
}

/// All stored profiles keyed by profile name, kept sorted by key
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProfileStore {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Profile> {
        self.profiles.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    /// Inserts or replaces a profile, returning the previous one
    pub fn insert(&mut self, key: &str, profile: Profile) -> Option<Profile> {
        self.profiles.insert(key.to_string(), profile)
    }

    pub fn remove(&mut self, key: &str) -> Option<Profile> {
        self.profiles.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Iterates profiles in lexicographic key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles.iter().map(|(key, profile)| (key.as_str(), profile))
    }
}
