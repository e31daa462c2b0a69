use tracing::{debug, warn};

use crate::{
    error::AppError,
    git::GitConfig,
    profile::{Profile, ProfileStore},
};

/// A single local config write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    Set(&'static str, String),
    Unset(&'static str),
}

impl ConfigChange {
    pub fn key(&self) -> &'static str {
        match self {
            ConfigChange::Set(key, _) | ConfigChange::Unset(key) => key,
        }
    }
}

/// Outcome of applying a profile; individual writes may fail
#[derive(Debug)]
pub struct SwapReport {
    pub profile: Profile,
    pub applied: Vec<ConfigChange>,
    pub failures: Vec<(ConfigChange, AppError)>,
}

/// Config writes that make the repository use `profile`, in order
pub fn plan_changes(profile: &Profile) -> Vec<ConfigChange> {
    let mut changes = vec![
        ConfigChange::Set("user.name", profile.name.clone()),
        ConfigChange::Set("user.email", profile.email.clone()),
    ];

    match profile.ssh_command() {
        Some(command) => changes.push(ConfigChange::Set("core.sshCommand", command)),
        None => changes.push(ConfigChange::Unset("core.sshCommand")),
    }

    if profile.signs_commits() {
        changes.push(ConfigChange::Set("user.signingkey", profile.signing_key.clone()));
        changes.push(ConfigChange::Set("commit.gpgsign", "true".to_string()));
        if profile.uses_ssh_signing() {
            changes.push(ConfigChange::Set("gpg.format", "ssh".to_string()));
        } else {
            changes.push(ConfigChange::Unset("gpg.format"));
        }
    } else {
        changes.push(ConfigChange::Unset("user.signingkey"));
        changes.push(ConfigChange::Set("commit.gpgsign", "false".to_string()));
        changes.push(ConfigChange::Unset("gpg.format"));
    }

    changes
}

/// Applies profile `key` to the current repository
///
/// Fails before writing anything if the profile is unknown or the directory
/// is not a repository. Individual write failures are collected, not fatal.
pub fn swap_profile(
    store: &ProfileStore,
    key: &str,
    git: &dyn GitConfig,
) -> Result<SwapReport, AppError> {
    let profile = store
        .get(key)
        .cloned()
        .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))?;

    if !git.is_inside_repo()? {
        return Err(AppError::NotInGitRepository);
    }

    let mut applied = Vec::new();
    let mut failures = Vec::new();
    for change in plan_changes(&profile) {
        let result = match &change {
            ConfigChange::Set(config_key, value) => git.set_local(config_key, value),
            ConfigChange::Unset(config_key) => git.unset_local(config_key),
        };
        match result {
            Ok(()) => {
                debug!(key = change.key(), "applied");
                applied.push(change);
            }
            Err(err) => {
                warn!(key = change.key(), error = %err, "failed to update git config");
                failures.push((change, err));
            }
        }
    }

    Ok(SwapReport {
        profile,
        applied,
        failures,
    })
}
