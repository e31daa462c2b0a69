use crate::{error::AppError, git::GitConfig, profile::ProfileStore};

/// Identity Git currently uses in this repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity {
    pub name: String,
    pub email: String,
}

/// Current identity and the stored profile it corresponds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub identity: CurrentIdentity,
    pub matched_profile: Option<String>,
}

/// Reads `user.name` and `user.email` for the current repository
pub fn current_identity(git: &dyn GitConfig) -> Result<CurrentIdentity, AppError> {
    if !git.is_inside_repo()? {
        return Err(AppError::NotInGitRepository);
    }

    Ok(CurrentIdentity {
        name: git.get("user.name")?,
        email: git.get("user.email")?,
    })
}

/// First profile, in key order, whose name and email both match exactly
pub fn find_matching_profile<'a>(
    store: &'a ProfileStore,
    identity: &CurrentIdentity,
) -> Option<&'a str> {
    store
        .iter()
        .find(|(_, profile)| profile.matches_identity(&identity.name, &identity.email))
        .map(|(key, _)| key)
}

pub fn repo_status(store: &ProfileStore, git: &dyn GitConfig) -> Result<RepoStatus, AppError> {
    let identity = current_identity(git)?;
    let matched_profile = find_matching_profile(store, &identity).map(str::to_string);
    Ok(RepoStatus {
        identity,
        matched_profile,
    })
}
