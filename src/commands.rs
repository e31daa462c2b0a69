use colored::Colorize;

use crate::{
    applier::swap_profile,
    editor::{add_profile, edit_profile, remove_profile},
    error::AppError,
    git::GitConfig,
    inspector::repo_status,
    profile::ProfileStore,
    prompt::LineInput,
    storage::Storage,
};

/// Lists profiles sorted by key
pub fn list_profiles(storage: &Storage) -> Result<(), AppError> {
    let store = storage.load()?;
    if store.is_empty() {
        println!("{}", "No profiles found. Use 'git-swap add <name>' to create one.".yellow());
        return Ok(());
    }

    print!("{}", render_profile_list(&store));
    Ok(())
}

/// One line per profile, sorted by key
fn render_profile_list(store: &ProfileStore) -> String {
    let mut output = String::from("Available identities:\n");
    for (key, profile) in store.iter() {
        output.push_str(&format!("  {} ({})\n", key.cyan(), profile.email));
    }
    output
}

/// Shows current repository identity and the profile it matches
pub fn show_status(storage: &Storage, git: &dyn GitConfig) -> Result<(), AppError> {
    let store = storage.load()?;
    let status = repo_status(&store, git)?;

    println!("Current git config:");
    println!("  Name:  {}", status.identity.name.yellow());
    println!("  Email: {}", status.identity.email.yellow());

    match status.matched_profile {
        Some(key) => println!("{} {}", "matches profile:".green(), key.green().bold()),
        None => println!("{}", "no matching profile found".yellow()),
    }
    Ok(())
}

pub fn add(storage: &Storage, key: &str, input: &mut dyn LineInput) -> Result<(), AppError> {
    let mut store = storage.load()?;
    let warnings = add_profile(storage, &mut store, key, input)?;
    for warning in warnings {
        println!("{} {}", "warning:".yellow(), warning);
    }
    println!(
        "{} {}",
        format!("profile '{key}' added to").green(),
        storage.path().display()
    );
    Ok(())
}

pub fn edit(storage: &Storage, key: &str, input: &mut dyn LineInput) -> Result<(), AppError> {
    let mut store = storage.load()?;
    // Fail before printing the tip when the profile does not exist
    if !store.contains(key) {
        return Err(AppError::ProfileNotFound(key.to_string()));
    }
    println!("Tip: press Enter to keep the current value, type '-' to clear it.");
    edit_profile(storage, &mut store, key, input)?;
    println!("{}", format!("profile '{key}' updated").green());
    Ok(())
}

pub fn remove(storage: &Storage, key: &str) -> Result<(), AppError> {
    let mut store = storage.load()?;
    remove_profile(storage, &mut store, key)?;
    println!("{}", format!("profile '{key}' removed").green());
    Ok(())
}

/// Applies profile `key` to the current repository and prints what changed
pub fn swap(storage: &Storage, key: &str, git: &dyn GitConfig) -> Result<(), AppError> {
    let store = storage.load()?;
    let report = swap_profile(&store, key, git)?;
    let profile = &report.profile;

    for (change, err) in &report.failures {
        println!(
            "{} {}: {}",
            "failed to set git config".red(),
            change.key(),
            err
        );
    }

    if !profile.ssh_key.is_empty() {
        println!("SSH key locked: {}", profile.ssh_key);
    }
    if profile.signs_commits() {
        println!("Commit signing: enabled ({})", profile.signing_key);
    }

    println!(
        "{} {} ({} settings updated)",
        "swapped to:".green(),
        key.green().bold(),
        report.applied.len()
    );
    println!("{} <{}>", profile.name, profile.email);
    Ok(())
}
