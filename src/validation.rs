use validator::ValidateEmail;

/// Command words that shadow a profile key when invoked bare
pub const RESERVED_KEYS: [&str; 7] = ["list", "status", "add", "edit", "remove", "rm", "help"];

// Advisory checks: profile fields are free-form, these only drive warnings.

/// True when `key` can be stored but never applied with `git-swap <key>`
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Returns a warning for an email that is set but malformed
pub fn email_warning(email: &str) -> Option<String> {
    if email.is_empty() || email.validate_email() {
        None
    } else {
        Some(format!("'{email}' does not look like an email address"))
    }
}

/// Returns a warning for a key that clashes with a command name
pub fn key_warning(key: &str) -> Option<String> {
    if is_reserved_key(key) {
        Some(format!(
            "'{key}' is also a command name, so 'git-swap {key}' will not apply this profile"
        ))
    } else {
        None
    }
}
