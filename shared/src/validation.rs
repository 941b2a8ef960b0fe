/// Usernames are stored trimmed and lower-cased; lookups must match that.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Passwords are only trimmed. Case is significant.
pub fn normalize_password(password: &str) -> &str {
    password.trim()
}
