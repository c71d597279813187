//! Centralized validation of untrusted instance input.

/// Maximum number of players (both sides together) accepted in one instance
pub const MAX_PLAYERS: usize = 100_000;

/// Maximum length of a player name
pub const MAX_PLAYER_NAME_LENGTH: usize = 255;

/// Check a player count against [`MAX_PLAYERS`].
///
/// Returns an error message if the count is over the limit, None if it is fine.
///
/// # Examples
///
/// ```
/// use match_solver::utils::validation::check_player_limit;
///
/// assert!(check_player_limit(10).is_none());
/// assert!(check_player_limit(1_000_000).is_some());
/// ```
#[must_use]
pub fn check_player_limit(count: usize) -> Option<String> {
    if count > MAX_PLAYERS {
        Some(format!(
            "Too many players: {count} exceeds maximum of {MAX_PLAYERS}"
        ))
    } else {
        None
    }
}

/// Validate a player name: non-empty after trimming, within
/// [`MAX_PLAYER_NAME_LENGTH`], and free of control characters.
///
/// # Examples
///
/// ```
/// use match_solver::utils::validation::is_valid_player_name;
///
/// assert!(is_valid_player_name("St. Mary's"));
/// assert!(!is_valid_player_name("  "));
/// assert!(!is_valid_player_name("tab\there"));
/// ```
#[must_use]
pub fn is_valid_player_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.len() <= MAX_PLAYER_NAME_LENGTH
        && !name.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_limit_boundary() {
        assert!(check_player_limit(MAX_PLAYERS).is_none());
        let msg = check_player_limit(MAX_PLAYERS + 1).unwrap();
        assert!(msg.contains("100000"));
    }

    #[test]
    fn test_player_name_length() {
        assert!(is_valid_player_name(&"a".repeat(MAX_PLAYER_NAME_LENGTH)));
        assert!(!is_valid_player_name(&"a".repeat(MAX_PLAYER_NAME_LENGTH + 1)));
        assert!(!is_valid_player_name("null\0byte"));
    }
}
