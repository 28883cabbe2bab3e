//! Custom Askama template filters.

use std::fmt::Display;

/// Returns up to two uppercase initials for an avatar.
///
/// Usage in templates: `{{ user.name|initials }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn initials(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(initials_of(&name.to_string()))
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("John Manager"), "JM");
        assert_eq!(initials_of("lisa cashier smith"), "LC");
        assert_eq!(initials_of("  Mike "), "M");
        assert_eq!(initials_of(""), "");
    }
}
