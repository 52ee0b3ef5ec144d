use std::sync::LazyLock;

use regex::Regex;

use crate::error::InvalidInput;

/// LeetCode usernames: 1 to 15 characters of letters, digits, `_` or `-`.
static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,15}$").expect("username pattern is valid")
});

pub fn validate_username(input: &str) -> Result<(), InvalidInput> {
    if input.trim().is_empty() {
        return Err(InvalidInput::Empty);
    }
    if !USERNAME_RE.is_match(input) {
        return Err(InvalidInput::Malformed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_names() {
        for name in ["a", "alice", "Bob_42", "x-y_z", "ABCDEFGHIJKLMNO", "0", "-_-"] {
            assert_eq!(validate_username(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(validate_username(""), Err(InvalidInput::Empty));
        assert_eq!(validate_username("   "), Err(InvalidInput::Empty));
        assert_eq!(validate_username("\t\n"), Err(InvalidInput::Empty));
    }

    #[test]
    fn rejects_malformed_names() {
        for name in [
            "ABCDEFGHIJKLMNOP",
            "has space",
            " alice",
            "alice ",
            "dot.name",
            "at@sign",
            "ünïcode",
        ] {
            assert_eq!(validate_username(name), Err(InvalidInput::Malformed), "{name}");
        }
    }
}
