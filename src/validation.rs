use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email regex is valid")
    })
}

/// Field presence is enforced by the typed extractors; this is the one
/// format check the service performs beyond presence.
pub fn require_email(field: &str, value: &str) -> Result<(), AppError> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} is not a valid email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_addresses() {
        assert!(require_email("email", "a@b.com").is_ok());
        assert!(require_email("email", "first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(require_email("email", "").is_err());
        assert!(require_email("email", "no-at-sign").is_err());
        assert!(require_email("email", "a@b").is_err());
        assert!(require_email("email", "a b@c.com").is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = require_email("email", "nope").unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
