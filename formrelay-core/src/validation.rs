use formrelay_mailer::Address;
use regex::Regex;
use std::sync::LazyLock;

/// Field rules shared by the contact-us and quotation forms.
///
/// Each rule takes the raw submitted string and either returns the
/// normalized value or a human readable rejection message. Rules never panic.
pub type FieldRule = fn(&str) -> Result<String, String>;

/// Lazy-loaded email validation regex
///
/// Shape only (`local@domain.tld`); the SMTP address grammar is checked
/// separately.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email regex pattern")
});

/// Kenyan mobile numbers: `+254`, `254` or a leading `0`, then a `7` or `1`
/// and eight more digits.
static KENYAN_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?254\s?|0)(7|1)\d{8}$").expect("Invalid phone regex pattern")
});

const MAX_EMAIL_LENGTH: usize = 254;

/// Title-case a string the conventional way: a letter that follows a
/// non-letter is upper-cased, every other letter is lower-cased.
///
/// ```rust
/// use formrelay_core::validation::title_case;
///
/// assert_eq!(title_case("mary-jane o'NEIL"), "Mary-Jane O'Neil");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

fn require_non_empty(value: String) -> Result<String, String> {
    if value.is_empty() {
        Err("Value must not be empty".to_string())
    } else {
        Ok(value)
    }
}

/// Split on whitespace, title-case each word, join with single spaces.
pub fn normalize_full_name(value: &str) -> Result<String, String> {
    let name = value
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    require_non_empty(name)
}

/// Strip surrounding whitespace.
pub fn strip(value: &str) -> Result<String, String> {
    require_non_empty(value.trim().to_string())
}

/// Strip surrounding whitespace, then title-case.
pub fn normalize_city(value: &str) -> Result<String, String> {
    require_non_empty(title_case(value.trim()))
}

pub fn validate_email(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Email is required".to_string());
    }

    if value.len() > MAX_EMAIL_LENGTH {
        return Err("Email is too long".to_string());
    }

    if !EMAIL_REGEX.is_match(value) || value.parse::<Address>().is_err() {
        return Err("Value is not a valid email address".to_string());
    }

    Ok(value.to_string())
}

pub fn validate_phone(value: &str) -> Result<String, String> {
    if KENYAN_PHONE_REGEX.is_match(value) {
        Ok(value.to_string())
    } else {
        Err("Phone number must be a valid Kenyan number".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("john"), "John");
        assert_eq!(title_case("JOHN"), "John");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("wa-njeri"), "Wa-Njeri");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_full_name() {
        assert_eq!(normalize_full_name("john doe").unwrap(), "John Doe");
        assert_eq!(
            normalize_full_name("  jane   WANJIKU\tmwangi ").unwrap(),
            "Jane Wanjiku Mwangi"
        );
        assert!(normalize_full_name("   ").is_err());
    }

    #[test]
    fn test_normalize_full_name_is_idempotent() {
        let once = normalize_full_name("john doe").unwrap();
        let twice = normalize_full_name(&once).unwrap();

        assert_eq!(once, "John Doe");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_city() {
        assert_eq!(normalize_city("  nairobi ").unwrap(), "Nairobi");
        assert_eq!(normalize_city("nakuru town").unwrap(), "Nakuru Town");
        assert!(normalize_city("").is_err());
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("  Hello \n").unwrap(), "Hello");
        assert!(strip(" \t ").is_err());
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("j@x.com").is_ok());
        assert!(validate_email("test.email+tag@domain.co.ke").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@domain").is_err());

        let long_email = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&long_email).is_err());
    }

    #[test]
    fn test_validate_email_rejects_malformed_dots_and_labels() {
        for email in ["j@x..com", ".j@x.com", "j..k@x.com", "j@-x.com"] {
            assert!(validate_email(email).is_err(), "{email}");
        }
    }

    #[test]
    fn test_accepted_email_is_a_valid_mailbox() {
        for email in [
            "j@x.com",
            "test.email+tag@domain.co.ke",
            "first_last%dept@sub.example.org",
        ] {
            let accepted = validate_email(email).unwrap();
            assert!(
                accepted.parse::<formrelay_mailer::Mailbox>().is_ok(),
                "{email}"
            );
        }
    }

    #[test]
    fn test_validate_phone_valid() {
        for phone in [
            "0712345678",
            "0112345678",
            "+254712345678",
            "254112345678",
            "+254 712345678",
        ] {
            assert_eq!(validate_phone(phone).unwrap(), phone, "{phone}");
        }
    }

    #[test]
    fn test_validate_phone_invalid() {
        for phone in [
            "0812345678",
            "12345",
            "+1 555 1234",
            "071234567",
            "07123456789",
            "",
        ] {
            let err = validate_phone(phone).unwrap_err();
            assert!(err.contains("Kenyan"), "{phone}");
        }
    }
}
