//! Format rules backed by built-in patterns
//!
//! Phone numbers and postal codes follow French conventions
//! (`0X XX XX XX XX` / `+33X...`, five-digit postal codes).

use crate::codes;
use crate::string::matches;
use once_cell::sync::Lazy;
use regex::Regex;
use rusty_forms_engine::Rule;

// RFC 5322 style address, unanchored and case-sensitive
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#)
        .expect("email pattern is valid")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((\+)33|0)[1-9](\d{2}){4}$").expect("phone pattern is valid"));

static MOBILE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((\+)33|0)[6-7](\d{2}){4}$").expect("mobile phone pattern is valid"));

static LANDLINE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((\+)33|0)[1-58-9](\d{2}){4}$").expect("landline phone pattern is valid"));

static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([0-8][0-9])|(9[0-5]))[0-9]{3}$").expect("postal code pattern is valid"));

pub fn valid_email() -> Rule {
    matches(EMAIL_REGEX.clone(), "abc@example.com", codes::VALID_EMAIL)
}

/// Any French phone number
pub fn valid_phone_number() -> Rule {
    matches(PHONE_REGEX.clone(), "", codes::VALID_PHONE_NUMBER)
}

/// French mobile number (06 / 07)
pub fn valid_mobile_phone_number() -> Rule {
    matches(MOBILE_PHONE_REGEX.clone(), "", codes::VALID_MOBILE_PHONE_NUMBER)
}

/// French landline number (01-05, 08, 09)
pub fn valid_landline_phone_number() -> Rule {
    matches(LANDLINE_PHONE_REGEX.clone(), "", codes::VALID_LANDLINE_PHONE_NUMBER)
}

pub fn valid_postal_code() -> Rule {
    matches(POSTAL_CODE_REGEX.clone(), "123456", codes::VALID_POSTAL_CODE)
}
