//! Rusty-Forms Rules
//!
//! Built-in validation rules for the rusty-forms engine, plus declarative
//! rule schemas. Every rule is a pure predicate that reports an error code
//! and the parameters a message needs:
//!
//! | rule | code | params |
//! |------|------|--------|
//! | [`required`] | `required` | |
//! | [`length_between`] | `lengthBetween` | `min`, `max` |
//! | [`min_length`] / [`max_length`] | `minLength` / `maxLength` | `min` / `max` |
//! | [`matches`] | caller-chosen (`match`) | `humanReadableFormat` |
//! | [`valid_email`] | `validEmail` | `humanReadableFormat` |
//! | [`valid_phone_number`] and variants | `validPhoneNumber`, ... | `humanReadableFormat` |
//! | [`valid_postal_code`] | `validPostalCode` | `humanReadableFormat` |
//! | [`equals`] | `equals` | `targetValue`, `targetFieldName` |
//! | [`number_between`] | `numberBetween` | `min`, `max` |
//! | [`number_below`] / [`number_above`] | `numberBelow` / `numberAbove` | `max` / `min` |

pub mod equality;
pub mod error;
pub mod numeric;
pub mod patterns;
pub mod presence;
pub mod schema;
pub mod string;

pub use equality::*;
pub use error::SchemaError;
pub use numeric::{number_above, number_below, number_between};
pub use patterns::*;
pub use presence::*;
pub use schema::{RuleDecl, RuleEntry, RuleSchema, SchemaEntry};
pub use string::*;

/// Error codes reported by the built-in rules
pub mod codes {
    pub const REQUIRED: &str = "required";
    pub const LENGTH_BETWEEN: &str = "lengthBetween";
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const MATCH: &str = "match";
    pub const VALID_EMAIL: &str = "validEmail";
    pub const VALID_PHONE_NUMBER: &str = "validPhoneNumber";
    pub const VALID_MOBILE_PHONE_NUMBER: &str = "validMobilePhoneNumber";
    pub const VALID_LANDLINE_PHONE_NUMBER: &str = "validLandlinePhoneNumber";
    pub const VALID_POSTAL_CODE: &str = "validPostalCode";
    pub const EQUALS: &str = "equals";
    pub const NUMBER_BETWEEN: &str = "numberBetween";
    pub const NUMBER_BELOW: &str = "numberBelow";
    pub const NUMBER_ABOVE: &str = "numberAbove";
}
